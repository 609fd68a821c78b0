//! Provenance tags recording the source files of a dataset

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

const JOIN_SEPARATOR: &str = " + ";

/// A single source file and its description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    file_name: String,
    description: String,
}

impl Source {
    pub fn new(file_name: impl Into<String>, description: impl Into<String>) -> Self {
        Source {
            file_name: file_name.into(),
            description: description.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// File name without directory and extension
    fn stem(&self) -> String {
        Path::new(&self.file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// View of a tag field: a bare value for a single source, a list once
/// sources have been merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<'a> {
    Scalar(&'a str),
    Sequence(Vec<&'a str>),
}

impl Field<'_> {
    pub fn is_sequence(&self) -> bool {
        matches!(self, Field::Sequence(_))
    }
}

/// Provenance record of a dataset.
///
/// Holds one `(file_name, description)` pair until another non-empty tag is
/// appended, after which both fields read as sequences of equal length. A tag
/// whose file name is `""` carries no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TagRecord", into = "TagRecord")]
pub struct Tag {
    // Never empty
    sources: Vec<Source>,
}

impl Default for Tag {
    fn default() -> Self {
        Tag {
            sources: vec![Source::default()],
        }
    }
}

impl Tag {
    /// Create a tag for a single source file
    pub fn new(file_name: impl Into<String>, description: impl Into<String>) -> Self {
        Tag {
            sources: vec![Source::new(file_name, description)],
        }
    }

    /// Whether this tag carries no data (its file name is empty)
    pub fn is_empty(&self) -> bool {
        self.sources.len() == 1 && self.sources[0].file_name.is_empty()
    }

    /// Number of sources recorded
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn file_name(&self) -> Field<'_> {
        self.field(Source::file_name)
    }

    pub fn description(&self) -> Field<'_> {
        self.field(Source::description)
    }

    fn field<'a>(&'a self, get: fn(&'a Source) -> &'a str) -> Field<'a> {
        match self.sources.as_slice() {
            [single] => Field::Scalar(get(single)),
            many => Field::Sequence(many.iter().map(get).collect()),
        }
    }

    /// Merge another tag into this one.
    ///
    /// An empty tag adopts `other` wholesale; appending an empty tag does
    /// nothing. Otherwise `other`'s sources are added after this tag's own.
    pub fn append(&mut self, other: &Tag) {
        if self.is_empty() {
            self.sources = other.sources.clone();
        } else if !other.is_empty() {
            self.sources.extend(other.sources.iter().cloned());
        }
    }

    /// File names stripped of directory and extension, joined with " + "
    pub fn join_file_names(&self) -> String {
        self.sources
            .iter()
            .map(Source::stem)
            .collect::<Vec<_>>()
            .join(JOIN_SEPARATOR)
    }

    pub fn join_descriptions(&self) -> String {
        self.sources
            .iter()
            .map(Source::description)
            .collect::<Vec<_>>()
            .join(JOIN_SEPARATOR)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " File: {}\n Description: {}",
            self.join_file_names(),
            self.join_descriptions()
        )
    }
}

/// Serialized shape of a field: a string or an array of strings
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum FieldRecord {
    Scalar(String),
    Sequence(Vec<String>),
}

impl Default for FieldRecord {
    fn default() -> Self {
        FieldRecord::Scalar(String::new())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TagRecord {
    #[serde(default)]
    file_name: FieldRecord,
    #[serde(default)]
    description: FieldRecord,
}

impl TryFrom<TagRecord> for Tag {
    type Error = String;

    fn try_from(record: TagRecord) -> Result<Self, Self::Error> {
        match (record.file_name, record.description) {
            (FieldRecord::Scalar(file_name), FieldRecord::Scalar(description)) => {
                Ok(Tag::new(file_name, description))
            }
            (FieldRecord::Sequence(file_names), FieldRecord::Sequence(descriptions)) => {
                if file_names.len() != descriptions.len() {
                    return Err(format!(
                        "file_name has {} entries but description has {}",
                        file_names.len(),
                        descriptions.len()
                    ));
                }
                if file_names.is_empty() {
                    return Err("file_name and description arrays are empty".to_string());
                }
                Ok(Tag {
                    sources: file_names
                        .into_iter()
                        .zip(descriptions)
                        .map(|(file_name, description)| Source::new(file_name, description))
                        .collect(),
                })
            }
            _ => Err(
                "file_name and description must both be strings or both be arrays".to_string(),
            ),
        }
    }
}

impl From<Tag> for TagRecord {
    fn from(tag: Tag) -> Self {
        let mut sources = tag.sources;
        if sources.len() == 1 {
            let single = sources.remove(0);
            TagRecord {
                file_name: FieldRecord::Scalar(single.file_name),
                description: FieldRecord::Scalar(single.description),
            }
        } else {
            let (file_names, descriptions) = sources
                .into_iter()
                .map(|source| (source.file_name, source.description))
                .unzip();
            TagRecord {
                file_name: FieldRecord::Sequence(file_names),
                description: FieldRecord::Sequence(descriptions),
            }
        }
    }
}

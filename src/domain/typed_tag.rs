//! Provenance tags scoped to a dataset category (e.g. a hazard type)

use crate::domain::tag::{Field, Tag};
use crate::error::{ProvenanceError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// A [`Tag`] bound to a category such as `"TC"` or `"EQ"`.
///
/// An empty category means "unset": appending adopts the other side's
/// category. Two different non-empty categories never merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedTag {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    category: String,
    #[serde(flatten)]
    tag: Tag,
}

impl TypedTag {
    pub fn new(
        category: impl Into<String>,
        file_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        TypedTag {
            category: category.into(),
            tag: Tag::new(file_name, description),
        }
    }

    /// Wrap an existing tag with a category
    pub fn from_tag(category: impl Into<String>, tag: Tag) -> Self {
        TypedTag {
            category: category.into(),
            tag,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn into_tag(self) -> Tag {
        self.tag
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_empty()
    }

    pub fn file_name(&self) -> Field<'_> {
        self.tag.file_name()
    }

    pub fn description(&self) -> Field<'_> {
        self.tag.description()
    }

    pub fn join_file_names(&self) -> String {
        self.tag.join_file_names()
    }

    pub fn join_descriptions(&self) -> String {
        self.tag.join_descriptions()
    }

    /// Merge another typed tag into this one.
    ///
    /// Fails without modifying `self` when both categories are set and
    /// differ. Otherwise sources merge as in [`Tag::append`] and the
    /// category becomes whichever side had one.
    pub fn append(&mut self, other: &TypedTag) -> Result<()> {
        if !self.category.is_empty()
            && !other.category.is_empty()
            && self.category != other.category
        {
            let err = ProvenanceError::IncompatibleCategory {
                left: self.category.clone(),
                right: other.category.clone(),
            };
            error!(left = %self.category, right = %other.category, "{}", err);
            return Err(err);
        }

        if self.category.is_empty() {
            self.category = other.category.clone();
        }
        self.tag.append(&other.tag);
        debug!(
            category = %self.category,
            sources = self.tag.len(),
            "Appended provenance tag"
        );
        Ok(())
    }
}

impl From<Tag> for TypedTag {
    fn from(tag: Tag) -> Self {
        TypedTag::from_tag(String::new(), tag)
    }
}

impl fmt::Display for TypedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " Type: {}\n{}", self.category, self.tag)
    }
}

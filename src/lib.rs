//! provtag - Dataset provenance tags and ordinal date conversion
//!
//! Records which source files a dataset was built from, merges that record
//! when datasets are combined, and converts between ordinal day counts and
//! ISO-8601 date strings.

pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Field, Source, Tag, TypedTag};
pub use error::ProvenanceError;

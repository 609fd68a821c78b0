//! Domain layer - Provenance records and date conversion

pub mod dates;
pub mod tag;
pub mod typed_tag;

pub use tag::{Field, Source, Tag};
pub use typed_tag::TypedTag;

//! Infrastructure layer - Manifest files

pub mod manifest;

pub use manifest::Manifest;

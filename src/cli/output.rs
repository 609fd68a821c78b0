//! Output formatting utilities

use crate::domain::TypedTag;

/// Format a merged tag for display, omitting the type line when no
/// category was set
pub fn format_merged_tag(tag: &TypedTag) -> String {
    if tag.category().is_empty() {
        tag.tag().to_string()
    } else {
        tag.to_string()
    }
}

/// Format converted values one per line
pub fn format_lines<T: ToString>(values: &[T]) -> String {
    let mut output = String::new();
    for value in values {
        output.push_str(&value.to_string());
        output.push('\n');
    }
    output
}

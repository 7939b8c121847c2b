use crate::gql::common::types::FieldError;

use super::types::CategoryInput;

pub const NAME_MAX_LENGTH: usize = 128;

const REQUIRED: &str = "This field is required.";

/// Field-scoped validation of category input. Every violated field is
/// reported; callers append relational checks (parent existence) before
/// deciding whether to persist.
pub fn validate(input: &CategoryInput, name_required: bool) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match input.name.as_deref().map(str::trim) {
        None if name_required => errors.push(FieldError::new("name", REQUIRED)),
        Some("") => errors.push(FieldError::new("name", REQUIRED)),
        Some(name) if name.chars().count() > NAME_MAX_LENGTH => errors.push(FieldError::new(
            "name",
            format!("Ensure this value has at most {NAME_MAX_LENGTH} characters."),
        )),
        _ => {}
    }

    errors
}

/// Lowercased URL slug: alphanumerics kept, separator runs collapsed to a
/// single dash, leading/trailing dashes stripped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

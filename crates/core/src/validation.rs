//! Helpers around the `validator` crate used by transport DTOs.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Reject strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message(Cow::Borrowed("Required field")));
    }
    Ok(())
}

/// Flatten validation errors into a single human-readable message.
///
/// Fields are sorted by name so the output is stable:
/// `"count: Count should be greater than or equal to zero; title: Required field"`.
pub fn flatten_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {msg}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

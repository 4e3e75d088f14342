use std::collections::BTreeMap;

/// Validation messages keyed by the offending field name.
///
/// A `BTreeMap` keeps serialization order stable across runs.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation failed for fields: {}", field_names(.0))]
    FieldValidation(FieldErrors),
}

/// Build a [`FieldErrors`] map carrying a single message for one field.
pub fn single_field_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.to_string()]);
    errors
}

fn field_names(errors: &FieldErrors) -> String {
    errors.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_validation_display_names_the_fields() {
        let mut errors = single_field_error("FirmwareVersion", "bad format");
        errors.insert("Humidity".to_string(), vec!["too wet".to_string()]);
        let err = CoreError::FieldValidation(errors);
        assert_eq!(
            err.to_string(),
            "Validation failed for fields: FirmwareVersion, Humidity"
        );
    }

    #[test]
    fn single_field_error_keeps_message() {
        let errors = single_field_error("Humidity", "too wet");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["Humidity"], vec!["too wet".to_string()]);
    }
}

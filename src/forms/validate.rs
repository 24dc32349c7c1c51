use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::api::{FieldDescriptor, FieldKind, FieldValue};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern must compile"));

/// Validate form values against their field list. Fields are checked in
/// declaration order and the first violation wins; no further rules run
/// once an error is found.
pub fn validate(
    fields: &[FieldDescriptor],
    values: &HashMap<String, FieldValue>,
) -> Result<(), String> {
    for field in fields {
        let value = values.get(&field.id);
        let missing = value.map(FieldValue::is_empty).unwrap_or(true);

        if field.required && missing {
            return Err(format!(
                "Please fill in the required field: \"{}\"",
                field.label
            ));
        }

        if field.kind == FieldKind::Email {
            if let Some(value) = value {
                let text = value.as_text();
                // Empty optional emails are exempt.
                if !text.is_empty() && !EMAIL_RE.is_match(text) {
                    return Err(format!(
                        "Please enter a valid email address for \"{}\"",
                        field.label
                    ));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entries: &[(&str, FieldValue)]) -> HashMap<String, FieldValue> {
        entries
            .iter()
            .map(|(id, v)| (id.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn required_field_left_empty() {
        let fields = vec![FieldDescriptor::new("email", "Email", FieldKind::Email).required()];
        let err = validate(&fields, &values(&[("email", FieldValue::text(""))])).unwrap_err();
        assert_eq!(err, "Please fill in the required field: \"Email\"");
    }

    #[test]
    fn required_checkbox_unchecked() {
        let fields =
            vec![FieldDescriptor::new("terms", "Accept Terms", FieldKind::Checkbox).required()];
        let err = validate(&fields, &values(&[("terms", FieldValue::Bool(false))])).unwrap_err();
        assert_eq!(err, "Please fill in the required field: \"Accept Terms\"");
    }

    #[test]
    fn first_violation_wins() {
        let fields = vec![
            FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
            FieldDescriptor::new("email", "Email", FieldKind::Email).required(),
        ];
        let err = validate(
            &fields,
            &values(&[
                ("name", FieldValue::text("")),
                ("email", FieldValue::text("not-an-email")),
            ]),
        )
        .unwrap_err();
        assert_eq!(err, "Please fill in the required field: \"Name\"");
    }

    #[test]
    fn email_pattern() {
        let fields = vec![FieldDescriptor::new("email", "Email", FieldKind::Email)];
        assert!(validate(&fields, &values(&[("email", FieldValue::text("a@b.co"))])).is_ok());
        let err = validate(&fields, &values(&[("email", FieldValue::text("abc"))])).unwrap_err();
        assert_eq!(err, "Please enter a valid email address for \"Email\"");
    }

    #[test]
    fn optional_empty_email_is_exempt() {
        let fields = vec![FieldDescriptor::new("email", "Email", FieldKind::Email)];
        assert!(validate(&fields, &values(&[("email", FieldValue::text(""))])).is_ok());
    }

    #[test]
    fn required_valid_email_passes_both_rules() {
        let fields = vec![FieldDescriptor::new("email", "Email", FieldKind::Email).required()];
        assert!(validate(&fields, &values(&[("email", FieldValue::text("a@b.co"))])).is_ok());
    }

    #[test]
    fn no_range_check_on_numbers() {
        let fields = vec![FieldDescriptor::new("age", "Age", FieldKind::Number).required()];
        assert!(validate(&fields, &values(&[("age", FieldValue::text("-40"))])).is_ok());
    }
}

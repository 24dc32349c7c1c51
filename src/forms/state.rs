use std::collections::HashMap;

use crate::api::{FieldDescriptor, FieldKind, FieldValue, SubmissionResponse};

/// Mutable per-form state, owned by the page and rebuilt whenever the
/// selected item (and therefore the field list) changes.
#[derive(Debug, Default)]
pub struct FormState {
    pub values: HashMap<String, FieldValue>,
    pub submitting: bool,
    pub error: Option<String>,
    pub result: Option<SubmissionResponse>,
    /// Form instance identity. In-flight submissions carry the
    /// generation they were launched under; late results with a stale
    /// generation are discarded instead of landing in a newer form.
    pub generation: u64,
}

impl FormState {
    /// Reset for a new field list: defaults from the schema, `false`
    /// for checkboxes, empty string otherwise. Clears error/result and
    /// bumps the generation so stale async results can be recognized.
    pub fn reset(&mut self, fields: &[FieldDescriptor]) {
        self.values = fields
            .iter()
            .map(|field| {
                let value = match (&field.default_value, &field.kind) {
                    (Some(default), _) => default.clone(),
                    (None, FieldKind::Checkbox) => FieldValue::Bool(false),
                    (None, _) => FieldValue::text(""),
                };
                (field.id.clone(), value)
            })
            .collect();
        self.submitting = false;
        self.error = None;
        self.result = None;
        self.generation += 1;
    }

    /// Store a raw UI value verbatim. Editing after a successful
    /// submission clears the stale success result; a present error is
    /// left until the next validation pass.
    pub fn set_value(&mut self, id: &str, value: FieldValue) {
        self.values.insert(id.to_string(), value);
        if self.result.is_some() {
            self.result = None;
        }
    }

    pub fn value(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Build the submission payload in field declaration order.
    pub fn payload(&self, fields: &[FieldDescriptor]) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for field in fields {
            if let Some(value) = self.values.get(&field.id) {
                let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
                map.insert(field.id.clone(), json);
            }
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
            FieldDescriptor::new("age", "Age", FieldKind::Number)
                .default_value(FieldValue::text("30")),
            FieldDescriptor::new("terms", "Accept Terms", FieldKind::Checkbox),
            FieldDescriptor::new("subscribed", "Subscribed", FieldKind::Checkbox)
                .default_value(FieldValue::Bool(true)),
        ]
    }

    #[test]
    fn defaults_seed_values() {
        let mut form = FormState::default();
        form.reset(&sample_fields());
        assert_eq!(form.value("name"), Some(&FieldValue::text("")));
        assert_eq!(form.value("age"), Some(&FieldValue::text("30")));
        assert_eq!(form.value("terms"), Some(&FieldValue::Bool(false)));
        assert_eq!(form.value("subscribed"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn reset_clears_status_and_bumps_generation() {
        let mut form = FormState::default();
        form.reset(&sample_fields());
        let first_generation = form.generation;
        form.error = Some("boom".to_string());
        form.result = Some(SubmissionResponse {
            success: true,
            message: "ok".to_string(),
            submitted_data: serde_json::Value::Null,
        });
        form.submitting = true;

        form.reset(&sample_fields());
        assert!(form.error.is_none());
        assert!(form.result.is_none());
        assert!(!form.submitting);
        assert_eq!(form.generation, first_generation + 1);
    }

    #[test]
    fn editing_clears_success_result() {
        let mut form = FormState::default();
        form.reset(&sample_fields());
        form.result = Some(SubmissionResponse {
            success: true,
            message: "ok".to_string(),
            submitted_data: serde_json::Value::Null,
        });
        form.set_value("name", FieldValue::text("Ada"));
        assert!(form.result.is_none());
        assert_eq!(form.value("name"), Some(&FieldValue::text("Ada")));
    }

    #[test]
    fn payload_follows_declaration_order() {
        let mut form = FormState::default();
        let fields = sample_fields();
        form.reset(&fields);
        form.set_value("name", FieldValue::text("Ada"));
        let payload = form.payload(&fields);
        let keys: Vec<&String> = payload.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "age", "terms", "subscribed"]);
        assert_eq!(payload["name"], serde_json::json!("Ada"));
        assert_eq!(payload["subscribed"], serde_json::json!(true));
    }
}

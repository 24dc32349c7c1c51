use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Control type for a single form input. Closed set plus an explicit
/// fallback so unrecognized schema tags render a notice instead of
/// crashing or silently dropping the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Select,
    Checkbox,
    Textarea,
    Unknown(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Textarea => "textarea",
            FieldKind::Unknown(tag) => tag,
        }
    }

    pub fn parse(tag: &str) -> Self {
        match tag {
            "text" => FieldKind::Text,
            "number" => FieldKind::Number,
            "email" => FieldKind::Email,
            "select" => FieldKind::Select,
            "checkbox" => FieldKind::Checkbox,
            "textarea" => FieldKind::Textarea,
            other => FieldKind::Unknown(other.to_string()),
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(FieldKind::parse(&tag))
    }
}

/// One option of a select field. Declared order is render order, and a
/// placeholder option with an empty value is legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A current or default field value. Checkboxes store the checked
/// state; every other kind stores the raw string (numbers included, no
/// coercion before submission).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Empty string and unchecked checkbox count as absent for the
    /// required-field check.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Bool(b) => !b,
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Text(_) => false,
            FieldValue::Bool(b) => *b,
        }
    }
}

/// Declarative schema for one form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default_value: Option<FieldValue>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            required: false,
            default_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: FieldValue) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}

/// A named, selectable entity owning one form schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "formFields")]
    pub fields: Vec<FieldDescriptor>,
}

/// Envelope returned by the catalog fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub message: String,
    pub items: Vec<Item>,
}

/// Envelope returned by a form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub submitted_data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_round_trips_known_tags() {
        for tag in ["text", "number", "email", "select", "checkbox", "textarea"] {
            assert_eq!(FieldKind::parse(tag).as_str(), tag);
        }
    }

    #[test]
    fn field_kind_preserves_unknown_tags() {
        let kind = FieldKind::parse("date");
        assert_eq!(kind, FieldKind::Unknown("date".to_string()));
        assert_eq!(kind.as_str(), "date");
    }

    #[test]
    fn field_descriptor_deserializes_wire_shape() {
        let json = r#"{
            "id": "deliveryMethod",
            "label": "Delivery Method",
            "type": "select",
            "options": [{"value": "", "label": "Select Delivery"}],
            "required": true
        }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.kind, FieldKind::Select);
        assert!(field.required);
        assert_eq!(field.options[0].value, "");
        assert!(field.default_value.is_none());
    }

    #[test]
    fn field_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&FieldValue::text("hi")).unwrap(),
            "\"hi\""
        );
        assert_eq!(serde_json::to_string(&FieldValue::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn field_value_emptiness() {
        assert!(FieldValue::text("").is_empty());
        assert!(FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::text("0").is_empty());
        assert!(!FieldValue::Bool(true).is_empty());
    }
}

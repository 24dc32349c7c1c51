use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::models::{
    CatalogResponse, FieldDescriptor, FieldKind, FieldValue, Item, SelectOption,
    SubmissionResponse,
};

/// External collaborator supplying item schemas and accepting submitted
/// payloads. The page composer only ever talks to this trait, never to
/// a concrete backend.
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Fetch the full catalog of items with their form definitions.
    async fn fetch_items(&self) -> Result<CatalogResponse>;

    /// Submit the values of one form. `item_name` is only used to build
    /// the human-readable response message.
    async fn submit_form(
        &self,
        item_name: &str,
        data: serde_json::Value,
    ) -> Result<SubmissionResponse>;
}

/// In-memory implementation with simulated network delays.
#[derive(Debug, Default)]
pub struct DemoApi;

const FETCH_DELAY: Duration = Duration::from_millis(1500);
const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[async_trait]
impl FormsApi for DemoApi {
    async fn fetch_items(&self) -> Result<CatalogResponse> {
        log::debug!("fetching demo catalog");
        tokio::time::sleep(FETCH_DELAY).await;
        Ok(CatalogResponse {
            success: true,
            message: "Items fetched successfully".to_string(),
            items: demo_items(),
        })
    }

    async fn submit_form(
        &self,
        item_name: &str,
        data: serde_json::Value,
    ) -> Result<SubmissionResponse> {
        log::debug!("submitting form for {item_name}: {data}");
        tokio::time::sleep(SUBMIT_DELAY).await;
        Ok(SubmissionResponse {
            success: true,
            message: format!("Form for \"{item_name}\" submitted successfully!"),
            submitted_data: data,
        })
    }
}

fn demo_items() -> Vec<Item> {
    vec![
        Item {
            id: "userProfile".to_string(),
            name: "User Profile Form".to_string(),
            fields: vec![
                FieldDescriptor::new("fullName", "Full Name", FieldKind::Text).required(),
                FieldDescriptor::new("email", "Email", FieldKind::Email).required(),
                FieldDescriptor::new("phone", "Phone Number", FieldKind::Text),
                FieldDescriptor::new("age", "Age", FieldKind::Number)
                    .default_value(FieldValue::text("30")),
                FieldDescriptor::new("termsAccepted", "Accept Terms", FieldKind::Checkbox)
                    .required()
                    .default_value(FieldValue::Bool(false)),
                FieldDescriptor::new("bio", "Bio", FieldKind::Textarea),
            ],
        },
        Item {
            id: "productOrder".to_string(),
            name: "Product Order Form".to_string(),
            fields: vec![
                FieldDescriptor::new("productName", "Product Name", FieldKind::Text).required(),
                FieldDescriptor::new("quantity", "Quantity", FieldKind::Number)
                    .required()
                    .default_value(FieldValue::text("1")),
                FieldDescriptor::new("deliveryMethod", "Delivery Method", FieldKind::Select)
                    .required()
                    .options(vec![
                        SelectOption::new("", "Select Delivery"),
                        SelectOption::new("standard", "Standard"),
                        SelectOption::new("express", "Express"),
                    ]),
                FieldDescriptor::new("shippingAddress", "Shipping Address", FieldKind::Textarea)
                    .required(),
            ],
        },
        Item {
            id: "feedbackSurvey".to_string(),
            name: "Feedback Survey".to_string(),
            fields: vec![
                FieldDescriptor::new("rating", "Overall Rating (1-5)", FieldKind::Number)
                    .default_value(FieldValue::text("5")),
                FieldDescriptor::new("comments", "Your Feedback", FieldKind::Textarea),
                FieldDescriptor::new("contactPermission", "Allow Contact", FieldKind::Checkbox)
                    .default_value(FieldValue::Bool(true)),
            ],
        },
        Item {
            id: "newProject".to_string(),
            name: "New Project Request".to_string(),
            fields: vec![
                FieldDescriptor::new("projectName", "Project Name", FieldKind::Text).required(),
                FieldDescriptor::new("projectLead", "Project Lead Email", FieldKind::Email)
                    .required(),
                FieldDescriptor::new("budget", "Budget (USD)", FieldKind::Number),
                FieldDescriptor::new("startDate", "Proposed Start Date", FieldKind::Text),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn demo_catalog_has_four_items() {
        let api = DemoApi;
        let response = api.fetch_items().await.unwrap();
        assert!(response.success);
        let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "User Profile Form",
                "Product Order Form",
                "Feedback Survey",
                "New Project Request"
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn demo_submit_echoes_payload() {
        let api = DemoApi;
        let data = serde_json::json!({"fullName": "Ada", "termsAccepted": true});
        let response = api.submit_form("User Profile Form", data.clone()).await.unwrap();
        assert!(response.success);
        assert_eq!(
            response.message,
            "Form for \"User Profile Form\" submitted successfully!"
        );
        assert_eq!(response.submitted_data, data);
    }

    #[test]
    fn select_options_keep_declared_order() {
        let items = demo_items();
        let order_form = &items[1];
        let delivery = order_form
            .fields
            .iter()
            .find(|f| f.id == "deliveryMethod")
            .unwrap();
        let labels: Vec<&str> = delivery.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Select Delivery", "Standard", "Express"]);
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = 10)]
    pub id: i32,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "mouse")]
    pub name: String,

    /// Price in minor currency units.
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 500)]
    pub price: i64,

    #[serde(default)]
    #[schema(example = "wireless")]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 5)]
    pub quantity: i32,
}

/// Full replacement of a product. A body `id` is accepted for symmetry with
/// the create payload but the path id always wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "mouse")]
    pub name: String,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    #[schema(example = 650)]
    pub price: i64,

    #[serde(default)]
    #[schema(example = "wireless, rechargeable")]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 3)]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_may_be_omitted_or_null() {
        let omitted: CreateProductRequest =
            serde_json::from_str(r#"{"id":1,"name":"tv","price":34000,"quantity":2}"#).unwrap();
        let null: CreateProductRequest = serde_json::from_str(
            r#"{"id":1,"name":"tv","price":34000,"description":null,"quantity":2}"#,
        )
        .unwrap();

        assert_eq!(omitted.description, None);
        assert_eq!(omitted, null);
    }

    #[test]
    fn validation_reports_each_bad_field() {
        let req = CreateProductRequest {
            id: 1,
            name: String::new(),
            price: -1,
            description: None,
            quantity: -4,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("quantity"));
    }

    #[test]
    fn update_body_id_is_optional() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"name":"tv","price":1,"quantity":0}"#).unwrap();
        assert_eq!(req.id, None);
        assert!(req.validate().is_ok());
    }
}

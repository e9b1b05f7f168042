use crate::model::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub description: Option<String>,
    pub quantity: i32,
}

// dari model to response
impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            quantity: value.quantity,
        }
    }
}

use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::Product as ProductModel,
};
use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Fails with `RepositoryError::AlreadyExists` when the id is taken.
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    /// Returns `None` when no row has `id`; nothing is inserted in that case.
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError>;
    /// Returns whether a row was removed.
    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError>;
    /// Inserts `products` only if the table is empty, returning how many rows were written.
    async fn seed_if_empty(&self, products: &[CreateProductRequest])
    -> Result<u64, RepositoryError>;
}

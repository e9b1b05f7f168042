use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service", "ProductCommandService");

        Self { command, metrics }
    }

    fn complete(&self, start: Instant, method: Method, is_success: bool, message: &str) {
        let status = if is_success {
            info!("✅ Operation completed successfully: {message}");
            StatusUtils::Success
        } else {
            error!("❌ Operation failed: {message}");
            StatusUtils::Error
        };

        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect();
    messages.sort();
    messages
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product ID {} ({})", req.id, req.name);
        let start = Instant::now();

        match self.command.create_product(req).await {
            Ok(product) => {
                self.complete(start, Method::Post, true, "Product created");
                Ok(ProductResponse::from(product))
            }
            Err(e) => {
                self.complete(start, Method::Post, false, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Updating product ID {id}");
        let start = Instant::now();

        match self.command.update_product(id, req).await {
            Ok(Some(product)) => {
                self.complete(start, Method::Put, true, "Product updated");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.complete(start, Method::Put, false, &format!("Product {id} not found"));
                Err(ServiceError::NotFound("product not found".into()))
            }
            Err(e) => {
                self.complete(start, Method::Put, false, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID {id}");
        let start = Instant::now();

        match self.command.delete_product(id).await {
            Ok(true) => {
                self.complete(start, Method::Delete, true, "Product deleted");
                Ok(())
            }
            Ok(false) => {
                self.complete(start, Method::Delete, false, &format!("Product {id} not found"));
                Err(ServiceError::NotFound("product not found".into()))
            }
            Err(e) => {
                self.complete(start, Method::Delete, false, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn seed_products(&self, products: &[CreateProductRequest]) -> Result<u64, ServiceError> {
        let mut problems = Vec::new();
        for product in products {
            if let Err(errors) = product.validate() {
                problems.extend(
                    validation_messages(&errors)
                        .into_iter()
                        .map(|msg| format!("seed product {}: {msg}", product.id)),
                );
            }
        }
        if !problems.is_empty() {
            return Err(ServiceError::Validation(problems));
        }

        let inserted = self.command.seed_if_empty(products).await?;
        Ok(inserted)
    }
}

use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self { query, metrics }
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

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding all products");
        let start = Instant::now();

        match self.query.find_all().await {
            Ok(products) => {
                self.complete(start, Method::Get, true, "Products retrieved");
                Ok(products.into_iter().map(ProductResponse::from).collect())
            }
            Err(e) => {
                self.complete(start, Method::Get, false, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");
        let start = Instant::now();

        match self.query.find_by_id(id).await {
            Ok(Some(product)) => {
                self.complete(start, Method::Get, true, "Product retrieved");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                self.complete(start, Method::Get, false, &format!("Product {id} not found"));
                Err(ServiceError::NotFound("product not found".into()))
            }
            Err(e) => {
                self.complete(start, Method::Get, false, &e.to_string());
                Err(ServiceError::Repo(e))
            }
        }
    }
}

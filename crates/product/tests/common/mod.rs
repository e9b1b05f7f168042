#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use product::{
    abstract_trait::product::repository::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    handler::AppRouter,
    model::Product as ProductModel,
    state::AppState,
};
use serde_json::Value;
use shared::errors::RepositoryError;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Table stand-in keyed by product id.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    rows: Arc<Mutex<BTreeMap<i32, ProductModel>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, id: i32) -> Option<ProductModel> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn deps(&self) -> DependenciesInjectDeps {
        DependenciesInjectDeps {
            query_repo: Arc::new(self.clone()) as DynProductQueryRepository,
            command_repo: Arc::new(self.clone()) as DynProductCommandRepository,
        }
    }
}

fn to_model(req: &CreateProductRequest) -> ProductModel {
    ProductModel {
        id: req.id,
        name: req.name.clone(),
        price: req.price,
        description: req.description.clone(),
        quantity: req.quantity,
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self.get(id))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProductRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&req.id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "product with id {} already exists",
                req.id
            )));
        }
        let model = to_model(req);
        rows.insert(req.id, model.clone());
        Ok(model)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|row| {
            row.name = req.name.clone();
            row.price = req.price;
            row.description = req.description.clone();
            row.quantity = req.quantity;
            row.clone()
        }))
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn seed_if_empty(
        &self,
        products: &[CreateProductRequest],
    ) -> Result<u64, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.is_empty() {
            return Ok(0);
        }
        let mut inserted = 0;
        for product in products {
            if rows.insert(product.id, to_model(product)).is_none() {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}

pub fn app_state(repo: &InMemoryProductRepository) -> AppState {
    AppState::from_deps(repo.deps(), ALLOWED_ORIGIN)
}

pub fn app(repo: &InMemoryProductRepository) -> Router {
    AppRouter::build(app_state(repo)).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

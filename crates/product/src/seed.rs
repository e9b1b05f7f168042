use crate::domain::requests::product::CreateProductRequest;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

struct SeedProduct {
    id: i32,
    name: &'static str,
    price: i64,
    description: &'static str,
    quantity: i32,
}

/// Products inserted into an empty table at startup. The id gap at 4 is intentional.
const DEFAULT_SEED: [SeedProduct; 4] = [
    SeedProduct {
        id: 1,
        name: "mobile",
        price: 17000,
        description: "good quality",
        quantity: 2,
    },
    SeedProduct {
        id: 2,
        name: "laptop",
        price: 7000,
        description: "good quality",
        quantity: 2,
    },
    SeedProduct {
        id: 3,
        name: "tablet",
        price: 10000,
        description: "good quality",
        quantity: 2,
    },
    SeedProduct {
        id: 5,
        name: "tv",
        price: 34000,
        description: "good quality",
        quantity: 2,
    },
];

pub fn default_seed() -> Vec<CreateProductRequest> {
    DEFAULT_SEED
        .iter()
        .map(|p| CreateProductRequest {
            id: p.id,
            name: p.name.to_string(),
            price: p.price,
            description: Some(p.description.to_string()),
            quantity: p.quantity,
        })
        .collect()
}

/// Reads the seed set from a JSON array file, or falls back to [`default_seed`].
pub async fn load_seed(path: Option<&Path>) -> Result<Vec<CreateProductRequest>> {
    let Some(path) = path else {
        return Ok(default_seed());
    };

    info!("🌱 Loading seed products from {}", path.display());

    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;

    parse_seed(&raw).with_context(|| format!("Invalid seed file {}", path.display()))
}

fn parse_seed(raw: &str) -> Result<Vec<CreateProductRequest>> {
    let products: Vec<CreateProductRequest> =
        serde_json::from_str(raw).context("Seed file must be a JSON array of products")?;

    let mut seen = std::collections::HashSet::new();
    for product in &products {
        if !seen.insert(product.id) {
            anyhow::bail!("duplicate product id {} in seed", product.id);
        }
    }

    Ok(products)
}

use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (id, name, price, description, quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, description, quantity
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", product.id, err);
            RepositoryError::from_insert(err, || {
                format!("product with id {} already exists", product.id)
            })
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i32,
        product: &UpdateProductRequest,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                description = $4,
                quantity = $5
            WHERE id = $1
            RETURNING id, name, price, description, quantity
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.quantity)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        match &result {
            Some(row) => info!("🔄 Updated product ID {}", row.id),
            None => warn!("⚠️ Product ID {} not found for update", id),
        }
        Ok(result)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("🗑️ Deleted product ID {}", id);
        } else {
            warn!("⚠️ Product ID {} not found for delete", id);
        }
        Ok(deleted)
    }

    async fn seed_if_empty(
        &self,
        products: &[CreateProductRequest],
    ) -> Result<u64, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        if existing > 0 {
            info!("🌱 Skipping seed, {} products already present", existing);
            return Ok(0);
        }

        let mut inserted = 0;
        for product in products {
            let result = sqlx::query(
                r#"
                INSERT INTO products (id, name, price, description, quantity)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(product.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to seed product {}: {:?}", product.id, err);
                RepositoryError::from(err)
            })?;

            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("🌱 Seeded {} products", inserted);
        Ok(inserted)
    }
}

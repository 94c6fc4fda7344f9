//! Product service - catalog browsing and admin maintenance.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt, Paginated, PaginationParams};
use domain::{fits_money_column, NewProduct, Product, ProductChanges, ProductFilter};

use crate::repository::ProductRepository;

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<Product>>;

    async fn get_product(&self, id: Uuid) -> AppResult<Product>;

    async fn create_product(&self, product: NewProduct) -> AppResult<Product>;

    async fn update_product(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product>;

    async fn delete_product(&self, id: Uuid) -> AppResult<()>;

    async fn count_products(&self) -> AppResult<u64>;
}

pub struct ProductManager {
    repo: Arc<dyn ProductRepository>,
}

impl ProductManager {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }
}

fn check_price(price: Decimal) -> AppResult<Decimal> {
    if price.is_sign_negative() {
        return Err(AppError::validation("Price cannot be negative"));
    }
    if !fits_money_column(price) {
        return Err(AppError::validation("Price is too large"));
    }
    Ok(price.round_dp(2))
}

fn check_stock(stock: i32) -> AppResult<i32> {
    if stock < 0 {
        return Err(AppError::validation("Stock cannot be negative"));
    }
    Ok(stock)
}

fn check_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Product name cannot be empty"));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(
        &self,
        filter: ProductFilter,
        page: PaginationParams,
    ) -> AppResult<Paginated<Product>> {
        let (products, total) = self
            .repo
            .search(filter, page.offset(), page.limit())
            .await?;
        Ok(Paginated::new(products, page, total))
    }

    async fn get_product(&self, id: Uuid) -> AppResult<Product> {
        self.repo.find_by_id(id).await?.ok_or_not_found("Product")
    }

    async fn create_product(&self, mut product: NewProduct) -> AppResult<Product> {
        product.name = check_name(&product.name)?;
        product.price = check_price(product.price)?;
        product.stock = check_stock(product.stock)?;

        let created = self.repo.create(product).await?;
        info!(product_id = %created.id, "Product created");
        Ok(created)
    }

    async fn update_product(&self, id: Uuid, mut changes: ProductChanges) -> AppResult<Product> {
        changes.name = changes.name.as_deref().map(check_name).transpose()?;
        changes.price = changes.price.map(check_price).transpose()?;
        changes.stock = changes.stock.map(check_stock).transpose()?;

        self.repo.update(id, changes).await
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn count_products(&self) -> AppResult<u64> {
        self.repo.count().await
    }
}

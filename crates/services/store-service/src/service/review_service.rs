//! Review service - submission and moderation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{check_rating, NewReview, Review, ReviewStatus};

use crate::repository::{ProductRepository, ReviewRepository};

#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Submit a review; it stays hidden until approved
    async fn submit_review(&self, review: NewReview) -> AppResult<Review>;

    /// Approved reviews of a product, newest first
    async fn product_reviews(&self, product_id: Uuid) -> AppResult<Vec<Review>>;

    async fn list_reviews(&self, status: Option<ReviewStatus>) -> AppResult<Vec<Review>>;

    async fn set_status(&self, id: Uuid, status: ReviewStatus) -> AppResult<Review>;

    async fn delete_review(&self, id: Uuid) -> AppResult<()>;
}

pub struct ReviewManager {
    reviews: Arc<dyn ReviewRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ReviewManager {
    pub fn new(reviews: Arc<dyn ReviewRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { reviews, products }
    }
}

#[async_trait]
impl ReviewService for ReviewManager {
    async fn submit_review(&self, mut review: NewReview) -> AppResult<Review> {
        check_rating(review.rating)?;
        review.comment = review.comment.trim().to_string();

        if self.products.find_by_id(review.product_id).await?.is_none() {
            return Err(AppError::NotFound("Product"));
        }

        let created = self.reviews.create(review).await?;
        info!(review_id = %created.id, product_id = %created.product_id, "Review submitted");
        Ok(created)
    }

    async fn product_reviews(&self, product_id: Uuid) -> AppResult<Vec<Review>> {
        self.reviews
            .list_by_product(product_id, Some(ReviewStatus::Approved))
            .await
    }

    async fn list_reviews(&self, status: Option<ReviewStatus>) -> AppResult<Vec<Review>> {
        self.reviews.list(status).await
    }

    async fn set_status(&self, id: Uuid, status: ReviewStatus) -> AppResult<Review> {
        let review = self.reviews.update_status(id, status).await?;
        info!(review_id = %id, status = %status, "Review moderated");
        Ok(review)
    }

    async fn delete_review(&self, id: Uuid) -> AppResult<()> {
        self.reviews.delete(id).await
    }
}

//! Review repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::review::{self, ActiveModel, Entity as ReviewEntity};
use common::{AppError, AppResult};
use domain::{NewReview, Review, ReviewStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a review awaiting moderation
    async fn create(&self, review: NewReview) -> AppResult<Review>;

    /// Reviews of one product, newest first, optionally by status
    async fn list_by_product(
        &self,
        product_id: Uuid,
        status: Option<ReviewStatus>,
    ) -> AppResult<Vec<Review>>;

    /// All reviews, newest first, optionally by status
    async fn list(&self, status: Option<ReviewStatus>) -> AppResult<Vec<Review>>;

    async fn update_status(&self, id: Uuid, status: ReviewStatus) -> AppResult<Review>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ReviewStore {
    db: DatabaseConnection,
}

impl ReviewStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewStore {
    async fn create(&self, new: NewReview) -> AppResult<Review> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            customer_id: Set(new.customer_id),
            product_id: Set(new.product_id),
            rating: Set(i16::from(new.rating)),
            comment: Set(new.comment),
            status: Set(ReviewStatus::Pending.to_string()),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Review::from(model))
    }

    async fn list_by_product(
        &self,
        product_id: Uuid,
        status: Option<ReviewStatus>,
    ) -> AppResult<Vec<Review>> {
        let mut query = ReviewEntity::find().filter(review::Column::ProductId.eq(product_id));
        if let Some(status) = status {
            query = query.filter(review::Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_desc(review::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn list(&self, status: Option<ReviewStatus>) -> AppResult<Vec<Review>> {
        let mut query = ReviewEntity::find();
        if let Some(status) = status {
            query = query.filter(review::Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_desc(review::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn update_status(&self, id: Uuid, status: ReviewStatus) -> AppResult<Review> {
        let review = ReviewEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Review"))?;

        let mut active: ActiveModel = review.into();
        active.status = Set(status.to_string());

        let model = active.update(&self.db).await?;
        Ok(Review::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ReviewEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Review"));
        }

        Ok(())
    }
}

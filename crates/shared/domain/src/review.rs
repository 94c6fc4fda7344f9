//! Product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_RATING, MIN_RATING, REVIEW_STATUS_APPROVED, REVIEW_STATUS_PENDING};
use crate::error::{DomainError, DomainResult};

/// Moderation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ReviewStatus {
    Pending,
    Approved,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => REVIEW_STATUS_PENDING,
            ReviewStatus::Approved => REVIEW_STATUS_APPROVED,
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            REVIEW_STATUS_PENDING => Ok(ReviewStatus::Pending),
            REVIEW_STATUS_APPROVED => Ok(ReviewStatus::Approved),
            other => Err(DomainError::validation(format!(
                "Unknown review status '{}'. Must be 'pending' or 'approved'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Review {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub rating: u8,
    pub comment: String,
    pub status: ReviewStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub rating: u8,
    pub comment: String,
}

/// Reject ratings outside the star range.
pub fn check_rating(rating: u8) -> DomainResult<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(DomainError::validation(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )))
    }
}

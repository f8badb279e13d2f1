use crate::error::AppError;
use crate::models::review::ReviewWithAuthor;
use chrono::Utc;
use coffee_guide_shared::constants::{DEFAULT_REVIEW_LIMIT, DEFAULT_REVIEW_OFFSET};
use coffee_guide_shared::dto::{CreateReviewRequest, ReviewCreated};
use sqlx::SqlitePool;
use tracing::info;

/// Reviews and the shop aggregates derived from them.
#[derive(Clone)]
pub struct ReviewService {
    db_pool: SqlitePool,
}

impl ReviewService {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Insert a review and refresh the shop's aggregates in one transaction.
    ///
    /// The aggregates are always recomputed from the full review set rather
    /// than adjusted incrementally, so they cannot drift.
    pub async fn create_review(
        &self,
        request: CreateReviewRequest,
    ) -> Result<ReviewCreated, AppError> {
        let mut tx = self.db_pool.begin().await?;

        let shop_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coffee_shops WHERE id = ?")
            .bind(request.shop_id)
            .fetch_one(&mut *tx)
            .await?;
        if shop_count == 0 {
            return Err(AppError::NotFound("Coffee shop not found".to_string()));
        }

        let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(request.user_id)
            .fetch_one(&mut *tx)
            .await?;
        if user_count == 0 {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let review_id: i64 = sqlx::query_scalar(
            "INSERT INTO reviews (shop_id, user_id, rating, title, comment, visit_date, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING id",
        )
        .bind(request.shop_id)
        .bind(request.user_id)
        .bind(request.rating)
        .bind(&request.title)
        .bind(&request.comment)
        .bind(&request.visit_date)
        .bind(Utc::now().to_rfc3339())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE coffee_shops SET \
                 avg_rating = (SELECT AVG(rating) FROM reviews WHERE shop_id = ?), \
                 total_reviews = (SELECT COUNT(*) FROM reviews WHERE shop_id = ?) \
             WHERE id = ?",
        )
        .bind(request.shop_id)
        .bind(request.shop_id)
        .bind(request.shop_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            review_id,
            shop_id = request.shop_id,
            rating = request.rating,
            "review recorded"
        );

        Ok(ReviewCreated { review_id })
    }

    /// Paginated reviews for a shop, newest first. The limit is whatever the
    /// caller asks for; there is no configured maximum page size.
    pub async fn list_reviews(
        &self,
        shop_id: i64,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ReviewWithAuthor>, AppError> {
        ReviewWithAuthor::find_for_shop(
            &self.db_pool,
            shop_id,
            limit.unwrap_or(DEFAULT_REVIEW_LIMIT),
            offset.unwrap_or(DEFAULT_REVIEW_OFFSET),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    fn review(shop_id: i64, user_id: i64, rating: i64, comment: &str) -> CreateReviewRequest {
        CreateReviewRequest {
            shop_id,
            user_id,
            rating,
            title: None,
            comment: comment.to_string(),
            visit_date: None,
        }
    }

    async fn shop_aggregates(pool: &SqlitePool, shop_id: i64) -> (f64, i64) {
        sqlx::query_as("SELECT avg_rating, total_reviews FROM coffee_shops WHERE id = ?")
            .bind(shop_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_review_updates_aggregates() {
        let pool = testing::test_pool().await;
        let shop_id = testing::insert_shop(&pool, "mean-bean", "Mean Bean", "specialty").await;
        let user_id = testing::insert_user(&pool, "Eleni", "eleni@example.com").await;
        let service = ReviewService::new(pool.clone());

        service
            .create_review(review(shop_id, user_id, 4, "smooth espresso"))
            .await
            .unwrap();
        service
            .create_review(review(shop_id, user_id, 5, "even better today"))
            .await
            .unwrap();
        service
            .create_review(review(shop_id, user_id, 3, "crowded"))
            .await
            .unwrap();

        let (avg, total) = shop_aggregates(&pool, shop_id).await;
        assert_eq!(total, 3);
        assert!((avg - 4.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_aggregates_isolated_per_shop() {
        let pool = testing::test_pool().await;
        let rated = testing::insert_shop(&pool, "rated", "Rated", "modern").await;
        let untouched = testing::insert_shop(&pool, "untouched", "Untouched", "modern").await;
        let user_id = testing::insert_user(&pool, "Andreas", "andreas@example.com").await;
        let service = ReviewService::new(pool.clone());

        service
            .create_review(review(rated, user_id, 5, "top"))
            .await
            .unwrap();

        let (avg, total) = shop_aggregates(&pool, untouched).await;
        assert_eq!(total, 0);
        assert!((avg - 0.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_unknown_shop_or_user_is_not_found() {
        let pool = testing::test_pool().await;
        let shop_id = testing::insert_shop(&pool, "lonely", "Lonely", "chain").await;
        let user_id = testing::insert_user(&pool, "Maria", "maria@example.com").await;
        let service = ReviewService::new(pool.clone());

        let no_shop = service.create_review(review(999, user_id, 4, "where")).await;
        assert!(matches!(no_shop, Err(AppError::NotFound(_))));

        let no_user = service.create_review(review(shop_id, 999, 4, "who")).await;
        assert!(matches!(no_user, Err(AppError::NotFound(_))));

        let reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(reviews, 0);
    }

    #[tokio::test]
    async fn test_list_defaults_and_pagination() {
        let pool = testing::test_pool().await;
        let shop_id = testing::insert_shop(&pool, "prolific", "Prolific", "specialty").await;
        let user_id = testing::insert_user(&pool, "Costas", "costas@example.com").await;
        let service = ReviewService::new(pool);

        for i in 0..13 {
            service
                .create_review(review(shop_id, user_id, 4, &format!("cup {}", i)))
                .await
                .unwrap();
        }

        let first_page = service.list_reviews(shop_id, None, None).await.unwrap();
        assert_eq!(first_page.len(), 10);
        assert_eq!(first_page[0].review.comment, "cup 12");
        assert_eq!(first_page[0].user_name, "Costas");

        let second_page = service
            .list_reviews(shop_id, Some(10), Some(10))
            .await
            .unwrap();
        assert_eq!(second_page.len(), 3);
        assert_eq!(second_page[2].review.comment, "cup 0");

        // No maximum page size: one oversized request returns everything.
        let everything = service
            .list_reviews(shop_id, Some(500), None)
            .await
            .unwrap();
        assert_eq!(everything.len(), 13);
    }
}

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub shop_id: i64,
    pub user_id: i64,
    pub rating: i64,
    pub title: Option<String>,
    pub comment: String,
    pub visit_date: Option<String>,
    pub created_at: String,
}

/// A review joined with the author's display fields.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ReviewWithAuthor {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub review: Review,
    pub user_name: String,
    pub avatar_url: Option<String>,
}

impl ReviewWithAuthor {
    /// Newest reviews for a shop with the author's name and avatar.
    pub async fn find_for_shop(
        pool: &SqlitePool,
        shop_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, AppError> {
        let reviews = sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.shop_id, r.user_id, r.rating, r.title, r.comment, r.visit_date, \
                    r.created_at, u.name AS user_name, u.avatar_url \
             FROM reviews r \
             JOIN users u ON r.user_id = u.id \
             WHERE r.shop_id = ? \
             ORDER BY r.created_at DESC, r.id DESC \
             LIMIT ? OFFSET ?",
        )
        .bind(shop_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }
}

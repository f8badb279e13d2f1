use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct OwnerInterview {
    pub id: i64,
    pub shop_id: i64,
    pub owner_name: String,
    pub owner_title: String,
    pub portrait_url: Option<String>,
    pub question: String,
    pub quote: String,
    pub signature_drink: Option<String>,
    pub philosophy: Option<String>,
    pub is_published: bool,
    pub display_order: i64,
    pub created_at: String,
}

/// An interview joined with the shop it features.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InterviewWithShop {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub interview: OwnerInterview,
    pub shop_name: String,
    pub shop_slug: String,
}

impl OwnerInterview {
    /// Published interviews in editorial order.
    pub async fn find_published(pool: &SqlitePool) -> Result<Vec<InterviewWithShop>, AppError> {
        let interviews = sqlx::query_as::<_, InterviewWithShop>(
            "SELECT i.id, i.shop_id, i.owner_name, i.owner_title, i.portrait_url, \
                    i.question, i.quote, i.signature_drink, i.philosophy, \
                    i.is_published, i.display_order, i.created_at, \
                    s.name AS shop_name, s.slug AS shop_slug \
             FROM owner_interviews i \
             JOIN coffee_shops s ON i.shop_id = s.id \
             WHERE i.is_published = 1 \
             ORDER BY i.display_order ASC",
        )
        .fetch_all(pool)
        .await?;

        Ok(interviews)
    }
}

use crate::error::AppError;
use crate::models::review::ReviewWithAuthor;
use coffee_guide_shared::types::{ShopCategory, ShopSort};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};

const SHOP_COLUMNS: &str = "id, slug, name, description, address, phone, category, specialty, \
     latitude, longitude, avg_rating, total_reviews, images, features, opening_hours, \
     is_active, created_at";

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CoffeeShop {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: Option<String>,
    pub category: ShopCategory,
    pub specialty: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub avg_rating: f64,
    pub total_reviews: i64,
    pub images: Json<Vec<String>>,
    pub features: Json<Vec<String>>,
    pub opening_hours: Json<serde_json::Value>,
    pub is_active: bool,
    pub created_at: String,
}

/// A shop plus its most recent reviews, serialized flat the way the
/// detail endpoint reports it.
#[derive(Debug, Serialize)]
pub struct ShopDetail {
    #[serde(flatten)]
    pub shop: CoffeeShop,
    pub reviews: Vec<ReviewWithAuthor>,
}

impl CoffeeShop {
    /// List active shops, optionally filtered by category, in the given order.
    pub async fn find_active(
        pool: &SqlitePool,
        category: Option<ShopCategory>,
        sort: ShopSort,
    ) -> Result<Vec<Self>, AppError> {
        let mut query = format!(
            "SELECT {} FROM coffee_shops WHERE is_active = 1",
            SHOP_COLUMNS
        );

        if category.is_some() {
            query.push_str(" AND category = ?");
        }

        let sort_clause = match sort {
            ShopSort::Rating => " ORDER BY avg_rating DESC, total_reviews DESC",
            ShopSort::Reviews => " ORDER BY total_reviews DESC",
            ShopSort::Name => " ORDER BY name ASC",
        };
        query.push_str(sort_clause);

        let mut shops = sqlx::query_as::<_, CoffeeShop>(&query);
        if let Some(category) = category {
            shops = shops.bind(category);
        }

        Ok(shops.fetch_all(pool).await?)
    }

    /// Find an active shop by its slug.
    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Self>, AppError> {
        let shop = sqlx::query_as::<_, CoffeeShop>(&format!(
            "SELECT {} FROM coffee_shops WHERE slug = ? AND is_active = 1",
            SHOP_COLUMNS
        ))
        .bind(slug)
        .fetch_optional(pool)
        .await?;

        Ok(shop)
    }
}

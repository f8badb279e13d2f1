use crate::error::AppError;
use crate::models::interview::{InterviewWithShop, OwnerInterview};
use crate::models::review::ReviewWithAuthor;
use crate::models::shop::{CoffeeShop, ShopDetail};
use coffee_guide_shared::constants::SHOP_DETAIL_REVIEW_COUNT;
use coffee_guide_shared::types::{ShopCategory, ShopSort};
use sqlx::SqlitePool;
use tracing::debug;

/// Catalog and editorial reads: shop listing, shop detail, interviews.
#[derive(Clone)]
pub struct ShopService {
    db_pool: SqlitePool,
}

impl ShopService {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// Active shops, optionally filtered by category, in the requested order.
    pub async fn list_shops(
        &self,
        category: Option<ShopCategory>,
        sort: ShopSort,
    ) -> Result<Vec<CoffeeShop>, AppError> {
        debug!(?category, %sort, "listing shops");
        CoffeeShop::find_active(&self.db_pool, category, sort).await
    }

    /// One active shop by slug, with its ten most recent reviews.
    pub async fn shop_detail(&self, slug: &str) -> Result<ShopDetail, AppError> {
        let shop = CoffeeShop::find_by_slug(&self.db_pool, slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Coffee shop not found".to_string()))?;

        let reviews =
            ReviewWithAuthor::find_for_shop(&self.db_pool, shop.id, SHOP_DETAIL_REVIEW_COUNT, 0)
                .await?;

        Ok(ShopDetail { shop, reviews })
    }

    /// Published owner interviews in editorial order.
    pub async fn published_interviews(&self) -> Result<Vec<InterviewWithShop>, AppError> {
        OwnerInterview::find_published(&self.db_pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let pool = testing::test_pool().await;
        testing::insert_shop(&pool, "roast-lab", "Roast Lab", "specialty").await;
        testing::insert_shop(&pool, "kafeneio", "Kafeneio", "traditional").await;
        let service = ShopService::new(pool);

        let traditional = service
            .list_shops(Some(ShopCategory::Traditional), ShopSort::Name)
            .await
            .unwrap();
        assert_eq!(traditional.len(), 1);
        assert_eq!(traditional[0].slug, "kafeneio");

        let all = service.list_shops(None, ShopSort::Name).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_list_sorts_by_name_by_default() {
        let pool = testing::test_pool().await;
        testing::insert_shop(&pool, "zest", "Zest", "modern").await;
        testing::insert_shop(&pool, "aroma", "Aroma", "modern").await;
        let service = ShopService::new(pool);

        let shops = service.list_shops(None, ShopSort::Name).await.unwrap();
        let names: Vec<&str> = shops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Aroma", "Zest"]);
    }

    #[tokio::test]
    async fn test_rating_sort_breaks_ties_on_review_count() {
        let pool = testing::test_pool().await;
        let first = testing::insert_shop(&pool, "first", "First", "specialty").await;
        let second = testing::insert_shop(&pool, "second", "Second", "specialty").await;
        let third = testing::insert_shop(&pool, "third", "Third", "specialty").await;
        testing::set_shop_rating(&pool, first, 4.5, 10).await;
        testing::set_shop_rating(&pool, second, 4.5, 25).await;
        testing::set_shop_rating(&pool, third, 4.9, 3).await;
        let service = ShopService::new(pool);

        let shops = service.list_shops(None, ShopSort::Rating).await.unwrap();
        let slugs: Vec<&str> = shops.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_inactive_shops_are_hidden() {
        let pool = testing::test_pool().await;
        let shop_id = testing::insert_shop(&pool, "closed-doors", "Closed Doors", "chain").await;
        sqlx::query("UPDATE coffee_shops SET is_active = 0 WHERE id = ?")
            .bind(shop_id)
            .execute(&pool)
            .await
            .unwrap();
        let service = ShopService::new(pool);

        assert!(service
            .list_shops(None, ShopSort::Name)
            .await
            .unwrap()
            .is_empty());
        let missing = service.shop_detail("closed-doors").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_detail_carries_ten_newest_reviews() {
        let pool = testing::test_pool().await;
        let shop_id = testing::insert_shop(&pool, "busy-bean", "Busy Bean", "modern").await;
        let user_id = testing::insert_user(&pool, "Eleni", "eleni@example.com").await;
        for i in 0..12 {
            testing::insert_review(&pool, shop_id, user_id, 4, &format!("visit {}", i)).await;
        }
        let service = ShopService::new(pool);

        let detail = service.shop_detail("busy-bean").await.unwrap();
        assert_eq!(detail.reviews.len(), 10);
        assert_eq!(detail.reviews[0].review.comment, "visit 11");
        assert_eq!(detail.reviews[0].user_name, "Eleni");
    }

    #[tokio::test]
    async fn test_unknown_slug_is_not_found() {
        let pool = testing::test_pool().await;
        let service = ShopService::new(pool);
        assert!(matches!(
            service.shop_detail("nowhere").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_interviews_respect_publication_and_order() {
        let pool = testing::test_pool().await;
        let shop_id = testing::insert_shop(&pool, "storyteller", "Storyteller", "traditional").await;
        testing::insert_interview(&pool, shop_id, "Paul", 2, true).await;
        testing::insert_interview(&pool, shop_id, "Chrysanthi", 1, true).await;
        testing::insert_interview(&pool, shop_id, "Nikos", 0, false).await;
        let service = ShopService::new(pool);

        let interviews = service.published_interviews().await.unwrap();
        let owners: Vec<&str> = interviews
            .iter()
            .map(|i| i.interview.owner_name.as_str())
            .collect();
        assert_eq!(owners, vec!["Chrysanthi", "Paul"]);
        assert_eq!(interviews[0].shop_slug, "storyteller");
    }
}

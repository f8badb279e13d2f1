use crate::error::AppError;
use crate::services::shop_service::ShopService;
use actix_web::{web, HttpResponse, Result};
use coffee_guide_shared::types::{ShopCategory, ShopSort};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct ShopListQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// List active shops, filterable by category and sortable by name, rating,
/// or review count.
pub async fn list_shops(
    query: web::Query<ShopListQuery>,
    shop_service: web::Data<ShopService>,
) -> Result<HttpResponse, AppError> {
    let category = match query.category.as_deref() {
        None | Some("all") => None,
        Some(value) => match ShopCategory::from_param(value) {
            Some(category) => Some(category),
            None => return Err(AppError::Validation("Invalid category filter".to_string())),
        },
    };

    let sort = match query.sort.as_deref() {
        None => ShopSort::Name,
        Some(value) => match ShopSort::from_param(value) {
            Some(sort) => sort,
            None => return Err(AppError::Validation("Invalid sort option".to_string())),
        },
    };

    let shops = shop_service.list_shops(category, sort).await?;
    let count = shops.len();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": shops,
        "count": count,
    })))
}

/// Get a single shop by slug together with its ten newest reviews.
pub async fn get_shop(
    slug: web::Path<String>,
    shop_service: web::Data<ShopService>,
) -> Result<HttpResponse, AppError> {
    debug!("fetching shop {}", slug);

    let detail = shop_service.shop_detail(&slug).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": detail,
    })))
}

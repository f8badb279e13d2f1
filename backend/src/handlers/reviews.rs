use crate::error::AppError;
use crate::services::review_service::ReviewService;
use actix_web::{web, HttpResponse, Result};
use coffee_guide_shared::dto::CreateReviewRequest;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct ReviewListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Paginated reviews for a shop, newest first.
pub async fn list_reviews(
    shop_id: web::Path<i64>,
    query: web::Query<ReviewListQuery>,
    review_service: web::Data<ReviewService>,
) -> Result<HttpResponse, AppError> {
    let reviews = review_service
        .list_reviews(*shop_id, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": reviews,
    })))
}

/// Create a review and refresh the shop's rating aggregates.
pub async fn create_review(
    request: web::Json<CreateReviewRequest>,
    review_service: web::Data<ReviewService>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let created = review_service.create_review(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": created,
    })))
}

use crate::error::AppError;
use crate::services::shop_service::ShopService;
use actix_web::{web, HttpResponse, Result};
use serde_json::json;

/// Published owner interviews in editorial order.
pub async fn list_interviews(
    shop_service: web::Data<ShopService>,
) -> Result<HttpResponse, AppError> {
    let interviews = shop_service.published_interviews().await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": interviews,
    })))
}

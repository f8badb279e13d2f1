use crate::error::AppError;
use crate::services::booking_service::BookingService;
use actix_web::{web, HttpResponse, Result};
use coffee_guide_shared::dto::CreateBookingRequest;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use validator::Validate;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

/// Availability grid for a shop and date: 21 half-hour slots with seats
/// remaining in each.
pub async fn availability(
    shop_id: web::Path<i64>,
    query: web::Query<AvailabilityQuery>,
    booking_service: web::Data<BookingService>,
) -> Result<HttpResponse, AppError> {
    let date = query
        .date
        .as_deref()
        .ok_or_else(|| AppError::Validation("Date is required".to_string()))?;

    debug!("availability check for shop {} on {}", shop_id, date);

    let slots = booking_service.availability(*shop_id, date).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": slots,
    })))
}

/// Create a booking; responds with the id, confirmation code, and status.
pub async fn create_booking(
    request: web::Json<CreateBookingRequest>,
    booking_service: web::Data<BookingService>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let confirmation = booking_service
        .create_booking(request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": confirmation,
    })))
}

/// Look up a booking by its confirmation code.
pub async fn get_booking(
    code: web::Path<String>,
    booking_service: web::Data<BookingService>,
) -> Result<HttpResponse, AppError> {
    let booking = booking_service.find_by_code(&code).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": booking,
    })))
}

/// Cancel a booking by its confirmation code.
pub async fn cancel_booking(
    code: web::Path<String>,
    booking_service: web::Data<BookingService>,
) -> Result<HttpResponse, AppError> {
    booking_service.cancel_by_code(&code).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Booking cancelled successfully",
    })))
}

use crate::error::AppError;
use crate::services::booking_service::BookingService;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct UserBookingsQuery {
    pub email: Option<String>,
}

/// All bookings recorded under a contact email, newest first.
pub async fn user_bookings(
    query: web::Query<UserBookingsQuery>,
    booking_service: web::Data<BookingService>,
) -> Result<HttpResponse, AppError> {
    let email = query
        .email
        .as_deref()
        .ok_or_else(|| AppError::Validation("Email is required".to_string()))?;

    let bookings = booking_service.bookings_for_email(email).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": bookings,
    })))
}

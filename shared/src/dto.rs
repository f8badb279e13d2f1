use crate::constants;
use crate::types::BookingStatus;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// Booking DTOs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub shop_id: i64,

    #[validate(length(min = 1, max = 255))]
    pub user_name: String,

    #[validate(email)]
    pub user_email: String,

    #[validate(length(min = 1, max = 50))]
    pub user_phone: String,

    #[validate(custom = "validate_calendar_date")]
    pub date: String,

    #[validate(custom = "validate_booking_slot")]
    pub time: String,

    #[validate(range(min = 1))]
    pub party_size: i64,

    #[validate(length(max = 2000))]
    pub special_requests: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: i64,
    pub confirmation_code: String,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub time: String,
    pub available: bool,
    pub remaining: i64,
}

// Review DTOs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub shop_id: i64,

    pub user_id: i64,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,

    #[validate(length(max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub comment: String,

    #[validate(custom = "validate_calendar_date")]
    pub visit_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreated {
    pub review_id: i64,
}

/// Accepts `YYYY-MM-DD` and nothing else.
pub fn validate_calendar_date(value: &str) -> Result<(), ValidationError> {
    match chrono::NaiveDate::parse_from_str(value, constants::DATE_FORMAT) {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("calendar_date");
            err.message = Some("Date must be in YYYY-MM-DD format".into());
            Err(err)
        }
    }
}

/// Accepts only the bookable half-hour slots.
pub fn validate_booking_slot(value: &str) -> Result<(), ValidationError> {
    if constants::is_booking_slot(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("booking_slot");
        err.message = Some("Time must be a half-hour slot between 08:00 and 18:00".into());
        Err(err)
    }
}

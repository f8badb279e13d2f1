use crate::error::AppError;
use crate::models::booking::{Booking, BookingWithShop};
use chrono::{NaiveDate, Utc};
use coffee_guide_shared::constants::{
    self, CONFIRMATION_CODE_PATTERN, CONFIRMATION_CODE_PREFIX, CONFIRMATION_CODE_SUFFIX_LEN,
    SLOT_CAPACITY,
};
use coffee_guide_shared::dto::{BookingConfirmation, CreateBookingRequest, SlotAvailability};
use coffee_guide_shared::types::BookingStatus;
use rand::distributions::Alphanumeric;
use rand::Rng;
use regex::Regex;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::{debug, info, warn};

// Collisions need the same millisecond AND the same random suffix, so one
// regeneration is already overkill.
const CODE_RETRY_LIMIT: u32 = 3;

/// Table bookings: availability grid, creation, lookup, cancellation.
#[derive(Clone)]
pub struct BookingService {
    db_pool: SqlitePool,
    code_pattern: Regex,
}

impl BookingService {
    pub fn new(db_pool: SqlitePool) -> Self {
        let code_pattern = Regex::new(CONFIRMATION_CODE_PATTERN).expect("valid code pattern");
        Self {
            db_pool,
            code_pattern,
        }
    }

    /// The 21 half-hour slots for a shop and date, each with seats remaining.
    ///
    /// Computed from a fresh aggregate read; the shop id is not checked for
    /// existence, so an unknown shop reports a fully free day.
    pub async fn availability(
        &self,
        shop_id: i64,
        date: &str,
    ) -> Result<Vec<SlotAvailability>, AppError> {
        NaiveDate::parse_from_str(date, constants::DATE_FORMAT)
            .map_err(|_| AppError::Validation("Date must be in YYYY-MM-DD format".to_string()))?;

        let loads = Booking::slot_loads(&self.db_pool, shop_id, date).await?;
        let booked: HashMap<String, i64> = loads
            .into_iter()
            .map(|load| (load.booking_time, load.party_size))
            .collect();

        let slots = constants::booking_slots()
            .into_iter()
            .map(|time| {
                let taken = booked.get(&time).copied().unwrap_or(0);
                SlotAvailability {
                    available: taken < SLOT_CAPACITY,
                    remaining: (SLOT_CAPACITY - taken).max(0),
                    time,
                }
            })
            .collect();

        Ok(slots)
    }

    /// Create a booking in one transaction: resolve the guest user by email,
    /// then insert the booking only if the slot still has room.
    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<BookingConfirmation, AppError> {
        let mut tx = self.db_pool.begin().await?;

        let shop_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM coffee_shops WHERE id = ?")
            .bind(request.shop_id)
            .fetch_one(&mut *tx)
            .await?;
        if shop_count == 0 {
            return Err(AppError::NotFound("Coffee shop not found".to_string()));
        }

        // Guest upsert keyed on email alone; a returning guest's stored name
        // and phone are left as first recorded.
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (name, email, phone, created_at) VALUES (?, ?, ?, ?) \
             ON CONFLICT(email) DO UPDATE SET email = excluded.email \
             RETURNING id",
        )
        .bind(&request.user_name)
        .bind(&request.user_email)
        .bind(&request.user_phone)
        .bind(Utc::now().to_rfc3339())
        .fetch_one(&mut *tx)
        .await?;

        // The capacity check rides inside the INSERT so the seat count and
        // the write cannot interleave with another booking.
        let insert_sql = "INSERT INTO bookings \
             (shop_id, user_id, user_name, user_email, user_phone, booking_date, booking_time, \
              party_size, status, confirmation_code, special_requests, created_at) \
             SELECT ?, ?, ?, ?, ?, ?, ?, ?, 'confirmed', ?, ?, ? \
             WHERE (SELECT COALESCE(SUM(party_size), 0) FROM bookings \
                    WHERE shop_id = ? AND booking_date = ? AND booking_time = ? \
                      AND status != 'cancelled') + ? <= ?";

        let mut attempts = 0;
        let (booking_id, confirmation_code) = loop {
            let code = generate_confirmation_code();
            let result = sqlx::query(insert_sql)
                .bind(request.shop_id)
                .bind(user_id)
                .bind(&request.user_name)
                .bind(&request.user_email)
                .bind(&request.user_phone)
                .bind(&request.date)
                .bind(&request.time)
                .bind(request.party_size)
                .bind(&code)
                .bind(&request.special_requests)
                .bind(Utc::now().to_rfc3339())
                .bind(request.shop_id)
                .bind(&request.date)
                .bind(&request.time)
                .bind(request.party_size)
                .bind(SLOT_CAPACITY)
                .execute(&mut *tx)
                .await;

            match result {
                Ok(done) if done.rows_affected() == 0 => {
                    debug!(
                        shop_id = request.shop_id,
                        date = %request.date,
                        time = %request.time,
                        party_size = request.party_size,
                        "slot capacity exhausted"
                    );
                    return Err(AppError::Conflict(
                        "This time slot is fully booked".to_string(),
                    ));
                }
                Ok(done) => break (done.last_insert_rowid(), code),
                Err(sqlx::Error::Database(db_err))
                    if db_err.is_unique_violation() && attempts < CODE_RETRY_LIMIT =>
                {
                    attempts += 1;
                    warn!(attempts, "confirmation code collision, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        };

        tx.commit().await?;

        info!(
            booking_id,
            shop_id = request.shop_id,
            date = %request.date,
            time = %request.time,
            "booking confirmed"
        );

        Ok(BookingConfirmation {
            booking_id,
            confirmation_code,
            status: BookingStatus::Confirmed,
        })
    }

    /// Booking lookup by confirmation code, joined with shop display fields.
    pub async fn find_by_code(&self, code: &str) -> Result<BookingWithShop, AppError> {
        self.check_code_shape(code)?;

        Booking::find_by_code(&self.db_pool, code)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// Cancel by confirmation code. Already-cancelled bookings cancel again
    /// without complaint; an unmatched code is not found.
    pub async fn cancel_by_code(&self, code: &str) -> Result<(), AppError> {
        self.check_code_shape(code)?;

        let matched = Booking::cancel_by_code(&self.db_pool, code).await?;
        if matched == 0 {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        info!(%code, "booking cancelled");
        Ok(())
    }

    /// All bookings for a contact email, newest first.
    pub async fn bookings_for_email(&self, email: &str) -> Result<Vec<BookingWithShop>, AppError> {
        Booking::find_by_email(&self.db_pool, email).await
    }

    fn check_code_shape(&self, code: &str) -> Result<(), AppError> {
        if self.code_pattern.is_match(code) {
            Ok(())
        } else {
            Err(AppError::Validation(
                "Invalid confirmation code format".to_string(),
            ))
        }
    }
}

fn generate_confirmation_code() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CONFIRMATION_CODE_SUFFIX_LEN)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();

    format!(
        "{}-{}-{}",
        CONFIRMATION_CODE_PREFIX,
        Utc::now().timestamp_millis(),
        suffix
    )
}

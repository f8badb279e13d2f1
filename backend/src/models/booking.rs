use crate::error::AppError;
use coffee_guide_shared::types::BookingStatus;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub shop_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub booking_date: String,
    pub booking_time: String,
    pub party_size: i64,
    pub status: BookingStatus,
    pub confirmation_code: String,
    pub special_requests: Option<String>,
    pub created_at: String,
}

/// A booking joined with the booked shop's display fields.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BookingWithShop {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub booking: Booking,
    pub shop_name: String,
    pub address: String,
    pub shop_phone: Option<String>,
    pub slug: String,
}

/// Seats taken in one half-hour slot.
#[derive(Debug, Clone, FromRow)]
pub struct SlotLoad {
    pub booking_time: String,
    pub party_size: i64,
}

const BOOKING_JOIN_COLUMNS: &str =
    "b.id, b.shop_id, b.user_id, b.user_name, b.user_email, b.user_phone, \
     b.booking_date, b.booking_time, b.party_size, b.status, b.confirmation_code, \
     b.special_requests, b.created_at, \
     s.name AS shop_name, s.address, s.phone AS shop_phone, s.slug";

impl Booking {
    /// Seats already taken per slot for a shop and date, cancelled bookings
    /// excluded. Slots with no bookings are absent from the result.
    pub async fn slot_loads(
        pool: &SqlitePool,
        shop_id: i64,
        date: &str,
    ) -> Result<Vec<SlotLoad>, AppError> {
        let loads = sqlx::query_as::<_, SlotLoad>(
            "SELECT booking_time, SUM(party_size) AS party_size \
             FROM bookings \
             WHERE shop_id = ? AND booking_date = ? AND status != 'cancelled' \
             GROUP BY booking_time",
        )
        .bind(shop_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(loads)
    }

    /// Look up a booking by its confirmation code, joined with shop fields.
    pub async fn find_by_code(
        pool: &SqlitePool,
        code: &str,
    ) -> Result<Option<BookingWithShop>, AppError> {
        let booking = sqlx::query_as::<_, BookingWithShop>(&format!(
            "SELECT {} FROM bookings b \
             JOIN coffee_shops s ON b.shop_id = s.id \
             WHERE b.confirmation_code = ?",
            BOOKING_JOIN_COLUMNS
        ))
        .bind(code)
        .fetch_optional(pool)
        .await?;

        Ok(booking)
    }

    /// All bookings whose contact email matches exactly, newest date first.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Vec<BookingWithShop>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithShop>(&format!(
            "SELECT {} FROM bookings b \
             JOIN coffee_shops s ON b.shop_id = s.id \
             WHERE b.user_email = ? \
             ORDER BY b.booking_date DESC, b.booking_time DESC",
            BOOKING_JOIN_COLUMNS
        ))
        .bind(email)
        .fetch_all(pool)
        .await?;

        Ok(bookings)
    }

    /// Set a booking to `cancelled` by confirmation code; returns how many
    /// rows matched. Cancelling twice matches twice.
    pub async fn cancel_by_code(pool: &SqlitePool, code: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE bookings SET status = 'cancelled' WHERE confirmation_code = ?")
            .bind(code)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// Booking window: 08:00 through 18:00 in 30-minute steps, 21 slots total.
pub const BOOKING_OPEN_HOUR: u32 = 8;
pub const BOOKING_CLOSE_HOUR: u32 = 18;
pub const SLOT_INTERVAL_MINUTES: u32 = 30;
pub const SLOTS_PER_DAY: usize = 21;

// Seats per (shop, date, slot); the sum of non-cancelled party sizes is
// capped here.
pub const SLOT_CAPACITY: i64 = 20;

// Confirmation codes: BOOK-<unix millis>-<uppercase alphanumeric suffix>
pub const CONFIRMATION_CODE_PREFIX: &str = "BOOK";
pub const CONFIRMATION_CODE_SUFFIX_LEN: usize = 6;
pub const CONFIRMATION_CODE_PATTERN: &str = r"^BOOK-\d{10,16}-[A-Z0-9]{1,10}$";

// Pagination defaults
pub const DEFAULT_REVIEW_LIMIT: i64 = 10;
pub const DEFAULT_REVIEW_OFFSET: i64 = 0;

// Reviews embedded in a shop detail response
pub const SHOP_DETAIL_REVIEW_COUNT: i64 = 10;

// Calendar dates on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Enumerates the bookable half-hour slots in ascending order
/// (`08:00` .. `18:00`).
pub fn booking_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(SLOTS_PER_DAY);
    for hour in BOOKING_OPEN_HOUR..=BOOKING_CLOSE_HOUR {
        for minute in (0..60).step_by(SLOT_INTERVAL_MINUTES as usize) {
            if hour == BOOKING_CLOSE_HOUR && minute > 0 {
                break;
            }
            slots.push(format!("{:02}:{:02}", hour, minute));
        }
    }
    slots
}

/// True when `time` is one of the bookable slots.
pub fn is_booking_slot(time: &str) -> bool {
    booking_slots().iter().any(|slot| slot == time)
}

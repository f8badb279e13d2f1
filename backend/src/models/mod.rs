//! Database models for the coffee guide.
//!
//! Each model corresponds to a table and owns its read queries; writes that
//! span multiple statements live in the service layer so they can share a
//! transaction.

pub mod booking;
pub mod interview;
pub mod review;
pub mod shop;

pub use booking::{Booking, BookingWithShop, SlotLoad};
pub use interview::{InterviewWithShop, OwnerInterview};
pub use review::{Review, ReviewWithAuthor};
pub use shop::{CoffeeShop, ShopDetail};

//! Business logic between the HTTP handlers and the models.
//!
//! Each service owns a clone of the connection pool. Reads go straight to the
//! model helpers; writes that need more than one statement open a transaction
//! here so a failed step rolls the whole operation back.

pub mod booking_service;
pub mod review_service;
pub mod shop_service;

pub use booking_service::BookingService;
pub use review_service::ReviewService;
pub use shop_service::ShopService;

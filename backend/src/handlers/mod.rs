//! HTTP handlers: extract and validate input, delegate to a service, wrap
//! the result in the response envelope.

pub mod bookings;
pub mod health;
pub mod interviews;
pub mod pages;
pub mod reviews;
pub mod shops;
pub mod users;

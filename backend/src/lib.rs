//! Backend for the Larnaca coffee guide: shop catalog, reviews, table
//! bookings and the owner interview series, served over HTTP with
//! server-rendered shop pages.

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod testing;

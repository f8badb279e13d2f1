//! Shared types for the Larnaca coffee guide workspace.
//!
//! Everything the backend exposes over the wire lives here: domain enums,
//! request/response DTOs, and the constants that define the booking window.

pub mod constants;
pub mod dto;
pub mod types;

use serde::{Deserialize, Serialize};
use std::fmt;

// Shop-related enums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ShopCategory {
    Specialty,
    Traditional,
    Modern,
    Chain,
}

impl fmt::Display for ShopCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopCategory::Specialty => write!(f, "specialty"),
            ShopCategory::Traditional => write!(f, "traditional"),
            ShopCategory::Modern => write!(f, "modern"),
            ShopCategory::Chain => write!(f, "chain"),
        }
    }
}

impl ShopCategory {
    /// Parses the `category` query parameter. `all` means no filter.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "specialty" => Some(ShopCategory::Specialty),
            "traditional" => Some(ShopCategory::Traditional),
            "modern" => Some(ShopCategory::Modern),
            "chain" => Some(ShopCategory::Chain),
            _ => None,
        }
    }
}

// Listing sort orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopSort {
    Name,
    Rating,
    Reviews,
}

impl ShopSort {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "name" => Some(ShopSort::Name),
            "rating" => Some(ShopSort::Rating),
            "reviews" => Some(ShopSort::Reviews),
            _ => None,
        }
    }
}

impl fmt::Display for ShopSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopSort::Name => write!(f, "name"),
            ShopSort::Rating => write!(f, "rating"),
            ShopSort::Reviews => write!(f, "reviews"),
        }
    }
}

// Booking-related enums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    /// Part of the declared status set, but nothing transitions bookings
    /// here yet.
    Completed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
            BookingStatus::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_param_round_trip() {
        for category in [
            ShopCategory::Specialty,
            ShopCategory::Traditional,
            ShopCategory::Modern,
            ShopCategory::Chain,
        ] {
            assert_eq!(
                ShopCategory::from_param(&category.to_string()),
                Some(category)
            );
        }
        assert_eq!(ShopCategory::from_param("bistro"), None);
        assert_eq!(ShopCategory::from_param("all"), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }
}

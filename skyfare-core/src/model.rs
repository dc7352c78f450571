use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference fare data for a scheduled flight. Read-only on the booking
/// path; the effective price is derived at quote time, never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: String,
    pub airline: String,
    pub flight_no: Option<String>,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
    pub duration: Option<String>,
    pub base_price_cents: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A reservation. `amount_paid_cents` is the price at the instant of
/// booking and is never recomputed; route and airline are snapshotted so
/// history survives catalog changes. Rows are never deleted, status flips
/// one way to CANCELLED.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub pnr: String,
    pub passenger_name: String,
    pub flight_id: String,
    pub amount_paid_cents: i64,
    pub booking_time: DateTime<Utc>,
    pub departure_city: Option<String>,
    pub arrival_city: Option<String>,
    pub airline: Option<String>,
    pub status: BookingStatus,
}

//! The partial booking carried from page to page.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::BusRoute;
use crate::constants::{
    PARAM_BUS_ID, PARAM_BUS_NAME, PARAM_PASSENGER_NAME, PARAM_SEAT_NUMBERS, SEAT_SEPARATOR,
};
use crate::query::QueryParams;
use crate::storage::BookingLogEntry;

/// Comma-joined seat labels exactly as carried, e.g. `"2,7"`.
///
/// The text is not validated beyond presence; [`SeatNumbers::labels`] splits
/// it for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumbers(String);

impl SeatNumbers {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn from_selection(seats: &[u16]) -> Self {
        let separator = SEAT_SEPARATOR.to_string();
        Self(
            seats
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(separator.as_str()),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// More than one seat, judged the same way the confirmation wording is:
    /// by the presence of a separator.
    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.0.contains(SEAT_SEPARATOR)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(SEAT_SEPARATOR)
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

impl fmt::Display for SeatNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeatNumbers {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Booking data accumulated across stages. Never persisted as a whole; it is
/// flattened into query parameters at each navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub bus_id: Option<u32>,
    pub bus_name: String,
    pub seat_numbers: SeatNumbers,
    pub passenger_name: Option<String>,
}

impl BookingDraft {
    #[must_use]
    pub fn for_route(route: &BusRoute) -> Self {
        Self {
            bus_id: Some(route.id),
            bus_name: route.name.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seats(mut self, seats: SeatNumbers) -> Self {
        self.seat_numbers = seats;
        self
    }

    #[must_use]
    pub fn with_passenger(mut self, passenger_name: impl Into<String>) -> Self {
        self.passenger_name = Some(passenger_name.into());
        self
    }

    /// Rebuild the draft from carried parameters. Absent text fields become
    /// empty; an unparsable `busId` is dropped.
    #[must_use]
    pub fn from_query(params: &QueryParams) -> Self {
        Self {
            bus_id: params.get(PARAM_BUS_ID).and_then(|id| id.parse().ok()),
            bus_name: params.get(PARAM_BUS_NAME).unwrap_or_default().to_string(),
            seat_numbers: SeatNumbers::new(params.get(PARAM_SEAT_NUMBERS).unwrap_or_default()),
            passenger_name: params.get(PARAM_PASSENGER_NAME).map(str::to_string),
        }
    }

    /// Parameters handed to the seat selection page.
    #[must_use]
    pub fn seat_selection_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Some(bus_id) = self.bus_id {
            params.set(PARAM_BUS_ID, bus_id.to_string());
        }
        params.with(PARAM_BUS_NAME, self.bus_name.as_str())
    }

    /// Parameters handed to the payment page.
    #[must_use]
    pub fn payment_query(&self) -> QueryParams {
        QueryParams::new()
            .with(PARAM_BUS_NAME, self.bus_name.as_str())
            .with(PARAM_SEAT_NUMBERS, self.seat_numbers.as_str())
    }

    /// Parameters handed to the confirmation page.
    #[must_use]
    pub fn confirmation_query(&self) -> QueryParams {
        self.payment_query().with(
            PARAM_PASSENGER_NAME,
            self.passenger_name.as_deref().unwrap_or_default(),
        )
    }

    #[must_use]
    pub fn log_entry(&self) -> BookingLogEntry {
        BookingLogEntry {
            bus_name: self.bus_name.clone(),
            seat_numbers: self.seat_numbers.as_str().to_string(),
        }
    }
}

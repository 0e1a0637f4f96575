//! Seat grid generation and selection tracking.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::constants::{
    DEFAULT_BOOKED_SEATS, DEFAULT_SEATS_PER_ROW, DEFAULT_TOTAL_SEATS, SEAT_SEPARATOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeatStatus {
    Available,
    Booked,
    Selected,
}

impl SeatStatus {
    /// Class name used by the seat grid stylesheet.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Selected => "selected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub number: u16,
    pub status: SeatStatus,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeatError {
    #[error("seat {0} is already booked")]
    Booked(u16),
    #[error("seat {number} is not on this bus (seats 1-{total})")]
    OutOfRange { number: u16, total: u16 },
}

/// Shape of a bus: how many seats, which are sold, and how the grid wraps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPlan {
    pub total_seats: u16,
    #[serde(default)]
    pub booked_seats: BTreeSet<u16>,
    #[serde(default = "default_seats_per_row")]
    pub seats_per_row: u16,
}

const fn default_seats_per_row() -> u16 {
    DEFAULT_SEATS_PER_ROW
}

impl Default for SeatPlan {
    fn default() -> Self {
        Self::default_config()
    }
}

impl SeatPlan {
    /// 40 seats with 3, 5, 8 and 15 already sold.
    #[must_use]
    pub fn default_config() -> Self {
        Self {
            total_seats: DEFAULT_TOTAL_SEATS,
            booked_seats: DEFAULT_BOOKED_SEATS.into_iter().collect(),
            seats_per_row: DEFAULT_SEATS_PER_ROW,
        }
    }

    /// A fresh grid for this plan with nothing selected.
    #[must_use]
    pub fn layout(&self) -> SeatLayout {
        SeatLayout::generate(self.total_seats, &self.booked_seats)
    }
}

/// One rendered seat grid. Selection is view-local and is not restored from
/// carried state when the grid is regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLayout {
    seats: Vec<Seat>,
}

impl SeatLayout {
    /// Seats `1..=total_seats`; a seat is `Booked` iff its number is in
    /// `booked_seats`. Booked numbers outside the grid are ignored.
    #[must_use]
    pub fn generate(total_seats: u16, booked_seats: &BTreeSet<u16>) -> Self {
        let seats = (1..=total_seats)
            .map(|number| Seat {
                number,
                status: if booked_seats.contains(&number) {
                    SeatStatus::Booked
                } else {
                    SeatStatus::Available
                },
            })
            .collect();
        Self { seats }
    }

    #[must_use]
    pub fn standard() -> Self {
        SeatPlan::default_config().layout()
    }

    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    #[must_use]
    pub fn seat(&self, number: u16) -> Option<&Seat> {
        number
            .checked_sub(1)
            .and_then(|idx| self.seats.get(usize::from(idx)))
    }

    #[must_use]
    pub fn total(&self) -> u16 {
        u16::try_from(self.seats.len()).unwrap_or(u16::MAX)
    }

    /// Flip a seat between `Available` and `Selected`.
    ///
    /// # Errors
    ///
    /// Returns [`SeatError::Booked`] for a sold seat and
    /// [`SeatError::OutOfRange`] for a number not on the grid. The grid is
    /// left unchanged in both cases.
    pub fn toggle(&mut self, number: u16) -> Result<SeatStatus, SeatError> {
        let total = self.total();
        let seat = number
            .checked_sub(1)
            .and_then(|idx| self.seats.get_mut(usize::from(idx)))
            .ok_or(SeatError::OutOfRange { number, total })?;
        seat.status = match seat.status {
            SeatStatus::Booked => return Err(SeatError::Booked(number)),
            SeatStatus::Available => SeatStatus::Selected,
            SeatStatus::Selected => SeatStatus::Available,
        };
        Ok(seat.status)
    }

    /// Selected seat numbers in ascending (display) order.
    #[must_use]
    pub fn selection(&self) -> Vec<u16> {
        self.seats
            .iter()
            .filter(|seat| seat.status == SeatStatus::Selected)
            .map(|seat| seat.number)
            .collect()
    }

    /// The selection joined for the carried draft, e.g. `"2,7"`.
    #[must_use]
    pub fn selection_label(&self) -> String {
        let separator = SEAT_SEPARATOR.to_string();
        self.selection()
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }

    pub fn clear_selection(&mut self) {
        for seat in &mut self.seats {
            if seat.status == SeatStatus::Selected {
                seat.status = SeatStatus::Available;
            }
        }
    }

    #[must_use]
    pub fn count(&self, status: SeatStatus) -> usize {
        self.seats.iter().filter(|seat| seat.status == status).count()
    }

    /// Grid rows of `per_row` seats; the last row may be shorter.
    pub fn rows(&self, per_row: u16) -> impl Iterator<Item = &[Seat]> {
        self.seats.chunks(usize::from(per_row.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booked(numbers: &[u16]) -> BTreeSet<u16> {
        numbers.iter().copied().collect()
    }

    #[test]
    fn generate_marks_exactly_the_booked_set() {
        let layout = SeatLayout::generate(40, &booked(&[3, 5, 8, 15]));
        assert_eq!(layout.seats().len(), 40);
        let sold: Vec<u16> = layout
            .seats()
            .iter()
            .filter(|s| s.status == SeatStatus::Booked)
            .map(|s| s.number)
            .collect();
        assert_eq!(sold, [3, 5, 8, 15]);
        assert_eq!(layout.count(SeatStatus::Available), 36);
        assert_eq!(layout.seats()[0].number, 1);
        assert_eq!(layout.seats()[39].number, 40);
    }

    #[test]
    fn booked_numbers_outside_the_grid_are_ignored() {
        let layout = SeatLayout::generate(4, &booked(&[0, 2, 9]));
        assert_eq!(layout.count(SeatStatus::Booked), 1);
        assert_eq!(layout.seat(2).map(|s| s.status), Some(SeatStatus::Booked));
    }

    #[test]
    fn toggle_rejects_booked_seats() {
        let mut layout = SeatLayout::standard();
        assert_eq!(layout.toggle(3), Err(SeatError::Booked(3)));
        assert_eq!(layout.seat(3).map(|s| s.status), Some(SeatStatus::Booked));
        assert!(layout.selection().is_empty());
    }

    #[test]
    fn toggle_pairs_available_and_selected() {
        let mut layout = SeatLayout::standard();
        assert_eq!(layout.toggle(9), Ok(SeatStatus::Selected));
        assert_eq!(layout.toggle(9), Ok(SeatStatus::Available));
        assert!(layout.selection().is_empty());
    }

    #[test]
    fn toggle_rejects_numbers_off_the_grid() {
        let mut layout = SeatLayout::standard();
        assert_eq!(
            layout.toggle(0),
            Err(SeatError::OutOfRange {
                number: 0,
                total: 40
            })
        );
        assert!(layout.toggle(41).is_err());
    }

    #[test]
    fn selection_is_sorted_regardless_of_click_order() {
        let mut layout = SeatLayout::standard();
        layout.toggle(7).unwrap();
        layout.toggle(2).unwrap();
        assert_eq!(layout.selection(), [2, 7]);
        assert_eq!(layout.selection_label(), "2,7");

        layout.clear_selection();
        assert_eq!(layout.selection_label(), "");
    }

    #[test]
    fn rows_wrap_by_plan_width() {
        let layout = SeatLayout::generate(10, &BTreeSet::new());
        let widths: Vec<usize> = layout.rows(4).map(<[Seat]>::len).collect();
        assert_eq!(widths, [4, 4, 2]);
    }

    #[test]
    fn plan_deserializes_with_default_row_width() {
        let plan: SeatPlan =
            serde_json::from_str(r#"{"totalSeats": 12, "bookedSeats": [1]}"#).unwrap();
        assert_eq!(plan.seats_per_row, DEFAULT_SEATS_PER_ROW);
        assert_eq!(plan.layout().count(SeatStatus::Booked), 1);
    }
}

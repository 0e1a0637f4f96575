//! Busbook Booking Core
//!
//! Platform-agnostic booking logic for the Busbook demo: route search, seat
//! layout, payment validation and the page-to-page booking flow.
//! This crate has no UI or browser dependencies; storage is injected through
//! [`KeyValueStore`].

pub mod catalog;
pub mod constants;
pub mod data;
pub mod draft;
pub mod flow;
pub mod payment;
pub mod query;
pub mod seats;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use catalog::{BusCatalog, BusRoute, format_price};
pub use data::BookingData;
pub use draft::{BookingDraft, SeatNumbers};
pub use flow::{
    BookingFlow, Confirmation, FlowError, Navigation, SearchRequest, SeatFormField,
    SeatSelectionForm, SeatSelectionView, Stage,
};
pub use payment::{
    PaymentError, PaymentField, PaymentForm, PaymentMethod, PaymentMethodKind, validate,
};
pub use query::QueryParams;
pub use seats::{Seat, SeatError, SeatLayout, SeatPlan, SeatStatus};
pub use session::{LoggedInUser, current_user, is_logged_in, log_in, log_out};
pub use storage::{BookingLog, BookingLogEntry, KeyValueStore, MemoryStore, StorageError};

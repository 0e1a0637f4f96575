//! Centralized keys and fixed values for the booking flow.
//!
//! Storage keys and query parameter names are part of the page contract;
//! anything that reads or writes carried state goes through these names.

// Storage keys -------------------------------------------------------------
pub const BOOKINGS_KEY: &str = "bookings";
pub const LOGGED_IN_USER_KEY: &str = "loggedInUser";

// Query parameters ---------------------------------------------------------
pub const PARAM_SOURCE: &str = "source";
pub const PARAM_DESTINATION: &str = "destination";
pub const PARAM_BUS_ID: &str = "busId";
pub const PARAM_BUS_NAME: &str = "busName";
pub const PARAM_SEAT_NUMBERS: &str = "seatNumbers";
/// Older confirmation links carried a single seat under this name.
pub const PARAM_SEAT_NUMBER_LEGACY: &str = "seatNumber";
pub const PARAM_PASSENGER_NAME: &str = "passengerName";

// Seat plan ----------------------------------------------------------------
pub const DEFAULT_TOTAL_SEATS: u16 = 40;
pub const DEFAULT_BOOKED_SEATS: [u16; 4] = [3, 5, 8, 15];
pub const DEFAULT_SEATS_PER_ROW: u16 = 4;
pub const SEAT_SEPARATOR: char = ',';

// Payment ------------------------------------------------------------------
pub const CASH_ON_DELIVERY_LABEL: &str = "Cash on Delivery";
pub const CURRENCY_SYMBOL: &str = "₹";

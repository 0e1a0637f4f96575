pub mod confirmation;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod search;
pub mod seat_selection;

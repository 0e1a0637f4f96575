pub mod footer;
pub mod header;
pub mod seat_grid;

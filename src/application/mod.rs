//! Application layer: the query/pagination/selection controller.

pub mod controller;

pub use controller::*;

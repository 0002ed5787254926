//! Domain aggregates exposed by the back-office service layer.

pub mod customer;
pub mod employee;
pub mod listing;
pub mod supplier;

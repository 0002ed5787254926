//! Database models shared across the back-office repository.

pub mod config;
pub mod customer;
pub mod employee;
pub mod supplier;

//! HR Dashboard
//!
//! This crate provides an employee store, a JSON API over it, and the
//! statistics engine behind the dashboard views: department and status
//! distributions, top performers, and upcoming birthdays.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod stats;
pub mod store;

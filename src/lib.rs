//! Work-time segmentation and pay breakdown engine.
//!
//! This crate computes, for a single worker and calendar month, the pay
//! breakdown of raw clock-in/clock-out shifts: regular and overtime tiers,
//! evening and night premiums, Sabbath and holiday hours, field-duty
//! per-diem and meal allowances. Month totals are maintained incrementally
//! so single days can be added, edited or removed without recomputing the
//! whole month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;

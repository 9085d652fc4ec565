//! CPC Salary Engine for Indian central government employees
//!
//! This crate calculates monthly salary breakdowns under the 7th Central Pay
//! Commission pay matrix, with an assumed 8th CPC mode that scales basic pay
//! by a fitment factor. Earnings, deductions and net pay are prorated by the
//! days worked in each month and rounded to whole rupees.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

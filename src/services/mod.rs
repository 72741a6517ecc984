//! Service layer for the finance tracker
//!
//! The service layer provides business logic on top of the models and the
//! storage layer: balance reductions and the session workflow.

pub mod balance;
pub mod tracker;

pub use balance::{compute_balance, summarize, BalanceSummary};
pub use tracker::{LoadStatus, Tracker};

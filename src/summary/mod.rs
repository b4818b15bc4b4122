//! Summaries of the recorded finances.
//!
//! This module contains:
//! - The pure aggregation functions that derive every view from the records
//! - Category keys and their localized names
//! - The JSON summary endpoints and the server-rendered dashboard

pub mod aggregation;
pub(crate) mod category;
mod charts;
mod handlers;
pub(crate) mod language;
pub(crate) mod view;

pub use handlers::{get_dashboard_page, get_period_summary, get_yearly_summary};
pub use language::Language;

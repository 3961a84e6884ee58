//! Half Board attachment reporting over hotel booking exports.
//!
//! A booking CSV is loaded into [`types::BookingRecord`]s, grouped with
//! [`aggregate::group_by`], scored with [`scoring::score_opportunity`] and
//! turned into report tables by the functions in [`reports`].
pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod reports;
pub mod scoring;
pub mod stats;
pub mod types;
pub mod util;

pub use error::{LoadError, Result};

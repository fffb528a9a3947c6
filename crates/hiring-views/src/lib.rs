//! Search, filter, sort, and pagination for the recruiting list screens.

pub mod config;
pub mod dataset;
pub mod entities;
pub mod error;
pub mod listing;
pub mod telemetry;

pub use entities::{EntityKind, ListSettings};
pub use listing::{ListPageView, ListViewConfig, ListViewController, Record};

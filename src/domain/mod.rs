//! Domain layer for the customer-pane plugin.
//!
//! Core data types, independent of Zellij APIs and rendering.
//!
//! # Organization
//!
//! - [`customer`]: Customer record with wire-name mapping and date parsing
//! - [`error`]: Error types and result aliases
//! - [`page`]: Response pages and the display model they replace

pub mod customer;
pub mod error;
pub mod page;

pub use customer::{format_date, Customer};
pub use error::{CustomerPaneError, Result};
pub use page::{DisplayModel, ResponsePage};

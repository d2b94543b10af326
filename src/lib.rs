//! utm - UTM-tagged URL builder and parser
//!
//! Builds campaign-tagged URLs from a validated base address and a set of
//! UTM attributes, and recovers both from a previously built URL.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Address, Campaign, Utm, UtmParameter};
pub use error::UtmError;

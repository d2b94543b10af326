//! Infrastructure layer - Logging

pub mod logging;

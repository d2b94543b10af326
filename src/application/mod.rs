//! Application layer - Use cases and orchestration

pub mod build_utm;
pub mod parse_utm;

pub use build_utm::BuildService;
pub use parse_utm::ParseService;

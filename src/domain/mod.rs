//! Domain layer - UTM value objects

pub mod address;
pub mod campaign;
pub mod parameter;
pub mod utm;

pub use address::Address;
pub use campaign::Campaign;
pub use parameter::UtmParameter;
pub use utm::Utm;

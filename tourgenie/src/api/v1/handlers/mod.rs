pub mod guide;
pub(crate) mod health;
pub mod places;

pub use health::health_check;

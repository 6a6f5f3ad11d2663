pub mod analysis;
pub mod catalog;
pub mod deri;
pub mod error;
pub mod incidents;
pub mod police;
pub mod store;
pub mod tracking;

pub mod types;

pub use crate::deri::Deri;
pub use crate::error::DeriError;
pub use crate::store::Store;

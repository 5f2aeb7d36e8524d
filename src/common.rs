pub mod error;
pub mod serde_utils;

pub use error::AppError;

pub mod error;
pub mod verify;
pub mod webhook;

pub use error::AppError;

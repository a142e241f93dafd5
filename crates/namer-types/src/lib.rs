pub mod turn;
pub mod event;
pub mod config;
pub mod error;
pub mod snapshot;


pub use error::NamerError;
pub type Result<T> = std::result::Result<T, NamerError>;

pub mod message;
pub mod document;
pub mod session;
pub mod event;
pub mod config;
pub mod error;


pub use error::ClientError;
pub type Result<T> = std::result::Result<T, ClientError>;

pub mod backend;
pub mod multipart;
pub mod response;

pub use backend::HttpBackend;

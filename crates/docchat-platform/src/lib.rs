//! Browser adapters for the document chat core.

pub mod http;


pub use http::HttpBackend;

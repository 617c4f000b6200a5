pub mod index;
pub mod chat;
pub mod settings;

//! Presentation layer: renders `SessionState` and hands user intents back
//! to the caller. Holds no session logic of its own.

pub mod state;
pub mod theme;
pub mod panels;

#[cfg(test)]
mod tests;

//! Client-side core of the document chat: the session state, the request
//! gateway in front of the backend port, and the two controllers that drive
//! indexing and question answering.

pub mod ports;
pub mod gateway;
pub mod session;
pub mod indexing;
pub mod chat;
pub mod event_bus;


pub use chat::{ChatController, TurnOutcome};
pub use event_bus::EventBus;
pub use gateway::RequestGateway;
pub use indexing::{IndexOutcome, IndexingController};
pub use session::{SessionHandle, SessionState};

//! Application state and core logic

pub mod screen;
pub mod session;

pub use screen::{AppCoordinator, RevealState, Screen};
pub use session::{GameSession, SessionSnapshot, SessionStatus, TurnRecord};

//! The Reverse Ludo turn machine and a session that drives it.

pub mod ludo;
pub mod session;

pub use ludo::ReverseLudo;
pub use session::Session;

//! Protocol module containing the arbiter message parser and the verdict decoder.

pub mod feedback;
pub mod messages;

pub use feedback::Verdict;
pub use messages::{ProtocolError, ServerMessage};

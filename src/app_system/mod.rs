//! System orchestration, startup, and shutdown logic.

pub mod score_system;
pub mod tracing;

pub use score_system::*;
pub use self::tracing::*;

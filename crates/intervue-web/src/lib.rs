//! intervue-web — HTTP API for the interview assistant.
//!
//!   - Account registration, login and bearer-token authentication
//!   - AI interview question generation with a static fallback
//!   - Current interview autosave, completion and history
//!   - Dashboard statistics

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, SharedState};

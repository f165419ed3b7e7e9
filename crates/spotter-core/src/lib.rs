//! Core domain types for the AnimalSpotter client: the records exchanged
//! with the service, the shared error taxonomy, and the session store.

pub mod error;
pub mod model;
pub mod session;

// Re-export the common error type
pub use error::{ApiError, Result};
pub use model::{Credentials, Session, SightingDetail, SightingSummary};
pub use session::SessionStore;

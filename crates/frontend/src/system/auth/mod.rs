//! Session handling: token persistence, auth endpoints and the session context.

pub mod api;
pub mod context;
pub mod guard;
pub mod storage;

pub use context::{use_session, AuthState, SessionContext};
pub use guard::RequireAuth;

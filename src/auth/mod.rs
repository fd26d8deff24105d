pub mod store;

// Re-export from store.rs so we can do "use crate::auth::*;"
pub use store::{AuthState, AuthStore};

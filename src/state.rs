use std::sync::Arc;

use crate::auth::CredentialStore;
use crate::storage::TourStorage;

/// Shared application state injected into every handler. Both capabilities
/// are trait objects so tests can swap in the in-memory store or a custom
/// user table.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn TourStorage>,
    pub users: Arc<dyn CredentialStore>,
    pub auth_required: bool,
}

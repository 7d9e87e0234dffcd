//! Browser sessions: one cart (and optional login) per visitor
//!
//! Sessions are keyed by an opaque `Uuid` the client echoes back in a
//! header. A visitor does not need an account to carry a cart; logging in
//! attaches the user to the existing session and keeps the cart as-is.

use crate::core::error::{AuthError, StoreError, StoreResult};
use crate::shop::cart::Cart;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user_id: Option<u32>,
    pub cart: Cart,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn create(&self) -> StoreResult<Uuid> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let id = Uuid::new_v4();
        sessions.insert(id, Session::default());
        Ok(id)
    }

    pub fn get(&self, id: Uuid) -> StoreResult<Session> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        sessions
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("session", id))
    }

    /// Run a closure against the session under the write lock.
    pub fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("session", id))?;
        f(session)
    }

    /// Attach a logged-in user to the session, keeping the guest cart.
    pub fn attach_user(&self, id: Uuid, user_id: u32) -> StoreResult<()> {
        self.update(id, |session| {
            session.user_id = Some(user_id);
            Ok(())
        })
    }

    /// Detach the user on logout. The cart survives.
    pub fn detach_user(&self, id: Uuid) -> StoreResult<()> {
        self.update(id, |session| {
            session.user_id = None;
            Ok(())
        })
    }

    /// The logged-in user id, or `NotLoggedIn`.
    pub fn require_user(&self, id: Uuid) -> StoreResult<u32> {
        self.get(id)?
            .user_id
            .ok_or(StoreError::Auth(AuthError::NotLoggedIn))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

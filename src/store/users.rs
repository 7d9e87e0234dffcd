//! User accounts: login, registration, and role management
//!
//! Credentials are plaintext demo fixtures compared verbatim; login failure
//! never reveals whether the email or the password was wrong. The
//! `SuperAdmin` role is locked on both sides: it can neither be granted
//! nor taken away.

use crate::core::error::{AuthError, StoreError, StoreResult};
use crate::model::{Address, User, UserRole};
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use validator::Validate;

struct UsersInner {
    users: IndexMap<u32, User>,
    next_id: u32,
}

#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<UsersInner>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            inner: Arc::new(RwLock::new(UsersInner { users, next_id })),
        }
    }

    pub fn list(&self) -> StoreResult<Vec<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        Ok(inner.users.values().cloned().collect())
    }

    pub fn get(&self, id: u32) -> StoreResult<User> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        inner
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    /// Verify credentials. Email matching ignores case; the password must
    /// match exactly.
    pub fn login(&self, email: &str, password: &str) -> StoreResult<User> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        inner
            .users
            .values()
            .find(|u| {
                u.email.eq_ignore_ascii_case(email)
                    && u.password.as_deref() == Some(password)
            })
            .cloned()
            .ok_or(StoreError::Auth(AuthError::InvalidCredentials))
    }

    /// Create a customer account. Fails when the email is already taken
    /// (case-insensitive).
    pub fn register(&self, name: &str, email: &str, password: &str) -> StoreResult<User> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        if inner
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(StoreError::Auth(AuthError::EmailTaken));
        }
        let id = inner.next_id;
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: Some(password.to_string()),
            role: UserRole::Customer,
            address: None,
            created_at: Utc::now().date_naive(),
        };
        inner.next_id += 1;
        inner.users.insert(id, user.clone());
        tracing::info!(user_id = id, "account registered");
        Ok(user)
    }

    /// Save a shipping address to the account, as checkout does when the
    /// customer opts to remember it.
    pub fn set_address(&self, id: u32, address: Address) -> StoreResult<User> {
        address.validate().map_err(StoreError::from_validation)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("user", id))?;
        user.address = Some(address);
        Ok(user.clone())
    }

    /// Change a user's role. The `SuperAdmin` role is immutable in both
    /// directions.
    pub fn set_role(&self, id: u32, role: UserRole) -> StoreResult<User> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| StoreError::Internal(format!("failed to acquire write lock: {e}")))?;
        let user = inner
            .users
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("user", id))?;
        if user.role == UserRole::SuperAdmin || role == UserRole::SuperAdmin {
            return Err(StoreError::Auth(AuthError::SuperAdminLocked));
        }
        user.role = role;
        tracing::info!(user_id = id, role = ?role, "user role changed");
        Ok(user.clone())
    }

    /// Accounts created within the trailing `days` window (admin stats)
    pub fn registered_within_days(&self, days: i64) -> StoreResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|e| StoreError::Internal(format!("failed to acquire read lock: {e}")))?;
        let cutoff = Utc::now().date_naive() - chrono::Duration::days(days);
        Ok(inner
            .users
            .values()
            .filter(|u| u.created_at >= cutoff)
            .count())
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

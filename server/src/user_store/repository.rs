use std::{collections::BTreeMap, sync::Arc};

use taskboard_core::{NewUser, User, UserPatch};
use tokio::sync::RwLock;

use crate::error::ServiceError;

#[derive(Debug, Default)]
struct UserTable {
    last_id: u64,
    rows: BTreeMap<u64, User>,
}

impl UserTable {
    /// Reject `username` or `email` if a user other than `except` holds it.
    fn ensure_unique(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except: Option<u64>,
    ) -> Result<(), ServiceError> {
        for user in self.rows.values().filter(|user| Some(user.id) != except) {
            if username == Some(user.username.as_str()) {
                return Err(ServiceError::Conflict(format!(
                    "username '{}' is already taken",
                    user.username
                )));
            }
            if email == Some(user.email.as_str()) {
                return Err(ServiceError::Conflict(format!(
                    "email '{}' is already registered",
                    user.email
                )));
            }
        }
        Ok(())
    }
}

/// In-memory user storage keeping `username` and `email` unique.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, input: NewUser) -> Result<User, ServiceError> {
        let mut table = self.table.write().await;
        table.ensure_unique(Some(input.username.as_str()), Some(input.email.as_str()), None)?;

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            username: input.username,
            email: input.email,
            full_name: input.full_name,
            role: input.role,
            department: input.department,
            active: input.active,
        };
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    /// All users in ascending id order.
    pub async fn list(&self) -> Vec<User> {
        self.table.read().await.rows.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Result<User, ServiceError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, ServiceError> {
        self.table
            .read()
            .await
            .rows
            .values()
            .find(|user| user.username == username)
            .cloned()
            .ok_or(ServiceError::NotFound)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::NotFound)
    }

    pub async fn update(&self, id: u64, patch: UserPatch) -> Result<User, ServiceError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Err(ServiceError::NotFound);
        }
        table.ensure_unique(patch.username.as_deref(), patch.email.as_deref(), Some(id))?;

        let user = table.rows.get_mut(&id).ok_or(ServiceError::NotFound)?;
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(full_name) = patch.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(role) = patch.role {
            user.role = Some(role);
        }
        if let Some(department) = patch.department {
            user.department = Some(department);
        }
        if let Some(active) = patch.active {
            user.active = active;
        }
        Ok(user.clone())
    }
}

use anyhow::Result;
use reqwest::Client;
use shared::{
    domain::UserId,
    protocol::{UserDraft, UserRecord, UserUpdate},
};

pub mod roster;

/// Async client for the remote user collection. One REST resource,
/// no authentication, no pagination.
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn record_url(&self, user_id: UserId) -> String {
        format!("{}/users/{}", self.base_url, user_id.0)
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let res = self
            .http
            .get(self.collection_url())
            .send()
            .await?
            .error_for_status()?;
        let users: Vec<UserRecord> = res.json().await?;
        Ok(users)
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord> {
        let res = self
            .http
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        let created: UserRecord = res.json().await?;
        Ok(created)
    }

    /// Sends the changed fields only. The response body is not consumed;
    /// callers reconcile by replaying `changes` locally.
    pub async fn update_user(&self, user_id: UserId, changes: &UserUpdate) -> Result<()> {
        self.http
            .patch(self.record_url(user_id))
            .json(changes)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_user(&self, user_id: UserId) -> Result<()> {
        self.http
            .delete(self.record_url(user_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

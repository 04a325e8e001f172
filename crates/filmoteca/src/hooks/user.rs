use tracing::debug;

use crate::api::ApiClient;
use crate::model::{NewUser, User};
use crate::patch::PatchOperation;

use super::binding::{Binding, FetchOutcome};
use super::status::MutationStatus;

/// A user profile together with its friend relations.
pub struct UserHook {
    client: ApiClient,
    binding: Binding<String, Option<User>>,
}

impl UserHook {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binding: Binding::new(),
        }
    }

    /// Bind a user id, or the logged-in user's email when `id` is `None`.
    /// Nothing is fetched when neither is known.
    pub async fn set_id(&self, id: Option<&str>) -> FetchOutcome {
        let id = match id {
            Some(id) => id.to_string(),
            None => match self.client.session().await.email {
                Some(email) => email,
                None => {
                    debug!("no user to load");
                    return FetchOutcome::Unchanged;
                }
            },
        };

        let client = self.client.clone();
        self.binding
            .bind(id, |id| async move { client.find_user(&id).await })
            .await
    }

    pub async fn user(&self) -> Option<User> {
        self.binding.data().await
    }

    pub async fn status(&self) -> MutationStatus {
        self.binding.status().await
    }

    /// Register a new account and hold it.
    pub async fn create(&self, user: &NewUser) -> MutationStatus {
        let result = self.client.create_user(user).await;
        self.binding.complete(result.map(Some)).await
    }

    /// Patch the bound user. An empty operation list sends nothing.
    pub async fn update(&self, ops: &[PatchOperation]) -> MutationStatus {
        if ops.is_empty() {
            debug!("no changes to send");
            return self.status().await;
        }
        let Some(id) = self.bound_id().await else {
            return MutationStatus::Failed;
        };
        let result = self.client.update_user(&id, ops).await;
        self.binding.complete(result.map(Some)).await
    }

    /// Change the status of a relation with `friend`.
    pub async fn update_friend(&self, friend: &str, ops: &[PatchOperation]) -> MutationStatus {
        let Some(id) = self.bound_id().await else {
            return MutationStatus::Failed;
        };
        let result = self.client.update_friend(&id, friend, ops).await;
        self.binding.complete(result.map(Some)).await
    }

    pub async fn delete_friend(&self, friend: &str) -> MutationStatus {
        let Some(id) = self.bound_id().await else {
            return MutationStatus::Failed;
        };
        let result = self.client.delete_friend(&id, friend).await;
        self.binding.complete(result.map(Some)).await
    }

    /// Send a friend request to `friend_email`.
    pub async fn add_friend(&self, friend_email: &str, friend_name: &str) -> MutationStatus {
        let Some(id) = self.bound_id().await else {
            return MutationStatus::Failed;
        };
        let result = self.client.add_friend(&id, friend_email, friend_name).await;
        self.binding.complete(result.map(Some)).await
    }

    async fn bound_id(&self) -> Option<String> {
        let id = self.binding.query().await;
        if id.is_none() {
            self.binding.set_status(MutationStatus::Failed).await;
        }
        id
    }
}

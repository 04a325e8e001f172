use tracing::debug;

use crate::api::ApiClient;
use crate::model::Movie;
use crate::patch::PatchOperation;

use super::binding::{Binding, FetchOutcome};
use super::status::MutationStatus;

/// A single movie, editable by administrators.
pub struct MovieHook {
    client: ApiClient,
    binding: Binding<String, Option<Movie>>,
}

impl MovieHook {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binding: Binding::new(),
        }
    }

    pub async fn set_id(&self, id: impl Into<String>) -> FetchOutcome {
        let client = self.client.clone();
        self.binding
            .bind(id.into(), |id| async move { client.find_movie(&id).await })
            .await
    }

    pub async fn movie(&self) -> Option<Movie> {
        self.binding.data().await
    }

    pub async fn status(&self) -> MutationStatus {
        self.binding.status().await
    }

    /// Patch the bound movie. An empty operation list sends nothing and
    /// leaves the status untouched.
    pub async fn update(&self, ops: &[PatchOperation]) -> MutationStatus {
        if ops.is_empty() {
            debug!("no changes to send");
            return self.status().await;
        }
        let Some(id) = self.binding.query().await else {
            self.binding.set_status(MutationStatus::Failed).await;
            return MutationStatus::Failed;
        };

        let result = self.client.update_movie(&id, ops).await;
        self.binding.complete(result.map(Some)).await
    }
}

use crate::api::ApiClient;
use crate::model::{Assessment, NewComment, Page};
use crate::query::CommentQuery;

use super::binding::{Binding, FetchOutcome};
use super::status::MutationStatus;

/// Comments of a movie or a user.
pub struct CommentsHook {
    client: ApiClient,
    binding: Binding<CommentQuery, Page<Assessment>>,
}

impl CommentsHook {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binding: Binding::new(),
        }
    }

    pub async fn set_query(&self, query: CommentQuery) -> FetchOutcome {
        let client = self.client.clone();
        self.binding
            .bind(query, |q| async move { client.find_comments(&q).await })
            .await
    }

    pub async fn comments(&self) -> Page<Assessment> {
        self.binding.data().await
    }

    pub async fn status(&self) -> MutationStatus {
        self.binding.status().await
    }

    /// Post a comment, then reload the bound query so it shows up.
    pub async fn create(&self, comment: &NewComment) -> MutationStatus {
        let status = MutationStatus::from(self.client.create_comment(comment).await);
        self.binding.set_status(status).await;

        if status.is_success() {
            let client = self.client.clone();
            self.binding
                .refetch(|q| async move { client.find_comments(&q).await })
                .await;
        }
        status
    }
}

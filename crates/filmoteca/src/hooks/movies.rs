use crate::api::ApiClient;
use crate::model::{Movie, Page};
use crate::query::MovieQuery;

use super::binding::{Binding, FetchOutcome};

/// The movie listing for one [`MovieQuery`].
pub struct MoviesHook {
    client: ApiClient,
    binding: Binding<MovieQuery, Page<Movie>>,
}

impl MoviesHook {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            binding: Binding::new(),
        }
    }

    /// Fetch the listing for `query` unless it is already bound.
    pub async fn set_query(&self, query: MovieQuery) -> FetchOutcome {
        let client = self.client.clone();
        self.binding
            .bind(query, |q| async move { client.find_movies(&q).await })
            .await
    }

    pub async fn movies(&self) -> Page<Movie> {
        self.binding.data().await
    }

    pub async fn query(&self) -> Option<MovieQuery> {
        self.binding.query().await
    }

    pub async fn is_loading(&self) -> bool {
        self.binding.is_loading().await
    }
}

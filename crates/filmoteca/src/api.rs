//! The session-aware API client.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::auth::{AuthToken, Credentials, SessionState, SessionStore};
use crate::error::{AuthError, Error, InvalidInputError};
use crate::http::endpoints::{self, AddFriendRequest, CreateCommentRequest};
use crate::http::RestClient;
use crate::model::{Assessment, Movie, NewComment, NewUser, Page, User, UserSummary};
use crate::patch::PatchOperation;
use crate::query::{CommentQuery, CommentScope, MovieQuery, UserQuery};
use crate::types::ApiUrl;

/// Client for the movie rating API.
///
/// Holds the base URL, the current session and the store the session is
/// mirrored to. Cheap to clone; clones share the session.
///
/// Operations never fail loudly: reads return `None` or an empty [`Page`],
/// writes return `false` or `None`, and the cause is logged at `warn`.
///
/// # Example
///
/// ```no_run
/// use filmoteca::{ApiClient, ApiUrl, FileSessionStore};
///
/// # async fn example() -> Result<(), filmoteca::Error> {
/// let api = ApiUrl::new("http://localhost:8080")?;
/// let client = ApiClient::restore(api, FileSessionStore::new("session.json")).await?;
///
/// if let Some(user) = client.find_user("alice@example.com").await {
///     println!("{} has {} friends", user.name, user.friends.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    rest: RestClient,
    session: RwLock<SessionState>,
    store: Box<dyn SessionStore>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("api", self.inner.rest.api())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with an anonymous session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api: ApiUrl, store: impl SessionStore + 'static) -> Result<Self, Error> {
        Self::with_state(api, store, SessionState::default())
    }

    /// Create a client and resume whatever session the store holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn restore(api: ApiUrl, store: impl SessionStore + 'static) -> Result<Self, Error> {
        let state = store.load().await?;
        debug!(authenticated = state.is_authenticated(), "session restored");
        Self::with_state(api, store, state)
    }

    fn with_state(
        api: ApiUrl,
        store: impl SessionStore + 'static,
        state: SessionState,
    ) -> Result<Self, Error> {
        Ok(Self {
            inner: Arc::new(ApiClientInner {
                rest: RestClient::new(api)?,
                session: RwLock::new(state),
                store: Box::new(store),
            }),
        })
    }

    pub fn api(&self) -> &ApiUrl {
        self.inner.rest.api()
    }

    /// A snapshot of the current session.
    pub async fn session(&self) -> SessionState {
        self.inner.session.read().await.clone()
    }

    async fn token(&self) -> Option<AuthToken> {
        self.inner.session.read().await.token.clone()
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Log in and persist the session. Returns false if the server rejected
    /// the credentials or could not be reached; the previous session, in
    /// memory and in the store, is left as it was.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        self.login_with(&Credentials::new(email, password)).await
    }

    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login_with(&self, credentials: &Credentials) -> bool {
        match self.try_login(credentials).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "login failed");
                false
            }
        }
    }

    async fn try_login(&self, credentials: &Credentials) -> Result<(), Error> {
        let token = AuthToken::new(
            self.inner
                .rest
                .login(credentials.email(), credentials.password())
                .await?,
        );

        let mut state = SessionState::logged_in(token.clone(), credentials.email());
        self.inner.store.save(&state).await?;
        *self.inner.session.write().await = state.clone();
        info!("logged in");

        // Name and role are nice to have; the login stands without them
        let path = endpoints::user(credentials.email());
        match self.inner.rest.get::<User>(&path, Some(token.as_str())).await {
            Ok(user) => {
                state.name = Some(user.name.clone());
                state.role = user.primary_role().map(str::to_string);
                if let Err(e) = self.inner.store.save(&state).await {
                    warn!(error = %e, "could not persist profile details");
                }
                *self.inner.session.write().await = state;
            }
            Err(e) => warn!(error = %e, "could not load profile after login"),
        }

        Ok(())
    }

    /// Forget the token and every persisted session detail. Always true.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> bool {
        *self.inner.session.write().await = SessionState::default();
        if let Err(e) = self.inner.store.clear().await {
            warn!(error = %e, "could not clear stored session");
        }
        info!("logged out");
        true
    }

    // ========================================================================
    // Reads
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn find_movies(&self, query: &MovieQuery) -> Page<Movie> {
        let result = self
            .get_page(endpoints::MOVIES, &query.to_query_pairs())
            .await;
        collapse("find_movies", result).unwrap_or_default()
    }

    #[instrument(skip(self))]
    pub async fn find_movie(&self, id: &str) -> Option<Movie> {
        collapse("find_movie", self.get(&endpoints::movie(id)).await)
    }

    #[instrument(skip(self))]
    pub async fn find_user(&self, id: &str) -> Option<User> {
        collapse("find_user", self.get(&endpoints::user(id)).await)
    }

    #[instrument(skip(self))]
    pub async fn find_users(&self, query: &UserQuery) -> Page<User> {
        let result = self
            .get_page(endpoints::USERS, &query.to_query_pairs())
            .await;
        collapse("find_users", result).unwrap_or_default()
    }

    /// Comments of a movie or of a user. A query naming neither yields an
    /// empty page without contacting the server.
    #[instrument(skip(self))]
    pub async fn find_comments(&self, query: &CommentQuery) -> Page<Assessment> {
        let path = match query.scope() {
            Some(CommentScope::Movie(id)) => endpoints::movie_assessments(id),
            Some(CommentScope::User(id)) => endpoints::user_assessments(id),
            None => {
                debug!("comment query has no movie or user");
                return Page::empty();
            }
        };

        let result = self.get_page(&path, &query.to_query_pairs()).await;
        collapse("find_comments", result).unwrap_or_default()
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Post a comment as the logged-in user.
    #[instrument(skip(self, comment), fields(movie = %comment.movie, rating = comment.rating))]
    pub async fn create_comment(&self, comment: &NewComment) -> bool {
        collapse("create_comment", self.try_create_comment(comment).await).is_some()
    }

    async fn try_create_comment(&self, comment: &NewComment) -> Result<(), Error> {
        if !comment.has_valid_rating() {
            return Err(InvalidInputError::Other {
                message: format!(
                    "rating {} is outside {}..={}",
                    comment.rating,
                    NewComment::MIN_RATING,
                    NewComment::MAX_RATING
                ),
            }
            .into());
        }

        let state = self.session().await;
        let (Some(token), Some(email)) = (state.token.as_ref(), state.email.clone()) else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let body = CreateCommentRequest {
            rating: comment.rating,
            comment: &comment.comment,
            user: UserSummary {
                name: state.name.clone().unwrap_or_default(),
                email,
            },
        };
        self.inner
            .rest
            .post_no_response(
                &endpoints::movie_assessments(&comment.movie),
                &body,
                Some(token.as_str()),
            )
            .await
    }

    /// Register a new account. No session is needed.
    #[instrument(skip(self))]
    pub async fn create_user(&self, user: &NewUser) -> Option<User> {
        let result = self
            .inner
            .rest
            .post::<_, User>(endpoints::USERS, user, None)
            .await;
        collapse("create_user", result)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: &str, ops: &[PatchOperation]) -> Option<User> {
        let token = self.token().await;
        let result = self
            .inner
            .rest
            .patch::<_, User>(&endpoints::user(id), &ops, token.as_ref().map(AuthToken::as_str))
            .await;
        let user = collapse("update_user", result)?;
        self.sync_identity(&user).await;
        Some(user)
    }

    #[instrument(skip(self))]
    pub async fn update_movie(&self, id: &str, ops: &[PatchOperation]) -> Option<Movie> {
        let token = self.token().await;
        let result = self
            .inner
            .rest
            .patch(&endpoints::movie(id), &ops, token.as_ref().map(AuthToken::as_str))
            .await;
        collapse("update_movie", result)
    }

    /// Answer a friend request; see [`PatchOperation::friend_status`].
    #[instrument(skip(self))]
    pub async fn update_friend(
        &self,
        user: &str,
        friend: &str,
        ops: &[PatchOperation],
    ) -> Option<User> {
        let token = self.token().await;
        let result = self
            .inner
            .rest
            .patch(
                &endpoints::friend(user, friend),
                &ops,
                token.as_ref().map(AuthToken::as_str),
            )
            .await;
        collapse("update_friend", result)
    }

    #[instrument(skip(self))]
    pub async fn delete_friend(&self, user: &str, friend: &str) -> Option<User> {
        let token = self.token().await;
        let result = self
            .inner
            .rest
            .delete(
                &endpoints::friend(user, friend),
                token.as_ref().map(AuthToken::as_str),
            )
            .await;
        collapse("delete_friend", result)
    }

    /// Send a friend request from `user` to `friend_email`. The server
    /// rejects the request unless `friend_name` matches the friend's profile.
    #[instrument(skip(self))]
    pub async fn add_friend(
        &self,
        user: &str,
        friend_email: &str,
        friend_name: &str,
    ) -> Option<User> {
        let token = self.token().await;
        let result = self
            .inner
            .rest
            .post(
                &endpoints::friends(user),
                &AddFriendRequest {
                    friend_email,
                    friend_name,
                },
                token.as_ref().map(AuthToken::as_str),
            )
            .await;
        collapse("add_friend", result)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let token = self.token().await;
        self.inner
            .rest
            .get(path, token.as_ref().map(AuthToken::as_str))
            .await
    }

    async fn get_page<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &crate::http::QueryPairs,
    ) -> Result<Page<R>, Error> {
        let token = self.token().await;
        self.inner
            .rest
            .get_page(path, query, token.as_ref().map(AuthToken::as_str))
            .await
    }

    /// Keep the remembered display name in step with the user's own profile.
    async fn sync_identity(&self, user: &User) {
        let mut session = self.inner.session.write().await;
        let own = session
            .email
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(&user.email));
        if !own || session.name.as_deref() == Some(user.name.as_str()) {
            return;
        }

        session.name = Some(user.name.clone());
        if let Err(e) = self.inner.store.save(&session).await {
            warn!(error = %e, "could not persist updated name");
        }
    }
}

/// Log a failed call and drop the error.
fn collapse<T>(operation: &'static str, result: Result<T, Error>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(operation, error = %e, "request failed");
            None
        }
    }
}

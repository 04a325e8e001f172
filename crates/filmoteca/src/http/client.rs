//! HTTP client for the REST API.

use reqwest::header::{AUTHORIZATION, HeaderValue, LINK};
use reqwest::{Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::error::{AuthError, Error, InvalidInputError, ProtocolError};
use crate::model::Page;
use crate::types::ApiUrl;

use super::endpoints::{AUTHENTICATION_HEADER, Envelope, ErrorEnvelope, LOGIN, LoginRequest};
use super::link::PageLinks;

/// Query parameters in the order they are sent.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Low-level client: one method per HTTP verb, envelope decoding, status
/// checking and `Authorization` header handling.
///
/// Every method returns a [`Result`]; collapsing failures into empty values is
/// left to [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct RestClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl RestClient {
    /// Create a new client for the given API.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(api: ApiUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("filmoteca/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, api })
    }

    /// Returns the API base URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// POST credentials to `/login` and return the issued token.
    #[instrument(skip(self, password), fields(api = %self.api))]
    pub async fn login(&self, email: &str, password: &str) -> Result<String, Error> {
        let url = self.api.endpoint(LOGIN);
        debug!(%url, "login");

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "login response");

        if !status.is_success() {
            let error = parse_error_response(response).await;
            return Err(if error.is_auth_error() {
                AuthError::InvalidCredentials.into()
            } else {
                error.into()
            });
        }

        response
            .headers()
            .get(AUTHENTICATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| AuthError::MissingToken.into())
    }

    /// GET a single entity.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get<R>(&self, path: &str, token: Option<&str>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self.send(self.request(Method::GET, path, token)?).await?;
        decode_entity(response).await
    }

    /// GET one page of a collection, deriving navigation from the `Link`
    /// header.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get_page<R>(
        &self,
        path: &str,
        query: &QueryPairs,
        token: Option<&str>,
    ) -> Result<Page<R>, Error>
    where
        R: DeserializeOwned,
    {
        trace!(?query, "query parameters");
        let request = self.request(Method::GET, path, token)?.query(query);
        let response = self.send(request).await?;

        let links = page_links(&response);
        trace!(?links, "pagination links");

        let envelope: Envelope<Vec<R>> = response.json().await?;
        Ok(Page::from_links(envelope.data.unwrap_or_default(), &links))
    }

    /// POST a JSON body and decode the returned entity.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub async fn post<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, path, token)?.json(body);
        let response = self.send(request).await?;
        decode_entity(response).await
    }

    /// POST a JSON body, ignoring whatever the server returns.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub async fn post_no_response<B>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), Error>
    where
        B: Serialize,
    {
        let request = self.request(Method::POST, path, token)?.json(body);
        self.send(request).await?;
        Ok(())
    }

    /// PATCH a JSON body (a JSON-Patch operation list) and decode the
    /// updated entity.
    #[instrument(skip(self, body, token), fields(api = %self.api))]
    pub async fn patch<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = self.request(Method::PATCH, path, token)?.json(body);
        let response = self.send(request).await?;
        decode_entity(response).await
    }

    /// DELETE a resource and decode the entity the server returns.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn delete<R>(&self, path: &str, token: Option<&str>) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let response = self
            .send(self.request(Method::DELETE, path, token)?)
            .await?;
        decode_entity(response).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<RequestBuilder, Error> {
        let url = self.api.endpoint(path);
        debug!(%method, %url, authenticated = token.is_some(), "request");

        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, authorization_value(token)?);
        }
        Ok(request)
    }

    /// Send a request, turning any non-success status into an error.
    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await?;
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(parse_error_response(response).await.into())
        }
    }
}

/// Build the `Authorization` header value for a stored token.
///
/// The API issues tokens already prefixed with `Bearer `; bare tokens get the
/// prefix added.
fn authorization_value(token: &str) -> Result<HeaderValue, Error> {
    let value = if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    };

    let mut header = HeaderValue::from_str(&value).map_err(|_| InvalidInputError::Other {
        message: "token contains characters not allowed in a header".to_string(),
    })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Collect every `Link` header of a response.
fn page_links(response: &Response) -> PageLinks {
    let joined = response
        .headers()
        .get_all(LINK)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect::<Vec<_>>()
        .join(",");
    PageLinks::parse(&joined)
}

/// Decode the `data` member of a success envelope.
async fn decode_entity<R: DeserializeOwned>(response: Response) -> Result<R, Error> {
    let status = response.status().as_u16();
    let envelope: Envelope<R> = response.json().await?;
    envelope.data.ok_or_else(|| {
        ProtocolError::new(
            status,
            Some(
                envelope
                    .message
                    .unwrap_or_else(|| "response carried no data".to_string()),
            ),
        )
        .into()
    })
}

/// Build a protocol error from a failed response, keeping the envelope's
/// message when the body has one.
async fn parse_error_response(response: Response) -> ProtocolError {
    let status = response.status().as_u16();

    match response.json::<ErrorEnvelope>().await {
        Ok(body) => ProtocolError::new(status, body.message),
        Err(_) => ProtocolError::new(status, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("http://localhost:8080").unwrap();
        let client = RestClient::new(api.clone()).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn bare_token_gets_bearer_prefix() {
        let value = authorization_value("tok123").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn prefixed_token_is_sent_verbatim() {
        let value = authorization_value("Bearer eyJhbGciOiJIUzUxMiJ9.x.y").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer eyJhbGciOiJIUzUxMiJ9.x.y");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        assert!(authorization_value("tok\n123").is_err());
    }
}

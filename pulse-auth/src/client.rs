use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{AuthError, AuthSession, Credentials, Registration, TokenResponse, User};

/// Blocking client for the authentication backend.
///
/// Holds the current access token and attaches it as a bearer header to
/// authenticated calls. On a 403 it refreshes the token once and replays
/// the request once; a second 403 surfaces as [`AuthError::Unauthorized`].
#[derive(Debug, Clone)]
pub struct AuthClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl AuthClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: Client::new(),
            token: None,
        }
    }

    /// Check whether the client currently holds an access token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Log in, storing the returned access token.
    pub fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        let response = self.send(Method::POST, "/auth/login", Some(credentials), None)?;
        let session: AuthSession = check(response)?.json()?;
        log::info!("Logged in as {}", session.user.email);
        self.token = Some(session.access_token);
        Ok(session.user)
    }

    /// Register a new account, storing the returned access token.
    pub fn register(&mut self, registration: &Registration) -> Result<User, AuthError> {
        let response = self.send(Method::POST, "/auth/register", Some(registration), None)?;
        let session: AuthSession = check(response)?.json()?;
        log::info!("Registered {}", session.user.email);
        self.token = Some(session.access_token);
        Ok(session.user)
    }

    /// Log out and drop the access token.
    ///
    /// The token is cleared locally even if the backend call fails.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        let token = self.token.take().ok_or(AuthError::NotAuthenticated)?;
        let response = self.send::<()>(Method::POST, "/auth/logout", None, Some(&token))?;
        check(response)?;
        log::info!("Logged out");
        Ok(())
    }

    /// Exchange the current token for a fresh one.
    pub fn refresh(&mut self) -> Result<(), AuthError> {
        let token = self.token.clone().ok_or(AuthError::NotAuthenticated)?;
        let response = self.send::<()>(Method::POST, "/auth/refresh", None, Some(&token))?;
        let refreshed: TokenResponse = check(response)?.json()?;
        self.token = Some(refreshed.access_token);
        Ok(())
    }

    /// GET a JSON resource with the bearer token attached.
    pub fn get_json<T: DeserializeOwned>(&mut self, path: &str) -> Result<T, AuthError> {
        let response = self.authed::<()>(Method::GET, path, None)?;
        Ok(response.json()?)
    }

    /// POST a JSON body with the bearer token attached, decoding the reply.
    pub fn post_json<T: DeserializeOwned, B: Serialize>(
        &mut self,
        path: &str,
        body: &B,
    ) -> Result<T, AuthError> {
        let response = self.authed(Method::POST, path, Some(body))?;
        Ok(response.json()?)
    }

    /// Issue an authenticated request, refreshing and replaying once on 403.
    fn authed<B: Serialize>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AuthError> {
        let token = self.token.clone().ok_or(AuthError::NotAuthenticated)?;
        let response = self.send(method.clone(), path, body, Some(&token))?;
        if response.status() != StatusCode::FORBIDDEN {
            return check(response);
        }

        log::info!("Got 403 from {path}, refreshing access token");
        self.refresh()?;
        let token = self.token.clone().ok_or(AuthError::NotAuthenticated)?;
        let response = self.send(method, path, body, Some(&token))?;
        check(response)
    }

    fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a response status to the error taxonomy, passing 2xx through.
fn check(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Err(AuthError::Unauthorized)
    } else {
        Err(AuthError::Server {
            status: status.as_u16(),
        })
    }
}

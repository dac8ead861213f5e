/// Error type for authentication operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Transport-level failure (connect, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the credentials or the (refreshed) token.
    #[error("Unauthorized")]
    Unauthorized,

    /// An authenticated call was made without a prior login.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Any other non-2xx response.
    #[error("Server returned status {status}")]
    Server { status: u16 },
}

impl AuthError {
    /// Check if this error means the session is gone and the user must log
    /// in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::NotAuthenticated)
    }
}

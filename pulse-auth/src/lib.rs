//! # pulse-auth
//!
//! Thin blocking authentication client for the pulse HTTP backend.
//!
//! Covers the four auth endpoints (`login`, `register`, `logout`,
//! `refresh`) plus bearer-wrapped JSON fetch helpers that refresh the
//! access token once and replay the request when the backend answers 403.
//!
//! Deliberately simple, matching the system it talks to: one retry, no
//! backoff, no token rotation protocol, and no coordination between
//! concurrent callers — a second request issued while a refresh is in
//! flight performs its own refresh.

mod session;
pub use session::{AuthSession, Credentials, Registration, TokenResponse, User};

mod error;
pub use error::AuthError;

mod client;
pub use client::AuthClient;

//! # Services Module
//!
//! Collaborators at the edge of the client core.
//!
//! ```text
//! services/
//! ├── api/            - Backend HTTP client (reqwest)
//! │   ├── client.rs   - ApiClient, 401 classification
//! │   └── otp.rs      - HttpOtpService
//! ├── auth.rs         - InMemoryAuth session holder
//! └── interceptor.rs  - AuthFailureInterceptor registration point
//! ```
//!
//! ## Auth-failure flow
//!
//! ```text
//! ApiClient ──401──> classify_auth_failure(was_authenticated, header, body)
//!     │
//!     └──> AuthFailureInterceptor::notify(flag).await
//!              │
//!              └──> registered handler (the mounted App), or no-op
//! ```
//!
//! The interceptor is the only link from the HTTP layer back to navigation.
//! The HTTP layer never touches `AppState` itself.

pub mod api;
pub mod auth;
pub mod interceptor;

pub use api::{classify_auth_failure, ApiClient, HttpOtpService};
pub use auth::InMemoryAuth;
pub use interceptor::{AuthFailureHandler, AuthFailureInterceptor};

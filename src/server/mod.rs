//! Local HTTP transport
//!
//! A small hand-rolled HTTP/1.1 server: one task per connection,
//! `Connection: close` semantics, permissive CORS. Enough for a
//! single-user local API; no TLS, no keep-alive.

pub mod request;
pub mod response;
pub mod routes;
pub mod server;

pub use request::Request;
pub use response::Response;
pub use routes::{route, AppState};
pub use server::Server;

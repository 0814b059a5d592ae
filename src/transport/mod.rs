//! HTTP plumbing shared by the boundary adapters.

mod http;

pub use http::{resolve_api_key, HttpReply, HttpTransport, TransportError, KEYRING_SERVICE};

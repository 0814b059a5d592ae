//! Integration tests with mock HTTP server

pub mod mock_server;

mod gemini;
mod gotrue;

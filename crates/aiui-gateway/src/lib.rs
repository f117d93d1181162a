//! HTTP surface of the AIUI backend: the router, shared state, and one
//! handler module per endpoint. The binary in `main.rs` wires config and
//! the template store into [`app::build_router`].

pub mod app;
pub mod http;

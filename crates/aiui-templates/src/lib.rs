//! `aiui-templates` — prompt-to-template dispatch for the AIUI backend.
//!
//! A prompt is lowercased and scanned against an ordered list of keyword
//! rules; the first rule whose any trigger appears as a plain substring
//! selects a template. Template content lives in a read-only
//! [`store::TemplateStore`] (embedded assets, optionally overridden from a
//! directory at startup) and is returned verbatim. No rule match yields the
//! empty string.
//!
//! Everything here is pure and immutable after construction: no locks, no
//! I/O on the request path, safe to share behind an `Arc`.

pub mod dispatch;
pub mod error;
pub mod rules;
pub mod store;
pub mod types;

pub use dispatch::Dispatcher;
pub use error::TemplateError;
pub use rules::{Rule, RuleSet};
pub use store::TemplateStore;
pub use types::TemplateId;

//! Prompt-to-template dispatch.

use crate::rules::RuleSet;
use crate::store::TemplateStore;
use crate::types::TemplateId;

/// Resolves a free-text prompt to template source. One rule set, one
/// template store, no state between calls: `dispatch` is a pure function of
/// its input and safe for unlimited concurrent use.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    rules: RuleSet,
    store: TemplateStore,
}

impl Dispatcher {
    pub fn new(rules: RuleSet, store: TemplateStore) -> Self {
        Self { rules, store }
    }

    /// Template id for `prompt`, if any rule matches.
    pub fn select(&self, prompt: Option<&str>) -> Option<TemplateId> {
        self.rules.select(prompt)
    }

    /// Content for `id`.
    pub fn content(&self, id: TemplateId) -> &str {
        self.store.content(id)
    }

    /// Resolve `prompt` straight to template content.
    ///
    /// Total: an absent prompt counts as empty, and when no rule matches the
    /// result is the empty string — a normal outcome, not an error.
    pub fn dispatch(&self, prompt: Option<&str>) -> &str {
        match self.select(prompt) {
            Some(id) => self.content(id),
            None => "",
        }
    }

    /// Number of templates available.
    pub fn template_count(&self) -> usize {
        self.store.count()
    }
}

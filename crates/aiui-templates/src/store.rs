//! Read-only template storage.
//!
//! Template text is data, not code: the two canned pages ship as `.jsx`
//! assets embedded at compile time, and an operator can replace either one
//! by dropping a same-named file into the configured override directory.
//! The store is built once at startup; content never changes afterwards.

use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use crate::error::TemplateError;
use crate::types::TemplateId;

static INVENTORY_PAGE: &str = include_str!("../templates/inventory_page.jsx");
static PASSWORD_PAGE: &str = include_str!("../templates/password_page.jsx");

/// Immutable template content, one entry per [`TemplateId`].
#[derive(Debug, Clone)]
pub struct TemplateStore {
    inventory: String,
    password: String,
}

impl TemplateStore {
    /// Store backed by the embedded assets.
    pub fn embedded() -> Self {
        Self {
            inventory: INVENTORY_PAGE.to_string(),
            password: PASSWORD_PAGE.to_string(),
        }
    }

    /// Build the store, applying per-file overrides from `dir` when given.
    ///
    /// A missing override file keeps the embedded copy. A file that exists
    /// but cannot be read is an error: the operator asked for it.
    pub fn load(dir: Option<&Path>) -> Result<Self, TemplateError> {
        let mut store = Self::embedded();
        let Some(dir) = dir else { return Ok(store) };

        for id in TemplateId::ALL {
            let path = dir.join(id.file_name());
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(TemplateError::Read {
                        path: path.display().to_string(),
                        source,
                    })
                }
            };
            info!(template = %id, path = %path.display(), "template override loaded");
            *store.slot_mut(id) = content;
        }

        Ok(store)
    }

    /// Content for `id`. Infallible: every id has content.
    pub fn content(&self, id: TemplateId) -> &str {
        match id {
            TemplateId::InventoryPage => &self.inventory,
            TemplateId::PasswordPage => &self.password,
        }
    }

    /// Number of templates held.
    pub fn count(&self) -> usize {
        TemplateId::ALL.len()
    }

    fn slot_mut(&mut self, id: TemplateId) -> &mut String {
        match id {
            TemplateId::InventoryPage => &mut self.inventory,
            TemplateId::PasswordPage => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn embedded_store_has_content_for_every_id() {
        let store = TemplateStore::embedded();
        for id in TemplateId::ALL {
            assert!(!store.content(id).is_empty(), "{id} must have content");
        }
    }

    #[test]
    fn embedded_templates_are_react_page_sources() {
        let store = TemplateStore::embedded();
        assert!(store.content(TemplateId::InventoryPage).contains("재고"));
        assert!(store.content(TemplateId::PasswordPage).contains("비밀번호"));
        for id in TemplateId::ALL {
            assert!(store.content(id).starts_with("import React"));
        }
    }

    #[test]
    fn load_without_dir_matches_embedded() {
        let store = TemplateStore::load(None).expect("load");
        assert_eq!(store.content(TemplateId::InventoryPage), INVENTORY_PAGE);
        assert_eq!(store.content(TemplateId::PasswordPage), PASSWORD_PAGE);
    }

    #[test]
    fn override_dir_replaces_only_the_files_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("inventory_page.jsx"), "custom inventory").expect("write");

        let store = TemplateStore::load(Some(dir.path())).expect("load");
        assert_eq!(store.content(TemplateId::InventoryPage), "custom inventory");
        // password keeps the embedded copy
        assert_eq!(store.content(TemplateId::PasswordPage), PASSWORD_PAGE);
    }

    #[test]
    fn empty_override_dir_keeps_embedded_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TemplateStore::load(Some(dir.path())).expect("load");
        assert_eq!(store.content(TemplateId::InventoryPage), INVENTORY_PAGE);
    }

    #[test]
    fn unreadable_override_is_an_error() {
        // A directory squatting on the override file name: read_to_string
        // fails with something other than NotFound.
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("inventory_page.jsx")).expect("mkdir");

        let err = TemplateStore::load(Some(dir.path())).expect_err("must fail");
        assert!(matches!(err, TemplateError::Read { .. }));
    }
}

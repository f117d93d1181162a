use std::fmt;

/// Identifier for a canned UI template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    InventoryPage,
    PasswordPage,
}

impl TemplateId {
    /// Every known id, in rule priority order.
    pub const ALL: [TemplateId; 2] = [TemplateId::InventoryPage, TemplateId::PasswordPage];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::InventoryPage => "INVENTORY_PAGE",
            TemplateId::PasswordPage => "PASSWORD_PAGE",
        }
    }

    /// File name looked up in a template override directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateId::InventoryPage => "inventory_page.jsx",
            TemplateId::PasswordPage => "password_page.jsx",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

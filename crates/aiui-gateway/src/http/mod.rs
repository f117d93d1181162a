pub mod health;
pub mod inventory;
pub mod me;
pub mod ui;

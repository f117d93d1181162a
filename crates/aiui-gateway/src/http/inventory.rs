//! Inventory listing — GET /api/inventory
//!
//! Fixed fixture data with no storage behind it; the canned inventory page
//! renders whatever this returns.

use axum::Json;
use serde::Serialize;

/// One inventory record.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItem {
    pub id: u64,
    pub name: String,
    pub stock: u32,
}

/// GET /api/inventory — the fixture rows, always in this order.
pub async fn list_handler() -> Json<Vec<InventoryItem>> {
    Json(vec![
        InventoryItem {
            id: 1,
            name: "샘플".to_string(),
            stock: 12,
        },
        InventoryItem {
            id: 2,
            name: "테스트".to_string(),
            stock: 5,
        },
    ])
}

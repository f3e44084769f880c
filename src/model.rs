use serde::{Deserialize, Serialize};

/// Catalog item with a known barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub system_code: String,
    /// Lookup key. Expected unique across the catalog but not enforced.
    pub barcode: String,
}

/// One row of the inventory count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyEntry {
    pub id: u64,
    pub barcode: String,
    pub name: String,
    /// Copied from the matched product; absent for manually entered codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_code: Option<String>,
    pub quantity: i64,
}

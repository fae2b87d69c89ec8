use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use valuekit::{Book, Product, RatedItem, User};

/// Sample records shared by the integration tests.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub rated_items: Vec<RatedItem>,
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub products: Vec<Product>,
}

pub fn load_catalog() -> Result<Catalog, String> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("fixtures");
    path.push("catalog.json");
    read_catalog(&path)
}

fn read_catalog(path: &PathBuf) -> Result<Catalog, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid catalog fixture: {e}"))
}

//! localStorage persistence for the product collection.
//!
//! The collection is stored as one JSON document. Callers treat
//! failures as non-fatal: they log and keep going with the in-memory
//! collection.

use payloads::Product;
use web_sys::window;

const PRODUCTS_KEY: &str = "inventory.products";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to encode products: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("localStorage rejected the write")]
    Write,
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Load the persisted collection. A missing key is `Ok(None)`; a
/// corrupt payload is an error so the caller can log it.
pub fn load_products() -> Result<Option<Vec<Product>>, StorageError> {
    let storage = local_storage()?;
    let Ok(Some(raw)) = storage.get_item(PRODUCTS_KEY) else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

pub fn store_products(products: &[Product]) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let raw = serde_json::to_string(products)?;
    storage
        .set_item(PRODUCTS_KEY, &raw)
        .map_err(|_| StorageError::Write)
}

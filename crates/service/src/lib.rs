//! Service layer for the keyed record store.
//! - `records::repository` is the storage seam (trait + sea-orm implementation).
//! - `records::service` applies presence validation and per-namespace miss handling.

pub mod errors;
pub mod namespace;
pub mod records;
#[cfg(test)]
pub mod test_support;

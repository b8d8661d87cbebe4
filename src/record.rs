// Generic record contract for back-office entities

use crate::error::StoreError;
use chrono::Local;
use rand::Rng;
use serde::{Serialize, de::DeserializeOwned};

/// Core trait that any storable entity must implement
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Form payload used to create or update an entity of this type
    type Input;

    /// Collection name for this record type (e.g., "warranties")
    /// Determines the persistence key for the collection blob.
    fn collection_name() -> &'static str
    where
        Self: Sized;

    /// Shape of generated ids for this collection
    fn id_spec() -> IdSpec
    where
        Self: Sized;

    /// Check an input payload before any mutation is attempted
    fn validate(_input: &Self::Input) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        Ok(())
    }

    /// Build a new entity from form input. `now` becomes both `created_at`
    /// and `updated_at`.
    fn from_input(id: String, now: &str, input: Self::Input) -> Self;

    /// Merge form input onto an existing entity. `id` and `created_at`
    /// stay untouched; `updated_at` is set to `now`.
    fn apply_input(&mut self, input: Self::Input, now: &str);

    /// Unique identifier for this record
    fn id(&self) -> &str;

    /// Formatted local timestamp set at creation
    fn created_at(&self) -> &str;

    /// Formatted local timestamp refreshed on every update
    fn updated_at(&self) -> &str;

    /// By-name scalar access used by the filter engine and the exporter.
    /// `None` means the record does not carry that field.
    fn field(&self, name: &str) -> Option<String>;
}

/// Shape of a collection's generated ids: a fixed prefix followed by a
/// random decimal token drawn from `[low, low + span)`.
#[derive(Debug, Clone, Copy)]
pub struct IdSpec {
    pub prefix: &'static str,
    pub low: u64,
    pub span: u64,
}

impl IdSpec {
    /// One candidate id. Uniqueness against the collection is the store's
    /// job; the store retries until the candidate is unused.
    pub fn generate(&self) -> String {
        let token = rand::rng().random_range(self.low..self.low + self.span);
        format!("{}{}", self.prefix, token)
    }
}

/// Current local time in the display format used throughout the store
/// (`YYYY-MM-DD HH:MM:SS`).
pub fn now_local() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Returns `s` unless it is empty, else `fallback`.
///
/// Matches the form semantics where an untouched field leaves the stored
/// value (or a built-in default) in place.
pub(crate) fn or_default(s: String, fallback: &str) -> String {
    if s.is_empty() { fallback.to_string() } else { s }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_spec_generates_within_bounds() {
        let spec = IdSpec {
            prefix: "ZY",
            low: 10_000_000,
            span: 90_000_000,
        };

        for _ in 0..100 {
            let id = spec.generate();
            assert!(id.starts_with("ZY"));
            let token: u64 = id[2..].parse().unwrap();
            assert!((10_000_000..100_000_000).contains(&token));
        }
    }

    #[test]
    fn test_id_spec_without_prefix() {
        let spec = IdSpec {
            prefix: "",
            low: 63000,
            span: 10000,
        };

        let id = spec.generate();
        let token: u64 = id.parse().unwrap();
        assert!((63000..73000).contains(&token));
    }

    #[test]
    fn test_now_local_format() {
        let now = now_local();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(now.len(), 19);
        assert_eq!(&now[4..5], "-");
        assert_eq!(&now[10..11], " ");
        assert_eq!(&now[13..14], ":");
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(String::new(), "系统管理员"), "系统管理员");
        assert_eq!(or_default("王静".to_string(), "系统管理员"), "王静");
    }
}

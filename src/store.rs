// Generic record store with durable JSON snapshots

use crate::error::StoreError;
use crate::record::{Record, now_local};
use fs2::FileExt;
use std::cell::Cell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Durable location for collection snapshots. One JSON array blob per
/// collection key.
pub trait Backing {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;
}

/// Ephemeral backing for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryBacking {
    blobs: HashMap<String, String>,
}

impl MemoryBacking {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backing for MemoryBacking {
    fn load(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// File-per-collection backing: `<dir>/<key>.json`
#[derive(Debug)]
pub struct FileBacking {
    dir: PathBuf,
}

impl FileBacking {
    /// Create the directory if needed
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Persistence(format!("creating {:?}: {}", dir, e)))?;
        Ok(Self { dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Backing for FileBacking {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.blob_path(key)).ok()
    }

    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        let path = self.blob_path(key);
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| StoreError::Persistence(format!("opening {:?}: {}", path, e)))?;

        // Exclusive lock for the duration of the rewrite
        file.lock_exclusive()
            .map_err(|e| StoreError::Persistence(format!("locking {:?}: {}", path, e)))?;

        file.write_all(payload.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| StoreError::Persistence(format!("writing {:?}: {}", path, e)))?;

        // Lock is released when the file is dropped
        Ok(())
    }
}

/// Stand-in for the remote backend. Every mutation makes one round trip
/// here, so a real transport can replace the mock without touching
/// filter, pagination or export code.
pub trait Gateway {
    fn round_trip(&self);
}

/// Mock transport with a configurable artificial delay
#[derive(Debug, Default)]
pub struct MockGateway {
    delay: Duration,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Gateway for MockGateway {
    fn round_trip(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Single source of truth for one entity collection.
///
/// The canonical collection is ordered newest-first. Filtered and
/// paginated views are derived projections; they are recomputed from
/// `list()` and never fed back into the store.
pub struct Store<T: Record> {
    records: Vec<T>,
    backing: Box<dyn Backing>,
    gateway: Box<dyn Gateway>,
    loading: Rc<Cell<bool>>,
}

/// Clears the loading flag when a mutation finishes, error paths included
struct Busy(Rc<Cell<bool>>);

impl Drop for Busy {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T: Record> Store<T> {
    /// Load the collection from `backing`, falling back to `seed` when the
    /// key is absent or the stored blob does not parse. A parse failure is
    /// logged and recovered, never fatal.
    pub fn open(backing: Box<dyn Backing>, gateway: Box<dyn Gateway>, seed: Vec<T>) -> Self {
        let key = T::collection_name();
        let records = match backing.load(key) {
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(records) => {
                    info!(collection = key, count = records.len(), "Loaded stored collection");
                    records
                }
                Err(e) => {
                    warn!(
                        collection = key,
                        error = ?e,
                        "Stored blob unreadable, falling back to seed data"
                    );
                    seed
                }
            },
            None => {
                debug!(collection = key, count = seed.len(), "No stored blob, using seed data");
                seed
            }
        };

        Self {
            records,
            backing,
            gateway,
            loading: Rc::new(Cell::new(false)),
        }
    }

    /// Ephemeral store over a memory backing and a zero-delay gateway
    pub fn in_memory(seed: Vec<T>) -> Self {
        Self::open(Box::new(MemoryBacking::new()), Box::new(MockGateway::new()), seed)
    }

    /// True while a mutation is in flight against the gateway. UI-level
    /// callers disable mutating actions while this is set.
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    /// Full canonical collection in store order (insertion order,
    /// newest-first)
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Point lookup, no side effects
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Validate the input, assign a collision-free id, stamp both
    /// timestamps, prepend, persist. Returns the stored entity.
    pub fn create(&mut self, input: T::Input) -> Result<T, StoreError> {
        T::validate(&input)?;

        let _busy = self.begin();
        self.gateway.round_trip();

        let id = self.next_id();
        let now = now_local();
        let record = T::from_input(id, &now, input);
        debug!(collection = T::collection_name(), id = record.id(), "Creating record");

        self.records.insert(0, record.clone());
        self.persist()?;
        Ok(record)
    }

    /// Merge input onto the record with `id`. `id` and `created_at` stay
    /// untouched; `updated_at` is refreshed. `NotFound` when no such
    /// record exists.
    pub fn update(&mut self, id: &str, input: T::Input) -> Result<T, StoreError> {
        T::validate(&input)?;

        let _busy = self.begin();
        self.gateway.round_trip();

        let position = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let now = now_local();
        self.records[position].apply_input(input, &now);
        debug!(collection = T::collection_name(), id, "Updated record");

        let record = self.records[position].clone();
        self.persist()?;
        Ok(record)
    }

    /// Delete every record whose id is in `ids`. Unknown ids are no-ops.
    /// Returns the number removed; survivors keep their relative order.
    pub fn remove(&mut self, ids: &[String]) -> Result<usize, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let _busy = self.begin();
        self.gateway.round_trip();

        let before = self.records.len();
        self.records.retain(|r| !ids.iter().any(|id| id == r.id()));
        let removed = before - self.records.len();

        if removed > 0 {
            debug!(collection = T::collection_name(), removed, "Removed records");
            self.persist()?;
        }
        Ok(removed)
    }

    fn begin(&self) -> Busy {
        self.loading.set(true);
        Busy(Rc::clone(&self.loading))
    }

    /// Generate an id that is not already in the collection. The naive
    /// random token alone does not guarantee uniqueness, so retry until
    /// the candidate is unused.
    fn next_id(&self) -> String {
        let spec = T::id_spec();
        loop {
            let id = spec.generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Serialize the full collection and rewrite its durable key
    fn persist(&mut self) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.records)
            .map_err(|e| StoreError::Persistence(format!("serializing {}: {}", T::collection_name(), e)))?;
        self.backing.save(T::collection_name(), &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StoreRecord, Warranty, WarrantyInput, seed_stores, seed_warranties};
    use tempfile::TempDir;

    fn input(name: &str, phone: &str) -> WarrantyInput {
        WarrantyInput {
            customer_name: name.to_string(),
            customer_phone: phone.to_string(),
            ..Default::default()
        }
    }

    fn ids(store: &Store<Warranty>) -> Vec<String> {
        store.list().iter().map(|w| w.id.clone()).collect()
    }

    #[test]
    fn test_create_prepends_with_generated_id() {
        // Spec scenario: new warranty for 张伟 lands first with a
        // prefix-patterned id and a present-moment timestamp.
        let mut store = Store::in_memory(seed_warranties());
        let created = store.create(input("张伟", "13900000000")).unwrap();

        assert!(created.id.starts_with("ZY"));
        assert_eq!(created.id.len(), 10);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.created_at.len(), 19);

        assert_eq!(store.len(), 4);
        assert_eq!(store.list()[0].id, created.id);
        assert_eq!(store.list()[0].company, "张伟");
    }

    #[test]
    fn test_create_rejects_invalid_input_without_mutation() {
        let mut store = Store::in_memory(seed_warranties());
        let result = store.create(input("", ""));
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_refreshes_updated_at_only() {
        let mut store = Store::in_memory(seed_warranties());
        let updated = store.update("ZY10025627", input("宋生鹏", "18600000000")).unwrap();

        assert_eq!(updated.id, "ZY10025627");
        assert_eq!(updated.created_at, "2025-04-19 23:26:17");
        assert_ne!(updated.updated_at, "2025-04-19 23:26:17");
        assert_eq!(updated.phone, "18600000000");
        // Position in the collection is unchanged.
        assert_eq!(store.list()[0].id, "ZY10025627");
    }

    #[test]
    fn test_update_idempotent_except_timestamp() {
        let mut store = Store::in_memory(seed_warranties());
        let first = store.update("ZY10025627", input("宋生鹏", "18693582595")).unwrap();
        let second = store.update("ZY10025627", input("宋生鹏", "18693582595")).unwrap();

        assert_eq!(first.company, second.company);
        assert_eq!(first.phone, second.phone);
        assert_eq!(first.created_at, second.created_at);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut store = Store::in_memory(seed_warranties());
        let result = store.update("ZY00000000", input("x", "y"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_get_point_lookup() {
        let store = Store::in_memory(seed_warranties());
        assert_eq!(store.get("ZY10025521").unwrap().company, "罗浩鹏");
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_remove_exact_set_preserves_order() {
        let mut store = Store::in_memory(seed_warranties());
        let removed = store
            .remove(&["ZY10025521".to_string(), "ZY00000000".to_string()])
            .unwrap();

        assert_eq!(removed, 1);
        assert_eq!(ids(&store), vec!["ZY10025627", "ZY10024833"]);
    }

    #[test]
    fn test_remove_empty_selection_is_noop() {
        let mut store = Store::in_memory(seed_warranties());
        assert_eq!(store.remove(&[]).unwrap(), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_generated_ids_avoid_collisions() {
        // A one-wide id space forces the naive candidate to collide with
        // every existing record; the store must still find the free slot.
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
        struct Tiny {
            id: String,
            created_at: String,
            updated_at: String,
        }

        impl Record for Tiny {
            type Input = ();

            fn collection_name() -> &'static str {
                "tiny"
            }

            fn id_spec() -> crate::record::IdSpec {
                crate::record::IdSpec {
                    prefix: "T",
                    low: 0,
                    span: 2,
                }
            }

            fn from_input(id: String, now: &str, _input: ()) -> Self {
                Self {
                    id,
                    created_at: now.to_string(),
                    updated_at: now.to_string(),
                }
            }

            fn apply_input(&mut self, _input: (), now: &str) {
                self.updated_at = now.to_string();
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn created_at(&self) -> &str {
                &self.created_at
            }

            fn updated_at(&self) -> &str {
                &self.updated_at
            }

            fn field(&self, _name: &str) -> Option<String> {
                None
            }
        }

        let mut store: Store<Tiny> = Store::in_memory(Vec::new());
        let first = store.create(()).unwrap();
        let second = store.create(()).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_persists_after_every_mutation() {
        let temp = TempDir::new().unwrap();
        let backing = FileBacking::open(temp.path()).unwrap();
        let mut store = Store::open(Box::new(backing), Box::new(MockGateway::new()), seed_warranties());

        store.create(input("张伟", "13900000000")).unwrap();
        let blob_path = temp.path().join("warranties.json");
        assert!(blob_path.exists());

        // A fresh store over the same directory sees the mutation.
        let backing = FileBacking::open(temp.path()).unwrap();
        let reopened: Store<Warranty> = Store::open(Box::new(backing), Box::new(MockGateway::new()), Vec::new());
        assert_eq!(reopened.len(), 4);
        assert_eq!(reopened.list()[0].company, "张伟");
    }

    #[test]
    fn test_corrupt_blob_falls_back_to_seed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("warranties.json"), "{not json").unwrap();

        let backing = FileBacking::open(temp.path()).unwrap();
        let store: Store<Warranty> = Store::open(Box::new(backing), Box::new(MockGateway::new()), seed_warranties());
        assert_eq!(store.len(), 3);
        assert_eq!(store.list()[0].id, "ZY10025627");
    }

    #[test]
    fn test_missing_blob_uses_seed() {
        let temp = TempDir::new().unwrap();
        let backing = FileBacking::open(temp.path()).unwrap();
        let store: Store<StoreRecord> = Store::open(Box::new(backing), Box::new(MockGateway::new()), seed_stores());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_loading_clear_after_mutations() {
        let mut store = Store::in_memory(seed_warranties());
        assert!(!store.loading());
        store.create(input("张伟", "13900000000")).unwrap();
        assert!(!store.loading());
        let _ = store.update("nope", input("x", "y"));
        assert!(!store.loading());
    }

    #[test]
    fn test_gateway_delay_is_applied() {
        let gateway = MockGateway::with_delay(Duration::from_millis(30));
        let mut store = Store::open(Box::new(MemoryBacking::new()), Box::new(gateway), seed_warranties());

        let start = std::time::Instant::now();
        store.create(input("张伟", "13900000000")).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}

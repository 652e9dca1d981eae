//! # Record Store
//!
//! [`RecordStore`] is the sole owner of the mutable product collection. All
//! mutation goes through it; everything else in the crate only ever sees
//! immutable snapshots.
//!
//! ## Ordering
//!
//! The collection keeps insertion order: seeded records stay in seed order,
//! created records append at the end, and `update` replaces a record in its
//! existing position. Sorting for display is the view layer's business and
//! never touches the store.
//!
//! ## Identifier assignment
//!
//! New records get a 5-character id drawn from the 62-character alphanumeric
//! alphabet. The generator retries while the candidate collides with a live
//! id, so uniqueness holds even in the short id space; a bounded retry count
//! turns a pathologically full space into a store error instead of a hang.
//! Seed-assigned ids are opaque and pass through untouched.
//!
//! ## Atomicity
//!
//! Every mutating operation validates first and mutates second: a failed
//! call leaves the collection byte-for-byte unchanged. The generation
//! counter increments only when the observable snapshot actually changed,
//! which lets callers cheaply detect missed updates.

use rand::{distributions::Alphanumeric, Rng};

use crate::error::{Result, WaresError};
use crate::model::{Product, ProductDraft, ProductId};

const ID_LEN: usize = 5;
const MAX_ID_ATTEMPTS: usize = 64;

/// Authoritative ordered collection of product records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Product>,
    generation: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection with a freshly fetched snapshot.
    /// Full replace, no merge.
    pub fn initialize(&mut self, records: Vec<Product>) {
        self.records = records;
        self.generation += 1;
    }

    /// The current snapshot, in collection order.
    pub fn records(&self) -> &[Product] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Incremented on every mutation that changed the snapshot.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but absence is an error.
    pub fn get(&self, id: &ProductId) -> Result<&Product> {
        self.find_by_id(id)
            .ok_or_else(|| WaresError::RecordNotFound(id.clone()))
    }

    /// Validate a draft, assign it a fresh id, and append it.
    pub fn create(&mut self, draft: ProductDraft) -> Result<Product> {
        draft.validate()?;

        let id = self.assign_id()?;
        let product = Product::from_draft(draft, id);
        self.records.push(product.clone());
        self.generation += 1;
        Ok(product)
    }

    /// Whole-record replace, matched by id. The record keeps its position.
    pub fn update(&mut self, record: Product) -> Result<Product> {
        record.validate()?;

        let pos = self
            .position(&record.id)
            .ok_or_else(|| WaresError::RecordNotFound(record.id.clone()))?;
        self.records[pos] = record.clone();
        self.generation += 1;
        Ok(record)
    }

    /// Remove the record with the given id. Absence is a no-op, not an
    /// error; returns whether a record was actually removed.
    pub fn delete(&mut self, id: &ProductId) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.records.remove(pos);
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    /// Remove every record whose id is in `ids`. Returns the removed count.
    pub fn delete_many(&mut self, ids: &[ProductId]) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        let removed = before - self.records.len();
        if removed > 0 {
            self.generation += 1;
        }
        removed
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    fn contains_id(&self, id: &ProductId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    fn assign_id(&self) -> Result<ProductId> {
        let mut rng = rand::thread_rng();
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(ID_LEN)
                .map(char::from)
                .collect();
            let id = ProductId::new(candidate);
            if !self.contains_id(&id) {
                return Ok(id);
            }
        }
        Err(WaresError::Store(
            "could not assign a unique record id".to_string(),
        ))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Category;

    pub struct StoreFixture {
        pub store: RecordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let draft = ProductDraft {
                    title: format!("Test Product {}", i + 1),
                    description: format!("Description for product {}", i + 1),
                    ..Default::default()
                };
                self.store.create(draft).unwrap();
            }
            self
        }

        pub fn with_product(mut self, title: &str, category: Option<Category>) -> Self {
            let draft = ProductDraft {
                title: title.to_string(),
                category,
                ..Default::default()
            };
            self.store.create(draft).unwrap();
            self
        }

        pub fn with_seeded(mut self, records: Vec<Product>) -> Self {
            self.store.initialize(records);
            self
        }
    }

    pub fn seed_product(id: &str, title: &str, brand: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            category: None,
            price: 0.0,
            stock: 0,
            brand: brand.map(|b| b.to_string()),
        }
    }
}

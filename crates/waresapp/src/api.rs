//! # API Facade
//!
//! The API layer is a thin facade over the command layer. It is the single
//! entry point for all wares operations, regardless of the UI driving it.
//!
//! The facade:
//! - owns the [`RecordStore`] and the active [`FilterEngine`]
//! - dispatches to the appropriate command function
//! - returns structured [`CmdResult`] values
//!
//! It explicitly avoids business logic (that lives in `commands/*.rs`),
//! I/O, and presentation concerns. Clients render whatever snapshot the
//! facade last produced and feed user intents back in; transient view state
//! (open dialogs, row selection, unsaved drafts) stays on the client side
//! and never enters the facade.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::filter::{FilterEngine, FilterSpec};
use crate::model::{Product, ProductDraft, ProductId};
use crate::provider::SeedSource;
use crate::store::RecordStore;

/// The main API facade for wares operations.
#[derive(Debug, Default)]
pub struct WaresApi {
    store: RecordStore,
    filters: FilterEngine,
}

impl WaresApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with the provider's snapshot.
    pub fn seed(&mut self, source: &dyn SeedSource) -> Result<CmdResult> {
        commands::seed::run(&mut self.store, source)
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update_product(&mut self, record: Product) -> Result<CmdResult> {
        commands::update::run(&mut self.store, record)
    }

    pub fn delete_product(&mut self, id: &ProductId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn delete_products(&mut self, ids: &[ProductId]) -> Result<CmdResult> {
        commands::delete::run_many(&mut self.store, ids)
    }

    /// The filtered view under the currently-active spec.
    pub fn list_products(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, self.filters.spec())
    }

    /// The filtered view under an explicit spec, leaving the active one alone.
    pub fn list_products_with(&self, spec: &FilterSpec) -> Result<CmdResult> {
        commands::list::run(&self.store, spec)
    }

    /// CSV over the currently-filtered snapshot.
    pub fn export_csv(&self) -> Result<CmdResult> {
        commands::export::run(&self.store, self.filters.spec())
    }

    pub fn find_product(&self, id: &ProductId) -> Result<Product> {
        self.store.get(id).cloned()
    }

    pub fn set_global_filter(&mut self, text: &str) {
        self.filters.set_global_text(text);
    }

    pub fn set_title_filter(&mut self, prefix: Option<String>) {
        self.filters.set_title_prefix(prefix);
    }

    pub fn set_category_filter(&mut self, prefix: Option<String>) {
        self.filters.set_category_prefix(prefix);
    }

    pub fn set_brand_filter(&mut self, brands: Option<Vec<String>>) {
        self.filters.set_brands(brands);
    }

    /// Reset every filter to the baseline.
    pub fn clear_filters(&mut self) {
        self.filters.reset();
    }

    pub fn filters(&self) -> &FilterEngine {
        &self.filters
    }

    /// Total records in the store, ignoring filters.
    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Bumped whenever the snapshot changes; lets clients detect staleness.
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }
}

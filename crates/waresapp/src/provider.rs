//! Seed data boundary.
//!
//! The store starts empty and is populated exactly once per fetch from an
//! external data provider. [`SeedSource`] is that boundary: a one-shot
//! operation yielding the initial record list. The core does not retry or
//! time out — a failed fetch simply never reaches `initialize` and the
//! store stays in its pre-initialization state.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Result;
use crate::model::Product;

/// One-shot supplier of the initial record set.
pub trait SeedSource {
    fn fetch_initial_records(&self) -> Result<Vec<Product>>;
}

/// Reads seed records from a JSON file.
///
/// Accepts either a bare array of products or the provider's envelope form
/// `{"products": [...], ...}`; envelope fields other than `products` are
/// ignored.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SeedSource for JsonFileSource {
    fn fetch_initial_records(&self) -> Result<Vec<Product>> {
        let raw = std::fs::read_to_string(&self.path)?;
        parse_seed(&raw)
    }
}

/// Canned records, for tests and demos.
pub struct StaticSource {
    records: Vec<Product>,
}

impl StaticSource {
    pub fn new(records: Vec<Product>) -> Self {
        Self { records }
    }
}

impl SeedSource for StaticSource {
    fn fetch_initial_records(&self) -> Result<Vec<Product>> {
        Ok(self.records.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeedPayload {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

/// Parse a raw seed document in either supported shape.
pub fn parse_seed(raw: &str) -> Result<Vec<Product>> {
    let payload: SeedPayload = serde_json::from_str(raw)?;
    Ok(match payload {
        SeedPayload::Wrapped { products } => products,
        SeedPayload::Bare(products) => products,
    })
}

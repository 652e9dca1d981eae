use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::provider::SeedSource;
use crate::store::RecordStore;

/// Fetch the provider snapshot and replace the collection with it.
///
/// A provider failure propagates before `initialize` is reached, so the
/// store keeps whatever state it had.
pub fn run(store: &mut RecordStore, source: &dyn SeedSource) -> Result<CmdResult> {
    let records = source.fetch_initial_records()?;
    let count = records.len();
    store.initialize(records);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Loaded {} products", count)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaresError;
    use crate::model::Product;
    use crate::provider::StaticSource;
    use crate::store::fixtures::seed_product;

    struct FailingSource;

    impl SeedSource for FailingSource {
        fn fetch_initial_records(&self) -> Result<Vec<Product>> {
            Err(WaresError::Store("connection refused".to_string()))
        }
    }

    #[test]
    fn seeds_store_from_provider() {
        let mut store = RecordStore::new();
        let source = StaticSource::new(vec![
            seed_product("1", "First", None),
            seed_product("2", "Second", None),
        ]);

        let result = run(&mut store, &source).unwrap();

        assert_eq!(store.len(), 2);
        assert!(result.messages[0].content.contains("2 products"));
    }

    #[test]
    fn reseeding_replaces_previous_snapshot() {
        let mut store = RecordStore::new();
        run(&mut store, &StaticSource::new(vec![seed_product("1", "Old", None)])).unwrap();
        run(&mut store, &StaticSource::new(vec![seed_product("9", "New", None)])).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].title, "New");
    }

    #[test]
    fn provider_failure_leaves_store_untouched() {
        let mut store = RecordStore::new();
        store.initialize(vec![seed_product("1", "Kept", None)]);

        let result = run(&mut store, &FailingSource);

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].title, "Kept");
    }
}

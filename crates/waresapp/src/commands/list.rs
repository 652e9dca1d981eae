use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{self, FilterSpec};
use crate::model::Product;
use crate::store::RecordStore;

/// Project the records visible under `spec`, in collection order.
///
/// Re-evaluated from scratch on every call; nothing is cached between the
/// snapshot and the view.
pub fn run(store: &RecordStore, spec: &FilterSpec) -> Result<CmdResult> {
    let listed: Vec<Product> = filter::filter(store.records(), spec)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_records(listed))
}

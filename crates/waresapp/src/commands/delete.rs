use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::store::RecordStore;

/// Remove a single record. Absence is a no-op, reported as info.
pub fn run(store: &mut RecordStore, id: &ProductId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.find_by_id(id).cloned() {
        Some(product) => {
            store.delete(id);
            result.add_message(CmdMessage::success(format!(
                "Product deleted: {}",
                product.title
            )));
            result.affected_records.push(product);
        }
        None => {
            result.add_message(CmdMessage::info(format!("No product with id {}", id)));
        }
    }

    Ok(result)
}

/// Remove every record in the selection. Ids without a record are skipped.
pub fn run_many(store: &mut RecordStore, ids: &[ProductId]) -> Result<CmdResult> {
    let affected: Vec<Product> = store
        .records()
        .iter()
        .filter(|r| ids.contains(&r.id))
        .cloned()
        .collect();
    let removed = store.delete_many(ids);

    let mut result = CmdResult::default().with_affected_records(affected);
    if removed > 0 {
        result.add_message(CmdMessage::success(format!("{} products deleted", removed)));
    } else {
        result.add_message(CmdMessage::info("No matching products".to_string()));
    }
    Ok(result)
}

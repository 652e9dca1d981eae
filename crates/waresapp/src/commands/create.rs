use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductDraft;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, draft: ProductDraft) -> Result<CmdResult> {
    let product = store.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created: {}",
        product.title
    )));
    result.affected_records.push(product);
    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, record: Product) -> Result<CmdResult> {
    let product = store.update(record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product updated: {}",
        product.title
    )));
    result.affected_records.push(product);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::WaresError;
    use crate::model::ProductDraft;
    use crate::store::fixtures::seed_product;

    #[test]
    fn updates_record_in_place() {
        let mut store = RecordStore::new();
        let created = create::run(
            &mut store,
            ProductDraft {
                title: "Old name".into(),
                ..Default::default()
            },
        )
        .unwrap();

        let mut changed = created.affected_records[0].clone();
        changed.title = "New name".into();
        changed.stock = 3;
        let result = run(&mut store, changed).unwrap();

        assert!(result.messages[0].content.contains("New name"));
        assert_eq!(store.records()[0].title, "New name");
        assert_eq!(store.records()[0].stock, 3);
    }

    #[test]
    fn update_unknown_record_is_an_error() {
        let mut store = RecordStore::new();
        let result = run(&mut store, seed_product("ghost", "Ghost", None));

        assert!(matches!(result, Err(WaresError::RecordNotFound(_))));
    }
}

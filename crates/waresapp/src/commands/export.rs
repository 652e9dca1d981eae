use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{self, FilterSpec};
use crate::store::RecordStore;

/// Column order matches the table view.
const COLUMNS: [&str; 6] = ["id", "title", "brand", "price", "category", "stock"];

/// Render the filtered snapshot as a CSV document.
///
/// The payload is fully materialized and deterministic: same snapshot and
/// spec, same bytes. Writing it anywhere is the client's job.
pub fn run(store: &RecordStore, spec: &FilterSpec) -> Result<CmdResult> {
    let visible = filter::filter(store.records(), spec);

    let mut csv = String::new();
    csv.push_str(&COLUMNS.join(","));
    csv.push('\n');

    for record in &visible {
        let fields = [
            escape(record.id.as_str()),
            escape(&record.title),
            escape(record.brand.as_deref().unwrap_or("")),
            format!("{}", record.price),
            escape(record.category.map(|c| c.as_str()).unwrap_or("")),
            record.stock.to_string(),
        ];
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }

    let mut result = CmdResult::default()
        .with_listed_records(visible.into_iter().cloned().collect())
        .with_export(csv);
    result.add_message(CmdMessage::success(format!(
        "Exported {} products",
        result.listed_records.len()
    )));
    Ok(result)
}

/// Quote a field when it contains a separator, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterEngine;
    use crate::model::{Category, Product, ProductId};
    use crate::store::fixtures::seed_product;

    #[test]
    fn header_uses_table_column_order() {
        let store = RecordStore::new();
        let result = run(&store, &FilterSpec::baseline()).unwrap();

        let csv = result.export.unwrap();
        assert_eq!(csv, "id,title,brand,price,category,stock\n");
    }

    #[test]
    fn rows_follow_snapshot_order() {
        let mut store = RecordStore::new();
        store.initialize(vec![
            Product {
                id: ProductId::new("1"),
                title: "iPhone 9".into(),
                description: String::new(),
                category: Some(Category::Smartphones),
                price: 549.0,
                stock: 94,
                brand: Some("Apple".into()),
            },
            seed_product("2", "Plain", None),
        ]);

        let csv = run(&store, &FilterSpec::baseline()).unwrap().export.unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,iPhone 9,Apple,549,smartphones,94");
        assert_eq!(lines[2], "2,Plain,,0,,0");
    }

    #[test]
    fn export_respects_active_filter() {
        let mut store = RecordStore::new();
        store.initialize(vec![
            seed_product("1", "Phone", Some("X")),
            seed_product("2", "Laptop", Some("Y")),
        ]);
        let mut engine = FilterEngine::new();
        engine.set_global_text("Y");

        let result = run(&store, engine.spec()).unwrap();
        let csv = result.export.unwrap();

        assert!(csv.contains("Laptop"));
        assert!(!csv.contains("Phone"));
        assert!(result.messages[0].content.contains("1 products"));
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let mut store = RecordStore::new();
        let mut tricky = seed_product("1", "Desk, walnut", None);
        tricky.brand = Some("Say \"hi\"".into());
        store.initialize(vec![tricky]);

        let csv = run(&store, &FilterSpec::baseline()).unwrap().export.unwrap();
        assert!(csv.contains("\"Desk, walnut\""));
        assert!(csv.contains("\"Say \"\"hi\"\"\""));
    }
}

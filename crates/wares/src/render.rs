//! Terminal rendering for structured command results.
//!
//! Everything user-visible goes through here: leveled messages, errors, and
//! the product table. Column sizing uses display width rather than char
//! count so wide glyphs don't break alignment.

use console::style;
use unicode_width::UnicodeWidthStr;
use waresapp::commands::{CmdMessage, MessageLevel};
use waresapp::error::WaresError;
use waresapp::model::Product;

const HEADERS: [&str; 6] = ["Id", "Title", "Brand", "Price", "Category", "Stock"];

pub fn messages(messages: &[CmdMessage]) {
    for m in messages {
        match m.level {
            MessageLevel::Info => println!("{}", style(&m.content).dim()),
            MessageLevel::Success => println!("{}", style(&m.content).green()),
            MessageLevel::Warning => println!("{}", style(&m.content).yellow()),
            MessageLevel::Error => eprintln!("{}", style(&m.content).red()),
        }
    }
}

pub fn info(text: &str) {
    println!("{}", style(text).dim());
}

pub fn error(err: &WaresError) {
    eprintln!("{}", style(format!("Error: {}", err)).red());
}

pub fn table(records: &[Product], currency: &str, total: usize) {
    if records.is_empty() {
        println!("No products found.");
        return;
    }

    let rows: Vec<[String; 6]> = records.iter().map(|r| row_cells(r, currency)).collect();

    let mut widths: [usize; 6] = HEADERS.map(UnicodeWidthStr::width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    println!("{}", style(render_row(&HEADERS.map(String::from), &widths)).bold());
    for row in &rows {
        println!("{}", render_row(row, &widths));
    }
    println!(
        "{}",
        style(format!("{} of {} products", rows.len(), total)).dim()
    );
}

fn row_cells(record: &Product, currency: &str) -> [String; 6] {
    [
        record.id.to_string(),
        record.title.clone(),
        record.brand.clone().unwrap_or_default(),
        format!("{:.2} {}", record.price, currency),
        record
            .category
            .map(|c| c.to_string())
            .unwrap_or_default(),
        record.stock.to_string(),
    ]
}

fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Pad to a display width, not a char count.
fn pad(cell: &str, width: usize) -> String {
    let deficit = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(deficit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use waresapp::model::{Category, ProductId};

    #[test]
    fn pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        // Two fullwidth chars occupy four columns already.
        assert_eq!(pad("日本", 4), "日本");
        assert_eq!(pad("日本", 6), "日本  ");
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad("longer", 2), "longer");
    }

    #[test]
    fn row_cells_formats_price_and_blanks() {
        let record = Product {
            id: ProductId::new("a1"),
            title: "Lamp".into(),
            description: String::new(),
            category: Some(Category::HomeDecoration),
            price: 9.5,
            stock: 3,
            brand: None,
        };

        let cells = row_cells(&record, "USD");
        assert_eq!(
            cells,
            ["a1", "Lamp", "", "9.50 USD", "home-decoration", "3"]
        );
    }
}

//! The interactive session loop.
//!
//! Each input line is tokenized and handed to clap, so session commands get
//! real argument parsing, `--help`, and error messages. The loop owns the
//! presentation state — the row selection and the resolved configuration —
//! while every domain operation goes through the [`WaresApi`] facade.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use confique::Config;
use console::style;
use directories::ProjectDirs;
use waresapp::api::WaresApi;
use waresapp::config::WaresConfig;
use waresapp::error::{Result, WaresError};
use waresapp::model::{ProductDraft, ProductId};
use waresapp::provider::JsonFileSource;

use crate::args::{Cli, SessionCommand, SessionLine};
use crate::render;

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut api = WaresApi::new();
    let seed_path = cli
        .data
        .clone()
        .or_else(|| config.seed_file.as_ref().map(PathBuf::from));
    if let Some(path) = seed_path {
        let result = api.seed(&JsonFileSource::new(path))?;
        render::messages(&result.messages);
    }

    let interactive = io::stdin().is_terminal();
    let mut selection: Vec<ProductId> = Vec::new();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        if interactive {
            print!("{} ", style("wares>").cyan());
            io::stdout().flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF ends the session
        }
        let tokens = tokenize(line.trim());
        if tokens.is_empty() {
            continue;
        }

        match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => match dispatch(&mut api, &mut selection, &config, parsed.command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                // Operation errors end the command, not the session.
                Err(e) => render::error(&e),
            },
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}

fn dispatch(
    api: &mut WaresApi,
    selection: &mut Vec<ProductId>,
    config: &WaresConfig,
    command: SessionCommand,
) -> Result<Flow> {
    match command {
        SessionCommand::List => {
            show_table(api, config)?;
        }
        SessionCommand::Search { text } => {
            api.set_global_filter(text.as_deref().unwrap_or(""));
            show_table(api, config)?;
        }
        SessionCommand::Filter {
            title,
            category,
            brands,
        } => {
            if title.is_some() {
                api.set_title_filter(title);
            }
            if category.is_some() {
                api.set_category_filter(category);
            }
            if !brands.is_empty() {
                api.set_brand_filter(Some(brands));
            }
            show_table(api, config)?;
        }
        SessionCommand::Clear => {
            api.clear_filters();
            show_table(api, config)?;
        }
        SessionCommand::Add {
            title,
            description,
            category,
            price,
            stock,
        } => {
            // The form exposes no brand field; created records leave it unset.
            let draft = ProductDraft {
                title,
                description,
                category,
                price,
                stock,
                brand: None,
            };
            let result = api.create_product(draft)?;
            render::messages(&result.messages);
        }
        SessionCommand::Edit {
            id,
            title,
            description,
            category,
            price,
            stock,
        } => {
            let id = ProductId::from(id.as_str());
            let mut record = api.find_product(&id)?;
            if let Some(title) = title {
                record.title = title;
            }
            if let Some(description) = description {
                record.description = description;
            }
            if let Some(category) = category {
                record.category = Some(category);
            }
            if let Some(price) = price {
                record.price = price;
            }
            if let Some(stock) = stock {
                record.stock = stock;
            }
            let result = api.update_product(record)?;
            render::messages(&result.messages);
        }
        SessionCommand::Select { ids } => {
            *selection = ids.iter().map(|s| ProductId::from(s.as_str())).collect();
            render::info(&format!("{} rows selected", selection.len()));
        }
        SessionCommand::Delete { ids } => {
            let targets: Vec<ProductId> = if ids.is_empty() {
                std::mem::take(selection)
            } else {
                ids.iter().map(|s| ProductId::from(s.as_str())).collect()
            };

            if targets.is_empty() {
                render::info("Nothing selected");
            } else {
                let result = if targets.len() == 1 {
                    api.delete_product(&targets[0])?
                } else {
                    api.delete_products(&targets)?
                };
                selection.retain(|id| !targets.contains(id));
                render::messages(&result.messages);
            }
        }
        SessionCommand::Export { path } => {
            let result = api.export_csv()?;
            let payload = result.export.clone().unwrap_or_default();
            let path = path.unwrap_or_else(default_export_path);
            std::fs::write(&path, payload)?;
            render::messages(&result.messages);
            render::info(&format!("Wrote {}", path.display()));
        }
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn show_table(api: &WaresApi, config: &WaresConfig) -> Result<()> {
    let result = api.list_products()?;
    render::table(&result.listed_records, &config.currency, api.record_count());
    Ok(())
}

fn default_export_path() -> PathBuf {
    PathBuf::from(format!(
        "products-{}.csv",
        chrono::Local::now().format("%Y-%m-%d")
    ))
}

fn load_config(cli: &Cli) -> Result<WaresConfig> {
    let mut builder = WaresConfig::builder().env();
    if let Some(path) = &cli.config {
        builder = builder.file(path);
    } else {
        builder = builder.file("wares.toml");
        if let Some(dirs) = ProjectDirs::from("com", "wares", "wares") {
            builder = builder.file(dirs.config_dir().join("wares.toml"));
        }
    }
    builder.load().map_err(|e| WaresError::Store(e.to_string()))
}

/// Split a session line into tokens. Double quotes group words (so blank or
/// multi-word values survive); there are no escape sequences.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut started = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                started = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if started {
                    tokens.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }
    if started {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("list"), ["list"]);
        assert_eq!(
            tokenize("filter --title Pho  --category smart"),
            ["filter", "--title", "Pho", "--category", "smart"]
        );
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            tokenize("add --title \"Bamboo Planter\""),
            ["add", "--title", "Bamboo Planter"]
        );
    }

    #[test]
    fn quoted_blank_survives() {
        assert_eq!(tokenize("add --title \"  \""), ["add", "--title", "  "]);
        assert_eq!(tokenize("search \"\""), ["search", ""]);
    }

    #[test]
    fn empty_line_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}

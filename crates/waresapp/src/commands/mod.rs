//! # Command Layer
//!
//! This module contains the core business logic of wares. Each command
//! lives in its own submodule and implements pure functions over the
//! record store and filter types.
//!
//! Commands are UI-agnostic: no stdout, no stderr, no prompts, no exit
//! codes. They return a structured [`CmdResult`] and let the client decide
//! how to render it.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_records`: records a mutation touched
//! - `listed_records`: records to display (filtered, in collection order)
//! - `export`: a rendered document payload (for the `export` command)
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests build a
//! plain in-memory [`RecordStore`](crate::store::RecordStore), exercise the
//! logic branches, and verify the exact `CmdResult` contents.
//!
//! ## Command Modules
//!
//! - [`seed`]: replace the collection with a provider snapshot
//! - [`create`]: validate a draft and append it with a fresh id
//! - [`update`]: whole-record replace by id
//! - [`delete`]: remove one record, or a selected set
//! - [`list`]: project the filtered view of the snapshot
//! - [`export`]: render the filtered view as CSV

use serde::Serialize;

use crate::model::Product;

pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod seed;
pub mod update;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Product>,
    pub listed_records: Vec<Product>,
    pub export: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Product>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Product>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_export(mut self, payload: String) -> Self {
        self.export = Some(payload);
        self
    }
}

//! # Wares CLI
//!
//! An interactive terminal client for the wares inventory. The binary is
//! intentionally thin: argument parsing lives in `args.rs`, the session
//! loop in `repl.rs`, rendering in `render.rs`, and this file only invokes
//! `repl::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! CLI layer (this crate)        argument parsing, session loop, rendering
//!          │
//!          ▼
//! API layer (waresapp::api)     dispatch, structured CmdResult values
//!          │
//!          ▼
//! Command layer (waresapp)      business logic, store + filter engine
//! ```
//!
//! Everything from the API facade inward is UI-agnostic. This crate owns
//! all presentation state — the row selection, the prompt, table layout —
//! and none of it ever reaches the domain model. The store lives only as
//! long as the session: it is seeded once at startup and discarded at exit.

mod args;
mod render;
mod repl;

fn main() {
    if let Err(e) = repl::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

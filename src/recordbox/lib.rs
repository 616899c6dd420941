//! # Recordbox Architecture
//!
//! Recordbox keeps a small list of records (id, contact, age) in a single
//! JSON file and exposes four operations on it: list, find by id, add and
//! remove. The binary is a thin shell around this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses flags, installs logging, maps errors to exit code │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  config.rs + dispatch.rs                                    │
//! │  - Validates flags into an Invocation, once                 │
//! │  - Runs it and writes the outcome to an output stream       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Business logic, returns CmdResult, never prints          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - RecordStore trait: load / persist / find_by_id           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two kinds of failure
//!
//! Bad flags, unreadable or corrupt files and encoding failures are
//! [`error::RecordError`]s and end the process with a non-zero status.
//! Adding an id that already exists, or removing one that does not, is not
//! an error: the store is left as it was and a message is written to the
//! output stream.
//!
//! ## Module Overview
//!
//! - [`api`]: facade over the commands
//! - [`commands`]: list, find, add, remove
//! - [`config`]: flag validation into [`config::Invocation`]
//! - [`dispatch`]: runs an invocation, renders output
//! - [`item`]: the `add` item literal grammar
//! - [`logging`]: tracing subscriber setup
//! - [`model`]: the [`model::Record`] type
//! - [`store`]: storage abstraction and implementations
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod item;
pub mod logging;
pub mod model;
pub mod store;

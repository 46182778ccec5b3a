//! # Pats Architecture
//!
//! Pats is a **UI-agnostic pattern-store library** with a thin CLI binary on
//! top. It stores named search-pattern definitions (regex plus engine flags)
//! as JSON files and builds invocations of an external search tool (grep by
//! default) from them.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, prints output, detects piped stdin     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract PatternStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! types, never touches stdout/stderr, and never calls `std::process::exit`.
//! Even whether stdin is a pipe arrives as an explicit boolean from the CLI
//! layer, so the core is testable without environment mutation. The one
//! deliberate exception is [`invocation::Invocation::execute`], which exists
//! to spawn the search engine and is only ever called from the CLI layer.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The pattern definition schema and its resolution
//! - [`invocation`]: Search command construction and execution
//! - [`init`]: Directory resolution and context wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod init;
pub mod invocation;
pub mod model;
pub mod store;

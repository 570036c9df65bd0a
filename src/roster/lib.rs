//! # Roster Architecture
//!
//! Roster is a **UI-agnostic record management library**. The CLI binary is
//! one possible client of it, not the application itself.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints output, prompts for confirms    │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ named events
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (manager.rs)                                    │
//! │  - Single entry point: RecordManager::dispatch(Event)       │
//! │  - Owns store, form state, and notices; reconciles after    │
//! │    every mutation by reloading from the backend             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Gateway Layer (gateway/)                                   │
//! │  - Abstract RecordGateway trait                             │
//! │  - HttpGateway (production), InMemoryGateway (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `manager.rs` inward (dispatcher, store, session, gateway trait),
//! code takes regular Rust arguments, returns regular Rust types, **never**
//! writes to stdout/stderr, and **never** calls `std::process::exit`. The
//! same core could back a TUI or a long-lived interactive shell.
//!
//! ## State Model
//!
//! All mutable state lives in fields of [`manager::RecordManager`]: the
//! last-known record snapshot and its filtered view ([`store::LocalStore`]),
//! the create-vs-update form state ([`session::FormState`]), and pending
//! notices ([`notify::NoticeBoard`]). Renderers read state by reference and
//! never mutate it. There is no ambient/global state anywhere.
//!
//! ## Testing Strategy
//!
//! 1. **State modules** (`store`, `session`, `notify`, `model`): unit tests
//!    of the reconciliation and validation logic. This is where the lion's
//!    share of testing lives.
//! 2. **Dispatcher** (`manager.rs`): scenario tests over `InMemoryGateway`,
//!    including injected remote failures.
//! 3. **CLI** (`tests/`): `assert_cmd` tests for argument handling, the
//!    validation short-circuit, and failure exit codes.
//!
//! ## Module Overview
//!
//! - [`manager`]: The event dispatcher, entry point for all operations
//! - [`store`]: Local cache and search filtering
//! - [`session`]: Form controller state machine
//! - [`gateway`]: Backend abstraction and implementations
//! - [`model`]: Core data types (`Student`, `FormValues`) and validation
//! - [`view`]: Pure rendering of tables and notices
//! - [`notify`]: Timed, self-dismissing notices
//! - [`config`]: Endpoint configuration
//! - [`editor`]: External editor integration for the edit form
//! - [`error`]: Error types

pub mod config;
pub mod editor;
pub mod error;
pub mod gateway;
pub mod manager;
pub mod model;
pub mod notify;
pub mod session;
pub mod store;
pub mod view;

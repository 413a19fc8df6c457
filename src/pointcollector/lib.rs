//! # PointCollector Architecture
//!
//! PointCollector keeps score for a set of named teams. It is a small library
//! with a command-line client, laid out so that the same core could sit under
//! a graphical dashboard.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompt loop, one-shot subcommands, rendering             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Action enum, list view order, optional chart/total views │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Registry and the TeamStore                      │
//! │  - Returns structured CmdResult types                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over Registry (registry.rs)  │
//! │  - All mutation rules: duplicates, unknown teams, no        │
//! │    negative totals                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TeamStore trait                                          │
//! │  - FileStore (teams.json), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `session.rs` inward, code never writes to stdout/stderr, never exits
//! the process and never assumes a terminal. Diagnostics go through `tracing`.
//!
//! The registry only lives in memory. Nothing is read from or written to disk
//! except on an explicit load or save, and a failed load leaves the teams in
//! memory untouched.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`session`]: Dashboard view state and action dispatch
//! - [`commands`]: Operations returning `CmdResult`
//! - [`registry`]: The team registry and its invariants
//! - [`store`]: Storage abstraction and implementations
//! - [`chart`]: Bar chart model with grow animation
//! - [`model`]: Core data types (`Team`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod session;
pub mod store;

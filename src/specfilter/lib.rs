//! # Specfilter Architecture
//!
//! Specfilter is a **predicate filtering library**: small composable
//! specifications that decide whether one item qualifies, and a filter that
//! applies a specification to a collection while keeping the original order.
//! The `specfilter` binary is one client of that library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, installs logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads the catalog, compiles queries, runs filters        │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (specification.rs, operators.rs, filter.rs)           │
//! │  - Generic over the item type, no I/O, no logging           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Core in one example
//!
//! ```
//! use specfilter::filter::{Filter, ItemFilter};
//! use specfilter::model::{Color, ColorSpec, Product, Size, SizeSpec};
//! use specfilter::specification::Specification;
//!
//! let items = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Banana", Color::Blue, Size::Medium),
//!     Product::new("House", Color::Green, Size::Large),
//! ];
//!
//! let spec = ColorSpec(Color::Green).and(SizeSpec(Size::Large));
//! let names: Vec<_> = ItemFilter
//!     .filter(items.as_slice(), &spec)
//!     .into_iter()
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["House"]);
//! ```
//!
//! ## Module Overview
//!
//! - [`specification`]: The `Specification` trait and its combinators
//! - [`operators`]: `&`, `|` and `!` through the `Spec` wrapper
//! - [`filter`]: Order-preserving filtering over slices
//! - [`attributes`]: Named item attributes and the generic `AttrSpec`
//! - [`query`]: Text queries compiled to boxed specifications
//! - [`model`]: `Product`, `Color`, `Size` and their typed specifications
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Catalog storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod operators;
pub mod query;
pub mod specification;
pub mod store;

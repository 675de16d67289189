//! # CLI
//!
//! One client of the specfilter library. This module is the only place that
//! knows about terminal I/O, exit codes and output formatting. For the overall
//! architecture see the crate-level documentation of `specfilter`.
//!
//! ## Catalog Selection
//!
//! Commands that read items use, in order: the `--catalog <FILE>` flag, the
//! `catalog` config key, and finally the built-in demo catalog. `specfilter
//! init` writes the demo items to `<data dir>/catalog.json` and points the
//! config at it, so the catalog can be edited by hand afterwards.
//!
//! ## Output
//!
//! Text output is colored unless `color` is turned off in the config.
//! `--json` prints the full `CmdResult` as pretty JSON instead. Diagnostics
//! go to stderr through `tracing`; `-v` raises the level to debug and
//! `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logging`: Subscriber setup and the event formatter
//! - `print`: Text rendering of command results
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod print;
pub mod setup;

pub use commands::run;

//! `exsync_core` is the core library for [exsync](https://github.com/ifiokjr/exsync). It keeps the examples in a project readme under test by copying them into a generated module that a documentation-test tool can run, and then running that tool followed by the project's test runner.
//!
//! ## Processing Pipeline
//!
//! ```text
//! README.md
//!   → Extraction (everything after the first `## Examples` heading)
//!   → Template (module header, generated-file warning, doc block, placeholder declaration)
//!   → Write (overwrites `src/Examples.elm`)
//!   → Doc-test command, then test command (both always run)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `exsync.toml`: readme and output paths, the marker, the module name and the two commands.
//! - [`project`] — The project root with its effective configuration.
//!
//! ## Key Types
//!
//! - [`GeneratedModule`] — The rendered module text and the embedded examples.
//! - [`RunReport`] — The exit status of both commands and the aggregate result.
//! - [`CheckResult`] — Whether the generated module on disk is up to date.
//! - [`ExsyncConfig`] — Configuration loaded from `exsync.toml`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use exsync_core::extract_and_run;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let report = extract_and_run(
//! 	&root.join("README.md"),
//! 	&root.join("src/Examples.elm"),
//! 	root,
//! )
//! .unwrap();
//!
//! if let Some(failure) = report.first_failure() {
//! 	eprintln!("{} failed with {}", failure.step, failure.status);
//! }
//! std::process::exit(report.exit_code());
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use extract::*;
pub use runner::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
mod extract;
pub mod project;
mod runner;

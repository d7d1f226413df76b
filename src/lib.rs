//! # Tracsis CLI
//!
//! A command-line client for the Tracsis project tracking service.
//!
//! ## Features
//!
//! - **Authentication**: Token-based login with lazy re-authentication
//! - **Task Management**: List assigned tasks, create new tasks
//! - **Work Logging**: Record work entries against tasks
//! - **Screenshots**: Capture task pages through a headless browser
//! - **Git Export**: Collect today's commits into a CSV work log
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracsis::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

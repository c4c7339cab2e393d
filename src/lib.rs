//! # Nutridesk
//!
//! Local storage for a nutritionist's desk: clients and their examinations,
//! a product catalogue with nutrient values, recipes built from products,
//! and physical activities with their energy cost.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nutridesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

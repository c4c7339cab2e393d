//! SQLite persistence for nutridesk.
//!
//! One [`db::Db`] handle owns the connection to the canonical store file.
//! Entity repositories borrow it mutably for the duration of a call:
//!
//! ```rust,no_run
//! use nutridesk::db::db::Db;
//! use nutridesk::libs::form_field::FormSchema;
//! use nutridesk::libs::product::{Product, Units};
//!
//! let mut db = Db::open("/tmp/nutridesk.sqlite", FormSchema::default());
//! let id = db.products().insert(&Product::new("Oats", "", 13.0, 6.5, 60.0, 370.0, Units::Grams))?;
//! let oats = db.products().get(id)?;
//! # Ok::<(), nutridesk::db::error::DbError>(())
//! ```
//!
//! Failures are returned as [`error::DbError`] and also appended to the
//! handle's deferred error log, which a front-end drains with
//! [`db::Db::drain_errors`]. Bulk reads (list, search, filter) return plain
//! vectors and silently drop rows that failed to load.

/// Connection lifecycle and self-healing open.
pub mod db;

pub mod encode;
pub mod error;
pub mod error_log;

/// Table definitions, creation and repair.
pub mod schema;

pub mod search;

pub mod activities;
pub mod clients;
pub mod examinations;
pub mod products;
pub mod recipes;

/// Whole-file import and export of the store.
pub mod transfer;

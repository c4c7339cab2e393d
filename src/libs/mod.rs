//! Domain types and application plumbing for nutridesk.
//!
//! Entities (clients, examinations, products, recipes, activities) are plain
//! data; persistence lives in [`crate::db`].

pub mod activity;
pub mod client;
pub mod config;
pub mod data_storage;
pub mod examination;
pub mod form_field;
pub mod messages;
pub mod product;
pub mod recipe;
pub mod view;

//! superlists - a small to-do list web application
//!
//! Visitors start a list from the homepage and keep adding items to it.
//! Lists and items are stored in SQLite and served over HTTP with axum.

pub mod config;
pub mod render;
pub mod storage;
pub mod web;

//! tuido — a full-screen terminal task tracker.
//!
//! Tasks have a description, a masked due date, and a completion flag;
//! the list persists to a versioned JSON file. The due-date field is the
//! interesting part: see [`mask`] for the live input formatter every edit
//! routes through.

pub mod config;
pub mod logging;
pub mod mask;
pub mod store;
pub mod task;
pub mod ui;

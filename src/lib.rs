//! Newsgauge - descriptive analytics for a news site
//!
//! This library computes three reports from a content catalog (authors and
//! articles) and a raw HTTP access log: the most-viewed articles, the
//! most-viewed authors, and the days whose request error rate exceeded a
//! threshold.
//!
//! # Architecture
//! - `analytics`: the aggregation pipeline (derived views and reports)
//! - `storage`: SeaORM backends and data access
//! - `interfaces`: user interfaces (CLI)
//! - `config`: configuration management
//! - `system`: logging and platform utilities

pub mod analytics;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod system;

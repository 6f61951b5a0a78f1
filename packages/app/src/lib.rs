//! Wiring for the sight-word activities.
//!
//! - [`config`] - environment-based configuration (API key, data file)
//! - [`file_store`] - JSON-file [`KeyValueStore`] with atomic rewrites
//! - [`activity`] - the activity router and the speak-then-release drivers
//!
//! [`KeyValueStore`]: sightwords_engine::KeyValueStore

pub mod activity;
pub mod config;
pub mod file_store;

pub use activity::{Activity, App};
pub use config::Config;
pub use file_store::FileStore;

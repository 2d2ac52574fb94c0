//! Core data models for the converter
//!
//! This module holds the data structures the pipeline builds, separated from
//! the parsing and generation logic that operates on them.
//!
//! ```rust
//! use proxy_omega::models::ProxyRecord;
//!
//! let record = ProxyRecord::new("1.2.3.4", 8080, "alice", "secret");
//! assert!(record.has_credentials());
//! ```

pub mod document;
pub mod profile;
pub mod proxy;

pub use document::{Document, Options, PROFILE_KEY_PREFIX};
pub use profile::{
    Condition, Credentials, ProfileAuth, ProfileEntry, ProfileType, ProxyScheme, ProxyServer,
    SwitchProfile, SwitchRule,
};
pub use proxy::ProxyRecord;

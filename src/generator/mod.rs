pub mod omega;

// Re-export the document builders
pub use omega::{build_document, build_profile, serialize};

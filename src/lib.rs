pub mod error;
pub mod generator;
pub mod interfaces;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main types for easier access
pub use error::{ConvertError, ParseError};
pub use interfaces::{convert_file, convert_lines, ConversionReport};
pub use models::{Document, ProfileEntry, ProxyRecord};
pub use settings::Settings;

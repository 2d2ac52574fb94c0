pub mod convert;

pub use convert::{convert_file, convert_lines, Conversion, ConversionReport};

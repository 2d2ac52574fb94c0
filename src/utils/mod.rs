pub mod file;

pub use file::{read_all_lines, write_all};

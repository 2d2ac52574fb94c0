pub mod proxy_list;

pub use proxy_list::{parse_line, parse_lines, ParseReport, SkippedLine};

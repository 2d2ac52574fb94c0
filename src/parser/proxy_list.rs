use std::fmt;

use log::{debug, warn};

use crate::error::ParseError;
use crate::models::ProxyRecord;

/// Separator between the fields of a proxy line.
pub const DELIMITER: char = ':';

/// host, port, username, password
pub const MAX_FIELDS: usize = 4;

/// Parse one `host:port[:username[:password]]` line into a record.
///
/// The line and every field are trimmed. Missing username and password
/// fields are filled with empty strings. A line with more than four fields
/// is rejected since fields cannot contain the delimiter, and so are IPv6
/// host literals. The port must be a bare run of ASCII digits.
pub fn parse_line(line: &str) -> Result<ProxyRecord, ParseError> {
    let line = line.trim();
    if line.starts_with('[') || line.starts_with("::") {
        return Err(ParseError::Ipv6Host(line.to_string()));
    }

    let parts: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    if parts.len() < 2 {
        return Err(ParseError::TooFewFields(parts.len()));
    }
    if parts.len() > MAX_FIELDS {
        return Err(ParseError::TooManyFields(parts.len()));
    }

    let mut fields = [""; MAX_FIELDS];
    fields[..parts.len()].copy_from_slice(&parts);
    let [host, port, username, password] = fields;

    if host.is_empty() {
        return Err(ParseError::EmptyHost);
    }
    if port.is_empty() {
        return Err(ParseError::EmptyPort);
    }

    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPort(port.to_string()));
    }
    let port_num = match port.parse::<u16>() {
        Ok(p) if p != 0 => p,
        _ => return Err(ParseError::InvalidPort(port.to_string())),
    };

    Ok(ProxyRecord::new(host, port_num, username, password))
}

/// Whether a line carries no proxy at all and should be passed over quietly.
fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// A malformed line that was left out of the conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the input.
    pub line_number: usize,
    pub content: String,
    pub reason: ParseError,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: '{}' ({})",
            self.line_number, self.content, self.reason
        )
    }
}

/// Outcome of parsing a whole proxy list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Valid records in input order.
    pub records: Vec<ProxyRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse every line of a proxy list, keeping valid records and collecting
/// malformed lines instead of stopping at the first one.
pub fn parse_lines<I, S>(lines: I) -> ParseReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = ParseReport::default();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if is_ignorable(line) {
            continue;
        }

        match parse_line(line) {
            Ok(record) => {
                debug!(
                    "Parsed proxy {}:{} (credentials: {})",
                    record.host,
                    record.port,
                    record.has_credentials()
                );
                report.records.push(record);
            }
            Err(reason) => {
                let skipped = SkippedLine {
                    line_number: index + 1,
                    content: line.trim().to_string(),
                    reason,
                };
                warn!("Skipping malformed {}", skipped);
                report.skipped.push(skipped);
            }
        }
    }

    report
}

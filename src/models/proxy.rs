//! Proxy model definitions
//!
//! A `ProxyRecord` is the transient result of parsing one line of the proxy
//! list. It only lives long enough to be folded into a profile entry.

/// One proxy taken from the input list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyRecord {
    pub host: String,
    pub port: u16,
    /// Empty when the line carried no username.
    pub username: String,
    /// Empty when the line carried no password.
    pub password: String,
}

impl ProxyRecord {
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Self {
        ProxyRecord {
            host: host.to_string(),
            port,
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Credentials are only usable when both halves are present.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_credentials() {
        assert!(ProxyRecord::new("1.2.3.4", 8080, "alice", "secret").has_credentials());
        assert!(!ProxyRecord::new("1.2.3.4", 8080, "alice", "").has_credentials());
        assert!(!ProxyRecord::new("1.2.3.4", 8080, "", "secret").has_credentials());
        assert!(!ProxyRecord::new("1.2.3.4", 8080, "", "").has_credentials());
    }
}

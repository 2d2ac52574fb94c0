//! SwitchyOmega profile shapes
//!
//! Field names follow the extension's options format, so every struct here
//! serializes in camelCase and keeps its declaration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Profile type tag understood by the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileType {
    FixedProfile,
    SwitchProfile,
}

/// Scheme used to reach a fixed-server proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyScheme {
    #[default]
    Http,
    Https,
    Socks4,
    Socks5,
}

impl ProxyScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyScheme::Http => "http",
            ProxyScheme::Https => "https",
            ProxyScheme::Socks4 => "socks4",
            ProxyScheme::Socks5 => "socks5",
        }
    }
}

impl fmt::Display for ProxyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProxyScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(ProxyScheme::Http),
            "https" => Ok(ProxyScheme::Https),
            "socks4" => Ok(ProxyScheme::Socks4),
            "socks5" => Ok(ProxyScheme::Socks5),
            other => Err(format!(
                "unknown proxy scheme '{}', expected one of http, https, socks4, socks5",
                other
            )),
        }
    }
}

/// A rule condition. Bypass conditions live in a profile's `bypassList`,
/// host wildcard conditions drive the auto-switch rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub condition_type: &'static str,
    pub pattern: String,
}

impl Condition {
    pub fn bypass(pattern: &str) -> Self {
        Condition {
            condition_type: "BypassCondition",
            pattern: pattern.to_string(),
        }
    }

    pub fn host_wildcard(pattern: &str) -> Self {
        Condition {
            condition_type: "HostWildcardCondition",
            pattern: pattern.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyServer {
    pub scheme: ProxyScheme,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Auth block, keyed by the proxy slot it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAuth {
    pub fallback_proxy: Credentials,
}

/// A fixed-server profile: one static proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub profile_type: ProfileType,
    pub name: String,
    pub bypass_list: Vec<Condition>,
    pub color: String,
    pub revision: String,
    pub fallback_proxy: ProxyServer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<ProfileAuth>,
}

impl ProfileEntry {
    pub fn host(&self) -> &str {
        &self.fallback_proxy.host
    }

    pub fn port(&self) -> u16 {
        self.fallback_proxy.port
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.auth.as_ref().map(|auth| &auth.fallback_proxy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRule {
    pub condition: Condition,
    pub profile_name: String,
}

/// Rule-based profile that picks another profile per request host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchProfile {
    pub profile_type: ProfileType,
    pub name: String,
    pub color: String,
    pub default_profile_name: String,
    pub rules: Vec<SwitchRule>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("http".parse::<ProxyScheme>(), Ok(ProxyScheme::Http));
        assert_eq!("SOCKS5".parse::<ProxyScheme>(), Ok(ProxyScheme::Socks5));
        assert!("ftp".parse::<ProxyScheme>().is_err());
    }

    #[test]
    fn test_profile_entry_omits_missing_auth() {
        let entry = ProfileEntry {
            profile_type: ProfileType::FixedProfile,
            name: "proxy-1".to_string(),
            bypass_list: vec![Condition::bypass("localhost")],
            color: "#ca0".to_string(),
            revision: "190a4bca575".to_string(),
            fallback_proxy: ProxyServer {
                scheme: ProxyScheme::Socks5,
                host: "5.6.7.8".to_string(),
                port: 3128,
            },
            auth: None,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["profileType"], json!("FixedProfile"));
        assert_eq!(
            value["bypassList"][0],
            json!({"conditionType": "BypassCondition", "pattern": "localhost"})
        );
        assert_eq!(
            value["fallbackProxy"],
            json!({"scheme": "socks5", "host": "5.6.7.8", "port": 3128})
        );
        assert!(value.get("auth").is_none());
    }
}

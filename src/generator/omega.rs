use linked_hash_map::LinkedHashMap;
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ConvertError;
use crate::models::{
    Condition, Credentials, Document, Options, ProfileAuth, ProfileEntry, ProfileType,
    ProxyRecord, ProxyScheme, ProxyServer, SwitchProfile, SwitchRule,
};
use crate::settings::Settings;

pub const SCHEMA_VERSION: u32 = 2;

/// Revision stamped on generated proxy profiles.
pub const REVISION_ID: &str = "190a4bca575";
/// Revision stamped on the placeholder profile.
pub const PLACEHOLDER_REVISION_ID: &str = "1908e30c31b";

pub const AUTO_SWITCH_NAME: &str = "auto switch";
pub const AUTO_SWITCH_COLOR: &str = "#99dd99";
pub const PLACEHOLDER_NAME: &str = "proxy";
pub const PLACEHOLDER_COLOR: &str = "#99ccee";
/// Built-in profile of the extension that connects without a proxy.
pub const DIRECT_PROFILE_NAME: &str = "direct";

const INDENT: &[u8] = b"    ";

fn bypass_list(settings: &Settings) -> Vec<Condition> {
    settings
        .bypass_list
        .iter()
        .map(|pattern| Condition::bypass(pattern))
        .collect()
}

/// Name of the profile generated for the record at `index` (0-based).
pub fn profile_name(prefix: &str, index: usize) -> String {
    format!("{}{}", prefix, index + 1)
}

/// Build the fixed-server profile for one record.
///
/// Auth is attached only when both username and password are present, so
/// the extension never sees blank credentials.
pub fn build_profile(record: &ProxyRecord, index: usize, settings: &Settings) -> ProfileEntry {
    let auth = if record.has_credentials() {
        Some(ProfileAuth {
            fallback_proxy: Credentials {
                username: record.username.clone(),
                password: record.password.clone(),
            },
        })
    } else {
        None
    };

    ProfileEntry {
        profile_type: ProfileType::FixedProfile,
        name: profile_name(&settings.profile_prefix, index),
        bypass_list: bypass_list(settings),
        color: settings.color.clone(),
        revision: REVISION_ID.to_string(),
        fallback_proxy: ProxyServer {
            scheme: settings.scheme,
            host: record.host.clone(),
            port: record.port,
        },
        auth,
    }
}

/// The constant rule profile selected at startup.
pub fn auto_switch_profile() -> SwitchProfile {
    SwitchProfile {
        profile_type: ProfileType::SwitchProfile,
        name: AUTO_SWITCH_NAME.to_string(),
        color: AUTO_SWITCH_COLOR.to_string(),
        default_profile_name: DIRECT_PROFILE_NAME.to_string(),
        rules: vec![
            SwitchRule {
                condition: Condition::host_wildcard("internal.example.com"),
                profile_name: DIRECT_PROFILE_NAME.to_string(),
            },
            SwitchRule {
                condition: Condition::host_wildcard("*.example.com"),
                profile_name: PLACEHOLDER_NAME.to_string(),
            },
        ],
    }
}

/// The constant fixed profile the auto-switch rules route to.
pub fn placeholder_profile(settings: &Settings) -> ProfileEntry {
    ProfileEntry {
        profile_type: ProfileType::FixedProfile,
        name: PLACEHOLDER_NAME.to_string(),
        bypass_list: bypass_list(settings),
        color: PLACEHOLDER_COLOR.to_string(),
        revision: PLACEHOLDER_REVISION_ID.to_string(),
        fallback_proxy: ProxyServer {
            scheme: ProxyScheme::Http,
            host: "127.0.0.1".to_string(),
            port: 80,
        },
        auth: None,
    }
}

/// Assemble the full options document, one profile per record in input order.
pub fn build_document(records: &[ProxyRecord], settings: &Settings) -> Document {
    let mut profiles = LinkedHashMap::new();
    for (index, record) in records.iter().enumerate() {
        let entry = build_profile(record, index, settings);
        profiles.insert(entry.name.clone(), entry);
    }

    info!("Generated {} proxy profile(s)", profiles.len());

    Document {
        schema_version: SCHEMA_VERSION,
        current_profile: AUTO_SWITCH_NAME.to_string(),
        options: Options::default(),
        auto_switch: auto_switch_profile(),
        placeholder: placeholder_profile(settings),
        profiles,
    }
}

/// Render the document as the extension's options JSON.
pub fn serialize(document: &Document) -> Result<String, ConvertError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

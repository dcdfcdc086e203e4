//! Display name resolution for monitored instances.
//!
//! A record's name comes from, in order: the user's custom name map, the
//! `service_name`/`service`/`name`/`job` labels, a hostname heuristic for
//! URL identifiers, and finally the raw identifier.

use std::collections::HashMap;

use thiserror::Error;
use tracing::warn;
use url::Url;

use statusboard_types::Labels;

/// `job` label values that name the exporter rather than the service.
const GENERIC_JOBS: &[&str] = &["blackbox", "prometheus"];

/// Labels consulted for a display name, in priority order.
const NAME_LABELS: &[&str] = &["service_name", "service", "name"];

/// Errors decoding a custom name map.
#[derive(Debug, Error)]
pub enum CustomNamesError {
    /// The input is not valid JSON.
    #[error("Invalid custom names JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is valid JSON but not an object.
    #[error("Custom names must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// User-supplied override table from instance identifier to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomNames(HashMap<String, String>);

impl CustomNames {
    /// Decode a custom name map, treating any failure as an empty map.
    ///
    /// Absent, empty and whitespace-only input is an empty map. Malformed
    /// input logs a warning.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        match Self::try_parse(raw) {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "ignoring custom names");
                Self::default()
            }
        }
    }

    /// Decode a custom name map, reporting malformed input.
    ///
    /// Entries whose value is not a string are skipped.
    pub fn try_parse(raw: &str) -> Result<Self, CustomNamesError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let serde_json::Value::Object(map) = value else {
            return Err(CustomNamesError::NotAnObject(json_kind(&value)));
        };
        let names = map
            .into_iter()
            .filter_map(|(instance, name)| match name {
                serde_json::Value::String(name) => Some((instance, name)),
                _ => None,
            })
            .collect();
        Ok(Self(names))
    }

    /// Look up the custom name for an instance identifier.
    pub fn get(&self, instance: &str) -> Option<&str> {
        self.0.get(instance).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for CustomNames {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// How a matching host rule names the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleName {
    /// Always the same name.
    Fixed(&'static str),
    /// Pick a name by the status code that appears in the identifier.
    ByStatusCode {
        success: &'static str,
        error: &'static str,
        other: &'static str,
    },
}

/// A known domain and the display name it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRule {
    /// Substring matched against the URL's hostname.
    pub domain: &'static str,
    pub name: RuleName,
}

impl HostRule {
    /// Check if this rule applies to a hostname.
    pub fn matches(&self, host: &str) -> bool {
        host.contains(self.domain)
    }

    /// Display name for a matching instance identifier.
    pub fn resolve(&self, instance: &str) -> &'static str {
        match self.name {
            RuleName::Fixed(name) => name,
            RuleName::ByStatusCode {
                success,
                error,
                other,
            } => {
                if instance.contains("200") {
                    success
                } else if instance.contains("500") {
                    error
                } else {
                    other
                }
            }
        }
    }
}

/// Known domains, checked in order. First match wins.
pub const HOST_RULES: &[HostRule] = &[
    HostRule {
        domain: "google.com",
        name: RuleName::Fixed("Google"),
    },
    HostRule {
        domain: "github.com",
        name: RuleName::Fixed("GitHub"),
    },
    HostRule {
        domain: "httpbin.org",
        name: RuleName::ByStatusCode {
            success: "HTTPBin Success Test",
            error: "HTTPBin Error Test",
            other: "HTTPBin Test",
        },
    },
];

/// Resolve the display name for an instance.
pub fn display_name(instance: &str, labels: &Labels, custom: &CustomNames) -> String {
    if let Some(name) = custom.get(instance) {
        return name.to_string();
    }

    let label = |key: &str| labels.get(key).map(String::as_str).filter(|v| !v.is_empty());

    if let Some(name) = NAME_LABELS.iter().find_map(|key| label(key)) {
        return name.to_string();
    }

    if let Some(job) = label("job").filter(|job| !GENERIC_JOBS.contains(job)) {
        return job.to_string();
    }

    name_from_instance(instance)
}

/// Derive a readable name from an instance identifier.
///
/// URLs are named after their host (known domains get a friendly name, a
/// leading `www.` is dropped). Anything else, including URLs that fail to
/// parse, is returned as-is.
pub fn name_from_instance(instance: &str) -> String {
    if !instance.contains("://") {
        return instance.to_string();
    }

    let Ok(url) = Url::parse(instance) else {
        return instance.to_string();
    };
    let Some(host) = url.host_str() else {
        return instance.to_string();
    };

    if let Some(rule) = HOST_RULES.iter().find(|rule| rule.matches(host)) {
        return rule.resolve(instance).to_string();
    }

    host.strip_prefix("www.").unwrap_or(host).to_string()
}

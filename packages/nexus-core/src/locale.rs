//! User-facing strings.
//!
//! The interface speaks a single locale (es-ES). Strings live in an embedded
//! JSON catalog so front ends never hardcode copy.

use serde_json::Value;
use std::collections::HashMap;

/// The only locale shipped.
pub const LOCALE: &str = "es-ES";

#[derive(Clone, Debug)]
pub struct Locale {
    locale: String,
    messages: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::spanish()
    }
}

impl Locale {
    /// The embedded es-ES catalog.
    pub fn spanish() -> Self {
        Self {
            locale: LOCALE.to_string(),
            messages: parse_catalog(include_str!("../i18n/es.json")),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up `key`, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up `key` and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.t(key);
        for (param, replacement) in params {
            value = value.replace(&format!("{{{param}}}"), replacement);
        }
        value
    }
}

fn parse_catalog(raw: &str) -> HashMap<String, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
        _ => {
            tracing::warn!("Locale catalog is not a JSON object, using keys as text");
            HashMap::new()
        }
    }
}

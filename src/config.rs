//! Footer configuration and the permissive override merge.
//!
//! Callers hand over a partial JSON object. Recognized keys replace the
//! defaults when their value has the same JSON kind as the default;
//! anything else is ignored. Unknown keys are carried through untouched
//! so that downstream consumers can read them back with
//! [`FooterConfig::get`].

use std::fs;
use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Resolved footer configuration
///
/// Field names on the wire follow the keys accepted by the tag-manager
/// deployments (`corPrimaria`, `mostrarCanais`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterConfig {
    /// Accent color for headings and social icons
    #[serde(rename = "corPrimaria")]
    pub primary_color: String,
    /// Body text and link color
    #[serde(rename = "corTexto")]
    pub text_color: String,
    /// Background of the footer and of the navigation bar
    #[serde(rename = "corFundo")]
    pub background_color: String,
    #[serde(rename = "textoCopyright")]
    pub copyright_text: String,
    /// Legal company name shown under the copyright line
    #[serde(rename = "textoEmpresa")]
    pub company_text: String,
    /// Tax identifier (CNPJ)
    #[serde(rename = "cnpj")]
    pub tax_id: String,
    /// Registered address
    #[serde(rename = "endereco")]
    pub address: String,
    #[serde(rename = "mostrarCanais")]
    pub show_channels: bool,
    #[serde(rename = "mostrarLinks")]
    pub show_links: bool,
    #[serde(rename = "mostrarParceiros")]
    pub show_partners: bool,
    /// Whether to build the fixed bottom navigation bar
    #[serde(rename = "mostrarNavegacao")]
    pub show_navigation: bool,
    /// Unrecognized keys, passed through as given
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FooterConfig {
    /// Defaults with the copyright line stamped for `year`
    pub fn defaults_for_year(year: i32) -> Self {
        Self {
            primary_color: "#EA1D2C".to_string(),
            text_color: "#3E3E3E".to_string(),
            background_color: "#FFFFFF".to_string(),
            copyright_text: format!(
                "© Copyright {} - iFood - Todos os direitos reservados",
                year
            ),
            company_text: "iFood com Agência de Restaurantes Online S.A.".to_string(),
            tax_id: "14.380.200/0001-21".to_string(),
            address: "Avenida dos Autonomistas, nº 1496, Vila Yara, Osasco/SP - CEP 06.020-902"
                .to_string(),
            show_channels: true,
            show_links: true,
            show_partners: true,
            show_navigation: false,
            extra: Map::new(),
        }
    }

    /// Look up any key, recognized or passed through, by its wire name
    pub fn get(&self, key: &str) -> Option<Value> {
        match self.to_json() {
            Value::Object(mut map) => map.remove(key),
            _ => None,
        }
    }

    /// The full configuration as a JSON object
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self::defaults_for_year(chrono::Local::now().year())
    }
}

/// Merge `overrides` over the defaults for the current year
pub fn resolve(overrides: &Map<String, Value>) -> FooterConfig {
    resolve_for_year(overrides, chrono::Local::now().year())
}

/// Merge `overrides` over the defaults for `year`
pub fn resolve_for_year(overrides: &Map<String, Value>, year: i32) -> FooterConfig {
    let defaults = FooterConfig::defaults_for_year(year);
    let mut merged = match defaults.to_json() {
        Value::Object(map) => map,
        _ => return defaults,
    };

    for (key, value) in overrides {
        if let Some(current) = merged.get(key) {
            if !same_kind(current, value) {
                log::debug!("ignoring override for '{}': expected {}", key, kind_name(current));
                continue;
            }
        }
        merged.insert(key.clone(), value.clone());
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_else(|e| {
        log::warn!("override merge produced an unreadable config ({}); using defaults", e);
        defaults
    })
}

/// Parse overrides from JSON text; the top level must be an object
pub fn parse_overrides(json: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::ConfigError(format!(
            "overrides must be a JSON object, got {}",
            kind_name(&other)
        ))),
    }
}

/// Read overrides from a JSON file
pub fn load_overrides(path: &Path) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path)?;
    parse_overrides(&text)
}

/// Parse a `KEY=VALUE` pair. The value is read as JSON when it parses
/// (`true`, `12`, `"x"`), otherwise kept as a plain string.
pub fn parse_assignment(pair: &str) -> Result<(String, Value)> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| Error::InvalidOverride(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidOverride(pair.to_string()));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

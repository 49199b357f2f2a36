//! Tip records
//!
//! A [`Tip`] is one advisory entry from the data document. Text fields are
//! deserialized leniently: absent or `null` values become empty strings, and
//! scalar values are stringified, so a sloppy data file never fails a
//! comparison later on.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One advisory record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tip {
    #[serde(default, deserialize_with = "text")]
    pub topic: String,
    #[serde(default, deserialize_with = "text")]
    pub category: String,
    /// Only present in the risk-carrying variant of the data file
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub risk: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: String,
    #[serde(default, deserialize_with = "text")]
    pub actions: String,
    /// Resource URL, rendered only as a hyperlink
    #[serde(
        default,
        deserialize_with = "optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub resources: Option<String>,
    /// Fields this crate doesn't know about, carried through export untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Addressable fields of a [`Tip`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TipField {
    Topic,
    Category,
    Risk,
    Description,
    Actions,
    Resources,
}

impl TipField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipField::Topic => "topic",
            TipField::Category => "category",
            TipField::Risk => "risk",
            TipField::Description => "description",
            TipField::Actions => "actions",
            TipField::Resources => "resources",
        }
    }

    /// Parse a field name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "topic" => Some(TipField::Topic),
            "category" => Some(TipField::Category),
            "risk" => Some(TipField::Risk),
            "description" => Some(TipField::Description),
            "actions" => Some(TipField::Actions),
            "resources" | "resource" => Some(TipField::Resources),
            _ => None,
        }
    }
}

impl Tip {
    /// Create a tip with the four always-present text fields
    pub fn new(
        topic: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        actions: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            category: category.into(),
            description: description.into(),
            actions: actions.into(),
            ..Default::default()
        }
    }

    pub fn with_risk(mut self, risk: impl Into<String>) -> Self {
        self.risk = Some(risk.into());
        self
    }

    pub fn with_resources(mut self, resources: impl Into<String>) -> Self {
        self.resources = Some(resources.into());
        self
    }

    /// Value of a field; missing values read as the empty string
    pub fn field(&self, field: TipField) -> &str {
        match field {
            TipField::Topic => &self.topic,
            TipField::Category => &self.category,
            TipField::Risk => self.risk.as_deref().unwrap_or(""),
            TipField::Description => &self.description,
            TipField::Actions => &self.actions,
            TipField::Resources => self.resources.as_deref().unwrap_or(""),
        }
    }

    /// Lower-cased, space-joined text of every field, used for free-text search.
    /// Risk only contributes when the record carries it.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(6);
        parts.push(&self.topic);
        parts.push(&self.category);
        if let Some(risk) = self.risk.as_deref() {
            parts.push(risk);
        }
        parts.push(&self.description);
        parts.push(&self.actions);
        parts.push(self.resources.as_deref().unwrap_or(""));
        parts.join(" ").to_lowercase()
    }
}

/// Distinct non-empty values of `field`, case-insensitively de-duplicated
/// (first spelling wins) and sorted case-insensitively
pub fn distinct_values(tips: &[Tip], field: TipField) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    for tip in tips {
        let value = tip.field(field);
        if value.is_empty() {
            continue;
        }
        let key = value.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            out.push(value.to_string());
        }
    }
    out.sort_by_key(|v| v.to_lowercase());
    out
}

fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(stringify(value).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(stringify(value))
}

//! Seed record types.
//!
//! Every field is optional in the seed file and a value of the wrong JSON type is
//! treated as missing, so one sloppy record never takes the whole store down.
//! The `is_active` flags are the exception: a present key decides by truthiness.
//! Callers read fields through the accessors, which apply the defaults.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::normalize::{non_empty, safe};

/// One employer + role listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "or_default")]
    pub employer: Employer,
    #[serde(default, deserialize_with = "or_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "string_list")]
    pub skills: Vec<String>,
    #[serde(default, rename = "hiringLeads", deserialize_with = "object_list")]
    pub hiring_leads: Vec<HiringLead>,
    /// Passed through to search results verbatim.
    #[serde(default, deserialize_with = "value_list")]
    pub links: Vec<Value>,
    #[serde(default, deserialize_with = "present_flag")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Employer {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub linkedin: Option<String>,
    #[serde(default, rename = "boothCode", deserialize_with = "lenient")]
    pub booth_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Role {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub function: Option<String>,
    #[serde(default, deserialize_with = "present_flag")]
    pub is_active: Option<bool>,
}

/// A recruiter or hiring manager attached to a listing.
/// `name` and `linkedin_url` are personal data and gated on `opt_in`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HiringLead {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub opt_in: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_hiring_manager: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_on_site: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub timeslot: Option<String>,
}

impl Record {
    /// Record flag, then role flag, then active.
    pub fn is_active(&self) -> bool {
        self.is_active.or(self.role.is_active).unwrap_or(true)
    }

    /// Role title, function and skills joined for fuzzy matching. Empty parts are skipped.
    pub fn searchable_text(&self) -> String {
        let skills = self
            .skills
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        [self.role.title(), self.role.function(), skills.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Employer {
    pub fn name(&self) -> &str {
        safe(self.name.as_deref())
    }

    /// Stored summary, or a generic participation line when blank.
    pub fn summary_or_default(&self) -> String {
        match non_empty(self.summary.as_deref()) {
            Some(summary) => summary.to_string(),
            None => format!("{} is participating in the event.", self.name()),
        }
    }

    pub fn website(&self) -> &str {
        safe(self.website.as_deref())
    }

    pub fn linkedin(&self) -> &str {
        safe(self.linkedin.as_deref())
    }

    pub fn booth_code(&self) -> &str {
        safe(self.booth_code.as_deref())
    }
}

impl Role {
    pub fn title(&self) -> &str {
        safe(self.title.as_deref())
    }

    pub fn function(&self) -> &str {
        safe(self.function.as_deref())
    }
}

impl HiringLead {
    pub fn consented(&self) -> bool {
        self.opt_in.unwrap_or(false)
    }

    pub fn is_hiring_manager(&self) -> bool {
        self.is_hiring_manager.unwrap_or(false)
    }

    pub fn is_on_site(&self) -> bool {
        self.is_on_site.unwrap_or(false)
    }

    /// The timeslot, when one is actually set.
    pub fn timeslot(&self) -> Option<&str> {
        non_empty(self.timeslot.as_deref())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tolerant field deserializers
// ────────────────────────────────────────────────────────────────────────────

/// Wrong-typed or null values become `None` instead of failing the record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// A key that is present always decides, whatever its type: `null`, `0`, `""`
/// and empty containers read as `false`, anything else as `true`.
fn present_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let truthy = match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    };
    Ok(Some(truthy))
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

fn value_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

/// Non-string entries become `""` so positions are preserved.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_list(deserializer)?
        .into_iter()
        .map(|item| match item {
            Value::String(s) => s,
            _ => String::new(),
        })
        .collect())
}

/// Non-object entries are dropped.
fn object_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(value_list(deserializer)?
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

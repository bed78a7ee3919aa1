//! Employer Lookup — exact, normalized name match.
//!
//! Unlike role search there is no fuzziness here: a student asking about
//! "Acme" should never be told about "Acme Labs".

use serde::Serialize;

use crate::models::Employer;
use crate::normalize::norm;
use crate::store::RecordStore;

/// Lookup result. Serializes as exactly `{"found": false}` on a miss.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerLookup {
    pub found: bool,
    #[serde(flatten)]
    pub profile: Option<EmployerProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub name: String,
    pub summary: String,
    pub website: String,
    pub linkedin: String,
    pub booth_code: String,
}

impl EmployerLookup {
    pub fn not_found() -> Self {
        Self {
            found: false,
            profile: None,
        }
    }
}

impl From<&Employer> for EmployerProfile {
    fn from(employer: &Employer) -> Self {
        Self {
            name: employer.name().to_string(),
            summary: employer.summary_or_default(),
            website: employer.website().to_string(),
            linkedin: employer.linkedin().to_string(),
            booth_code: employer.booth_code().to_string(),
        }
    }
}

/// Returns the first record, in pool order, whose trimmed lower-cased employer
/// name equals the trimmed lower-cased query. Inactive listings still count.
pub fn lookup_employer(store: &RecordStore, name: &str) -> EmployerLookup {
    let wanted = norm(Some(name));

    store
        .records()
        .iter()
        .find(|r| norm(r.employer.name.as_deref()) == wanted)
        .map(|r| EmployerLookup {
            found: true,
            profile: Some(EmployerProfile::from(&r.employer)),
        })
        .unwrap_or_else(EmployerLookup::not_found)
}

//! Contact Selector — picks who a student should talk to at a booth.
//!
//! Ranking is purely additive over three signals; consent is applied after
//! ranking so a high-value lead without `opt_in` still surfaces, but anonymised.

use serde::Serialize;

use crate::models::HiringLead;
use crate::normalize::{non_empty, safe};

/// Maximum contacts returned per listing.
pub const MAX_CONTACTS: usize = 2;

const HIRING_MANAGER_WEIGHT: u32 = 3;
const ON_SITE_WEIGHT: u32 = 2;
const TIMESLOT_WEIGHT: u32 = 1;

/// A contact as exposed in search results.
/// `name` and `linkedin` are `None` unless the lead opted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub title: String,
    pub name: Option<String>,
    pub linkedin: Option<String>,
    pub timeslot: Option<String>,
}

/// Additive contact score: hiring manager 3, on site 2, has a timeslot 1.
pub fn contact_score(lead: &HiringLead) -> u32 {
    let mut score = 0;
    if lead.is_hiring_manager() {
        score += HIRING_MANAGER_WEIGHT;
    }
    if lead.is_on_site() {
        score += ON_SITE_WEIGHT;
    }
    if lead.timeslot().is_some() {
        score += TIMESLOT_WEIGHT;
    }
    score
}

/// Ranks leads by `contact_score` (stable on ties), keeps the top two and redacts
/// personal fields for anyone without consent.
pub fn select_contacts(leads: &[HiringLead]) -> Vec<ContactView> {
    let mut ranked: Vec<&HiringLead> = leads.iter().collect();
    // sort_by_key is stable, so equal scores keep seed order
    ranked.sort_by_key(|lead| std::cmp::Reverse(contact_score(lead)));

    ranked
        .into_iter()
        .take(MAX_CONTACTS)
        .map(redact)
        .collect()
}

fn redact(lead: &HiringLead) -> ContactView {
    let consented = lead.consented();

    ContactView {
        title: safe(lead.title.as_deref()).to_string(),
        name: consented.then(|| safe(lead.name.as_deref()).to_string()),
        linkedin: if consented {
            non_empty(lead.linkedin_url.as_deref()).map(str::to_string)
        } else {
            None
        },
        timeslot: lead.timeslot().map(str::to_string),
    }
}

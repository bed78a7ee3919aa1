//! Fuzzy Matcher — "who is hiring for role X".
//!
//! Scores every active record's searchable text against the query and keeps the
//! best `top_k`. Searchable strings and scores are rebuilt per request; the
//! store is never touched.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::models::Record;
use crate::normalize::norm;
use crate::search::contacts::{select_contacts, ContactView};
use crate::search::similarity::weighted_ratio;
use crate::store::RecordStore;

pub const DEFAULT_TOP_K: i64 = 3;

/// One search hit as returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub employer_name: String,
    pub role_title: String,
    pub booth_code: String,
    pub contacts: Vec<ContactView>,
    pub links: Vec<Value>,
}

/// Clamps a requested result count to at least one.
pub fn effective_top_k(requested: i64) -> usize {
    usize::try_from(requested.max(1)).unwrap_or(usize::MAX)
}

/// Ranks active records against `query` and returns at most `top_k` hits.
///
/// Algorithm:
/// 1. Keep records passing the active rule (record flag, then role flag, then true)
/// 2. Build `title function skills` per record
/// 3. Score with `weighted_ratio`
/// 4. Stable sort: exact title matches first, then score descending, so equal
///    keys keep pool order
/// 5. Take `top_k` and project each record into a `SearchHit`
pub fn search_roles(store: &RecordStore, query: &str, top_k: usize) -> Vec<SearchHit> {
    let wanted = norm(Some(query));
    let mut scored: Vec<(bool, f64, &Record)> = store
        .active()
        .map(|record| {
            let exact = !wanted.is_empty() && norm(Some(record.role.title())) == wanted;
            (exact, weighted_ratio(query, &record.searchable_text()), record)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
    });
    scored.truncate(top_k);

    debug!(
        "Role search {:?}: {} hits, best score {:?}",
        query,
        scored.len(),
        scored.first().map(|(_, score, _)| *score)
    );

    scored
        .into_iter()
        .map(|(_, _, record)| to_hit(record))
        .collect()
}

fn to_hit(record: &Record) -> SearchHit {
    SearchHit {
        employer_name: record.employer.name().to_string(),
        role_title: record.role.title().to_string(),
        booth_code: record.employer.booth_code().to_string(),
        contacts: select_contacts(&record.hiring_leads),
        links: record.links.clone(),
    }
}

//! Similarity scoring for role search.
//!
//! A weighted ratio in the style of the usual fuzzy-matching toolkits: plain edit
//! similarity, best-window partial similarity, and token sort/set comparisons,
//! combined by length ratio. Tolerates word reordering, partial overlap, case and
//! punctuation differences. Scores are `0.0..=100.0`.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Weight applied to the token-based scores.
const UNBASE_SCALE: f64 = 0.95;
/// Length ratio below which both strings are compared whole.
const WHOLE_STRING_LEN_RATIO: f64 = 1.5;
/// Length ratio above which partial matches are heavily discounted.
const LONG_HAYSTACK_LEN_RATIO: f64 = 8.0;

/// Weighted similarity between a query and a candidate, `0.0..=100.0`.
/// Either side blank after preprocessing scores `0.0`.
pub fn weighted_ratio(query: &str, candidate: &str) -> f64 {
    let a = preprocess(query);
    let b = preprocess(candidate);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(&a, &b);
    if len_ratio < WHOLE_STRING_LEN_RATIO {
        return base.max(token_ratio(&a, &b) * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < LONG_HAYSTACK_LEN_RATIO {
        0.9
    } else {
        0.6
    };

    base.max(partial_ratio(&a, &b) * partial_scale)
        .max(partial_token_ratio(&a, &b) * UNBASE_SCALE * partial_scale)
}

/// Lowercases, turns anything non-alphanumeric into a space and collapses runs.
fn preprocess(s: &str) -> String {
    let mapped: String = s
        .chars()
        .flat_map(|c| {
            let c = if c.is_alphanumeric() { c } else { ' ' };
            c.to_lowercase()
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Best `ratio` of the shorter string against every equal-length window of the longer.
fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short_len = short.chars().count();
    if short_len == 0 {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let window: String = window.iter().collect();
        best = best.max(ratio(short, &window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn tokens(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

fn sorted_tokens(s: &str) -> String {
    let mut words: Vec<&str> = s.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

fn join(set: &BTreeSet<&str>) -> String {
    set.iter().copied().collect::<Vec<_>>().join(" ")
}

fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Compares the shared tokens against each side's leftovers.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);

    let shared: BTreeSet<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: BTreeSet<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: BTreeSet<&str> = tokens_b.difference(&tokens_a).copied().collect();

    // one side's words are all contained in the other
    if !shared.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let shared_str = join(&shared);
    let combine = |rest: &BTreeSet<&str>| {
        if shared_str.is_empty() {
            join(rest)
        } else {
            format!("{shared_str} {}", join(rest))
        }
    };
    let combined_a = combine(&only_a);
    let combined_b = combine(&only_b);

    let mut best = ratio(&combined_a, &combined_b);
    if !shared_str.is_empty() {
        best = best
            .max(ratio(&shared_str, &combined_a))
            .max(ratio(&shared_str, &combined_b));
    }
    best
}

fn token_ratio(a: &str, b: &str) -> f64 {
    token_sort_ratio(a, b).max(token_set_ratio(a, b))
}

/// Any shared word is a full partial match; otherwise partial-match the sorted tokens.
fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokens(a);
    let tokens_b = tokens(b);
    if tokens_a.intersection(&tokens_b).next().is_some() {
        return 100.0;
    }
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

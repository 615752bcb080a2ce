//! Read-only analysis queries over a loaded catalog.
//!
//! Every function here is pure: it takes the catalog snapshot (or a
//! single title) and never mutates its input, so repeated and concurrent
//! calls over the same snapshot return identical results.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::Title;

/// Format of the catalog's `date_added` field (e.g. "January 1, 2020").
pub const DATE_ADDED_FORMAT: &str = "%B %d, %Y";

/// Sentinel returned by [`release_addition_delta`] when the delta cannot
/// be computed. Callers must treat it as "unknown", never as a real day
/// count, and must not feed it into aggregate statistics.
pub const UNKNOWN_DELTA: i64 = i64::MAX;

/// Placeholder country value, excluded from frequency counts and
/// returned when no country qualifies.
const UNKNOWN_COUNTRY: &str = "Unknown";

/// Parse a `date_added` value against [`DATE_ADDED_FORMAT`].
///
/// `None` is an expected outcome for rows whose source field was empty
/// or malformed.
pub fn parse_date_added(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_ADDED_FORMAT).ok()
}

/// Country with the most titles.
///
/// Empty, whitespace-only, and literal `"Unknown"` countries are
/// excluded from counting. Ties break toward the country encountered
/// first in catalog order, so the result is stable across repeated calls
/// on the same snapshot. Returns `"Unknown"` when no country qualifies.
pub fn most_common_country(titles: &[Title]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for title in titles {
        let country = title.country.as_str();
        if country.trim().is_empty() || country == UNKNOWN_COUNTRY {
            continue;
        }
        let count = counts.entry(country).or_insert(0);
        if *count == 0 {
            first_seen.push(country);
        }
        *count += 1;
    }

    let mut best = UNKNOWN_COUNTRY;
    let mut best_count = 0;
    for country in first_seen {
        let count = counts[country];
        if count > best_count {
            best = country;
            best_count = count;
        }
    }
    best.to_string()
}

/// Days from January 1 of the release year to the catalog-addition date.
///
/// Negative when the addition predates January 1 of the release year.
/// Returns [`UNKNOWN_DELTA`] when the release year is unset (0) or
/// `date_added` does not parse; this sentinel is the one place the
/// analyzer substitutes a value instead of failing the caller.
pub fn release_addition_delta(title: &Title) -> i64 {
    if title.release_year == 0 {
        return UNKNOWN_DELTA;
    }
    let Some(release) = NaiveDate::from_ymd_opt(title.release_year as i32, 1, 1) else {
        return UNKNOWN_DELTA;
    };
    match parse_date_added(&title.date_added) {
        Some(added) => added.signed_duration_since(release).num_days(),
        None => UNKNOWN_DELTA,
    }
}

/// One `"Title: N days"` line per catalog entry, in catalog order.
///
/// Unknown deltas render as `"unknown"`, never as a day count.
pub fn release_delta_summaries(titles: &[Title]) -> Vec<String> {
    titles
        .iter()
        .map(|title| {
            let delta = release_addition_delta(title);
            if delta == UNKNOWN_DELTA {
                format!("{}: unknown", title.title)
            } else {
                format!("{}: {} days", title.title, delta)
            }
        })
        .collect()
}

/// Return the titles reordered by catalog-addition date.
///
/// The input is left untouched. Unparseable dates sort after all
/// parseable dates regardless of direction; among themselves they keep
/// their input order (the sort is stable), so applying the same sort
/// twice is a no-op reordering.
pub fn sort_by_date_added(titles: &[Title], ascending: bool) -> Vec<Title> {
    let mut keyed: Vec<(Option<NaiveDate>, &Title)> = titles
        .iter()
        .map(|title| (parse_date_added(&title.date_added), title))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => {
            if ascending {
                a.cmp(b)
            } else {
                b.cmp(a)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, title)| title.clone()).collect()
}

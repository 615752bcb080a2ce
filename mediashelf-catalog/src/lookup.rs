//! Identifier validation and catalog lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CatalogError;
use crate::types::Title;

/// Shape of a catalog identifier: lowercase `s` followed by ASCII
/// digits, nothing else.
static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^s[0-9]+$").unwrap());

/// Find a title by identifier.
///
/// Returns `Err(InvalidIdentifier)` when the candidate does not match
/// the expected shape, and `Ok(None)` when it is well-formed but matches
/// no entry — the two conditions are distinct. When duplicate
/// identifiers exist, the first match in catalog order wins. Linear scan
/// by design; catalogs stay in the single-digit thousands.
pub fn find_by_id<'a>(titles: &'a [Title], id: &str) -> Result<Option<&'a Title>, CatalogError> {
    if !ID_PATTERN.is_match(id) {
        return Err(CatalogError::invalid_identifier(format!(
            "Invalid title identifier {id:?}: expected 's' followed by a number, e.g. 's1'"
        )));
    }
    Ok(titles.iter().find(|title| title.id == id))
}

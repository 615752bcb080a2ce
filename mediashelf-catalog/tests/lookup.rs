use mediashelf_catalog::{CatalogError, Title, TitleKind, find_by_id};

fn title(id: &str, name: &str) -> Title {
    Title {
        id: id.to_string(),
        kind: TitleKind::Movie,
        title: name.to_string(),
        director: String::new(),
        cast: String::new(),
        country: String::new(),
        date_added: String::new(),
        release_year: 0,
        rating: String::new(),
        duration: "N/A".to_string(),
        genres: String::new(),
        description: String::new(),
    }
}

#[test]
fn finds_title_by_identifier() {
    let titles = vec![title("s1", "First"), title("s2", "Second")];
    let found = find_by_id(&titles, "s1").unwrap().unwrap();
    assert_eq!(found.title, "First");
}

#[test]
fn well_formed_identifier_with_no_match_is_not_found() {
    let titles = vec![title("s1", "First")];
    assert!(find_by_id(&titles, "s999").unwrap().is_none());
}

#[test]
fn malformed_identifiers_are_rejected() {
    let titles = vec![title("s1", "First")];
    for bad in ["", "s", "1", "x1", "s1x", "S1", " s1", "s1 ", "s 1", "s-1"] {
        let err = find_by_id(&titles, bad).unwrap_err();
        assert!(
            matches!(err, CatalogError::InvalidIdentifier(_)),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn rejection_message_names_expected_format() {
    let err = find_by_id(&[], "bogus").unwrap_err();
    assert!(err.to_string().contains("'s' followed by a number"));
}

#[test]
fn non_ascii_digits_are_rejected() {
    let titles = vec![title("s1", "First")];
    assert!(find_by_id(&titles, "s١").is_err());
}

#[test]
fn duplicate_identifiers_return_first_match() {
    let titles = vec![title("s1", "First Copy"), title("s1", "Second Copy")];
    let found = find_by_id(&titles, "s1").unwrap().unwrap();
    assert_eq!(found.title, "First Copy");
}

#[test]
fn lookup_never_returns_title_on_format_error() {
    let titles = vec![title("s1", "First")];
    // "s1 " would equal no stored id anyway, but the format check must
    // fire before any scan happens.
    assert!(find_by_id(&titles, "s1 ").is_err());
}

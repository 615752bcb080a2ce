//! CSV record loader for the media catalog.
//!
//! Consumes the fixed-schema titles CSV (header row discarded unread,
//! fields in the order identifier, kind, title, director, cast, country,
//! date added, release year, rating, duration, genres, description) and
//! produces the ordered `Title` sequence plus skip/parse diagnostics.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::{Title, TitleKind};

/// Minimum number of fields for a row to be structurally valid.
///
/// Rows at least this wide still load when the trailing columns are
/// absent; the missing positions read as empty fields.
pub const MIN_ROW_FIELDS: usize = 7;

/// Policy for a release-year field that is non-empty but not numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseErrorPolicy {
    /// Keep the row with the year set to 0 (unknown). The default.
    #[default]
    DefaultToZero,
    /// Drop the whole row.
    SkipRow,
}

/// Options governing a single load.
///
/// Under lenient loading (the default) malformed rows and field parse
/// failures are skipped or downgraded and reported; `strict` escalates
/// the first such condition into a fatal [`CatalogError::MalformedRow`].
/// The two behaviors never mix within one load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub strict: bool,
    pub on_parse_error: ParseErrorPolicy,
}

/// A recoverable problem encountered during a lenient load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// A structurally invalid row was dropped.
    RowSkipped { line: u64, reason: String },
    /// A field failed semantic parsing and was downgraded per
    /// [`ParseErrorPolicy::DefaultToZero`].
    FieldParseFailure {
        line: u64,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowSkipped { line, reason } => {
                write!(f, "row skipped at line {line}: {reason}")
            }
            Self::FieldParseFailure { line, field, value } => {
                write!(f, "unparseable {field} at line {line}: {value:?}")
            }
        }
    }
}

/// Result of a catalog load: titles in input order plus diagnostics.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub titles: Vec<Title>,
    pub diagnostics: Vec<LoadDiagnostic>,
}

/// Load the catalog from a CSV file on disk.
///
/// Failure to open the file is fatal regardless of options; no partial
/// catalog is returned.
pub fn load_catalog(path: &Path, options: &LoadOptions) -> Result<LoadReport, CatalogError> {
    let file = File::open(path)?;
    load_catalog_from_reader(file, options)
}

/// Load the catalog from any raw-row source.
///
/// Row order in the result matches input order; duplicate identifiers
/// are kept as-is.
pub fn load_catalog_from_reader<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<LoadReport, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut report = LoadReport::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                if options.strict {
                    return Err(CatalogError::Csv(e));
                }
                let line = e.position().map_or(0, |p| p.line());
                log::warn!("Skipping unreadable row at line {line}: {e}");
                report.diagnostics.push(LoadDiagnostic::RowSkipped {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let line = record.position().map_or(0, |p| p.line());

        if record.len() < MIN_ROW_FIELDS {
            let reason = format!(
                "expected at least {MIN_ROW_FIELDS} fields, got {}",
                record.len()
            );
            if options.strict {
                return Err(CatalogError::malformed_row(line, reason));
            }
            log::warn!("Skipping invalid row at line {line}: {reason}");
            report
                .diagnostics
                .push(LoadDiagnostic::RowSkipped { line, reason });
            continue;
        }

        let get = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        let year_field = get(7);
        let release_year = if year_field.is_empty() {
            0
        } else {
            match year_field.parse::<u32>() {
                Ok(year) => year,
                Err(_) => {
                    let reason = format!("release year is not numeric: {year_field:?}");
                    if options.strict {
                        return Err(CatalogError::malformed_row(line, reason));
                    }
                    match options.on_parse_error {
                        ParseErrorPolicy::DefaultToZero => {
                            log::warn!("Row at line {line}: {reason}; defaulting to 0");
                            report.diagnostics.push(LoadDiagnostic::FieldParseFailure {
                                line,
                                field: "release_year",
                                value: year_field,
                            });
                            0
                        }
                        ParseErrorPolicy::SkipRow => {
                            log::warn!("Skipping row at line {line}: {reason}");
                            report
                                .diagnostics
                                .push(LoadDiagnostic::RowSkipped { line, reason });
                            continue;
                        }
                    }
                }
            }
        };

        let mut duration = get(9);
        if duration.is_empty() {
            duration = "N/A".to_string();
        }

        report.titles.push(Title {
            id: get(0),
            kind: TitleKind::from_str_loose(record.get(1).unwrap_or("")),
            title: get(2),
            director: get(3),
            cast: get(4),
            country: get(5),
            date_added: get(6),
            release_year,
            rating: get(8),
            duration,
            genres: get(10),
            description: get(11),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

    fn load(content: &str) -> LoadReport {
        load_catalog_from_reader(content.as_bytes(), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn loads_rows_in_input_order() {
        let csv = format!(
            "{HEADER}\n\
             s2,Movie,Second,Dir,Cast,Poland,\"March 5, 2019\",2018,PG,90 min,Drama,Plot\n\
             s1,TV Show,First,Dir,Cast,Poland,\"January 1, 2020\",2019,TV-MA,2 Seasons,Crime,Plot"
        );
        let report = load(&csv);
        assert_eq!(report.titles.len(), 2);
        assert_eq!(report.titles[0].id, "s2");
        assert_eq!(report.titles[1].id, "s1");
        assert_eq!(report.titles[1].kind, TitleKind::Series);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn short_row_is_skipped_with_diagnostic() {
        let csv = format!(
            "{HEADER}\n\
             s1,Movie,Too,Short\n\
             s2,Movie,Kept,Dir,Cast,Poland,\"January 1, 2020\",2020,PG,90 min,Drama,Plot"
        );
        let report = load(&csv);
        assert_eq!(report.titles.len(), 1);
        assert_eq!(report.titles[0].id, "s2");
        assert!(matches!(
            report.diagnostics[0],
            LoadDiagnostic::RowSkipped { line: 2, .. }
        ));
    }

    #[test]
    fn seven_field_row_loads_with_empty_tail() {
        let csv = format!("{HEADER}\ns1,Movie,Lean,Dir,Cast,Poland,\"January 1, 2020\"");
        let report = load(&csv);
        assert_eq!(report.titles.len(), 1);
        let title = &report.titles[0];
        assert_eq!(title.release_year, 0);
        assert_eq!(title.rating, "");
        assert_eq!(title.duration, "N/A");
        assert_eq!(title.genres, "");
    }

    #[test]
    fn empty_duration_becomes_sentinel() {
        let csv = format!(
            "{HEADER}\ns1,Movie,Film,Dir,Cast,Poland,\"January 1, 2020\",2020,PG,,Drama,Plot"
        );
        let report = load(&csv);
        assert_eq!(report.titles[0].duration, "N/A");
    }

    #[test]
    fn bad_year_defaults_to_zero_by_default() {
        let csv = format!(
            "{HEADER}\ns1,Movie,Film,Dir,Cast,Poland,\"January 1, 2020\",abc,PG,90 min,Drama,Plot"
        );
        let report = load(&csv);
        assert_eq!(report.titles.len(), 1);
        assert_eq!(report.titles[0].release_year, 0);
        assert!(matches!(
            report.diagnostics[0],
            LoadDiagnostic::FieldParseFailure {
                field: "release_year",
                ..
            }
        ));
    }

    #[test]
    fn bad_year_skips_row_under_skip_policy() {
        let csv = format!(
            "{HEADER}\n\
             s1,Movie,Bad,Dir,Cast,Poland,\"January 1, 2020\",abc,PG,90 min,Drama,Plot\n\
             s2,Movie,Good,Dir,Cast,Poland,\"January 1, 2020\",2020,PG,90 min,Drama,Plot"
        );
        let options = LoadOptions {
            on_parse_error: ParseErrorPolicy::SkipRow,
            ..Default::default()
        };
        let report = load_catalog_from_reader(csv.as_bytes(), &options).unwrap();
        assert_eq!(report.titles.len(), 1);
        assert_eq!(report.titles[0].id, "s2");
        assert!(matches!(
            report.diagnostics[0],
            LoadDiagnostic::RowSkipped { .. }
        ));
    }

    #[test]
    fn strict_mode_fails_on_bad_year() {
        let csv = format!(
            "{HEADER}\ns1,Movie,Film,Dir,Cast,Poland,\"January 1, 2020\",abc,PG,90 min,Drama,Plot"
        );
        let options = LoadOptions {
            strict: true,
            ..Default::default()
        };
        let err = load_catalog_from_reader(csv.as_bytes(), &options).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn strict_mode_fails_on_short_row() {
        let csv = format!("{HEADER}\ns1,Movie,Too,Short");
        let options = LoadOptions {
            strict: true,
            ..Default::default()
        };
        let err = load_catalog_from_reader(csv.as_bytes(), &options).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { .. }));
    }

    #[test]
    fn empty_year_is_unknown_without_diagnostic() {
        let csv =
            format!("{HEADER}\ns1,Movie,Film,Dir,Cast,Poland,\"January 1, 2020\",,PG,90 min,Drama,Plot");
        let report = load(&csv);
        assert_eq!(report.titles[0].release_year, 0);
        assert!(report.diagnostics.is_empty());
    }
}

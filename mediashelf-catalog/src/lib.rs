//! Media catalog data model, CSV loading, and analysis queries.
//!
//! This crate defines the catalog data model and its read-only analysis
//! surface without any terminal dependencies. Consumers load the catalog
//! once from a fixed-schema CSV, then run aggregate queries over the
//! immutable snapshot.

pub mod analyzer;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod types;

pub use analyzer::{
    DATE_ADDED_FORMAT, UNKNOWN_DELTA, most_common_country, parse_date_added,
    release_addition_delta, release_delta_summaries, sort_by_date_added,
};
pub use error::CatalogError;
pub use loader::{
    LoadDiagnostic, LoadOptions, LoadReport, ParseErrorPolicy, load_catalog,
    load_catalog_from_reader,
};
pub use lookup::find_by_id;
pub use types::{Title, TitleKind};

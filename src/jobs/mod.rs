//! Job catalog
//!
//! In-memory listing data and filtering. Listings are fixed demo data;
//! there is no storage layer behind the catalog.

mod catalog;
mod filter;

pub use catalog::{Job, JobCatalog, WorkType};
pub use filter::JobFilter;

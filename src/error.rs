use thiserror::Error;

use crate::config::site::SiteClass;

/// Errors produced by the estimation pipeline and its component models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown cost category code: {0}")]
    UnknownCategory(String),

    #[error("cost index {category} has no data for {year}-{month:02}")]
    IndexOutOfRange {
        category: String,
        year: u32,
        month: u32,
    },

    #[error("no cost model is available for site class {0}")]
    UnsupportedSiteClass(SiteClass),
}

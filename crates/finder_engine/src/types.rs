use std::fmt;

use thiserror::Error;

pub type SearchId = u64;

/// Shown to the user for every failed search; details only go to the log.
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch job listings from the AI. The model may be unable to find results for your query.";

/// One listing as produced by the model. Fields the model omitted are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingRecord {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
    pub company_website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ListingsFetched {
        search_id: SearchId,
        result: Result<Vec<ListingRecord>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            message: FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure before a response arrived.
    Network,
    HttpStatus(u16),
    /// The envelope or the listing text was not valid JSON.
    InvalidPayload,
    /// Valid JSON, but not an array of records.
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::InvalidPayload => write!(f, "invalid payload"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}

/// A failure together with the detail that is logged but never surfaced.
#[derive(Debug)]
pub(crate) struct Failure {
    pub kind: FailureKind,
    pub detail: String,
}

impl Failure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

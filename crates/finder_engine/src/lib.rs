//! Job finder engine: listing fetcher and effect execution.
mod decode;
mod engine;
mod fetch;
mod prompt;
mod settings;
mod types;

pub use decode::decode_listings;
pub use engine::EngineHandle;
pub use fetch::{GeminiFetcher, ListingFetcher};
pub use prompt::{build_prompt, build_request_body, listing_schema, TARGET_LISTING_COUNT};
pub use settings::{ConfigError, ServiceSettings, API_BASE_VAR, API_KEY_VAR, MODEL_VAR};
pub use types::{
    EngineEvent, FailureKind, FetchError, ListingRecord, SearchId, FETCH_FAILED_MESSAGE,
};

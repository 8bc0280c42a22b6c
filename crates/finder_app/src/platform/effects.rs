use std::io;

use finder_core::{Effect, JobListing, Msg};
use finder_engine::{EngineEvent, EngineHandle, ListingRecord, ServiceSettings};
use finder_logging::{finder_info, finder_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    #[cfg(test)]
    pub fn with_fetcher(
        fetcher: std::sync::Arc<dyn finder_engine::ListingFetcher>,
    ) -> io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::with_fetcher(fetcher)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListings { search_id, query } => {
                    finder_info!("FetchListings search_id={} query={:?}", search_id, query);
                    self.engine.request(search_id, query);
                }
            }
        }
    }

    /// Drains finished engine work as core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingsFetched { search_id, result } => match result {
            Ok(records) => Msg::ListingsLoaded {
                search_id,
                listings: records.into_iter().map(map_listing).collect(),
            },
            Err(err) => {
                finder_warn!("Search {} failed: {}", search_id, err.kind);
                Msg::ListingsFailed {
                    search_id,
                    message: err.message,
                }
            }
        },
    }
}

fn map_listing(record: ListingRecord) -> JobListing {
    let listing = JobListing::new(
        record.job_title,
        record.company_name,
        record.location,
        record.description,
        record.apply_link,
    );
    match record.company_website {
        Some(website) => listing.with_company_website(website),
        None => listing,
    }
}

use crate::view_model::{
    AppViewModel, ContentView, JobCardView, ERROR_HEADING, SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
    UNKNOWN_ERROR_MESSAGE,
};

pub type SearchId = u64;

/// One job opportunity as returned by the listing fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    job_title: String,
    company_name: String,
    location: String,
    description: String,
    apply_link: String,
    company_website: Option<String>,
}

impl JobListing {
    pub fn new(
        job_title: impl Into<String>,
        company_name: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        apply_link: impl Into<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            company_name: company_name.into(),
            location: location.into(),
            description: description.into(),
            apply_link: apply_link.into(),
            company_website: None,
        }
    }

    /// Attaches a company website. Blank values are treated as absent.
    pub fn with_company_website(mut self, website: impl Into<String>) -> Self {
        let website = website.into();
        let trimmed = website.trim();
        self.company_website = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn apply_link(&self) -> &str {
        &self.apply_link
    }

    pub fn company_website(&self) -> Option<&str> {
        self.company_website.as_deref()
    }
}

/// Where the search lifecycle currently stands.
///
/// `NotSearched` is only ever the initial phase; once a search has been
/// submitted the state never returns to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotSearched,
    Loading {
        search_id: SearchId,
    },
    Succeeded(Vec<JobListing>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    query: String,
    phase: Phase,
    last_search_id: SearchId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Last submitted query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn has_searched(&self) -> bool {
        self.phase != Phase::NotSearched
    }

    /// Listings of the last successful search; empty in every other phase.
    pub fn results(&self) -> &[JobListing] {
        match &self.phase {
            Phase::Succeeded(listings) => listings.as_slice(),
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        AppViewModel {
            query: self.query.clone(),
            input: self.input.clone(),
            input_enabled: !loading,
            submit_enabled: !loading && !self.input.trim().is_empty(),
            submit_label: if loading {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL
            },
            content: self.content_view(),
            dirty: self.dirty,
        }
    }

    fn content_view(&self) -> ContentView {
        match &self.phase {
            Phase::Loading { .. } => ContentView::Loading,
            Phase::Failed(message) => ContentView::Error {
                heading: ERROR_HEADING,
                message: message.clone(),
            },
            Phase::NotSearched => ContentView::Prompt,
            Phase::Succeeded(listings) if listings.is_empty() => ContentView::NoResults,
            Phase::Succeeded(listings) => {
                ContentView::Results(listings.iter().map(JobCardView::from_listing).collect())
            }
        }
    }

    /// Returns whether state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    /// Moves to `Loading` for a fresh search and returns its id.
    pub(crate) fn begin_search(&mut self, query: String) -> SearchId {
        self.last_search_id += 1;
        let search_id = self.last_search_id;
        self.query = query;
        self.phase = Phase::Loading { search_id };
        self.dirty = true;
        search_id
    }

    /// Applies a successful completion. Returns `false` when `search_id` is
    /// not the search currently loading.
    pub(crate) fn apply_loaded(&mut self, search_id: SearchId, listings: Vec<JobListing>) -> bool {
        if !self.is_current(search_id) {
            return false;
        }
        self.phase = Phase::Succeeded(listings);
        self.dirty = true;
        true
    }

    /// Applies a failed completion. A blank message falls back to a generic one.
    pub(crate) fn apply_failed(&mut self, search_id: SearchId, message: String) -> bool {
        if !self.is_current(search_id) {
            return false;
        }
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        self.phase = Phase::Failed(message);
        self.dirty = true;
        true
    }

    fn is_current(&self, search_id: SearchId) -> bool {
        self.phase == Phase::Loading { search_id }
    }
}

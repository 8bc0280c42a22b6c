#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input.
    QueryChanged(String),
    /// User submitted the current search input.
    QuerySubmitted,
    /// Fetcher completed a search with listings (possibly none).
    ListingsLoaded {
        search_id: crate::SearchId,
        listings: Vec<crate::JobListing>,
    },
    /// Fetcher failed a search; `message` is already user-facing.
    ListingsFailed {
        search_id: crate::SearchId,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the listing fetcher for one round trip with `query`, tagged with `search_id`.
    FetchListings {
        search_id: crate::SearchId,
        query: String,
    },
}

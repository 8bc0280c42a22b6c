use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::QuerySubmitted => {
            // The query is forwarded verbatim; trimming only decides whether it counts.
            if state.input().trim().is_empty() {
                return (state, Vec::new());
            }
            let query = state.input().to_string();
            let search_id = state.begin_search(query.clone());
            vec![Effect::FetchListings { search_id, query }]
        }
        Msg::ListingsLoaded {
            search_id,
            listings,
        } => {
            // Completions of superseded searches are dropped.
            state.apply_loaded(search_id, listings);
            Vec::new()
        }
        Msg::ListingsFailed { search_id, message } => {
            state.apply_failed(search_id, message);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

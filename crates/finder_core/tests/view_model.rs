use finder_core::{
    update, AppState, ContentView, JobCardView, JobListing, LinkView, Msg, ERROR_HEADING,
    UNKNOWN_ERROR_MESSAGE,
};
use pretty_assertions::assert_eq;

fn submit_query(state: AppState, input: &str) -> AppState {
    let (state, _) = update(state, Msg::QueryChanged(input.to_string()));
    update(state, Msg::QuerySubmitted).0
}

fn load(state: AppState, listings: Vec<JobListing>) -> AppState {
    let search_id = match state.phase() {
        finder_core::Phase::Loading { search_id } => *search_id,
        other => panic!("expected loading, got {other:?}"),
    };
    update(
        state,
        Msg::ListingsLoaded {
            search_id,
            listings,
        },
    )
    .0
}

fn react_listings() -> Vec<JobListing> {
    vec![
        JobListing::new(
            "Senior React Developer",
            "Acme",
            "Remote",
            "Build the Acme dashboard.",
            "https://boards.example.com/acme/1",
        )
        .with_company_website("https://www.acme.example"),
        JobListing::new(
            "React Engineer",
            "Globex",
            "Berlin, Germany",
            "Own the Globex design system.",
            "https://jobs.globex.example/react",
        ),
        JobListing::new(
            "Frontend Lead (React)",
            "Initech",
            "Austin, TX",
            "Lead a team of five.",
            "https://initech.example/careers/42",
        )
        .with_company_website(""),
    ]
}

#[test]
fn fresh_state_shows_prompt() {
    let view = AppState::new().view();

    assert_eq!(view.content, ContentView::Prompt);
    assert!(view.input_enabled);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, "Search");
}

#[test]
fn loading_disables_input_and_submit() {
    let state = submit_query(AppState::new(), "rust");
    let view = state.view();

    assert_eq!(view.content, ContentView::Loading);
    assert!(!view.input_enabled);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, "Searching...");
}

#[test]
fn submit_enabled_only_for_non_blank_input() {
    let (state, _) = update(AppState::new(), Msg::QueryChanged("  ".to_string()));
    assert!(!state.view().submit_enabled);

    let (state, _) = update(state, Msg::QueryChanged("rust".to_string()));
    assert!(state.view().submit_enabled);
}

#[test]
fn senior_react_developer_shows_three_cards() {
    let state = load(
        submit_query(AppState::new(), "Senior React Developer"),
        react_listings(),
    );
    let view = state.view();

    let cards = match view.content {
        ContentView::Results(cards) => cards,
        other => panic!("expected results grid, got {other:?}"),
    };
    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards[0],
        JobCardView {
            title: "Senior React Developer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: "Build the Acme dashboard.".to_string(),
            apply: LinkView {
                label: "Apply Now",
                href: "https://boards.example.com/acme/1".to_string(),
                display: "boards.example.com".to_string(),
            },
            company_website: Some(LinkView {
                label: "Company Website",
                href: "https://www.acme.example".to_string(),
                display: "acme.example".to_string(),
            }),
        }
    );
    assert!(view.input_enabled);
}

#[test]
fn listing_without_website_has_only_apply_link() {
    let state = load(submit_query(AppState::new(), "react"), react_listings());

    let ContentView::Results(cards) = state.view().content else {
        panic!("expected results grid");
    };
    assert!(cards[0].company_website.is_some());
    assert_eq!(cards[1].company_website, None);
    // A blank website counts as absent.
    assert_eq!(cards[2].company_website, None);
    assert!(cards.iter().all(|card| card.apply.label == "Apply Now"));
}

#[test]
fn empty_result_shows_no_results_not_prompt() {
    let state = load(submit_query(AppState::new(), "zzznoresults"), Vec::new());

    assert_eq!(state.view().content, ContentView::NoResults);
}

#[test]
fn failure_shows_error_panel_with_message() {
    let state = submit_query(AppState::new(), "rust");
    let (state, _) = update(
        state,
        Msg::ListingsFailed {
            search_id: 1,
            message: "network down".to_string(),
        },
    );
    let view = state.view();

    assert_eq!(
        view.content,
        ContentView::Error {
            heading: ERROR_HEADING,
            message: "network down".to_string(),
        }
    );
    assert!(view.input_enabled);
}

#[test]
fn failure_without_message_shows_unknown_error() {
    let state = submit_query(AppState::new(), "rust");
    let (state, _) = update(
        state,
        Msg::ListingsFailed {
            search_id: 1,
            message: String::new(),
        },
    );

    assert_eq!(
        state.view().content,
        ContentView::Error {
            heading: ERROR_HEADING,
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    );
}

#[test]
fn loading_takes_precedence_over_previous_error() {
    let state = submit_query(AppState::new(), "rust");
    let (state, _) = update(
        state,
        Msg::ListingsFailed {
            search_id: 1,
            message: "boom".to_string(),
        },
    );
    let (state, _) = update(state, Msg::QuerySubmitted);

    assert_eq!(state.view().content, ContentView::Loading);
}

#[test]
fn unparsable_link_is_displayed_verbatim() {
    let listing = JobListing::new("Dev", "Co", "Remote", "Desc", "apply at the front desk");
    let state = load(submit_query(AppState::new(), "dev"), vec![listing]);

    let ContentView::Results(cards) = state.view().content else {
        panic!("expected results grid");
    };
    assert_eq!(cards[0].apply.display, "apply at the front desk");
}

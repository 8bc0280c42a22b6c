use url::Url;

use crate::JobListing;

/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";
pub const ERROR_HEADING: &str = "Oops! Something went wrong.";
pub(crate) const SUBMIT_LABEL: &str = "Search";
pub(crate) const SUBMIT_LABEL_BUSY: &str = "Searching...";

const APPLY_LABEL: &str = "Apply Now";
const WEBSITE_LABEL: &str = "Company Website";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub input: String,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub content: ContentView,
    pub dirty: bool,
}

/// The content region shows exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContentView {
    Loading,
    Error {
        heading: &'static str,
        message: String,
    },
    #[default]
    Prompt,
    Results(Vec<JobCardView>),
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply: LinkView,
    pub company_website: Option<LinkView>,
}

impl JobCardView {
    pub(crate) fn from_listing(listing: &JobListing) -> Self {
        Self {
            title: listing.job_title().to_string(),
            company: listing.company_name().to_string(),
            location: listing.location().to_string(),
            description: listing.description().to_string(),
            apply: LinkView::new(APPLY_LABEL, listing.apply_link()),
            company_website: listing
                .company_website()
                .map(|href| LinkView::new(WEBSITE_LABEL, href)),
        }
    }
}

/// An external link. Links always open outside the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: &'static str,
    pub href: String,
    /// Host part of `href` without a leading `www.`, or `href` itself when it
    /// does not parse as an absolute URL.
    pub display: String,
}

impl LinkView {
    fn new(label: &'static str, href: &str) -> Self {
        Self {
            label,
            href: href.to_string(),
            display: display_host(href),
        }
    }
}

fn display_host(href: &str) -> String {
    Url::parse(href.trim())
        .ok()
        .and_then(|url| {
            url.host_str()
                .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
        })
        .unwrap_or_else(|| href.to_string())
}

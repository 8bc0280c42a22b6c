pub const APP_TITLE: &str = "Job Finder AI";
pub const FOOTER: &str = "Powered by AI. Your next career move is just a search away.";
pub const INPUT_PLACEHOLDER: &str = "Search for jobs like 'Senior React Developer'...";
pub const INPUT_DISABLED_HINT: &str = "(input disabled while searching)";
pub const BUSY_NOTICE: &str = "A search is already in progress. Please wait for it to finish.";
pub const QUIT_COMMAND: &str = ":quit";

pub const LOADING_TEXT: &str = "Finding the best opportunities for you...";

pub const PROMPT_HEADING: &str = "Find Your Dream Job";
pub const PROMPT_TEXT: &str = "Enter a job title, skill, or company to start searching. \
Our AI will aggregate the best listings for you from across the web.";

pub const NO_RESULTS_HEADING: &str = "No Jobs Found";
pub const NO_RESULTS_TEXT: &str = "We couldn't find any jobs matching your search. \
Try using different or more general keywords.";

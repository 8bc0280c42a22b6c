use std::fmt::Write as _;

use finder_core::{AppViewModel, ContentView, JobCardView, LinkView};

use super::constants::*;

const RULE_WIDTH: usize = 60;

/// Renders the whole page for `view`, ending with the input prompt.
///
/// With `hyperlinks` set, links are emitted as OSC 8 sequences so terminals
/// that support them open the target externally; the URL is always printed.
pub fn render(view: &AppViewModel, hyperlinks: bool) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{APP_TITLE}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);

    render_content(&mut out, view, hyperlinks);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{FOOTER}");
    let _ = writeln!(out);
    out.push_str(&input_line(view));
    out
}

fn render_content(out: &mut String, view: &AppViewModel, hyperlinks: bool) {
    match &view.content {
        ContentView::Loading => {
            let _ = writeln!(out, "  {LOADING_TEXT}");
        }
        ContentView::Error { heading, message } => {
            let _ = writeln!(out, "  {heading}");
            let _ = writeln!(out, "  {}", printable(message));
        }
        ContentView::Prompt => {
            let _ = writeln!(out, "  {PROMPT_HEADING}");
            let _ = writeln!(out, "  {PROMPT_TEXT}");
        }
        ContentView::NoResults => {
            let _ = writeln!(out, "  {NO_RESULTS_HEADING}");
            let _ = writeln!(out, "  {NO_RESULTS_TEXT}");
        }
        ContentView::Results(cards) => {
            let _ = writeln!(
                out,
                "  {} result(s) for \"{}\"",
                cards.len(),
                printable(view.query.trim())
            );
            for (index, card) in cards.iter().enumerate() {
                let _ = writeln!(out);
                render_card(out, index + 1, card, hyperlinks);
            }
        }
    }
}

fn render_card(out: &mut String, number: usize, card: &JobCardView, hyperlinks: bool) {
    let _ = writeln!(out, "  [{number}] {}", printable(&card.title));
    let _ = writeln!(
        out,
        "      {} | {}",
        printable(&card.company),
        printable(&card.location)
    );
    let _ = writeln!(out, "      {}", printable(&card.description));
    let _ = writeln!(out, "      {}", link(&card.apply, hyperlinks));
    if let Some(website) = &card.company_website {
        let _ = writeln!(out, "      {}", link(website, hyperlinks));
    }
}

fn link(link: &LinkView, hyperlinks: bool) -> String {
    let href = printable(&link.href);
    let text = format!("{} ({})", link.label, printable(&link.display));
    let text = if hyperlinks {
        format!("\x1b]8;;{href}\x1b\\{text}\x1b]8;;\x1b\\")
    } else {
        text
    };
    format!("{text}: {href}")
}

/// Model text goes to the terminal verbatim otherwise; control characters
/// (ESC, BEL, line breaks) are dropped, whitespace controls become spaces.
fn printable(text: &str) -> String {
    text.chars()
        .filter_map(|ch| match ch {
            '\t' | '\n' | '\r' => Some(' '),
            ch if ch.is_control() => None,
            ch => Some(ch),
        })
        .collect()
}

fn input_line(view: &AppViewModel) -> String {
    if !view.input_enabled {
        return format!("[{}] {INPUT_DISABLED_HINT}\n", view.submit_label);
    }
    format!("{INPUT_PLACEHOLDER}\n[{}]> ", view.submit_label)
}

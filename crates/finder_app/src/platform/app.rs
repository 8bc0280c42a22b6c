use std::io::Write;
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use finder_core::{update, AppState, Msg};
use finder_engine::ServiceSettings;
use finder_logging::{finder_error, finder_info};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::terminal::{self, Screen, UiEvent};
use super::ui;

/// How long the loop waits for input before polling the engine again.
const TICK: Duration = Duration::from_millis(50);

pub fn run_app() -> ExitCode {
    logging::initialize(LogDestination::from_env());

    let settings = match ServiceSettings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            finder_error!("Refusing to start: {}", err);
            eprintln!("job_finder: {err}");
            return ExitCode::FAILURE;
        }
    };

    let effects = match EffectRunner::new(settings) {
        Ok(effects) => effects,
        Err(err) => {
            finder_error!("Failed to start engine: {}", err);
            eprintln!("job_finder: failed to start engine: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (ui_tx, ui_rx) = mpsc::channel();
    terminal::spawn_input_reader(ui_tx);

    finder_info!("Job finder started");
    let mut app = App::new(effects, Screen::stdout());
    app.run(&ui_rx);
    finder_info!("Job finder exiting");
    ExitCode::SUCCESS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    screen: Screen<W>,
}

impl<W: Write> App<W> {
    fn new(effects: EffectRunner, screen: Screen<W>) -> Self {
        Self {
            state: AppState::new(),
            effects,
            screen,
        }
    }

    fn run(&mut self, ui_rx: &mpsc::Receiver<UiEvent>) {
        self.draw();
        loop {
            let flow = match ui_rx.recv_timeout(TICK) {
                Ok(UiEvent::Line(line)) => self.handle_line(line),
                Ok(UiEvent::Closed) | Err(RecvTimeoutError::Disconnected) => Flow::Quit,
                Err(RecvTimeoutError::Timeout) => {
                    self.dispatch(Msg::Tick);
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            self.pump_engine();
        }
    }

    fn handle_line(&mut self, line: String) -> Flow {
        let trimmed = line.trim();
        if trimmed == ui::constants::QUIT_COMMAND {
            return Flow::Quit;
        }
        if trimmed.is_empty() {
            return Flow::Continue;
        }
        if !self.state.view().input_enabled {
            self.screen.notice(ui::constants::BUSY_NOTICE);
            return Flow::Continue;
        }
        self.dispatch(Msg::QueryChanged(line));
        self.dispatch(Msg::QuerySubmitted);
        Flow::Continue
    }

    fn pump_engine(&mut self) {
        for msg in self.effects.poll() {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);
        if self.state.consume_dirty() {
            self.draw();
        }
    }

    fn draw(&mut self) {
        let page = ui::render::render(&self.state.view(), self.screen.supports_hyperlinks());
        self.screen.draw(&page);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    use finder_core::{ContentView, Phase};
    use finder_engine::{FailureKind, FetchError, ListingFetcher, ListingRecord};

    use super::*;

    struct StubFetcher {
        calls: Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl ListingFetcher for StubFetcher {
        async fn fetch_listings(&self, query: &str) -> Result<Vec<ListingRecord>, FetchError> {
            *self.calls.lock().unwrap() += 1;
            match query {
                "zzznoresults" => Ok(Vec::new()),
                "offline" => Err(FetchError {
                    kind: FailureKind::Network,
                    message: "Failed to fetch job listings from the AI.".to_string(),
                }),
                _ => Ok((1..=3)
                    .map(|n| ListingRecord {
                        job_title: format!("{query} #{n}"),
                        company_name: format!("Company {n}"),
                        location: "Remote".to_string(),
                        description: "Ships features.".to_string(),
                        apply_link: format!("https://jobs.example/{n}"),
                        company_website: None,
                    })
                    .collect()),
            }
        }
    }

    fn app() -> (App<Vec<u8>>, Arc<StubFetcher>) {
        let fetcher = Arc::new(StubFetcher {
            calls: Mutex::new(0),
        });
        let effects = EffectRunner::with_fetcher(fetcher.clone()).unwrap();
        (App::new(effects, Screen::plain(Vec::new())), fetcher)
    }

    fn settle(app: &mut App<Vec<u8>>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.state.is_loading() {
            assert!(Instant::now() < deadline, "search never completed");
            app.pump_engine();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn output(app: &App<Vec<u8>>) -> String {
        String::from_utf8_lossy(app.screen.output()).into_owned()
    }

    #[test]
    fn blank_line_does_not_search() {
        let (mut app, fetcher) = app();
        let before = app.state.clone();
        assert_eq!(app.handle_line("   ".to_string()), Flow::Continue);
        assert_eq!(app.state, before);
        assert_eq!(app.state.input(), "");
        assert!(output(&app).is_empty());
        assert_eq!(app.state.phase(), &Phase::NotSearched);
        std::thread::sleep(Duration::from_millis(20));
        app.pump_engine();
        assert_eq!(*fetcher.calls.lock().unwrap(), 0);
    }

    #[test]
    fn search_renders_loading_then_grid() {
        let (mut app, fetcher) = app();
        app.handle_line("Senior React Developer".to_string());
        assert!(output(&app).contains(ui::constants::LOADING_TEXT));

        settle(&mut app);

        match app.state.view().content {
            ContentView::Results(cards) => assert_eq!(cards.len(), 3),
            other => panic!("expected results, got {other:?}"),
        }
        assert!(output(&app).contains("3 result(s) for \"Senior React Developer\""));
        assert_eq!(*fetcher.calls.lock().unwrap(), 1);
    }

    #[test]
    fn empty_result_renders_no_jobs_found() {
        let (mut app, _fetcher) = app();
        app.handle_line("zzznoresults".to_string());
        settle(&mut app);
        assert_eq!(app.state.view().content, ContentView::NoResults);
    }

    #[test]
    fn failure_leaves_input_enabled() {
        let (mut app, _fetcher) = app();
        app.handle_line("offline".to_string());
        settle(&mut app);
        let view = app.state.view();
        assert!(view.input_enabled);
        assert!(matches!(view.content, ContentView::Error { .. }));
    }

    #[test]
    fn input_while_loading_is_rejected() {
        let (mut app, fetcher) = app();
        app.handle_line("rust".to_string());
        app.handle_line("golang".to_string());
        assert!(output(&app).contains(ui::constants::BUSY_NOTICE));
        // Blank lines while loading are ignored without a notice.
        let shown = output(&app);
        app.handle_line(String::new());
        assert_eq!(output(&app), shown);
        settle(&mut app);
        assert_eq!(app.state.query(), "rust");
        assert_eq!(*fetcher.calls.lock().unwrap(), 1);
    }

    #[test]
    fn quit_command_stops_the_loop() {
        let (mut app, _fetcher) = app();
        assert_eq!(app.handle_line(" :quit ".to_string()), Flow::Quit);
    }
}

use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use finder_logging::{finder_debug, finder_trace};

use crate::fetch::{GeminiFetcher, ListingFetcher};
use crate::settings::ServiceSettings;
use crate::types::{EngineEvent, SearchId};

enum EngineCommand {
    Fetch { search_id: SearchId, query: String },
}

/// Runs fetches on a background tokio runtime and reports completions.
///
/// Requests are independent: nothing is cancelled, and completions arrive in
/// whatever order the network resolves them.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ServiceSettings) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(GeminiFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn ListingFetcher>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            finder_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request(&self, search_id: SearchId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            search_id,
            query: query.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    fetcher: &dyn ListingFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { search_id, query } => {
            finder_trace!("Fetch started search_id={}", search_id);
            let result = fetcher.fetch_listings(&query).await;
            let _ = event_tx.send(EngineEvent::ListingsFetched { search_id, result });
        }
    }
}

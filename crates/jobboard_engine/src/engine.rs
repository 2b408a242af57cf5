use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use board_logging::{board_debug, board_info};
use jobboard_core::Language;

use crate::details::{DetailsFetcher, DetailsSettings, ReqwestDetailsFetcher};
use crate::EngineEvent;

enum EngineCommand {
    LoadDetails {
        valid_job_root_id: u64,
        language: Language,
    },
}

/// Runs detail lookups on a background tokio runtime and reports results as
/// [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(settings: DetailsSettings) -> io::Result<Self> {
        let fetcher = ReqwestDetailsFetcher::new(settings)
            .map_err(|err| io::Error::other(err.to_string()))?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn DetailsFetcher>) -> io::Result<Self> {
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
            board_info!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn load_details(&self, valid_job_root_id: u64, language: Language) {
        let _ = self.cmd_tx.send(EngineCommand::LoadDetails {
            valid_job_root_id,
            language,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn DetailsFetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadDetails {
            valid_job_root_id,
            language,
        } => {
            let result = fetcher.fetch(valid_job_root_id, language).await;
            board_debug!(
                "Details root={} lang={} ok={}",
                valid_job_root_id,
                language.code(),
                result.is_ok()
            );
            let _ = event_tx.send(EngineEvent::DetailsLoaded {
                valid_job_root_id,
                language,
                result,
            });
        }
    }
}

use std::io;
use std::sync::{mpsc, Arc, Weak};
use std::thread;
use std::time::Duration;

use board_logging::{board_debug, board_info, board_warn};
use jobboard_core::{Effect, Msg};
use jobboard_engine::{DetailsSettings, EngineEvent, EngineHandle};

use super::app::Input;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
}

impl EffectRunner {
    pub fn new(settings: DetailsSettings, input_tx: mpsc::Sender<Input>) -> io::Result<Self> {
        let engine = Arc::new(EngineHandle::new(settings)?);
        let runner = Self { engine };
        runner.spawn_event_loop(input_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadDetails {
                    valid_job_root_id,
                    language,
                } => {
                    board_info!(
                        "LoadDetails root={} language={}",
                        valid_job_root_id,
                        language.api_value()
                    );
                    self.engine.load_details(valid_job_root_id, language);
                }
            }
        }
    }

    fn spawn_event_loop(&self, input_tx: mpsc::Sender<Input>) {
        let engine = Arc::downgrade(&self.engine);
        thread::spawn(move || pump_events(engine, input_tx));
    }
}

/// Forwards engine events until the runner drops its engine or the input
/// loop goes away. Only a weak handle is kept between polls so dropping the
/// runner also stops the engine thread.
fn pump_events(engine: Weak<EngineHandle>, input_tx: mpsc::Sender<Input>) {
    while let Some(handle) = engine.upgrade() {
        let Some(event) = handle.recv_timeout(POLL_INTERVAL) else {
            continue;
        };
        if input_tx.send(Input::Engine(map_event(event))).is_err() {
            break;
        }
    }
    board_debug!("Engine event pump stopped");
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DetailsLoaded {
            valid_job_root_id,
            language,
            result,
        } => Msg::DetailsLoaded {
            valid_job_root_id,
            language,
            result: result.map_err(|err| {
                board_warn!("Details for root {} failed: {}", valid_job_root_id, err);
                err.to_string()
            }),
        },
    }
}

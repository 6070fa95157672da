use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_error};
use compass_core::{Effect, Msg};

use crate::api::{ApiError, ApiSettings, HttpRemoteService, RemoteService};

/// Runs core effects on a background runtime and hands settled messages
/// back over a channel.
///
/// Supersession sends no cancellation: a superseded call runs to completion
/// here and its settled message is discarded by the core's attempt check.
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<Effect>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl ServiceHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        Ok(Self::with_service(Arc::new(HttpRemoteService::new(
            settings,
        )?)))
    }

    /// Builds a handle over any service implementation; used by tests to
    /// substitute a scripted one.
    pub fn with_service(service: Arc<dyn RemoteService>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Effect>();
        let (msg_tx, msg_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_error!("could not start client runtime: {err}");
                    return;
                }
            };
            while let Ok(effect) = cmd_rx.recv() {
                let service = service.clone();
                let msg_tx = msg_tx.clone();
                runtime.spawn(async move {
                    let msg = run_effect(service.as_ref(), effect).await;
                    let _ = msg_tx.send(msg);
                });
            }
        });

        Self { cmd_tx, msg_rx }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            let _ = self.cmd_tx.send(effect);
        }
    }

    pub fn try_recv(&self) -> Option<Msg> {
        self.msg_rx.try_recv().ok()
    }
}

async fn run_effect(service: &dyn RemoteService, effect: Effect) -> Msg {
    match effect {
        Effect::FetchMarketTips { attempt, sector } => {
            client_debug!("fetch market tips attempt={attempt} sector={sector:?}");
            let result = service
                .market_trends(sector.as_deref())
                .await
                .map_err(|err| err.to_string());
            Msg::TipsSettled { attempt, result }
        }
        Effect::SubmitRecommendations { attempt, query } => {
            client_debug!("submit recommendation query attempt={attempt}");
            let result = service
                .recommendations(&query)
                .await
                .map_err(|err| err.to_string());
            Msg::RecommendationsSettled { attempt, result }
        }
        Effect::SendChatMessage { attempt, message } => {
            client_debug!("send chat message attempt={attempt} len={}", message.len());
            let result = service.chat(&message).await.map_err(|err| err.to_string());
            Msg::ChatSettled { attempt, result }
        }
    }
}

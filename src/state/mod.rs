// src/state/mod.rs
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::egui;
use tracing::{debug, warn};

use crate::client::{AnalysisClient, AnalysisReport};

/// Core application state: the current input text, the most recently
/// applied report, and the channel worker threads deliver finished
/// reports on.
///
/// The report is either wholly absent (nothing has succeeded yet) or
/// wholly present; it is only ever replaced, never patched field by field.
pub struct AppState {
    pub client: AnalysisClient,
    pub code: String,
    pub result: Option<AnalysisReport>,

    response_tx: Sender<AnalysisReport>,
    response_rx: Receiver<AnalysisReport>,
}

impl AppState {
    pub fn new(client: AnalysisClient) -> Self {
        let (response_tx, response_rx) = mpsc::channel();
        Self {
            client,
            code: String::new(),
            result: None,
            response_tx,
            response_rx,
        }
    }

    /// Replaces the input text unconditionally. The last report stays as
    /// it is; editing never clears results.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Sends the current input to the analysis service on a worker thread.
    ///
    /// Exactly one request per call; nothing is deduplicated, cancelled, or
    /// timed out. A failed request delivers nothing, so whatever report is
    /// on screen stays there. Overlapping triggers race and the last
    /// response to arrive wins.
    pub fn trigger_analysis(&self, ctx: &egui::Context) {
        let client = self.client.clone();
        let code = self.code.clone();
        let tx = self.response_tx.clone();
        let ctx = ctx.clone();

        thread::spawn(move || match client.analyze(&code) {
            Ok(report) => {
                // A send error means the app is shutting down.
                let _ = tx.send(report);
                ctx.request_repaint();
            }
            Err(e) => warn!("analysis request failed: {}", e),
        });
    }

    /// Applies every report that arrived since the last frame, in arrival
    /// order. Each application replaces the whole report at once.
    pub fn poll_responses(&mut self) {
        while let Ok(report) = self.response_rx.try_recv() {
            debug!("applying analysis report");
            self.result = Some(report);
        }
    }
}

//! Lookup Worker Thread
//!
//! Runs lookups off the UI thread. The worker owns a current-thread tokio
//! runtime; each request becomes its own task, so responses come back in
//! completion order, not dispatch order. The UI loop drains responses with
//! [`LookupWorker::try_recv`] and lets the request token sort out ordering.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::fetcher::RequestToken;
use super::lookup::{Lookup, LookupError};
use super::suggestion::Suggestion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub token: RequestToken,
    pub endpoint: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub token: RequestToken,
    pub result: Result<Vec<Suggestion>, LookupError>,
}

/// Handle to the background lookup thread
pub struct LookupWorker {
    request_tx: UnboundedSender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl LookupWorker {
    /// Spawn the worker thread
    pub fn spawn(lookup: Arc<dyn Lookup>) -> Self {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        let handle = std::thread::spawn(move || {
            worker_loop(lookup, request_rx, response_tx, worker_cancel);
        });

        Self {
            request_tx,
            response_rx,
            cancel,
            handle: Some(handle),
        }
    }

    /// Queue a lookup. Fails only when the worker has stopped.
    pub fn dispatch(&self, request: LookupRequest) -> Result<(), LookupError> {
        self.request_tx
            .send(request)
            .map_err(|_| LookupError::WorkerGone)
    }

    /// Next finished lookup, without blocking
    pub fn try_recv(&self) -> Option<LookupResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Next finished lookup, waiting up to `timeout`
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<LookupResponse>, LookupError> {
        match self.response_rx.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(LookupError::WorkerGone),
        }
    }

    /// Stop the worker loop and wait for the thread. Lookups still in flight
    /// are dropped.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Lookup worker thread panicked");
            }
        }
    }
}

impl Drop for LookupWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Main worker loop - spawns a task per request until cancelled or the
/// request channel closes
fn worker_loop(
    lookup: Arc<dyn Lookup>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
    cancel: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start lookup runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                request = request_rx.recv() => {
                    let Some(request) = request else { break };
                    log::debug!("Lookup {} started for {:?}", request.token, request.query);
                    let lookup = Arc::clone(&lookup);
                    let response_tx = response_tx.clone();
                    tokio::spawn(async move {
                        let result = lookup.fetch(&request.endpoint, &request.query).await;
                        // Receiver gone means the UI loop has exited
                        let _ = response_tx.send(LookupResponse {
                            token: request.token,
                            result,
                        });
                    });
                }
            }
        }
    });

    log::debug!("Lookup worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

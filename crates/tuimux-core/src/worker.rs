//! Runs window fetches on tokio's blocking pool.
//!
//! Dispatch never waits for or cancels earlier fetches. Results are sent back
//! to the control loop, which hands them to [`Coordinator::complete`]; the
//! token check there decides which one lands.
//!
//! [`Coordinator::complete`]: crate::coordinator::Coordinator::complete

use crate::client::TmuxClient;
use crate::coordinator::{FetchResult, WindowFetch};
use tokio::sync::mpsc;
use tracing::debug;

const RESULT_QUEUE_CAPACITY: usize = 16;

#[derive(Clone)]
pub struct FetchWorker {
    client: TmuxClient,
    tx: mpsc::Sender<FetchResult>,
}

impl FetchWorker {
    pub fn channel(client: TmuxClient) -> (Self, mpsc::Receiver<FetchResult>) {
        let (tx, rx) = mpsc::channel(RESULT_QUEUE_CAPACITY);
        (Self { client, tx }, rx)
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, fetch: WindowFetch) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let token = fetch.token;
            let result = fetch.run(&client);
            if tx.blocking_send(result).is_err() {
                debug!(token, "control loop gone; dropping window fetch result");
            }
        });
    }
}

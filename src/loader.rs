//! Background movie loads
//!
//! Each `LoadRequest` runs as its own tokio task. Tasks never touch app
//! state; they report a `LoadOutcome` on a channel that the event loop
//! drains between frames.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::api::MovieApiClient;
use crate::app::{LoadOutcome, LoadRequest};

/// Spawn one fetch for `request`. The outcome is sent on `tx`; if the
/// receiver is gone the outcome is dropped.
pub fn spawn_load(
    client: MovieApiClient,
    request: LoadRequest,
    tx: UnboundedSender<LoadOutcome>,
) -> JoinHandle<()> {
    let span = tracing::info_span!("load", seq = request.seq, title = %request.title);

    tokio::spawn(
        async move {
            let result = client.fetch_movie(&request.title).await;
            if let Err(e) = &result {
                tracing::debug!(error = %e, "fetch failed");
            }

            let outcome = LoadOutcome {
                seq: request.seq,
                title: request.title,
                result,
            };
            if tx.send(outcome).is_err() {
                tracing::debug!("event loop gone, dropping outcome");
            }
        }
        .instrument(span),
    )
}

/// Spawn every request in `requests`
pub fn spawn_all(
    client: &MovieApiClient,
    requests: Vec<LoadRequest>,
    tx: &UnboundedSender<LoadOutcome>,
) -> Vec<JoinHandle<()>> {
    requests
        .into_iter()
        .map(|request| spawn_load(client.clone(), request, tx.clone()))
        .collect()
}

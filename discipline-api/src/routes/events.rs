//! Server-sent stream of record changes.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::{stream, Stream};
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tracing::instrument;

use crate::{app_state::AppState, domain::models::RecordEvent};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stream_events))
}

#[instrument(name = "stream_events", skip(app_state))]
async fn stream_events(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = app_state.records.subscribe();

    Sse::new(event_stream(receiver)).keep_alive(KeepAlive::default())
}

/// Turn a broadcast receiver into SSE events, ending when the sender is dropped.
///
/// A lagging subscriber skips whatever it missed and keeps going.
fn event_stream(
    receiver: Receiver<RecordEvent>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(event) => match Event::default().event(event.name()).json_data(&event) {
                    Ok(sse) => return Some((Ok(sse), receiver)),
                    Err(e) => tracing::warn!("failed to encode {} event: {}", event.name(), e),
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("event subscriber lagged, {} events dropped", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ImportSummary;
    use futures::StreamExt;
    use tokio::sync::broadcast;

    #[tokio::test]
    async fn stream_ends_when_sender_is_dropped() {
        let (sender, receiver) = broadcast::channel(4);
        sender
            .send(RecordEvent::SheetImported(ImportSummary::default()))
            .unwrap();
        drop(sender);

        let events: Vec<_> = event_stream(receiver).collect().await;

        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn lagged_subscriber_keeps_receiving() {
        let (sender, receiver) = broadcast::channel(1);
        for _ in 0..3 {
            sender
                .send(RecordEvent::SheetImported(ImportSummary::default()))
                .unwrap();
        }
        drop(sender);

        let events: Vec<_> = event_stream(receiver).collect().await;

        assert_eq!(events.len(), 1);
    }
}

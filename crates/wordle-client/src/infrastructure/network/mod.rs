//! Network infrastructure: the websocket connection to the arbiter.
//!
//! Architecture:
//! - [`ArbiterConnection::open`] performs the websocket handshake and splits
//!   the stream into a read half and a write half.
//! - A reader task forwards every text frame as a
//!   [`GameEvent::ServerMessage`] on the game's event channel, followed by a
//!   single [`GameEvent::Disconnected`] when the stream ends.
//! - A writer task drains an unbounded queue of guesses into the sink.
//!   [`WsTransport`] is the synchronous front of that queue, so the state
//!   machine never awaits network I/O.
//!
//! # Wire format (for beginners)
//!
//! The protocol is plain text in both directions.  The client sends the
//! guess itself (`crane`); the arbiter answers `<tag>:<payload>`, e.g.
//! `result:--*c-`, `invalid:Word not found` or `final:crane`.  Parsing of
//! those replies lives in `wordle_core::protocol`; this module only moves
//! strings.

use std::sync::Arc;

use futures_util::stream::Stream;
use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, Message as WsMessage},
};
use tracing::{debug, error, info, warn};

use crate::application::{GameEvent, Transport, TransportError};

/// Errors that can occur while opening the arbiter connection.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The websocket handshake failed.
    #[error("failed to connect to arbiter at {url}: {source}")]
    ConnectFailed {
        url: String,
        #[source]
        source: Box<WsError>,
    },
}

// ── Transport ─────────────────────────────────────────────────────────────────

/// Outbound side of the connection as seen by the state machine.
///
/// `send` only enqueues; the writer task does the actual I/O.
#[derive(Debug, Clone)]
pub struct WsTransport {
    outbound: mpsc::UnboundedSender<String>,
}

impl WsTransport {
    /// Wraps the sending end of the writer queue.
    pub fn new(outbound: mpsc::UnboundedSender<String>) -> Self {
        Self { outbound }
    }
}

impl Transport for WsTransport {
    fn send(&self, guess: &str) -> Result<(), TransportError> {
        self.outbound
            .send(guess.to_string())
            .map_err(|_| TransportError::Closed)
    }
}

// ── Connection ────────────────────────────────────────────────────────────────

/// An open websocket connection to the arbiter.
pub struct ArbiterConnection {
    transport: Arc<WsTransport>,
    reader: JoinHandle<()>,
    writer: JoinHandle<()>,
}

impl ArbiterConnection {
    /// Connects to `url` and starts the reader and writer tasks.
    ///
    /// Inbound frames are delivered on `events`.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::ConnectFailed`] if the TCP connection or the
    /// websocket upgrade fails.
    pub async fn open(
        url: &str,
        events: mpsc::Sender<GameEvent>,
    ) -> Result<Self, NetworkError> {
        let (ws_stream, _response) = connect_async(url).await.map_err(|source| {
            NetworkError::ConnectFailed {
                url: url.to_string(),
                source: Box::new(source),
            }
        })?;

        info!(url, "connected to arbiter");

        let (mut ws_tx, ws_rx) = ws_stream.split();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();

        let writer = tokio::spawn(async move {
            while let Some(guess) = out_rx.recv().await {
                debug!(%guess, "sending guess");
                if let Err(e) = ws_tx.send(WsMessage::Text(guess)).await {
                    error!("failed to send guess: {e}");
                    break;
                }
            }
            let _ = ws_tx.close().await;
        });

        let reader = tokio::spawn(forward_frames(ws_rx, events));

        Ok(Self {
            transport: Arc::new(WsTransport::new(out_tx)),
            reader,
            writer,
        })
    }

    /// Handle for the state machine.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport) as Arc<dyn Transport>
    }

    /// Stops both tasks.  Pending guesses are dropped.
    pub fn close(self) {
        self.reader.abort();
        self.writer.abort();
        debug!("arbiter connection closed");
    }
}

/// Forwards inbound text frames as [`GameEvent::ServerMessage`] until the
/// stream ends, then sends one [`GameEvent::Disconnected`].
///
/// Control frames are handled by the websocket library and only logged here.
/// Returns early (without the disconnect event) if the event channel is
/// closed, because nobody is left to tell.
pub async fn forward_frames<S>(mut frames: S, events: mpsc::Sender<GameEvent>)
where
    S: Stream<Item = Result<WsMessage, WsError>> + Unpin,
{
    loop {
        let frame = match frames.next().await {
            Some(Ok(frame)) => frame,
            Some(Err(WsError::ConnectionClosed | WsError::AlreadyClosed)) => {
                debug!("arbiter websocket closed");
                break;
            }
            Some(Err(e)) => {
                warn!("arbiter websocket error: {e}");
                break;
            }
            None => {
                debug!("arbiter stream ended");
                break;
            }
        };

        match frame {
            WsMessage::Text(text) => {
                debug!(%text, "received message");
                if events.send(GameEvent::ServerMessage(text)).await.is_err() {
                    return;
                }
            }
            WsMessage::Binary(data) => {
                warn!("unexpected binary frame ({} bytes, ignored)", data.len());
            }
            WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => {}
            WsMessage::Close(frame) => {
                debug!(?frame, "arbiter sent close frame");
                break;
            }
        }
    }

    let _ = events.send(GameEvent::Disconnected).await;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn frames(
        items: Vec<Result<WsMessage, WsError>>,
    ) -> impl Stream<Item = Result<WsMessage, WsError>> + Unpin {
        stream::iter(items)
    }

    async fn collect(mut rx: mpsc::Receiver<GameEvent>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_ws_transport_enqueues_guess() {
        // Arrange
        let (tx, mut rx) = mpsc::unbounded_channel();
        let transport = WsTransport::new(tx);

        // Act
        transport.send("crane").unwrap();

        // Assert
        assert_eq!(rx.try_recv().unwrap(), "crane");
    }

    #[test]
    fn test_ws_transport_reports_closed_queue() {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = WsTransport::new(tx);
        drop(rx);

        assert_eq!(transport.send("crane"), Err(TransportError::Closed));
    }

    #[tokio::test]
    async fn test_text_frames_become_server_messages_then_disconnect() {
        // Arrange
        let (tx, rx) = mpsc::channel(8);
        let input = frames(vec![
            Ok(WsMessage::Text("result:--*--".to_string())),
            Ok(WsMessage::Ping(vec![1])),
            Ok(WsMessage::Text("invalid:Word not found".to_string())),
        ]);

        // Act
        forward_frames(input, tx).await;

        // Assert
        assert_eq!(
            collect(rx).await,
            vec![
                GameEvent::ServerMessage("result:--*--".to_string()),
                GameEvent::ServerMessage("invalid:Word not found".to_string()),
                GameEvent::Disconnected,
            ]
        );
    }

    #[tokio::test]
    async fn test_close_frame_stops_forwarding() {
        let (tx, rx) = mpsc::channel(8);
        let input = frames(vec![
            Ok(WsMessage::Close(None)),
            Ok(WsMessage::Text("result:-----".to_string())),
        ]);

        forward_frames(input, tx).await;

        assert_eq!(collect(rx).await, vec![GameEvent::Disconnected]);
    }

    #[tokio::test]
    async fn test_stream_error_is_a_disconnect() {
        let (tx, rx) = mpsc::channel(8);
        let input = frames(vec![Err(WsError::ConnectionClosed)]);

        forward_frames(input, tx).await;

        assert_eq!(collect(rx).await, vec![GameEvent::Disconnected]);
    }

    #[tokio::test]
    async fn test_open_fails_for_unreachable_arbiter() {
        // Arrange: port 1 refuses connections on any sane test host
        let (tx, _rx) = mpsc::channel(8);

        // Act
        let result = ArbiterConnection::open("ws://127.0.0.1:1/ws", tx).await;

        // Assert
        assert!(matches!(result, Err(NetworkError::ConnectFailed { .. })));
    }
}

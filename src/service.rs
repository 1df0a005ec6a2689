use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_async_with_config;
use tokio_tungstenite::tungstenite::protocol::{Message, WebSocketConfig};
use uuid::Uuid;

use crate::config::Limits;
use crate::handler::handle_text;
use crate::protocol::ServerMessage;

/// Room on top of the text limit for the JSON envelope and escaping.
const FRAME_OVERHEAD: usize = 64 * 1024;
const JSON_ESCAPE_GROWTH: usize = 6;

/// Accepts connections until the listener fails.
///
/// Each connection runs in its own task and shares nothing but the limits.
pub async fn serve(listener: TcpListener, limits: Limits) -> std::io::Result<()> {
    let limits = Arc::new(limits);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(error = %e, "Listener stopped accepting connections");
                return Err(e);
            }
        };
        let limits = Arc::clone(&limits);
        tokio::spawn(handle_connection(stream, peer, limits));
    }
}

fn ws_config(limits: &Limits) -> WebSocketConfig {
    // A control character escapes to six bytes (`\u0001`), the worst case.
    let max = limits
        .max_text_bytes
        .saturating_mul(JSON_ESCAPE_GROWTH)
        .saturating_add(FRAME_OVERHEAD);

    let mut config = WebSocketConfig::default();
    config.max_message_size = Some(max);
    config.max_frame_size = Some(max);
    config
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, limits: Arc<Limits>) {
    let connection_id = Uuid::new_v4();

    let ws_stream = match accept_async_with_config(stream, Some(ws_config(&limits))).await {
        Ok(ws) => ws,
        Err(e) => {
            tracing::warn!(%peer, error = %e, "WebSocket handshake failed");
            return;
        }
    };
    tracing::info!(%connection_id, %peer, "Client connected");

    let (mut sender, mut receiver) = ws_stream.split();

    while let Some(msg) = receiver.next().await {
        let reply = match msg {
            Ok(Message::Text(text)) => handle_text(&limits, &text),
            Ok(Message::Binary(_)) => {
                ServerMessage::error("Binary frames are not supported; send JSON text.")
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(%connection_id, error = %e, "Error reading message");
                break;
            }
        };

        let payload = match serde_json::to_string(&reply) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(%connection_id, error = %e, "Failed to encode reply");
                break;
            }
        };

        if sender.send(Message::Text(payload)).await.is_err() {
            tracing::debug!(%connection_id, "Connection closed while replying");
            break;
        }
    }

    tracing::info!(%connection_id, "Client disconnected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_limits_follow_text_limit() {
        let limits = Limits {
            max_text_bytes: 1000,
            ..Limits::default()
        };
        let config = ws_config(&limits);
        assert_eq!(config.max_message_size, Some(6000 + FRAME_OVERHEAD));
        assert_eq!(config.max_frame_size, Some(6000 + FRAME_OVERHEAD));
    }

    #[test]
    fn frame_limits_saturate() {
        let limits = Limits {
            max_text_bytes: usize::MAX,
            ..Limits::default()
        };
        assert_eq!(ws_config(&limits).max_message_size, Some(usize::MAX));
    }
}

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message;
use url::Url;

use crypto_toolbox::commands::{parse_command, CommandError, USAGE};
use crypto_toolbox::constants::DEFAULT_SERVER_URL;
use crypto_toolbox::logging;
use crypto_toolbox::protocol::ServerMessage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init("crypto_toolbox=warn,client=warn");

    let url = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    let url = Url::parse(&url).with_context(|| format!("Invalid URL '{}'", url))?;

    let (ws_stream, _) = connect_async(url.as_str())
        .await
        .with_context(|| format!("Failed to connect to {}", url))?;

    println!("Connected to {}", url);
    println!("{}", USAGE);

    let (mut sender, mut receiver) = ws_stream.split();

    let input = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Ok(Some(line)) = lines.next_line().await {
            let request = match parse_command(&line) {
                Ok(request) => request,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            let payload = match serde_json::to_string(&request) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to encode request");
                    continue;
                }
            };

            if sender.send(Message::Text(payload)).await.is_err() {
                println!("Connection closed");
                break;
            }
        }

        let _ = sender.send(Message::Close(None)).await;
    });

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<ServerMessage>(&text) {
                Ok(reply) => println!("{}", reply),
                Err(e) => tracing::warn!(error = %e, raw = %text, "Unrecognized reply"),
            },
            Ok(Message::Close(_)) => {
                println!("Server closed the connection");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                println!("Error receiving message: {}", e);
                break;
            }
        }
    }

    input.abort();
    Ok(())
}

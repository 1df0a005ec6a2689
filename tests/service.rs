use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crypto_toolbox::config::Limits;
use crypto_toolbox::protocol::{ClientMessage, IntOrText, ServerMessage};
use crypto_toolbox::service;

type Client = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

async fn start(limits: Limits) -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(service::serve(listener, limits));

    let (ws, _) = connect_async(format!("ws://{}", addr)).await.unwrap();
    ws
}

async fn round_trip(ws: &mut Client, payload: String) -> ServerMessage {
    ws.send(Message::Text(payload)).await.unwrap();
    loop {
        match ws.next().await.unwrap().unwrap() {
            Message::Text(text) => return serde_json::from_str(&text).unwrap(),
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("unexpected frame {other:?}"),
        }
    }
}

async fn request(ws: &mut Client, message: &ClientMessage) -> ServerMessage {
    round_trip(ws, serde_json::to_string(message).unwrap()).await
}

#[tokio::test]
async fn answers_each_utility_on_one_connection() {
    let mut ws = start(Limits::default()).await;

    let reply = request(
        &mut ws,
        &ClientMessage::CaesarCipher {
            text: "Hello, World!".to_string(),
            shift: Some(IntOrText::Int(3)),
            mode: None,
        },
    )
    .await;
    assert_eq!(
        reply,
        ServerMessage::Result {
            result: "Khoor, Zruog!".to_string()
        }
    );

    let reply = request(
        &mut ws,
        &ClientMessage::VigenereCipher {
            text: "RIJVS".to_string(),
            key: Some("KEY".to_string()),
            mode: Some("decrypt".to_string()),
        },
    )
    .await;
    assert_eq!(
        reply,
        ServerMessage::Result {
            result: "HELLO".to_string()
        }
    );

    let reply = request(
        &mut ws,
        &ClientMessage::SecureRandomNumbers {
            min_value: Some(IntOrText::Int(1)),
            max_value: Some(IntOrText::Int(10)),
            count: Some(IntOrText::Int(10)),
            unique: Some(true),
        },
    )
    .await;
    let ServerMessage::RandomNumbers { mut random_numbers } = reply else {
        panic!("expected numbers, got {reply:?}");
    };
    random_numbers.sort_unstable();
    assert_eq!(random_numbers, (1..=10).collect::<Vec<i64>>());

    let reply = request(&mut ws, &ClientMessage::GenerateSecretKey).await;
    assert!(matches!(reply, ServerMessage::SecretKey { ref key } if key.len() == 50));
}

#[tokio::test]
async fn bad_requests_keep_the_connection_open() {
    let mut ws = start(Limits::default()).await;

    let reply = round_trip(&mut ws, "definitely not json".to_string()).await;
    assert!(reply.is_error());

    let reply = round_trip(
        &mut ws,
        json!({ "type": "secure_random_numbers", "min_value": 5, "max_value": 5, "count": 3 })
            .to_string(),
    )
    .await;
    assert_eq!(
        reply,
        ServerMessage::error("min_value must be less than max_value")
    );

    ws.send(Message::Binary(vec![1, 2, 3])).await.unwrap();
    let reply = match ws.next().await.unwrap().unwrap() {
        Message::Text(text) => serde_json::from_str::<ServerMessage>(&text).unwrap(),
        other => panic!("unexpected frame {other:?}"),
    };
    assert!(reply.is_error());

    let reply = round_trip(
        &mut ws,
        json!({ "type": "caesar_cipher", "text": "HELLO" }).to_string(),
    )
    .await;
    assert_eq!(
        reply,
        ServerMessage::Result {
            result: "KHOOR".to_string()
        }
    );
}

#[tokio::test]
async fn escaped_text_within_limit_gets_a_reply() {
    let mut ws = start(Limits {
        max_text_bytes: 100_000,
        ..Limits::default()
    })
    .await;

    // Each control character becomes six bytes of JSON on the wire.
    let text = "\u{1}".repeat(100_000);
    let reply = request(
        &mut ws,
        &ClientMessage::CaesarCipher {
            text: text.clone(),
            shift: None,
            mode: None,
        },
    )
    .await;
    assert_eq!(reply, ServerMessage::Result { result: text });

    let reply = round_trip(
        &mut ws,
        json!({ "type": "caesar_cipher", "text": "HELLO" }).to_string(),
    )
    .await;
    assert_eq!(
        reply,
        ServerMessage::Result {
            result: "KHOOR".to_string()
        }
    );
}

#[tokio::test]
async fn configured_limits_apply() {
    let mut ws = start(Limits {
        max_text_bytes: 8,
        max_sample_count: 2,
    })
    .await;

    let reply = round_trip(
        &mut ws,
        json!({ "type": "caesar_cipher", "text": "much too long" }).to_string(),
    )
    .await;
    assert_eq!(reply, ServerMessage::error("Text is too large."));

    let reply = round_trip(
        &mut ws,
        json!({ "type": "secure_random_numbers", "min_value": 1, "max_value": 10, "count": 3 })
            .to_string(),
    )
    .await;
    assert_eq!(reply, ServerMessage::error("count cannot be more than 2"));
}

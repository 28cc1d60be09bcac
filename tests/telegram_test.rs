// tests/telegram_test.rs - Telegram adapter against a mock Bot API

use pretty_assertions::assert_eq;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weatherbot::bot::menu::main_menu;
use weatherbot::infra::config::TelegramConfig;
use weatherbot::infra::errors::BotError;
use weatherbot::integrations::telegram::TelegramAdapter;
use weatherbot::integrations::types::{ChatTransport, Reply};

const TOKEN: &str = "123456:TEST";

fn adapter_for(server: &MockServer) -> TelegramAdapter {
    let config = TelegramConfig {
        api_base: server.uri(),
        poll_timeout_secs: 0,
        register_commands: true,
    };
    TelegramAdapter::new(TOKEN.into(), &config)
}

fn method_path(name: &str) -> String {
    format!("/bot{TOKEN}/{name}")
}

#[tokio::test]
async fn test_validate_ok() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(method_path("getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": {"id": 123456, "is_bot": true, "first_name": "Weather", "username": "weather_bot"}
        })))
        .mount(&server)
        .await;

    let identity = adapter_for(&server).validate().await.unwrap();
    assert_eq!(identity, "@weather_bot");
}

#[tokio::test]
async fn test_validate_rejected_token_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(path(method_path("getMe")))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "ok": false, "error_code": 401, "description": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let err = adapter_for(&server).validate().await.unwrap_err();
    assert!(matches!(err, BotError::TelegramAuth(ref m) if m == "Unauthorized"));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_send_html_with_menu() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(method_path("sendMessage")))
        .and(body_partial_json(serde_json::json!({
            "chat_id": 42,
            "text": "<b>hi</b>",
            "parse_mode": "HTML",
            "reply_markup": {"resize_keyboard": true}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true, "result": {"message_id": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = Reply::html("<b>hi</b>").with_keyboard(main_menu());
    adapter_for(&server).send(42, &reply).await.unwrap();
}

#[tokio::test]
async fn test_send_failure_is_recoverable() {
    let server = MockServer::start().await;
    Mock::given(path(method_path("sendMessage")))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ok": false, "error_code": 400, "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .send(42, &Reply::plain("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, BotError::Telegram { ref method, .. } if method == "sendMessage"));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_poll_parses_updates() {
    let server = MockServer::start().await;
    Mock::given(path(method_path("getUpdates")))
        .and(body_partial_json(serde_json::json!({"offset": 10})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": true,
            "result": [
                {"update_id": 10, "message": {"message_id": 1, "date": 0,
                    "chat": {"id": 5, "type": "private"},
                    "from": {"id": 5, "is_bot": false, "first_name": "Ann", "username": "ann"},
                    "text": "/start"}},
                {"update_id": 11, "message": {"message_id": 2, "date": 0,
                    "chat": {"id": 5, "type": "private"}, "photo": []}}
            ]
        })))
        .mount(&server)
        .await;

    let updates = adapter_for(&server).poll(Some(10)).await.unwrap();
    assert_eq!(updates.len(), 2);
    let first = updates[0].message.as_ref().unwrap();
    assert_eq!(first.chat_id, 5);
    assert_eq!(first.sender, "ann");
    assert_eq!(first.text, "/start");
    assert_eq!(updates[1].update_id, 11);
    assert!(updates[1].message.is_none());
}

#[tokio::test]
async fn test_set_commands() {
    let server = MockServer::start().await;
    Mock::given(path(method_path("setMyCommands")))
        .and(body_partial_json(serde_json::json!({
            "commands": [{"command": "start", "description": "Open"}]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true, "result": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    adapter_for(&server)
        .set_commands(&[("start", "Open")])
        .await
        .unwrap();
}

#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use pt_messenger::config::structs::configuration::Configuration;
use pt_messenger::messaging::structs::conversation::Conversation;
use pt_messenger::messaging::structs::message::Message;
use pt_messenger::rest::enums::api_error::ApiError;
use pt_messenger::rest::traits::message_api::MessageApi;
use pt_messenger::session::structs::static_session::StaticSession;
use pt_messenger::session::structs::user_info::UserInfo;
use pt_messenger::stomp::enums::stomp_command::StompCommand;
use pt_messenger::stomp::impls::stomp_frame::STOMP_VERSION;
use pt_messenger::stomp::structs::stomp_frame::StompFrame;

mockall::mock! {
    pub Api {}

    #[async_trait]
    impl MessageApi for Api {
        async fn list_conversations(&self) -> Result<Vec<Conversation>, ApiError>;
        async fn get_conversation_messages(&self, conversation_id: &str) -> Result<Vec<Message>, ApiError>;
        async fn send_message(&self, receiver_id: &str, content: &str) -> Result<Message, ApiError>;
        async fn mark_read(&self, message_id: &str) -> Result<(), ApiError>;
        async fn create_conversation(&self, participant_id: &str) -> Result<Conversation, ApiError>;
    }
}

pub fn create_test_config(broker_url: &str) -> Configuration {
    let mut config = Configuration::init();
    config.broker.url = broker_url.to_string();
    config.broker.reconnect_delay_ms = 100;
    config.broker.connect_timeout = 2;
    config.api.request_timeout = 2;
    config
}

pub fn logged_in(user_id: &str) -> Arc<StaticSession> {
    Arc::new(StaticSession::new(Some(UserInfo::new(user_id, "tester").with_token("test-token"))))
}

pub fn new_message_payload(id: &str, sender_id: &str, receiver_id: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "NEW_MESSAGE",
        "data": {
            "id": id,
            "content": content,
            "senderId": sender_id,
            "receiverId": receiver_id,
            "timestamp": "2024-01-01T00:00:00Z",
            "read": false
        }
    })
}

/// Polls `condition` every 10 ms until it holds or `limit` passes.
pub async fn wait_until<F: Fn() -> bool>(condition: F, limit: Duration) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

#[derive(Default)]
pub struct BrokerLog {
    pub connections: usize,
    pub frames: Vec<StompFrame>,
}

impl BrokerLog {
    pub fn count(&self, command: StompCommand) -> usize {
        self.frames.iter().filter(|frame| frame.command == command).count()
    }

    pub fn last(&self, command: StompCommand) -> Option<&StompFrame> {
        self.frames.iter().rev().find(|frame| frame.command == command)
    }
}

/// Minimal STOMP broker on a loopback WebSocket.
pub struct TestBroker {
    pub url: String,
    pub log: Arc<Mutex<BrokerLog>>,
    clients: Arc<Mutex<Vec<UnboundedSender<WsMessage>>>>,
    reject_with: Arc<Mutex<Option<String>>>,
}

impl TestBroker {
    pub async fn start() -> TestBroker {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let broker = TestBroker {
            url: format!("ws://{}/ws", address),
            log: Arc::new(Mutex::new(BrokerLog::default())),
            clients: Arc::new(Mutex::new(Vec::new())),
            reject_with: Arc::new(Mutex::new(None)),
        };

        let log = broker.log.clone();
        let clients = broker.clients.clone();
        let reject_with = broker.reject_with.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let log = log.clone();
                let clients = clients.clone();
                let reject_with = reject_with.clone();
                tokio::spawn(async move {
                    let Ok(ws) = accept_async(stream).await else { return; };
                    log.lock().connections += 1;
                    let (mut write, mut read) = ws.split();
                    let (tx, mut rx) = unbounded_channel::<WsMessage>();
                    tokio::spawn(async move {
                        while let Some(message) = rx.recv().await {
                            let closing = matches!(message, WsMessage::Close(_));
                            if write.send(message).await.is_err() || closing {
                                break;
                            }
                        }
                    });

                    while let Some(Ok(message)) = read.next().await {
                        let data = match message {
                            WsMessage::Text(text) => text.as_str().as_bytes().to_vec(),
                            WsMessage::Binary(data) => data.to_vec(),
                            WsMessage::Close(_) => break,
                            _ => continue,
                        };
                        let Ok(Some(frame)) = StompFrame::decode(&data) else { continue; };
                        let command = frame.command;
                        let receipt = frame.header("receipt").map(str::to_string);
                        log.lock().frames.push(frame);
                        match command {
                            StompCommand::Connect | StompCommand::Stomp => {
                                let rejection = reject_with.lock().clone();
                                match rejection {
                                    Some(reason) => {
                                        let _ = tx.send(to_ws(&StompFrame::error(&reason, "rejected")));
                                    }
                                    None => {
                                        let _ = tx.send(to_ws(&StompFrame::connected(STOMP_VERSION)));
                                    }
                                }
                            }
                            StompCommand::Subscribe => {
                                clients.lock().push(tx.clone());
                            }
                            StompCommand::Disconnect => {
                                if let Some(receipt) = receipt {
                                    let frame = StompFrame::new(StompCommand::Receipt).with_header("receipt-id", &receipt);
                                    let _ = tx.send(to_ws(&frame));
                                }
                            }
                            _ => {}
                        }
                    }
                });
            }
        });
        broker
    }

    pub fn reject_connections(&self, reason: Option<&str>) {
        *self.reject_with.lock() = reason.map(str::to_string);
    }

    /// Sends a MESSAGE frame with `payload` to every subscribed client.
    pub fn push(&self, payload: &serde_json::Value) -> usize {
        let body = serde_json::to_vec(payload).unwrap();
        let frame = StompFrame::message("/user/queue/messages", "sub-0", &uuid::Uuid::new_v4().to_string(), body);
        self.push_raw(to_ws(&frame))
    }

    pub fn push_raw(&self, message: WsMessage) -> usize {
        let mut clients = self.clients.lock();
        clients.retain(|client| client.send(message.clone()).is_ok());
        clients.len()
    }

    /// Closes every open client socket.
    pub fn drop_connections(&self) {
        let mut clients = self.clients.lock();
        for client in clients.drain(..) {
            let _ = client.send(WsMessage::Close(None));
        }
    }

    pub fn subscribed_clients(&self) -> usize {
        self.clients.lock().len()
    }
}

pub fn to_ws(frame: &StompFrame) -> WsMessage {
    WsMessage::Text(String::from_utf8_lossy(&frame.encode()).into_owned().into())
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// One-shot-per-connection HTTP server answering every request with the
/// same status and body.
pub struct TestHttpServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestHttpServer {
    pub async fn start(status: u16, body: &str) -> TestHttpServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let body = body.to_string();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let body = body.clone();
                tokio::spawn(async move {
                    let mut buffer = Vec::new();
                    let mut chunk = [0u8; 4096];
                    let header_end = loop {
                        let read = match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(read) => read,
                        };
                        buffer.extend_from_slice(&chunk[..read]);
                        if let Some(position) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
                            break position + 4;
                        }
                    };
                    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
                    let content_length = head
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    while buffer.len() < header_end + content_length {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => break,
                            Ok(read) => buffer.extend_from_slice(&chunk[..read]),
                        }
                    }

                    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
                    let method = request_line.next().unwrap_or_default().to_string();
                    let path = request_line.next().unwrap_or_default().to_string();
                    let authorization = head.lines().find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("authorization").then(|| value.trim().to_string())
                    });
                    let request_body = String::from_utf8_lossy(&buffer[header_end..]).to_string();
                    recorded.lock().push(RecordedRequest {
                        method,
                        path,
                        authorization,
                        body: request_body,
                    });

                    let response = format!(
                        "HTTP/1.1 {} TEST\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });
        TestHttpServer {
            base_url: format!("http://{}", address),
            requests,
        }
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

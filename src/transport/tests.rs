#[cfg(test)]
mod transport_tests {
    use std::sync::Arc;
    use crate::config::structs::configuration::Configuration;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::stomp::structs::stomp_frame::StompFrame;
    use crate::transport::enums::transport_error::TransportError;
    use crate::transport::impls::transport_client::frame_to_message;
    use crate::transport::structs::outbound_chat::OutboundChat;
    use crate::transport::structs::transport_client::TransportClient;
    use crate::transport::structs::transport_state::TransportState;

    fn unreachable_client() -> TransportClient {
        let mut config = Configuration::init();
        config.broker.url = String::from("ws://127.0.0.1:9/ws");
        config.broker.reconnect_delay_ms = 50;
        config.broker.connect_timeout = 1;
        TransportClient::new(config.broker, Arc::new(StatsAtomics::new()))
    }

    #[test]
    fn test_outbound_chat_shape() {
        let chat = OutboundChat {
            from_user_id: String::from("7"),
            to_user_id: String::from("42"),
            content: String::from("hi"),
        };
        assert_eq!(
            serde_json::to_value(&chat).unwrap(),
            serde_json::json!({"fromUserId": "7", "toUserId": "42", "content": "hi"})
        );
    }

    #[test]
    fn test_frame_to_message_is_text() {
        let message = frame_to_message(&StompFrame::subscribe("sub-0", "/user/queue/messages"));
        assert!(message.is_text());
        assert!(message.to_text().unwrap().ends_with('\0'));
    }

    #[test]
    fn test_state_generation_guard() {
        let mut state = TransportState::new();
        state.active = true;
        state.connected = true;
        state.generation = 2;
        assert!(state.is_current(2));
        assert!(!state.is_current(1));
        state.mark_disconnected(1);
        assert!(state.connected);
        state.mark_disconnected(2);
        assert!(!state.connected);
    }

    #[test]
    fn test_send_while_disconnected_is_rejected() {
        let client = unreachable_client();
        match client.send_message("7", "42", "hi") {
            Err(TransportError::NotConnected) => {}
            other => panic!("Expected NotConnected, got {:?}", other),
        }
        assert_eq!(client.stats.get_stats().send_rejected, 1);
        assert_eq!(client.stats.get_stats().frames_sent, 0);
    }

    #[test]
    fn test_disconnect_when_idle() {
        let client = unreachable_client();
        assert!(!client.disconnect());
        assert!(!client.is_active());
    }

    #[tokio::test]
    async fn test_connect_is_idempotent_while_active() {
        let client = unreachable_client();
        assert!(client.connect("7", None, |_| {}));
        assert!(client.is_active());
        assert!(!client.connect("7", None, |_| {}));
        assert!(!client.is_connected());

        assert!(client.disconnect());
        assert!(!client.is_active());
        assert!(!client.is_connected());
        assert!(!client.disconnect());
    }

    #[tokio::test]
    async fn test_connect_errors_are_counted_and_retried() {
        let client = unreachable_client();
        client.connect("7", None, |_| {});
        tokio::time::sleep(std::time::Duration::from_millis(400)).await;
        let stats = client.stats.get_stats();
        assert!(stats.connect_errors >= 2);
        assert!(stats.reconnects >= 1);
        assert!(client.is_active());
        client.disconnect();
    }

    #[test]
    fn test_error_display() {
        assert_eq!(TransportError::NotConnected.to_string(), "Not connected to the message broker");
        assert_eq!(TransportError::Broker(String::from("bad auth")).to_string(), "Broker error: bad auth");
    }
}

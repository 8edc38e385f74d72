#[cfg(test)]
mod service_tests {
    use std::sync::Arc;
    use serde_json::json;
    use crate::config::structs::configuration::Configuration;
    use crate::messaging::structs::conversation::Conversation;
    use crate::messaging::structs::message::Message;
    use crate::rest::enums::api_error::ApiError;
    use crate::rest::traits::message_api::MockMessageApi;
    use crate::service::enums::service_error::ServiceError;
    use crate::service::structs::message_service::MessageService;
    use crate::session::structs::static_session::StaticSession;
    use crate::session::structs::user_info::UserInfo;
    use crate::transport::enums::transport_error::TransportError;

    fn service(api: MockMessageApi, user: Option<UserInfo>) -> MessageService {
        let mut config = Configuration::init();
        config.broker.url = String::from("ws://127.0.0.1:9/ws");
        MessageService::new(config.broker, Arc::new(StaticSession::new(user)), Arc::new(api))
    }

    fn me() -> Option<UserInfo> {
        Some(UserInfo::new("7", "me").with_token("secret"))
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            body: String::from("boom"),
        }
    }

    #[test]
    fn test_connect_requires_login() {
        let service = service(MockMessageApi::new(), None);
        assert!(matches!(service.connect(), Err(ServiceError::NotLoggedIn)));
        assert!(matches!(service.publish_message("42", "hi"), Err(ServiceError::NotLoggedIn)));
    }

    #[test]
    fn test_bus_payloads_reach_the_store() {
        let service = service(MockMessageApi::new(), me());
        service.store().write().upsert_conversation(Conversation::new("c1", "42", "bob"));

        let delivered = service.bus().dispatch(&json!({
            "type": "NEW_MESSAGE",
            "data": {"id": "m1", "content": "hi", "senderId": "42", "receiverId": "7", "timestamp": "t", "read": false}
        }));
        assert_eq!(delivered, 1);
        service.bus().dispatch(&json!({
            "type": "NEW_MESSAGE",
            "data": {"id": "m2", "content": "hi", "senderId": "99", "receiverId": "7", "timestamp": "t", "read": false}
        }));
        service.bus().dispatch(&json!({"garbage": true}));

        let store = service.store();
        let store = store.read();
        assert_eq!(store.conversation("c1").unwrap().unread_count, 1);
        assert_eq!(store.messages("c1").len(), 1);
        assert_eq!(service.stats().messages_routed, 1);
        assert_eq!(service.stats().messages_dropped, 1);
    }

    #[tokio::test]
    async fn test_load_conversations_upserts() {
        let mut api = MockMessageApi::new();
        api.expect_list_conversations()
            .times(1)
            .returning(|| Ok(vec![Conversation::new("c1", "42", "bob"), Conversation::new("c2", "43", "eve")]));
        let service = service(api, me());
        assert_eq!(service.load_conversations().await.unwrap(), 2);
        assert_eq!(service.store().read().conversations().len(), 2);
    }

    #[tokio::test]
    async fn test_open_conversation_sends_receipts_and_keeps_failures() {
        let mut api = MockMessageApi::new();
        api.expect_get_conversation_messages()
            .withf(|id: &str| id == "c1")
            .returning(|_| Ok(vec![Message::new("m1", "42", "7", "a"), Message::new("m2", "42", "7", "b")]));
        api.expect_mark_read()
            .times(2)
            .returning(|id: &str| if id == "m2" { Err(server_error()) } else { Ok(()) });
        let service = service(api, me());
        service.store().write().upsert_conversation(Conversation::new("c1", "42", "bob"));

        let failures = service.open_conversation("c1").await.unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message_id, "m2");

        let store = service.store();
        assert_eq!(store.read().current_conversation(), Some("c1"));
        assert!(store.read().messages("c1").iter().all(|m| m.read));
        assert_eq!(store.read().read_receipts_failed(), vec![String::from("m2")]);
        assert!(store.read().read_receipts_pending().is_empty());
        assert_eq!(service.stats().read_receipts_sent, 1);
        assert_eq!(service.stats().read_receipts_failed, 1);
    }

    #[tokio::test]
    async fn test_retry_failed_read_receipts() {
        let mut api = MockMessageApi::new();
        let mut sequence = mockall::Sequence::new();
        api.expect_mark_read()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Err(server_error()));
        api.expect_mark_read()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(()));
        let service = service(api, me());
        {
            let store = service.store();
            let mut store = store.write();
            store.upsert_conversation(Conversation::new("c1", "42", "bob"));
            store.add_message(Message::new("m1", "42", "7", "a"));
        }

        assert_eq!(service.select_conversation(Some("c1")).await.len(), 1);
        assert!(service.retry_failed_read_receipts().await.is_empty());
        assert!(service.store().read().read_receipts_failed().is_empty());
        assert!(service.retry_failed_read_receipts().await.is_empty());
    }

    #[tokio::test]
    async fn test_send_message_records_acknowledged_message() {
        let mut api = MockMessageApi::new();
        api.expect_send_message()
            .withf(|receiver: &str, content: &str| receiver == "42" && content == "hello")
            .returning(|receiver, content| Ok(Message::new("m5", "7", receiver, content)));
        let service = service(api, me());
        service.store().write().upsert_conversation(Conversation::new("c1", "42", "bob"));

        let message = service.send_message("42", "hello").await.unwrap();
        assert_eq!(message.id, "m5");
        let store = service.store();
        assert_eq!(store.read().messages("c1"), &[message]);
        assert_eq!(store.read().conversation("c1").unwrap().unread_count, 0);
    }

    #[tokio::test]
    async fn test_send_message_surfaces_api_errors() {
        let mut api = MockMessageApi::new();
        api.expect_send_message().returning(|_, _| Err(server_error()));
        let service = service(api, me());
        assert!(matches!(
            service.send_message("42", "hello").await,
            Err(ServiceError::Api(ApiError::Status { status: 500, .. }))
        ));
    }

    #[test]
    fn test_publish_while_disconnected() {
        let service = service(MockMessageApi::new(), me());
        assert!(matches!(
            service.publish_message("42", "hi"),
            Err(ServiceError::Transport(TransportError::NotConnected))
        ));
        assert_eq!(service.stats().send_rejected, 1);
    }

    #[tokio::test]
    async fn test_start_conversation_upserts() {
        let mut api = MockMessageApi::new();
        api.expect_create_conversation()
            .returning(|participant| Ok(Conversation::new("c9", participant, "new")));
        let service = service(api, me());
        let conversation = service.start_conversation("55").await.unwrap();
        assert_eq!(conversation.id, "c9");
        assert_eq!(service.store().read().conversation("c9").unwrap().participant_id, "55");
    }

    #[tokio::test]
    async fn test_connect_twice_and_drop_disconnects() {
        let service = service(MockMessageApi::new(), me());
        assert!(service.connect().unwrap());
        assert!(!service.connect().unwrap());
        let transport = service.transport();
        assert!(transport.is_active());
        drop(service);
        assert!(!transport.is_active());
    }
}

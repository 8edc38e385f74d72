#[cfg(test)]
mod events_tests {
    use std::sync::Arc;
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use crate::events::structs::event_bus::EventBus;

    #[test]
    fn test_dispatch_in_attachment_order() {
        let bus: EventBus<Value> = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = seen.clone();
        bus.subscribe(move |event: &Value| first.lock().push(("L1", event.clone())));
        let second = seen.clone();
        bus.subscribe(move |event: &Value| second.lock().push(("L2", event.clone())));

        let event = json!({"type": "NEW_MESSAGE"});
        assert_eq!(bus.dispatch(&event), 2);

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("L1", event.clone()));
        assert_eq!(seen[1], ("L2", event));
    }

    #[test]
    fn test_every_event_reaches_every_listener() {
        let bus: EventBus<u32> = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for name in ["a", "b"] {
            let seen = seen.clone();
            bus.subscribe(move |event: &u32| seen.lock().push(format!("{}{}", name, event)));
        }
        bus.dispatch(&1);
        bus.dispatch(&2);
        assert_eq!(*seen.lock(), vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn test_no_buffering_without_listeners() {
        let bus: EventBus<u32> = EventBus::new();
        assert_eq!(bus.dispatch(&1), 0);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(move |event: &u32| sink.lock().push(*event));
        bus.dispatch(&2);
        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn test_unsubscribe() {
        let bus: EventBus<u32> = EventBus::new();
        let id = bus.subscribe(|_| {});
        assert_eq!(bus.listener_count(), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.dispatch(&1), 0);
    }

    #[test]
    fn test_listener_added_during_dispatch_sees_later_events_only() {
        let bus: Arc<EventBus<u32>> = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let bus_inner = bus.clone();
        let seen_inner = seen.clone();
        bus.subscribe(move |event: &u32| {
            if *event == 1 {
                let sink = seen_inner.clone();
                bus_inner.subscribe(move |event: &u32| sink.lock().push(*event));
            }
        });
        assert_eq!(bus.dispatch(&1), 1);
        assert_eq!(bus.dispatch(&2), 2);
        assert_eq!(*seen.lock(), vec![2]);
    }

    #[tokio::test]
    async fn test_subscribe_channel() {
        let bus: EventBus<Value> = EventBus::new();
        let (_, mut rx) = bus.subscribe_channel();
        bus.dispatch(&json!({"n": 1}));
        bus.dispatch(&json!({"n": 2}));
        assert_eq!(rx.recv().await.unwrap()["n"], 1);
        assert_eq!(rx.recv().await.unwrap()["n"], 2);
    }
}

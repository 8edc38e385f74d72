#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.broker.subscribe_destination, "/user/queue/messages");
            assert_eq!(config.broker.send_destination, "/app/send_message");
            assert_eq!(config.broker.reconnect_delay_ms, 5000);
            assert!(!config.sentry_config.enabled);
        }

        #[test]
        fn test_toml_roundtrip_keeps_values() {
            let mut config = Configuration::init();
            config.broker.url = String::from("wss://pt.example.org/ws");
            config.api.request_timeout = 42;
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(config, loaded);
        }

        #[test]
        fn test_load_rejects_missing_section() {
            let result = Configuration::load(b"log_level = \"info\"\n");
            assert!(result.is_err());
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("loud");
            match config.validate() {
                Err(ConfigurationError::ValidationError(msg)) => assert!(msg.contains("loud")),
                other => panic!("Expected ValidationError, got {:?}", other),
            }
        }

        #[test]
        fn test_validate_rejects_http_broker_url() {
            let mut config = Configuration::init();
            config.broker.url = String::from("http://127.0.0.1:8080/ws");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_relative_destination() {
            let mut config = Configuration::init();
            config.broker.send_destination = String::from("app/send_message");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_zero_reconnect_delay() {
            let mut config = Configuration::init();
            config.broker.reconnect_delay_ms = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_rejects_empty_session_path() {
            let mut config = Configuration::init();
            config.session.path = String::new();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validation_error_display() {
            let error = ConfigurationError::ValidationError(String::from("bad value"));
            assert_eq!(format!("{}", error), "[VALIDATE CONFIG] bad value");
        }
    }

    mod broker_config_tests {
        use std::time::Duration;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_reconnect_delay() {
            let config = Configuration::init();
            assert_eq!(config.broker.reconnect_delay(), Duration::from_millis(5000));
        }

        #[test]
        fn test_heartbeat_header() {
            let mut config = Configuration::init();
            config.broker.heartbeat_outgoing_ms = 10000;
            config.broker.heartbeat_incoming_ms = 20000;
            assert_eq!(config.broker.heartbeat_header(), "10000,20000");
        }

        #[test]
        fn test_host_strips_scheme_and_path() {
            let mut config = Configuration::init();
            config.broker.url = String::from("wss://pt.example.org:8443/ws?lang=zh");
            assert_eq!(config.broker.host(), "pt.example.org:8443");
        }
    }
}

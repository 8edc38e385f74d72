use std::fs::File;
use std::io::Write;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::broker_config::BrokerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::session_config::SessionConfig;

const DESTINATION_REGEX: &str = r"^/[A-Za-z0-9_\-./]+$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            broker: BrokerConfig {
                url: String::from("ws://127.0.0.1:8080/ws"),
                subscribe_destination: String::from("/user/queue/messages"),
                send_destination: String::from("/app/send_message"),
                reconnect_delay_ms: 5000,
                connect_timeout: 10,
                heartbeat_outgoing_ms: 0,
                heartbeat_incoming_ms: 0,
            },
            api: ApiConfig {
                base_url: String::from("http://127.0.0.1:8080"),
                request_timeout: 15,
            },
            session: SessionConfig {
                path: String::from("user_info.json"),
            },
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and restart, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("{}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level \"{}\"", self.log_level)));
        }

        let check_map = vec![
            ("[BROKER] url", self.broker.url.as_str(), r"^wss?://[^\s]+$"),
            ("[BROKER] subscribe_destination", self.broker.subscribe_destination.as_str(), DESTINATION_REGEX),
            ("[BROKER] send_destination", self.broker.send_destination.as_str(), DESTINATION_REGEX),
            ("[API] base_url", self.api.base_url.as_str(), r"^https?://[^\s]+$"),
            ("[SESSION] path", self.session.path.as_str(), r"^\S.*$"),
        ];

        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }

        if self.broker.reconnect_delay_ms == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[BROKER] reconnect_delay_ms must be greater than 0")));
        }
        if self.broker.connect_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[BROKER] connect_timeout must be greater than 0")));
        }
        if self.api.request_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[API] request_timeout must be greater than 0")));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("Invalid regex for {}: {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

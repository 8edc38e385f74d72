use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use sentry::ClientInitGuard;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use pt_messenger::common::common::setup_logging;
use pt_messenger::config::structs::configuration::Configuration;
use pt_messenger::console::console::{execute, render_message};
use pt_messenger::console::enums::console_command::ConsoleCommand;
use pt_messenger::messaging::enums::message_event::MessageEvent;
use pt_messenger::rest::structs::http_message_api::HttpMessageApi;
use pt_messenger::service::structs::message_service::MessageService;
use pt_messenger::session::structs::file_session::FileSession;
use pt_messenger::session::structs::static_session::StaticSession;
use pt_messenger::session::structs::user_info::UserInfo;
use pt_messenger::session::traits::session_provider::SessionProvider;
use pt_messenger::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let session: Arc<dyn SessionProvider> = match args.user_id.as_deref() {
                Some(user_id) => {
                    let username = args.username.as_deref().unwrap_or(user_id);
                    let mut user = UserInfo::new(user_id, username);
                    user.token = args.token.clone();
                    info!("[BOOT] Using session from command line for user {}", user_id);
                    Arc::new(StaticSession::new(Some(user)))
                }
                None => {
                    info!("[BOOT] Using session file {}", config.session.path);
                    Arc::new(FileSession::new(&config.session.path))
                }
            };

            let api = match HttpMessageApi::new(&config.api, session.clone()) {
                Ok(api) => Arc::new(api),
                Err(error) => {
                    error!("[BOOT] Unable to build the REST client: {}", error);
                    exit(1);
                }
            };
            let service = Arc::new(MessageService::new(config.broker.clone(), session.clone(), api));

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to install the shutdown handler: {:?}", error);
                    exit(1);
                }
            };

            let (_, mut events) = service.bus().subscribe_channel();
            let events_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        payload = events.recv() => {
                            let Some(payload) = payload else { return; };
                            if let Ok(MessageEvent::NewMessage(message)) = MessageEvent::from_value(&payload) {
                                println!("{}", render_message(&message));
                            }
                        }
                        _ = events_handler.handle() => {
                            return;
                        }
                    }
                }
            });

            if args.no_connect {
                info!("[BOOT] Broker connection disabled");
            } else {
                match service.connect() {
                    Ok(_) => {}
                    Err(error) => warn!("[BOOT] Not connecting to the broker: {}", error),
                }
            }

            match service.load_conversations().await {
                Ok(count) => info!("[BOOT] {} conversations available, type /help for commands", count),
                Err(error) => warn!("[BOOT] Unable to load conversations: {}", error),
            }

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                tokio::select! {
                    line = lines.next_line() => {
                        let line = match line {
                            Ok(Some(line)) => line,
                            Ok(None) => break,
                            Err(error) => {
                                error!("[CONSOLE] Unable to read stdin: {}", error);
                                break;
                            }
                        };
                        if line.trim().is_empty() {
                            continue;
                        }
                        match ConsoleCommand::from_str(&line) {
                            Ok(command) => {
                                if !execute(&service, command).await {
                                    break;
                                }
                            }
                            Err(error) => println!("{}", error),
                        }
                    }
                    _ = tokio_shutdown.handle() => {
                        info!("Shutdown request received, shutting down...");
                        break;
                    }
                }
            }

            service.disconnect();
            tokio::time::sleep(Duration::from_secs(1)).await;
            info!("Shutdown completed");
            Ok(())
        })
}

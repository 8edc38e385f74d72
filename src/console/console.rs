use log::{error, warn};
use crate::console::enums::console_command::ConsoleCommand;
use crate::console::impls::console_command::HELP;
use crate::messaging::structs::message::Message;
use crate::service::structs::message_service::MessageService;

pub fn render_message(message: &Message) -> String {
    format!(
        "[{}] {} -> {}: {}{}",
        message.timestamp,
        message.sender_id,
        message.receiver_id,
        message.content,
        if message.read { "" } else { " (unread)" }
    )
}

/// Runs one console command. Returns `false` once the user asked to quit.
pub async fn execute(service: &MessageService, command: ConsoleCommand) -> bool {
    match command {
        ConsoleCommand::List => {
            if let Err(e) = service.load_conversations().await {
                warn!("[CONSOLE] Could not refresh conversations: {}", e);
            }
            let store = service.store();
            let store = store.read();
            for conversation in store.conversations() {
                println!(
                    "{} {} ({}) unread: {}",
                    conversation.id, conversation.participant_name, conversation.participant_id, conversation.unread_count
                );
            }
            println!("total unread: {}", store.total_unread());
        }
        ConsoleCommand::Open(conversation_id) => match service.open_conversation(&conversation_id).await {
            Ok(failures) => {
                let store = service.store();
                for message in store.read().messages(&conversation_id) {
                    println!("{}", render_message(message));
                }
                for failure in failures {
                    warn!("[CONSOLE] Read receipt for {} failed: {}", failure.message_id, failure.error);
                }
            }
            Err(e) => error!("[CONSOLE] Could not open {}: {}", conversation_id, e),
        },
        ConsoleCommand::Send { receiver_id, content } => match service.send_message(&receiver_id, &content).await {
            Ok(message) => println!("{}", render_message(&message)),
            Err(e) => error!("[CONSOLE] Send failed: {}", e),
        },
        ConsoleCommand::Publish { receiver_id, content } => {
            if let Err(e) = service.publish_message(&receiver_id, &content) {
                error!("[CONSOLE] Publish failed: {}", e);
            }
        }
        ConsoleCommand::Close => {
            service.select_conversation(None).await;
        }
        ConsoleCommand::Stats => match serde_json::to_string_pretty(&service.stats()) {
            Ok(stats) => println!("{}", stats),
            Err(e) => error!("[CONSOLE] Could not render stats: {}", e),
        },
        ConsoleCommand::Help => println!("{}", HELP),
        ConsoleCommand::Quit => return false,
    }
    true
}

use std::str::FromStr;
use crate::common::structs::custom_error::CustomError;
use crate::console::enums::console_command::ConsoleCommand;

pub const HELP: &str = "/list | /open <conversationId> | /send <userId> <text> | /publish <userId> <text> | /close | /stats | /quit";

impl FromStr for ConsoleCommand {
    type Err = CustomError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "/list" => Ok(ConsoleCommand::List),
            "/open" if !rest.is_empty() => Ok(ConsoleCommand::Open(rest.to_string())),
            "/send" | "/publish" => {
                let (receiver_id, content) = rest
                    .split_once(char::is_whitespace)
                    .map(|(receiver_id, content)| (receiver_id, content.trim()))
                    .filter(|(_, content)| !content.is_empty())
                    .ok_or_else(|| CustomError::new(&format!("usage: {} <userId> <text>", command)))?;
                let receiver_id = receiver_id.to_string();
                let content = content.to_string();
                if command == "/send" {
                    Ok(ConsoleCommand::Send { receiver_id, content })
                } else {
                    Ok(ConsoleCommand::Publish { receiver_id, content })
                }
            }
            "/open" => Err(CustomError::new("usage: /open <conversationId>")),
            "/close" => Ok(ConsoleCommand::Close),
            "/stats" => Ok(ConsoleCommand::Stats),
            "/help" => Ok(ConsoleCommand::Help),
            "/quit" | "/exit" => Ok(ConsoleCommand::Quit),
            other => Err(CustomError::new(&format!("unknown command \"{}\", try /help", other))),
        }
    }
}

use std::str::FromStr;
use crate::stomp::enums::frame_error::FrameError;
use crate::stomp::enums::stomp_command::StompCommand;
use crate::stomp::structs::stomp_frame::StompFrame;

pub const STOMP_VERSION: &str = "1.2";

impl StompFrame {
    pub fn new(command: StompCommand) -> Self {
        Self {
            command,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn connect(host: &str, heart_beat: &str) -> Self {
        Self::new(StompCommand::Connect)
            .with_header("accept-version", STOMP_VERSION)
            .with_header("host", host)
            .with_header("heart-beat", heart_beat)
    }

    pub fn connected(version: &str) -> Self {
        Self::new(StompCommand::Connected)
            .with_header("version", version)
            .with_header("heart-beat", "0,0")
    }

    pub fn subscribe(id: &str, destination: &str) -> Self {
        Self::new(StompCommand::Subscribe)
            .with_header("id", id)
            .with_header("destination", destination)
            .with_header("ack", "auto")
    }

    pub fn send(destination: &str, content_type: &str, body: Vec<u8>) -> Self {
        Self::new(StompCommand::Send)
            .with_header("destination", destination)
            .with_header("content-type", content_type)
            .with_body(body)
    }

    pub fn message(destination: &str, subscription: &str, message_id: &str, body: Vec<u8>) -> Self {
        Self::new(StompCommand::Message)
            .with_header("destination", destination)
            .with_header("subscription", subscription)
            .with_header("message-id", message_id)
            .with_header("content-type", "application/json")
            .with_body(body)
    }

    pub fn error(message: &str, details: &str) -> Self {
        Self::new(StompCommand::Error)
            .with_header("message", message)
            .with_header("content-type", "text/plain")
            .with_body(details.as_bytes().to_vec())
    }

    pub fn disconnect(receipt: &str) -> Self {
        Self::new(StompCommand::Disconnect).with_header("receipt", receipt)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body_str(&self) -> Result<&str, FrameError> {
        std::str::from_utf8(&self.body).map_err(|_| FrameError::InvalidUtf8)
    }

    pub fn encode(&self) -> Vec<u8> {
        let escape = self.command.escapes_headers();
        let mut out = Vec::with_capacity(64 + self.body.len());
        out.extend_from_slice(self.command.as_str().as_bytes());
        out.push(b'\n');
        for (name, value) in &self.headers {
            push_header_part(&mut out, name, escape);
            out.push(b':');
            push_header_part(&mut out, value, escape);
            out.push(b'\n');
        }
        if !self.body.is_empty() && self.header("content-length").is_none() {
            out.extend_from_slice(format!("content-length:{}\n", self.body.len()).as_bytes());
        }
        out.push(b'\n');
        out.extend_from_slice(&self.body);
        out.push(0);
        out
    }

    /// Returns `Ok(None)` for heart-beats.
    pub fn decode(data: &[u8]) -> Result<Option<StompFrame>, FrameError> {
        let start = match data.iter().position(|b| *b != b'\n' && *b != b'\r') {
            Some(start) => start,
            None => return Ok(None),
        };
        let data = &data[start..];
        let mut pos = 0usize;

        let command = StompCommand::from_str(read_line(data, &mut pos)?)?;
        let escape = command.escapes_headers();

        let mut headers = Vec::new();
        loop {
            let line = read_line(data, &mut pos)?;
            if line.is_empty() {
                break;
            }
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| FrameError::MalformedHeader(line.to_string()))?;
            if escape {
                headers.push((unescape(name)?, unescape(value)?));
            } else {
                headers.push((name.to_string(), value.to_string()));
            }
        }

        let content_length = headers
            .iter()
            .find(|(name, _)| name == "content-length")
            .map(|(_, value)| value.clone());

        let remaining = &data[pos..];
        let body = match content_length {
            Some(value) => {
                let length = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| FrameError::InvalidContentLength(value.clone()))?;
                if remaining.len() <= length || remaining[length] != 0 {
                    return Err(FrameError::MissingTerminator);
                }
                remaining[..length].to_vec()
            }
            None => {
                let end = remaining
                    .iter()
                    .position(|b| *b == 0)
                    .ok_or(FrameError::MissingTerminator)?;
                remaining[..end].to_vec()
            }
        };

        Ok(Some(StompFrame { command, headers, body }))
    }
}

fn read_line<'a>(data: &'a [u8], pos: &mut usize) -> Result<&'a str, FrameError> {
    let rest = &data[*pos..];
    let newline = rest
        .iter()
        .position(|b| *b == b'\n')
        .ok_or(FrameError::Incomplete)?;
    let mut line = &rest[..newline];
    if line.last() == Some(&b'\r') {
        line = &line[..line.len() - 1];
    }
    *pos += newline + 1;
    std::str::from_utf8(line).map_err(|_| FrameError::InvalidUtf8)
}

fn push_header_part(out: &mut Vec<u8>, value: &str, escape: bool) {
    if !escape {
        out.extend_from_slice(value.as_bytes());
        return;
    }
    for c in value.chars() {
        match c {
            '\\' => out.extend_from_slice(b"\\\\"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\n' => out.extend_from_slice(b"\\n"),
            ':' => out.extend_from_slice(b"\\c"),
            other => {
                let mut buffer = [0u8; 4];
                out.extend_from_slice(other.encode_utf8(&mut buffer).as_bytes());
            }
        }
    }
}

fn unescape(value: &str) -> Result<String, FrameError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('c') => out.push(':'),
            _ => return Err(FrameError::InvalidEscape(value.to_string())),
        }
    }
    Ok(out)
}

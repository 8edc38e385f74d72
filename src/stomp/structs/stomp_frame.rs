use crate::stomp::enums::stomp_command::StompCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StompFrame {
    pub command: StompCommand,
    /// Kept in wire order; repeated names are allowed and the first one wins.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

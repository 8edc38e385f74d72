#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `disconnect` was called.
    Shutdown,
    /// The broker or the network closed the socket.
    Closed,
}

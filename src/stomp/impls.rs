pub mod stomp_command;
pub mod stomp_frame;

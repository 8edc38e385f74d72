pub mod console_command;

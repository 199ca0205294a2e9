pub mod decode_command;
pub mod validate_command;

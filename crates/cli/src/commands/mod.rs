pub mod keys;
pub mod resolve;
pub mod tokenize;

pub use keys::keys_command;
pub use resolve::resolve_command;
pub use tokenize::tokenize_command;

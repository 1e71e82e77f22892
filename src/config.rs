// ABOUTME: Version and REPL banner constants

pub const VERSION: &str = "0.1.0";
pub const WELCOME_MESSAGE: &str = "Lithp 0.1.0";
pub const WELCOME_SUBTITLE: &str = "Press Ctrl-C to exit";

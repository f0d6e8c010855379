pub mod console;

pub use console::{parse_command, Command, CommandError, ConsolePresenter};

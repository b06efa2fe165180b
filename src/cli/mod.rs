pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::Cli;
pub(crate) use commands::{Base64Command, Commands, JsonCommand, JsonInput, ThemeAction};

//! CLI subcommand definitions
//!
//! One subcommand per tool, plus the store-backed `history`, `theme` and
//! `usage` commands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::tools::Tool;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate a QR code from text or a URL
    Qr {
        /// Text to encode (reads stdin when omitted or "-")
        text: Option<String>,
        /// Write a PNG image instead of drawing in the terminal
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Image edge length in pixels
        #[arg(long, value_name = "PX")]
        size: Option<u32>,
    },
    /// Shrink images to a maximum width, keeping the aspect ratio (PNG output)
    Resize {
        /// Image files or glob patterns
        #[arg(required = true, value_name = "IMAGE")]
        inputs: Vec<String>,
        /// Maximum width in pixels (default 800)
        #[arg(short = 'w', long, value_name = "PX")]
        max_width: Option<String>,
        /// Directory for resized files (default: next to each input)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Generate random passwords
    Password {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
        /// Number of passwords to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Exclude digits
        #[arg(long)]
        no_numbers: bool,
        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },
    /// Convert a length between m, cm, km, ft, in and yd
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: String,
        from: String,
        to: String,
    },
    /// Reverse text
    Reverse {
        /// Text to reverse (reads stdin when omitted or "-")
        text: Option<String>,
    },
    /// Count words, characters and paragraphs
    Count {
        /// Text to count (reads stdin when omitted or "-")
        text: Option<String>,
    },
    /// Show a color as hex and rgb()
    Color {
        /// #RRGGBB, #RGB, rgb(r, g, b) or r,g,b
        value: String,
    },
    /// Calculate age from a birth date
    Age {
        /// Birth date (YYYY-MM-DD or YYYYMMDD)
        birth_date: String,
        /// Use this date as today instead of the current date
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },
    /// Calculate body mass index
    Bmi {
        /// Height in centimeters
        #[arg(long, value_name = "CM", allow_negative_numbers = true)]
        height: String,
        /// Weight in kilograms
        #[arg(long, value_name = "KG", allow_negative_numbers = true)]
        weight: String,
    },
    /// Draw random integers from an inclusive range
    Random {
        #[arg(allow_negative_numbers = true)]
        min: String,
        #[arg(allow_negative_numbers = true)]
        max: String,
        /// Number of draws
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Create a short URL (simulated, nothing is sent over the network)
    Shorten {
        url: String,
        /// Custom alias instead of a random code
        #[arg(short, long)]
        alias: Option<String>,
    },
    /// Show shortened URL history
    History {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Delete the stored history
        #[arg(long)]
        clear: bool,
    },
    /// Encode or decode Base64 text
    Base64 {
        #[command(subcommand)]
        command: Base64Command,
    },
    /// Format, minify or validate JSON
    Json {
        #[command(subcommand)]
        command: JsonCommand,
    },
    /// Show or change the color theme
    Theme {
        action: Option<ThemeAction>,
    },
    /// Show the most used tools
    Usage,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Base64Command {
    /// Encode text as Base64
    Encode {
        /// Text to encode (reads stdin when omitted or "-")
        text: Option<String>,
    },
    /// Decode Base64 to text
    Decode {
        /// Base64 to decode (reads stdin when omitted or "-")
        text: Option<String>,
    },
}

#[derive(Debug, Args)]
pub(crate) struct JsonInput {
    /// JSON text (reads stdin when omitted or "-")
    pub(crate) input: Option<String>,
    /// Read JSON from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "input")]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum JsonCommand {
    /// Pretty-print with two-space indentation
    Format(JsonInput),
    /// Remove all insignificant whitespace
    Minify(JsonInput),
    /// Check syntax and summarize
    Validate(JsonInput),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl Commands {
    /// Tool whose usage counter this command increments
    pub(crate) fn tool(&self) -> Option<Tool> {
        let tool = match self {
            Commands::Qr { .. } => Tool::QrGenerator,
            Commands::Resize { .. } => Tool::ImageResizer,
            Commands::Password { .. } => Tool::PasswordGenerator,
            Commands::Convert { .. } => Tool::UnitConverter,
            Commands::Reverse { .. } => Tool::TextReverser,
            Commands::Count { .. } => Tool::WordCounter,
            Commands::Color { .. } => Tool::ColorPicker,
            Commands::Age { .. } => Tool::AgeCalculator,
            Commands::Bmi { .. } => Tool::BmiCalculator,
            Commands::Random { .. } => Tool::NumberRandomizer,
            Commands::Shorten { .. } => Tool::UrlShortener,
            Commands::Base64 { .. } => Tool::Base64Converter,
            Commands::Json { .. } => Tool::JsonFormatter,
            Commands::History { .. } | Commands::Theme { .. } | Commands::Usage => return None,
        };
        Some(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_commands_are_not_tools() {
        assert_eq!(Commands::Usage.tool(), None);
        assert_eq!(Commands::Theme { action: None }.tool(), None);
        assert_eq!(
            Commands::History {
                limit: None,
                clear: false
            }
            .tool(),
            None
        );
    }

    #[test]
    fn tool_commands_map_to_usage_names() {
        let cmd = Commands::Json {
            command: JsonCommand::Validate(JsonInput {
                input: None,
                file: None,
            }),
        };
        assert_eq!(cmd.tool().map(Tool::name), Some("json-formatter"));
        let cmd = Commands::Reverse { text: None };
        assert_eq!(cmd.tool().map(Tool::name), Some("text-reverser"));
    }
}

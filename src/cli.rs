use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::codec::Framing;

/// How the message bytes are written in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Quoted `\xHH` escapes, as copied from a terminal or C source
    #[default]
    Hex,
    /// Raw wire-format bytes
    Raw,
}

#[derive(Parser, Debug)]
#[command(name = "dns-decode")]
#[command(about = "Decodes DNS wire-format messages into dig-style text", long_about = None)]
pub struct Args {
    /// File to read the message from, stdin when omitted
    pub input: Option<PathBuf>,

    /// Encoding of the input
    #[arg(short, long, value_enum, default_value_t = InputFormat::Hex)]
    pub format: InputFormat,

    /// Single message, or messages each prefixed by a 2-byte length as on TCP
    #[arg(long, value_enum, default_value_t = Framing::Datagram)]
    pub framing: Framing,

    /// More log output on stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

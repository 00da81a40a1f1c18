use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lzw_core::types::CodebookMode;

#[derive(Parser)]
#[command(name = "lzwmod")]
#[command(about = "Adaptive-width LZW compression (9 to 16 bit codewords)")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Compress stdin to stdout, dictionary frozen when full
    lzwmod compress < input.txt > input.lzw

    # Compress with dictionary reset when full
    lzwmod compress r --input input.txt --output input.lzw

    # Expand; the mode is read from the stream
    lzwmod expand --input input.lzw --output input.txt
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compress input into an LZW stream
    Compress {
        /// What to do when the codebook is full at 16 bits
        #[arg(value_enum, default_value_t = ModeArg::None)]
        mode: ModeArg,

        #[command(flatten)]
        io: IoArgs,
    },
    /// Expand an LZW stream back into the original bytes
    Expand {
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Args)]
pub struct IoArgs {
    /// Read from this file instead of stdin
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Keep coding with a frozen codebook
    #[value(alias = "n")]
    None,
    /// Start over with a fresh codebook
    #[value(alias = "r")]
    Reset,
    /// Reset on falling compression ratio (not supported)
    #[value(alias = "m")]
    Monitor,
}

impl From<ModeArg> for CodebookMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::None => CodebookMode::None,
            ModeArg::Reset => CodebookMode::Reset,
            ModeArg::Monitor => CodebookMode::Monitor,
        }
    }
}

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use keyconv_types::{ArtifactKind, Compression, DataFormat, OutputSelection};

const AFTER_HELP: &str = "\
Types:   private-key, private-key-wif, public-key, public-key-sha256 (public-key-sha),
         public-key-ripemd160 (public-key-rmd), address; output may also be 'all'
Formats: raw, hex, base58, base58check

Examples:
  Show the address of a WIF private key
    keyconv --input-type private-key-wif --input-format base58check \\
      --input 5J2YUwNA5hmZFW33nbUCp5TmvszYXxVYthqDv7axSisBjFJMqaT \\
      --output-type address --output-format base58check

  Show everything for a raw private key
    keyconv --input-type private-key --input-format raw \\
      --input-file <(openssl rand 32) \\
      --output-type all --public-key-compression compressed";

#[derive(Debug, Parser)]
#[command(
    name = "keyconv",
    about = "Convert between private keys, public keys, public-key hashes and addresses",
    version,
    after_help = AFTER_HELP,
)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "input_file"])))]
pub struct Cli {
    /// Kind of the input data
    #[arg(long, value_name = "TYPE")]
    pub input_type: ArtifactKind,

    /// Serialization of the input data
    #[arg(long, value_name = "FORMAT")]
    pub input_format: DataFormat,

    /// Input data given inline
    #[arg(long, value_name = "DATA")]
    pub input: Option<String>,

    /// Read the input data from a file
    #[arg(long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Kind to produce, or 'all' for everything reachable from the input
    #[arg(long, value_name = "TYPE")]
    pub output_type: OutputSelection,

    /// Serialization of the output; required unless the output type is 'all'
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<DataFormat>,

    /// Public-key compression; 'auto' takes it from a WIF private key
    #[arg(long, value_enum, default_value_t = CompressionArg::Auto)]
    pub public_key_compression: CompressionArg,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as a JSON object
    #[arg(long)]
    pub json: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    Auto,
    Compressed,
    Uncompressed,
}

impl CompressionArg {
    /// The explicit override this choice stands for.
    pub fn to_override(self) -> Option<Compression> {
        match self {
            Self::Auto => None,
            Self::Compressed => Some(Compression::Compressed),
            Self::Uncompressed => Some(Compression::Uncompressed),
        }
    }
}

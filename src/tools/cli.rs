use clap::Parser;
use log::{info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

use super::bitmap::HEADER_SIZE;

/// Verbosity of user information
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Verbosity {
    Quiet,
    Errors,
    Normal,
    Chatty,
}
impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// RoundTrip writes the reconstructed bitmap, Test only verifies it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    RoundTrip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Bitmap to read the pixels from
    pub input: String,
    /// File receiving the packed stream
    pub encoded: String,
    /// File receiving the reconstructed bitmap
    pub output: String,
    /// Bytes of header in front of the pixels
    pub header_size: usize,
    /// Number of bits shown from the encoded and decoded streams
    pub sample: usize,
    pub op_mode: Mode,
    /// Verbosity of user information
    pub verbose: Verbosity,
    pub log_level: LevelFilter,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: "lenna.bmp".to_string(),
            encoded: "encoded.bin".to_string(),
            output: "lenna_r.bmp".to_string(),
            header_size: HEADER_SIZE,
            sample: 100,
            op_mode: Mode::RoundTrip,
            verbose: Verbosity::Normal,
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Lossless Huffman round trip of uncompressed bitmap pixels",
    long_about = None)]
pub struct Args {
    /// Bitmap to compress
    #[clap(default_value = "lenna.bmp")]
    input: String,

    /// Where the packed stream is written
    #[clap(short = 'e', long = "encoded", default_value = "encoded.bin")]
    encoded: String,

    /// Where the reconstructed bitmap is written
    #[clap(short = 'o', long = "output", default_value = "lenna_r.bmp")]
    output: String,

    /// Bytes of header in front of the pixel data
    #[clap(long = "header-size", default_value_t = HEADER_SIZE)]
    header_size: usize,

    /// How many bits of the encoded/decoded streams to print
    #[clap(long = "sample", default_value_t = 100)]
    sample: usize,

    /// Verify the round trip without writing the reconstructed bitmap
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Suppress everything but errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v 1 shows very little, -v 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Copy the parsed arguments into our internal structure.
fn opts_from_args(args: Args) -> HuffOpts {
    let (verbose, log_level) = match (args.quiet, args.v) {
        (true, _) | (false, 0) => (Verbosity::Quiet, LevelFilter::Error),
        (false, 1) => (Verbosity::Errors, LevelFilter::Error),
        (false, 2) => (Verbosity::Errors, LevelFilter::Warn),
        (false, 3) => (Verbosity::Normal, LevelFilter::Info),
        (false, 4) => (Verbosity::Chatty, LevelFilter::Debug),
        (false, _) => (Verbosity::Chatty, LevelFilter::Trace),
    };
    HuffOpts {
        input: args.input,
        encoded: args.encoded,
        output: args.output,
        header_size: args.header_size,
        sample: args.sample,
        op_mode: if args.test { Mode::Test } else { Mode::RoundTrip },
        verbose,
        log_level,
    }
}

/// Parse options from an explicit argument list (the first item is the program name).
pub fn parse_from<I, T>(args: I) -> Result<HuffOpts, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Args::try_parse_from(args).map(opts_from_args)
}

/// Parse the command line, set the log level and report the settings.
pub fn init_huff_opts() -> HuffOpts {
    let opts = opts_from_args(Args::parse());
    log::set_max_level(opts.log_level);

    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Reading pixels from {}", opts.input);
    info!("Header size set to {}", opts.header_size);
    info!("Packed stream goes to {}", opts.encoded);
    if opts.op_mode == Mode::RoundTrip {
        info!("Reconstructed bitmap goes to {}", opts.output);
    }
    info!("---- Initialization End ----\n");
    opts
}

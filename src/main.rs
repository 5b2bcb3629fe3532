//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::fs;

use huffbmp::bitstream::bitwriter::BitWriter;
use huffbmp::compression::compress::encode;
use huffbmp::compression::decompress::{decode, read_packed};
use huffbmp::compression::integrity::{bits_per_symbol, check};
use huffbmp::error::HuffError;
use huffbmp::tools::bitmap::{read_bitmap, write_bitmap};
use huffbmp::tools::cli::{init_huff_opts, HuffOpts, Mode, Verbosity};
use huffbmp::tools::report::{bit_sample, report};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Logging unavailable: {}", e);
    }

    let options = init_huff_opts();

    match round_trip(&options) {
        Ok(()) => info!("Done.\n"),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Encode the bitmap pixels, persist the packed stream, read it back, decode and verify.
fn round_trip(opts: &HuffOpts) -> Result<(), HuffError> {
    let bmp = read_bitmap(&opts.input, opts.header_size)?;
    info!(
        "Read {}x{} pixels from {}.",
        bmp.width, bmp.height, opts.input
    );

    let encoded = encode(&bmp.pixels)?;
    report(
        opts,
        Verbosity::Normal,
        bit_sample("Encoded", &encoded.packed.bit_string(opts.sample), opts.sample),
    );

    let written = BitWriter::new(&opts.encoded)?.add_stream(&encoded.packed)?;
    info!("Wrote {} bytes to {}.", written, opts.encoded);

    let packed = read_packed(&opts.encoded)?;
    report(
        opts,
        Verbosity::Chatty,
        format!(
            "Compressed size: {} bytes for {} pixels",
            packed.wire_len(),
            bmp.pixel_count()
        ),
    );
    report(
        opts,
        Verbosity::Normal,
        bit_sample("Decoded", &packed.bit_string(opts.sample), opts.sample),
    );

    let decoded = decode(&packed, &encoded.tables.inverse)?;
    let integrity = check(&bmp.pixels, &decoded, &packed, &encoded.freqs)?;
    report(opts, Verbosity::Normal, format!("MSE: {}", integrity.mse));

    // File size on disk, header included.
    let file_bits = fs::metadata(&opts.encoded)?.len() * 8;
    report(
        opts,
        Verbosity::Normal,
        format!(
            "Bits per pixel (bpp): {}",
            bits_per_symbol(file_bits, bmp.pixel_count())
        ),
    );
    report(
        opts,
        Verbosity::Chatty,
        format!(
            "Code bits per symbol: {:.4} (entropy bound {:.4})",
            integrity.bits_per_symbol, integrity.entropy
        ),
    );

    if opts.op_mode == Mode::RoundTrip {
        write_bitmap(&opts.output, &bmp.header, &decoded)?;
        info!("Wrote reconstructed bitmap to {}.", opts.output);
    }
    Ok(())
}

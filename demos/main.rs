use log::{error, info, LevelFilter};
use resub_rs::{compress, decompress_bytes};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::fs;

const SAMPLE: &str = "Вам нужно разработать класс который будет эмулировать архивацию\n\
                      В нем будет два метода Первый (compress) принимает строку и возвращает байтовый массив\n\
                      второй (decompress) наоборот\n";

/// Example program: compress a file (or a built-in sample) and verify the
/// round trip through the byte container.
///
/// Usage: cargo run --example main [filename]
fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger setup failed: {}", e);
    }

    let args: Vec<String> = env::args().collect();
    let text = match args.get(1) {
        Some(filename) => fs::read_to_string(filename).unwrap_or_else(|e| {
            eprintln!("Cannot read \"{}\": {}", filename, e);
            std::process::exit(1);
        }),
        None => SAMPLE.to_string(),
    };

    let artifact = compress(&text);
    println!("{}", artifact.report());

    let bytes = match artifact.to_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Encoding failed: {}", e);
            std::process::exit(1);
        }
    };

    // Verify by reconstructing
    match decompress_bytes(&bytes) {
        Ok(restored) if restored == text => info!("Round trip verified"),
        Ok(_) => {
            error!("Reconstructed text differs from the input");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Decompression failed: {}", e);
            std::process::exit(1);
        }
    }

    let stats = artifact.stats();
    println!("\n=== Statistics ===");
    println!("Original length: {}", stats.original_length);
    println!("Marked length: {}", stats.marked_length);
    println!("Entries created: {}", stats.num_entries);
    println!("Container bytes: {}", bytes.len());
    println!("Compression ratio: {:.2}%", stats.compression_ratio());
}

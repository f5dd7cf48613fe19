//! trielz CLI
//!
//! A small file compressor over the trielz variable-width LZW codec.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "trielz")]
#[command(author, version, about = "Pure Rust LZW file compressor")]
#[command(long_about = "
trielz compresses single files with a raw variable-width LZW stream
(8 to 16 bit codes, MSB-first, no container header).

Examples:
  trielz compress notes.txt
  trielz compress notes.txt -o notes.tlz
  trielz decompress notes.tlz -o notes.txt
  trielz info notes.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output path (defaults to INPUT.tlz)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// File to decompress
        input: PathBuf,

        /// Output path (defaults to INPUT with .tlz stripped, or INPUT.out)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report the compressed size of a file without writing anything
    #[command(alias = "i")]
    Info {
        /// File to analyze
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output } => cmd_compress(&input, output),
        Commands::Decompress { input, output } => cmd_decompress(&input, output),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(input: &Path, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let compressed = trielz_lzw::compress(&data)?;

    let output = output.unwrap_or_else(|| default_compressed_path(input));
    fs::write(&output, &compressed)?;

    println!(
        "{} -> {} ({} -> {} bytes, {:.1}%)",
        input.display(),
        output.display(),
        data.len(),
        compressed.len(),
        ratio(compressed.len(), data.len()),
    );
    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let decompressed = trielz_lzw::decompress(&data)?;

    let output = output.unwrap_or_else(|| default_decompressed_path(input));
    fs::write(&output, &decompressed)?;

    println!(
        "{} -> {} ({} -> {} bytes)",
        input.display(),
        output.display(),
        data.len(),
        decompressed.len(),
    );
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let compressed = trielz_lzw::compress(&data)?;

    println!("File:            {}", input.display());
    println!("Original size:   {} bytes", data.len());
    println!("Compressed size: {} bytes", compressed.len());
    println!("Ratio:           {:.1}%", ratio(compressed.len(), data.len()));
    Ok(())
}

fn default_compressed_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".tlz");
    PathBuf::from(path)
}

fn default_decompressed_path(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "tlz") {
        input.with_extension("")
    } else {
        let mut path = input.as_os_str().to_owned();
        path.push(".out");
        PathBuf::from(path)
    }
}

fn ratio(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        return 100.0;
    }
    compressed as f64 / original as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressed_path_appends_extension() {
        assert_eq!(
            default_compressed_path(Path::new("notes.txt")),
            PathBuf::from("notes.txt.tlz")
        );
    }

    #[test]
    fn decompressed_path_strips_tlz() {
        assert_eq!(
            default_decompressed_path(Path::new("notes.txt.tlz")),
            PathBuf::from("notes.txt")
        );
        assert_eq!(
            default_decompressed_path(Path::new("archive.bin")),
            PathBuf::from("archive.bin.out")
        );
    }

    #[test]
    fn ratio_handles_empty_input() {
        assert_eq!(ratio(0, 0), 100.0);
        assert_eq!(ratio(50, 100), 50.0);
    }
}

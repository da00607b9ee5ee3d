//! bitnum CLI - Command-line tool for encoding and inspecting numeric values.
//!
//! This is the main entry point for the bitnum command-line application.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use bitnum::prelude::*;

/// bitnum - fixed-width numeric encoding tool
#[derive(Parser)]
#[command(name = "bitnum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a value to hex bytes
    Encode {
        /// Value to encode
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Bit width of the value
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,

        /// Byte order
        #[arg(short, long, value_enum, env = "BITNUM_ORDER", default_value = "be")]
        order: Order,
    },

    /// Decode hex bytes to a value
    Decode {
        /// Hex bytes, optionally prefixed with 0x
        hex: String,

        /// Bit width of the value
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,

        /// Byte order
        #[arg(short, long, value_enum, env = "BITNUM_ORDER", default_value = "be")]
        order: Order,
    },

    /// Show the bit pattern and both encodings of a value
    Inspect {
        /// Value to inspect
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Bit width of the value
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,
    },

    /// Decode every value in a binary file
    Dump {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Bit width of each value
        #[arg(short, long, value_enum, default_value = "32")]
        width: Width,

        /// Byte order
        #[arg(short, long, value_enum, env = "BITNUM_ORDER", default_value = "be")]
        order: Order,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Width {
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Be,
    Le,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { value, width, order } => {
            let bytes = match width {
                Width::W32 => encode(Float32::new(parse_value(&value)?), order),
                Width::W64 => encode(Float64::new(parse_value(&value)?), order),
            };
            println!("{:x}", bytes);
        }
        Commands::Decode { hex, width, order } => {
            let bytes = parse_hex(&hex)?;
            match width {
                Width::W32 => println!("{}", decode::<Float32>(&bytes, order)?.value()),
                Width::W64 => println!("{}", decode::<Float64>(&bytes, order)?.value()),
            }
        }
        Commands::Inspect { value, width } => match width {
            Width::W32 => {
                let value = Float32::new(parse_value(&value)?);
                println!("value: {}", value.value());
                println!("bits:  {:032b}", value.value().to_bits());
                inspect(value);
            }
            Width::W64 => {
                let value = Float64::new(parse_value(&value)?);
                println!("value: {}", value.value());
                println!("bits:  {:064b}", value.value().to_bits());
                inspect(value);
            }
        },
        Commands::Dump { input, width, order } => {
            let data = fs::read(&input).context("Failed to read input file")?;
            match width {
                Width::W32 => dump::<Float32>(&data, order)?,
                Width::W64 => dump::<Float64>(&data, order)?,
            }
        }
    }

    Ok(())
}

fn parse_value<T: std::str::FromStr>(s: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.trim()
        .parse()
        .with_context(|| format!("Invalid numeric value: {}", s))
}

fn parse_hex(s: &str) -> Result<Uint8Vector> {
    let trimmed = s.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    if !digits.is_ascii() {
        anyhow::bail!("Hex input contains non-ASCII characters: {}", s);
    }
    if digits.len() % 2 != 0 {
        anyhow::bail!("Hex input has an odd number of digits: {}", s);
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("Invalid hex at position {}", i))
        })
        .collect()
}

fn encode<T: ByteCodec>(value: T, order: Order) -> Uint8Vector {
    match order {
        Order::Be => value.to_be_bytes(),
        Order::Le => value.to_le_bytes(),
    }
}

fn decode<T: ByteCodec>(bytes: &Uint8Vector, order: Order) -> Result<T> {
    let value = match order {
        Order::Be => T::from_be_bytes(bytes),
        Order::Le => T::from_le_bytes(bytes),
    };
    value.map_err(|e| match e {
        Error::InvalidLength { .. } => anyhow::anyhow!(
            "Failed to decode value: a {}-bit value needs exactly {} bytes ({})",
            T::BIT_LENGTH,
            e.expected_len(),
            e
        ),
        other => anyhow::Error::new(other).context("Failed to decode value"),
    })
}

fn inspect<T: ByteCodec>(value: T) {
    println!("be:    {:x}", value.to_be_bytes());
    println!("le:    {:x}", value.to_le_bytes());
}

fn dump<T: ByteCodec>(data: &[u8], order: Order) -> Result<()>
where
    T::Repr: std::fmt::Display,
{
    if data.len() % T::BYTE_LENGTH != 0 {
        anyhow::bail!(
            "File size {} is not a multiple of {} bytes",
            data.len(),
            T::BYTE_LENGTH
        );
    }

    let mut reader = ValueReader::new(data);
    let mut count = 0;
    while !reader.is_empty() {
        let offset = reader.position();
        let value: T = match order {
            Order::Be => reader.read_be()?,
            Order::Le => reader.read_le()?,
        };
        println!("{:>10}  {}", offset, value.value());
        count += 1;
    }

    println!("\nTotal: {} values", count);

    Ok(())
}

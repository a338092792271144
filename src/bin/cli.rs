//! ByteCursor CLI
//!
//! Encode typed values to hex, or decode hex back into typed values.
//!
//! ```text
//! bytecursor encode u32:16909060 str:hello
//! bytecursor decode --big-endian 01020304 u32
//! ```

use bytecursor::{ByteCursor, ByteOrder, CursorError, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// ByteCursor CLI
#[derive(Parser, Debug)]
#[command(name = "bytecursor")]
#[command(about = "Encode and decode ByteCursor binary layouts")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode values and print the bytes as hex
    Encode {
        /// Use big-endian byte order
        #[arg(short, long)]
        big_endian: bool,

        /// Values as type:literal (u8..u64, i8..i64, bool, f32, f64, str, hex, blob, ts)
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Decode hex bytes as a sequence of types
    Decode {
        /// Use big-endian byte order
        #[arg(short, long)]
        big_endian: bool,

        /// Input bytes as hex
        hex: String,

        /// Types to read in order (u8..u64, i8..i64, bool, f32, f64, str, bytes:N, blob, ts)
        #[arg(required = true)]
        types: Vec<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let result = match args.command {
        Commands::Encode { big_endian, values } => encode(order(big_endian), &values)
            .map(|encoded| println!("{}", encoded)),
        Commands::Decode {
            big_endian,
            hex,
            types,
        } => decode(order(big_endian), &hex, &types).map(|lines| {
            for line in lines {
                println!("{}", line);
            }
        }),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn order(big_endian: bool) -> ByteOrder {
    if big_endian {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    }
}

// =============================================================================
// Encode
// =============================================================================

fn encode(order: ByteOrder, values: &[String]) -> Result<String> {
    let mut cursor = ByteCursor::new();
    cursor.set_byte_order(order);

    for spec in values {
        let (kind, literal) = spec
            .split_once(':')
            .ok_or_else(|| invalid(format!("expected type:literal, got '{}'", spec)))?;
        encode_value(&mut cursor, kind, literal)?;
    }

    tracing::debug!(bytes = cursor.len(), "encoded values");
    Ok(hex::encode(cursor.as_slice()))
}

fn encode_value(cursor: &mut ByteCursor, kind: &str, literal: &str) -> Result<()> {
    match kind {
        "u8" => cursor.write_u8(parse(literal)?),
        "u16" => cursor.write_u16(parse(literal)?),
        "u32" => cursor.write_u32(parse(literal)?),
        "u64" => cursor.write_u64(parse(literal)?),
        "i8" => cursor.write_i8(parse(literal)?),
        "i16" => cursor.write_i16(parse(literal)?),
        "i32" => cursor.write_i32(parse(literal)?),
        "i64" => cursor.write_i64(parse(literal)?),
        "bool" => cursor.write_bool(parse(literal)?),
        "f32" => cursor.write_f32(parse(literal)?),
        "f64" => cursor.write_f64(parse(literal)?),
        "str" => cursor.write_str(literal)?,
        "hex" => cursor.write_bytes(&from_hex(literal)?),
        "blob" => cursor.write_blob(&from_hex(literal)?)?,
        "ts" => {
            let instant = DateTime::parse_from_rfc3339(literal)
                .map_err(|e| invalid(format!("bad timestamp '{}': {}", literal, e)))?;
            cursor.write_timestamp(&instant)?;
        }
        other => return Err(invalid(format!("unknown type '{}'", other))),
    }
    Ok(())
}

// =============================================================================
// Decode
// =============================================================================

fn decode(order: ByteOrder, input: &str, types: &[String]) -> Result<Vec<String>> {
    let mut cursor = ByteCursor::from_vec(from_hex(input)?);
    cursor.set_byte_order(order);

    let mut lines = Vec::with_capacity(types.len() + 1);
    for kind in types {
        let value = decode_value(&mut cursor, kind)?;
        lines.push(format!("{}: {}", kind, value));
    }

    if cursor.remaining() > 0 {
        lines.push(format!("({} trailing bytes)", cursor.remaining()));
    }
    Ok(lines)
}

fn decode_value(cursor: &mut ByteCursor, kind: &str) -> Result<String> {
    let value = match kind {
        "u8" => cursor.read_u8()?.to_string(),
        "u16" => cursor.read_u16()?.to_string(),
        "u32" => cursor.read_u32()?.to_string(),
        "u64" => cursor.read_u64()?.to_string(),
        "i8" => cursor.read_i8()?.to_string(),
        "i16" => cursor.read_i16()?.to_string(),
        "i32" => cursor.read_i32()?.to_string(),
        "i64" => cursor.read_i64()?.to_string(),
        "bool" => cursor.read_bool()?.to_string(),
        "f32" => cursor.read_f32()?.to_string(),
        "f64" => cursor.read_f64()?.to_string(),
        "str" => format!("{:?}", cursor.read_string()?),
        "blob" => hex::encode(cursor.read_blob()?),
        "ts" => cursor.read_timestamp()?.to_rfc3339(),
        other => match other.strip_prefix("bytes:") {
            Some(n) => hex::encode(cursor.read_bytes(parse(n)?)?),
            None => return Err(invalid(format!("unknown type '{}'", other))),
        },
    };
    Ok(value)
}

// =============================================================================
// Helpers
// =============================================================================

fn invalid(message: String) -> CursorError {
    CursorError::Protocol(message)
}

fn parse<T>(literal: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    literal
        .parse()
        .map_err(|e| invalid(format!("cannot parse '{}': {}", literal, e)))
}

/// Decode hex input, ignoring whitespace
fn from_hex(text: &str) -> Result<Vec<u8>> {
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&text).map_err(|e| invalid(format!("malformed hex string '{}': {}", text, e)))
}

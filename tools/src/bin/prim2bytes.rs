use bytebrro::codec::{
    decode_char, decode_f32, decode_f64, decode_i16, decode_i32, decode_i64,
};
use bytebrro::pair::{decode_pair_i64, encode_pair};
use bytebrro::Value;
use clap::{command, Parser, ValueEnum};
use log::debug;
use std::error::Error;

#[derive(ValueEnum, Default, Clone, Copy, Debug)]
enum Kind {
    #[default]
    I64,
    I32,
    F64,
    F32,
    Char,
    I16,
}

#[derive(Parser, Debug)]
#[command(author, version, about="Primitive value to big-endian bytes converter", long_about = None)]
struct Args {
    /// Value(s) to encode, or hex bytes to decode. Pair mode takes two values.
    input: Vec<String>,

    /// Which of the six primitive kinds the input is
    #[arg(long, value_enum, default_value = "i64")]
    kind: Kind,

    /// Decode hex bytes back into a value instead of encoding
    #[arg(short, long, action)]
    decode: bool,

    /// Pair mode: concatenate two i64 values (or split 16 hex bytes)
    #[arg(short, long, action)]
    pair: bool,
}

fn parse_value(kind: Kind, raw: &str) -> Result<Value, Box<dyn Error>> {
    let value = match kind {
        Kind::I64 => Value::I64(raw.parse()?),
        Kind::I32 => Value::I32(raw.parse()?),
        Kind::F64 => Value::F64(raw.parse()?),
        Kind::F32 => Value::F32(raw.parse()?),
        Kind::Char => Value::Char(raw.parse()?),
        Kind::I16 => Value::I16(raw.parse()?),
    };
    Ok(value)
}

fn decode_one(kind: Kind, bytes: &[u8]) -> Result<String, Box<dyn Error>> {
    let rendered = match kind {
        Kind::I64 => decode_i64(bytes)?.to_string(),
        Kind::I32 => decode_i32(bytes)?.to_string(),
        Kind::F64 => decode_f64(bytes)?.to_string(),
        Kind::F32 => decode_f32(bytes)?.to_string(),
        Kind::Char => decode_char(bytes)?.to_string(),
        Kind::I16 => decode_i16(bytes)?.to_string(),
    };
    Ok(rendered)
}

fn run(arguments: &Args) -> Result<(), Box<dyn Error>> {
    if arguments.pair {
        if arguments.decode {
            let first = arguments
                .input
                .first()
                .ok_or("pair decode needs 16 hex bytes")?;
            let bytes = hex::decode(first)?;
            let (a, b) = decode_pair_i64(&bytes)?;
            println!("({}, {})", a, b);
        } else {
            if arguments.input.len() != 2 {
                return Err("pair mode needs exactly two values".into());
            }
            let first = Value::I64(arguments.input[0].parse()?);
            let second = Value::I64(arguments.input[1].parse()?);
            println!("{}", hex::encode(encode_pair(&first, &second)));
        }
        return Ok(());
    }

    for raw in &arguments.input {
        if arguments.decode {
            let bytes = hex::decode(raw)?;
            debug!("Decoding {} bytes as {:?}", bytes.len(), arguments.kind);
            println!("{}", decode_one(arguments.kind, &bytes)?);
        } else {
            let value = parse_value(arguments.kind, raw)?;
            debug!("Encoding {:?}", value);
            println!("{}", hex::encode(value.to_bytes()));
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let arguments = Args::parse();
    debug!("{:?}", arguments);
    if let Err(err) = run(&arguments) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

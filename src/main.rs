use std::fs::File;
use std::io::{self, Read};

use anyhow::Context;
use bytes::BytesMut;
use tracing::info;

use dns_wire_decoder::cli::{Args, InputFormat};
use dns_wire_decoder::input::read_hex_stream;
use dns_wire_decoder::DnsCodec;

fn read_input(args: &Args) -> anyhow::Result<Vec<u8>> {
    let mut source: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("could not open {}", path.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };

    match args.format {
        InputFormat::Hex => Ok(read_hex_stream(source)?),
        InputFormat::Raw => {
            let mut raw = Vec::new();
            source.read_to_end(&mut raw)?;
            Ok(raw)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();

    // Logs go to stderr so stdout carries only the decoded message
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();

    let raw = read_input(&args).context("could not read input message")?;
    info!("Read {} bytes of wire data", raw.len());

    let mut codec = DnsCodec::new(args.framing);
    let packets = codec
        .decode_all(BytesMut::from(&raw[..]))
        .context("could not parse input message")?;

    if packets.is_empty() {
        anyhow::bail!("input contained no DNS message");
    }

    for (i, packet) in packets.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", packet);
    }

    Ok(())
}

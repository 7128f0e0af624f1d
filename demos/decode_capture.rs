//! Decode a textual logic capture, or a synthesized one if no file is given
//!
//! Usage: cargo run --example decode_capture [capture.txt]

use bus65c02::{
    format_event, BusCycle, BusDecoder, BusEvent, CapturedTrace, DecoderOptions, PinMap,
    TraceBuilder,
};
use std::env;
use std::fs;
use std::process;

fn synthesized() -> CapturedTrace {
    let mut builder = TraceBuilder::new();
    builder
        .cycle(BusCycle::fetch(0x8000, 0xA9)) // LDA #$42
        .cycle(BusCycle::read(0x8001, 0x42))
        .cycle(BusCycle::fetch(0x8002, 0x8D)) // STA $0200
        .cycle(BusCycle::read(0x8003, 0x00))
        .cycle(BusCycle::read(0x8004, 0x02))
        .cycle(BusCycle::write(0x0200, 0x42))
        .cycle(BusCycle::fetch(0x8005, 0x4C)) // JMP $8000
        .cycle(BusCycle::read(0x8006, 0x00))
        .cycle(BusCycle::read(0x8007, 0x80))
        .cycle(BusCycle::fetch(0x8000, 0xA9))
        .close();
    builder.build()
}

fn main() {
    let mut trace = match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("{}: {}", path, e);
                process::exit(1);
            });
            CapturedTrace::parse(&text, PinMap::default().channel_count()).unwrap_or_else(|e| {
                eprintln!("{}: {}", path, e);
                process::exit(1);
            })
        }
        None => synthesized(),
    };

    let decoder = BusDecoder::new(DecoderOptions::default());
    let mut print = |event: BusEvent| println!("{}", format_event(&event));
    if let Err(e) = decoder.decode(&mut trace, &mut print) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

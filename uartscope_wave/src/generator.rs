use bitvec::{order::Lsb0, view::BitView};

use crate::{
    error::{UartError, UartResult},
    segment::{Color, Level, Segment, WaveformSequence},
};

pub const DATA_BITS: usize = 8;

/// Builds the frame for `data`, which must fit in an unsigned byte.
pub fn generate(data: i64) -> UartResult<WaveformSequence> {
    match u8::try_from(data) {
        Ok(byte) => Ok(generate_byte(byte)),
        Err(_) => {
            tracing::warn!(data, "rejected out of range frame data");
            Err(UartError::Range(data))
        }
    }
}

/// Start bit, eight data bits LSB first, stop bit.
pub fn generate_byte(byte: u8) -> WaveformSequence {
    let mut segments = Vec::with_capacity(DATA_BITS + 2);
    segments.push(Segment::new("Start", Level::Low, Color::Green));
    for (i, bit) in byte.view_bits::<Lsb0>().iter().by_vals().enumerate() {
        segments.push(Segment::new(
            format!("Data {}", i + 1),
            Level::from(bit),
            Color::Yellow,
        ));
    }
    segments.push(Segment::new("Stop", Level::High, Color::Red));
    tracing::debug!(byte, segments = segments.len(), "generated uart frame");
    WaveformSequence::from(segments)
}

/// Zero-padded, MSB first.
pub fn binary_string(byte: u8) -> String {
    byte.view_bits::<Lsb0>()
        .iter()
        .by_vals()
        .rev()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

//! DHT11 frame decoding.
//!
//! The sensor sends 40 bits, most-significant-bit first, as 5 bytes:
//! ```text
//! Byte 0: humidity, integer part
//! Byte 1: humidity, fractional part (always 0 on the DHT11)
//! Byte 2: temperature, integer part
//! Byte 3: temperature, fractional part (always 0 on the DHT11)
//! Byte 4: checksum = (byte0 + byte1 + byte2 + byte3) mod 256
//! ```
//! Bit values are carried in pulse width: a long high time is a 1.

use crate::config::DHT_ONE_THRESHOLD_US;
use crate::error::Error;

/// Bytes in one sensor frame.
pub const FRAME_BYTES: usize = 5;

/// One validated sensor reading. The fractional bytes are discarded;
/// the DHT11 reports whole degrees and whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSample {
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Temperature, degrees Celsius.
    pub temperature: u8,
}

/// Classify one data pulse by how long the line stayed high.
pub fn is_one_bit(high_us: u32) -> bool {
    high_us > DHT_ONE_THRESHOLD_US
}

/// Accumulates the 40 wire bits MSB-first into the 5 frame bytes.
///
/// Explicit shift-and-or per bit; no reliance on any native bit-order
/// convention.
pub struct BitAccumulator {
    bytes: [u8; FRAME_BYTES],
    count: usize,
}

impl BitAccumulator {
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
            count: 0,
        }
    }

    /// Shift the next wire bit into the current byte. Bits past the
    /// 40th are ignored.
    pub fn push(&mut self, bit: bool) {
        let byte = self.count / 8;
        if byte >= FRAME_BYTES {
            return;
        }
        self.bytes[byte] = (self.bytes[byte] << 1) | bit as u8;
        self.count += 1;
    }

    pub fn into_bytes(self) -> [u8; FRAME_BYTES] {
        self.bytes
    }
}

/// Validate the checksum and extract the two integer fields.
pub fn decode_frame(bytes: &[u8; FRAME_BYTES]) -> Result<SensorSample, Error> {
    let sum: u16 = bytes[..4].iter().map(|&b| b as u16).sum();
    if (sum & 0xFF) as u8 != bytes[4] {
        return Err(Error::Checksum);
    }
    Ok(SensorSample {
        humidity: bytes[0],
        temperature: bytes[2],
    })
}

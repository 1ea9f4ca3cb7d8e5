//! DHT11 single-wire timed pulse protocol.
//!
//! Sequence: hold the line low ≥18 ms (start signal), release, wait
//! for the sensor's low-high-low handshake, then read 40 bits. Each
//! bit is a fixed-width low followed by a high whose duration encodes
//! the value.
//!
//! The handshake and bit reads run inside `critical_section::with` -
//! this is the system's only hard-real-time section, a few
//! milliseconds worst case. Queued input events are delayed by that
//! much but not lost; the debounce windows tolerate it.

use embassy_nrf::gpio::{Flex, OutputDrive, Pull};
use embassy_time::Timer;

use crate::config::{
    DHT_EDGE_TIMEOUT_US, DHT_HANDSHAKE_TIMEOUT_US, DHT_HIGH_CAP_US, DHT_RELEASE_US,
    DHT_START_LOW_MS,
};
use crate::error::Error;
use crate::sensor::decode::{decode_frame, is_one_bit, BitAccumulator, SensorSample, FRAME_BYTES};
use crate::timing::delay_us;

pub struct Dht11<'d> {
    pin: Flex<'d>,
}

impl<'d> Dht11<'d> {
    pub fn new(pin: Flex<'d>) -> Self {
        Self { pin }
    }

    /// Run one full acquisition: start signal, handshake, 40 data
    /// bits, checksum.
    ///
    /// The start signal is paced by the async timer (millisecond
    /// scale); only the microsecond-critical part blocks interrupts.
    pub async fn acquire(&mut self) -> Result<SensorSample, Error> {
        self.pin.set_low();
        self.pin.set_as_output(OutputDrive::Standard);
        Timer::after_millis(DHT_START_LOW_MS).await;
        self.pin.set_high();
        delay_us(DHT_RELEASE_US);
        self.pin.set_as_input(Pull::Up);

        let bytes = critical_section::with(|_| self.read_frame())?;
        decode_frame(&bytes)
    }

    fn read_frame(&mut self) -> Result<[u8; FRAME_BYTES], Error> {
        // Sensor acknowledges with ~80 µs low then ~80 µs high before
        // the first bit's low period.
        self.wait_for_level(false, DHT_HANDSHAKE_TIMEOUT_US)?;
        self.wait_for_level(true, DHT_HANDSHAKE_TIMEOUT_US)?;
        self.wait_for_level(false, DHT_HANDSHAKE_TIMEOUT_US)?;

        let mut acc = BitAccumulator::new();
        for _ in 0..40 {
            self.wait_for_level(true, DHT_EDGE_TIMEOUT_US)?;
            let high_us = self.measure_high(DHT_HIGH_CAP_US);
            acc.push(is_one_bit(high_us));
            // Trailing low of the bit; the last bit may end with the
            // line already released, so a timeout here is not an error.
            let _ = self.wait_for_level(false, DHT_EDGE_TIMEOUT_US);
        }
        Ok(acc.into_bytes())
    }

    /// Poll until the line reaches `level`, failing after
    /// `timeout_us`. Returns the microseconds waited.
    fn wait_for_level(&mut self, level: bool, timeout_us: u32) -> Result<u32, Error> {
        for waited in 0..timeout_us {
            if self.pin.is_high() == level {
                return Ok(waited);
            }
            delay_us(1);
        }
        Err(Error::Timeout)
    }

    /// Measure how long the line stays high, capped at `cap_us`.
    fn measure_high(&mut self, cap_us: u32) -> u32 {
        let mut high_us = 0;
        while self.pin.is_high() {
            if high_us >= cap_us {
                return cap_us;
            }
            high_us += 1;
            delay_us(1);
        }
        high_us
    }
}

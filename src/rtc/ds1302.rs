//! Bit-banged 3-wire link to the DS1302.
//!
//! Every operation is one full synchronous transaction: raise RST,
//! clock bytes LSB-first over DAT (driven for writes, sampled for
//! reads), drop RST. There are no retries - correctness relies on the
//! conservative intra-bit delays in [`config`](crate::config).

use embassy_nrf::gpio::{Flex, Output, Pull};

use crate::config::{DS1302_CLOCK_HALF_US, DS1302_SETTLE_US};
use crate::rtc::frame::{
    ClockTime, BURST_READ_REGS, CMD_CLOCK_BURST_READ, CMD_WRITE_HOURS, CMD_WRITE_MINUTES,
    CMD_WRITE_PROTECT, CMD_WRITE_SECONDS, WP_CLEAR, WP_SET,
};
use crate::timing::delay_us;

/// The three GPIO lines of the DS1302 link.
///
/// `rst` and `clk` must be constructed low; `dat` switches direction
/// within a transaction (output while writing, input while reading).
pub struct Ds1302<'d> {
    rst: Output<'d>,
    clk: Output<'d>,
    dat: Flex<'d>,
}

impl<'d> Ds1302<'d> {
    pub fn new(rst: Output<'d>, clk: Output<'d>, dat: Flex<'d>) -> Self {
        Self { rst, clk, dat }
    }

    /// Read seconds/minutes/hours via a clock burst read.
    ///
    /// The remaining calendar registers of the burst are clocked out
    /// and discarded; they are not modeled.
    pub fn read_time(&mut self) -> ClockTime {
        self.begin();
        self.write_byte(CMD_CLOCK_BURST_READ);
        let seconds = self.read_byte();
        let minutes = self.read_byte();
        let hours = self.read_byte();
        for _ in 3..BURST_READ_REGS {
            self.read_byte();
        }
        self.end();
        ClockTime::decode_burst(seconds, minutes, hours)
    }

    /// Write seconds/minutes/hours, leaving the oscillator running and
    /// write protection re-asserted.
    pub fn write_time(&mut self, t: &ClockTime) {
        self.write_register(CMD_WRITE_PROTECT, WP_CLEAR);
        self.write_register(CMD_WRITE_SECONDS, t.seconds_byte());
        self.write_register(CMD_WRITE_MINUTES, t.minutes_byte());
        self.write_register(CMD_WRITE_HOURS, t.hours_byte());
        self.write_register(CMD_WRITE_PROTECT, WP_SET);
    }

    fn write_register(&mut self, command: u8, value: u8) {
        self.begin();
        self.write_byte(command);
        self.write_byte(value);
        self.end();
    }

    fn begin(&mut self) {
        self.clk.set_low();
        self.rst.set_high();
        delay_us(DS1302_SETTLE_US);
    }

    fn end(&mut self) {
        self.rst.set_low();
    }

    fn clock_pulse(&mut self) {
        self.clk.set_high();
        delay_us(DS1302_CLOCK_HALF_US);
        self.clk.set_low();
        delay_us(DS1302_CLOCK_HALF_US);
    }

    fn write_byte(&mut self, byte: u8) {
        self.dat.set_low();
        self.dat.set_as_output(embassy_nrf::gpio::OutputDrive::Standard);
        for i in 0..8 {
            if (byte >> i) & 1 != 0 {
                self.dat.set_high();
            } else {
                self.dat.set_low();
            }
            self.clock_pulse();
        }
    }

    fn read_byte(&mut self) -> u8 {
        self.dat.set_as_input(Pull::None);
        let mut value = 0u8;
        for i in 0..8 {
            if self.dat.is_high() {
                value |= 1 << i;
            }
            self.clock_pulse();
        }
        value
    }
}

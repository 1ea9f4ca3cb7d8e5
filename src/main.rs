//! rotoclock firmware entry point (nRF52840).
//!
//! Task layout:
//!
//! - `encoder_task` / `button_task` - one per input source; debounce
//!   GPIO edges, classify them, and post [`InputEvent`]s on a
//!   single-consumer channel. No shared state is touched here.
//! - `console_rx_task` - assembles UART bytes into command lines.
//! - `console_tx_task` - writes replies back out.
//! - the main loop - the single consumer. Owns the DS1302, the DHT11
//!   and its cache, the LED bank, and the [`UiState`]; drains input
//!   events and console lines and performs every hardware transaction.
//!
//! Because one task owns all mutable state, the interrupt-vs-process
//! locking of a traditional design collapses into message passing; the
//! only remaining critical section is the DHT11 timed read.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Flex, Input, Level, Output, OutputDrive, Pin, Pull};
use embassy_nrf::{bind_interrupts, peripherals, uarte};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::Instant;
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use rotoclock::config::{CMD_LINE_CAP, POWER_ON_TIME, STATUS_LINE_CAP};
use rotoclock::console::{format_status, parse_command, Command, StatusSnapshot};
use rotoclock::leds::LedBank;
use rotoclock::rtc::ds1302::Ds1302;
use rotoclock::rtc::frame::ClockTime;
use rotoclock::sensor::cache::SampleCache;
use rotoclock::sensor::dht11::Dht11;
use rotoclock::ui::input_logic::{Debouncer, PressTracker};
use rotoclock::ui::state::{UiAction, UiState};
use rotoclock::ui::{Direction, InputEvent};

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

type EventSender = Sender<'static, CriticalSectionRawMutex, InputEvent, 8>;

/// Debounced input events, posted by the edge tasks, drained by the
/// main loop.
static INPUT_EVENTS: Channel<CriticalSectionRawMutex, InputEvent, 8> = Channel::new();

/// Complete command lines from the console reader.
static CONSOLE_LINES: Channel<CriticalSectionRawMutex, String<CMD_LINE_CAP>, 2> = Channel::new();

/// Replies (status lines, OK/ERR) for the console writer.
static CONSOLE_REPLIES: Channel<CriticalSectionRawMutex, String<STATUS_LINE_CAP>, 2> = Channel::new();

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

/// Rotation source: each accepted falling edge on A is one step; the
/// level of B at that moment encodes the direction.
#[embassy_executor::task]
async fn encoder_task(step: AnyPin, sense: AnyPin, tx: EventSender) {
    let mut step = Input::new(step, Pull::Up);
    let sense = Input::new(sense, Pull::Up);
    let mut debounce = Debouncer::new();

    loop {
        step.wait_for_falling_edge().await;
        if !debounce.accept(now_ms()) {
            continue;
        }
        let direction = if sense.is_high() {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        tx.send(InputEvent::Rotate(direction)).await;
    }
}

/// Button source: active-low. A press edge starts the hold timer; the
/// release edge classifies the press by held duration.
#[embassy_executor::task]
async fn button_task(pin: AnyPin, tx: EventSender) {
    let mut button = Input::new(pin, Pull::Up);
    let mut debounce = Debouncer::new();
    let mut tracker = PressTracker::new();

    loop {
        button.wait_for_any_edge().await;
        let now = now_ms();
        if !debounce.accept(now) {
            continue;
        }
        if let Some(kind) = tracker.on_edge(button.is_low(), now) {
            info!("button: {} press", kind);
            tx.send(InputEvent::Press(kind)).await;
        }
    }
}

/// Assemble UART bytes into newline-terminated command lines.
/// Overlong lines are discarded up to the next newline.
#[embassy_executor::task]
async fn console_rx_task(mut rx: uarte::UarteRx<'static, peripherals::UARTE0>) {
    let mut line: String<CMD_LINE_CAP> = String::new();
    let mut overflowed = false;
    let mut byte = [0u8; 1];

    loop {
        if rx.read(&mut byte).await.is_err() {
            line.clear();
            overflowed = false;
            continue;
        }
        match byte[0] {
            b'\r' => {}
            b'\n' => {
                if !overflowed {
                    CONSOLE_LINES.send(line.clone()).await;
                }
                line.clear();
                overflowed = false;
            }
            b => {
                if line.push(b as char).is_err() {
                    overflowed = true;
                }
            }
        }
    }
}

#[embassy_executor::task]
async fn console_tx_task(mut tx: uarte::UarteTx<'static, peripherals::UARTE0>) {
    loop {
        let reply = CONSOLE_REPLIES.receive().await;
        if tx.write(reply.as_bytes()).await.is_err() {
            warn!("console: uart write failed");
        }
    }
}

fn reply(text: &str) -> String<STATUS_LINE_CAP> {
    let mut s = String::new();
    let _ = s.push_str(text);
    s
}

fn is_status_request(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line == "GET"
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("rotoclock starting");

    // DS1302 link: RST and SCLK idle low, DAT switches direction.
    let mut rtc = Ds1302::new(
        Output::new(p.P0_03.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_04.degrade(), Level::Low, OutputDrive::Standard),
        Flex::new(p.P0_28.degrade()),
    );

    let mut dht = Dht11::new(Flex::new(p.P0_30.degrade()));
    let mut cache = SampleCache::new();

    let mut leds = LedBank::new([
        Output::new(p.P0_13.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_14.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_15.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_16.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P1_10.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P1_11.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P1_12.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P1_13.degrade(), Level::Low, OutputDrive::Standard),
    ]);

    let mut uart_config = uarte::Config::default();
    uart_config.baudrate = uarte::Baudrate::BAUD115200;
    let uart = uarte::Uarte::new(p.UARTE0, Irqs, p.P0_08, p.P0_06, uart_config);
    let (uart_tx, uart_rx) = uart.split();

    // A halted oscillator means first power-up or lost backup supply;
    // seed a known time to get it running. `SET` reprovisions later.
    let mut current = rtc.read_time();
    if current.halted {
        let (hour, minute, second) = POWER_ON_TIME;
        warn!("rtc oscillator halted, seeding {}:{}:{}", hour, minute, second);
        rtc.write_time(&ClockTime::new(hour, minute, second));
        current = rtc.read_time();
    }
    info!(
        "rtc running at {:02}:{:02}:{:02}",
        current.hour, current.minute, current.second
    );

    let mut state = UiState::new(current);

    unwrap!(spawner.spawn(encoder_task(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        INPUT_EVENTS.sender(),
    )));
    unwrap!(spawner.spawn(button_task(p.P0_24.degrade(), INPUT_EVENTS.sender())));
    unwrap!(spawner.spawn(console_rx_task(uart_rx)));
    unwrap!(spawner.spawn(console_tx_task(uart_tx)));

    // Single consumer: all state mutation and every hardware
    // transaction happen here, in queue order.
    loop {
        match select(INPUT_EVENTS.receive(), CONSOLE_LINES.receive()).await {
            Either::First(event) => match event {
                InputEvent::Rotate(direction) => state.on_rotate(direction, now_ms()),
                InputEvent::Press(kind) => match state.on_press(kind) {
                    UiAction::None => {}
                    UiAction::LoadEdit => {
                        let snapshot = rtc.read_time();
                        state.begin_edit(snapshot);
                        info!("edit mode entered");
                    }
                    UiAction::Commit(time) => {
                        rtc.write_time(&time);
                        state.current = time;
                        info!(
                            "committed {:02}:{:02}:{:02}",
                            time.hour, time.minute, time.second
                        );
                    }
                },
            },
            Either::Second(line) => {
                if is_status_request(&line) {
                    // Every read refreshes the authoritative time from
                    // hardware before snapshotting.
                    state.current = rtc.read_time();
                    let now = now_ms();
                    let sample = if cache.refresh_due(now) {
                        let outcome = dht.acquire().await;
                        if let Err(e) = outcome {
                            warn!("sensor acquisition failed: {}", e);
                        }
                        cache.record(now, outcome)
                    } else {
                        cache.last()
                    };
                    let status = format_status(&StatusSnapshot {
                        time: state.displayed_time(),
                        editing: state.editing(),
                        field: state.field,
                        page: state.page,
                        sample,
                    });
                    CONSOLE_REPLIES.send(status).await;
                } else {
                    match parse_command(&line) {
                        Ok(Command::SetLevel(level)) => {
                            leds.set_level(level);
                            CONSOLE_REPLIES.send(reply("OK\n")).await;
                        }
                        Ok(Command::SetTime(time)) => {
                            rtc.write_time(&time);
                            state.current = time;
                            state.leave_edit();
                            CONSOLE_REPLIES.send(reply("OK\n")).await;
                        }
                        Err(_) => {
                            warn!("invalid command");
                            CONSOLE_REPLIES.send(reply("ERR invalid command\n")).await;
                        }
                    }
                }
            }
        }
    }
}

//! End-to-end scenarios for the rotoclock host-testable logic: input
//! events through the state machine out to the console protocol.

use rotoclock::console::{format_status, parse_command, Command, StatusSnapshot};
use rotoclock::leds::level_mask;
use rotoclock::rtc::frame::ClockTime;
use rotoclock::sensor::cache::SampleCache;
use rotoclock::sensor::decode::{decode_frame, SensorSample};
use rotoclock::ui::state::{UiAction, UiState};
use rotoclock::ui::{Direction, Field, Page, PressKind};

fn status_line(state: &UiState, sample: Option<SensorSample>) -> String {
    format_status(&StatusSnapshot {
        time: state.displayed_time(),
        editing: state.editing(),
        field: state.field,
        page: state.page,
        sample,
    })
    .as_str()
    .to_owned()
}

#[test]
fn page_navigation_and_ignored_long_press() {
    let mut state = UiState::new(ClockTime::new(7, 59, 59));

    state.on_rotate(Direction::Clockwise, 0);
    assert_eq!(
        status_line(&state, None),
        "07:59:59 MODE=RUN FIELD=HOUR PAGE=1 TEMP=-1 HUM=-1\n"
    );

    // Long press off the clock page does nothing.
    assert_eq!(state.on_press(PressKind::Long), UiAction::None);
    assert!(!state.edit_mode);
    assert_eq!(state.page, Page::Weather);
}

#[test]
fn edit_cycle_from_entry_to_commit() {
    let start = ClockTime::new(7, 59, 30);
    let mut state = UiState::new(start);

    // Enter edit mode: the controller reads the RTC and feeds it back.
    assert_eq!(state.on_press(PressKind::Long), UiAction::LoadEdit);
    state.begin_edit(start);
    assert!(status_line(&state, None).contains("MODE=EDIT FIELD=HOUR"));

    // HOUR -> MIN -> SEC, then bump the seconds.
    state.on_press(PressKind::Short);
    state.on_press(PressKind::Short);
    assert_eq!(state.field, Field::Second);
    state.on_rotate(Direction::Clockwise, 0);
    assert_eq!(
        status_line(&state, None),
        "07:59:31 MODE=EDIT FIELD=SEC PAGE=0 TEMP=-1 HUM=-1\n"
    );

    // Commit: the edited time goes to hardware and the mode reverts.
    let committed = match state.on_press(PressKind::Long) {
        UiAction::Commit(t) => t,
        other => panic!("expected commit, got {other:?}"),
    };
    assert_eq!(committed, ClockTime::new(7, 59, 31));
    state.current = committed;
    assert!(status_line(&state, None).starts_with("07:59:31 MODE=RUN"));
}

#[test]
fn set_command_writes_wrapped_time_and_forces_run_mode() {
    let start = ClockTime::new(1, 2, 3);
    let mut state = UiState::new(start);
    state.on_press(PressKind::Long);
    state.begin_edit(start);
    assert!(state.editing());

    let time = match parse_command("SET 24:61:99") {
        Ok(Command::SetTime(t)) => t,
        other => panic!("expected SET, got {other:?}"),
    };
    assert_eq!(time, ClockTime::new(0, 0, 0));

    // Controller applies: RTC write, then run mode.
    state.current = time;
    state.leave_edit();
    assert!(status_line(&state, None).starts_with("00:00:00 MODE=RUN"));
}

#[test]
fn led_command_clamps_through_to_the_output_mask() {
    let high = match parse_command("LED 12") {
        Ok(Command::SetLevel(n)) => n,
        other => panic!("expected LED, got {other:?}"),
    };
    assert_eq!(level_mask(high), 0b1111_1111);

    let low = match parse_command("LED -3") {
        Ok(Command::SetLevel(n)) => n,
        other => panic!("expected LED, got {other:?}"),
    };
    assert_eq!(level_mask(low), 0b0000_0000);
}

#[test]
fn checksum_failure_never_reaches_the_status_line() {
    let mut cache = SampleCache::new();
    let good = [55u8, 0, 24, 0, 79];
    let corrupt = [55u8, 0, 25, 0, 79];

    let sample = cache.get(0, || decode_frame(&good));
    assert_eq!(
        sample,
        Some(SensorSample {
            humidity: 55,
            temperature: 24
        })
    );

    // Corrupt frame after the TTL: the stale sample is served instead.
    let sample = cache.get(2500, || decode_frame(&corrupt));
    assert_eq!(
        sample,
        Some(SensorSample {
            humidity: 55,
            temperature: 24
        })
    );

    let state = UiState::new(ClockTime::new(0, 0, 0));
    assert!(status_line(&state, sample).ends_with("TEMP=24 HUM=55\n"));
}

#[test]
fn never_acquired_sensor_reports_minus_one() {
    let mut cache = SampleCache::new();
    let sample = cache.get(0, || decode_frame(&[1, 2, 3, 4, 5]));
    assert_eq!(sample, None);

    let state = UiState::new(ClockTime::new(0, 0, 0));
    assert!(status_line(&state, sample).ends_with("TEMP=-1 HUM=-1\n"));
}

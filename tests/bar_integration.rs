/*
 *  tests/bar_integration.rs
 *
 *  Integration tests for the dual bar renderer on the mock display
 *
 *  duobar - two bars, one row
 *  (c) 2020-26 Stuart Hunter
 */

use duobar::display::drivers::mock::{MockLcd, Op};
use duobar::glyphs::{BLANK_CHAR, FULL_BLOCK_CHAR};
use duobar::{BarId, BarSegment, DuoBar};

const ROW: u8 = 1;

/// A 16x2 panel with the bars on row 1 and a handle kept on the mock.
fn setup() -> (DuoBar<MockLcd>, MockLcd) {
    let lcd = MockLcd::new_16x2();
    let handle = lcd.clone();
    let bars = DuoBar::new(lcd, ROW, 16).unwrap();
    (bars, handle)
}

/// Same, but bar 1 spans the whole row and bar 2 is parked.
fn setup_single_bar() -> (DuoBar<MockLcd>, MockLcd) {
    let (mut bars, handle) = setup();
    bars.set_layout(BarSegment::new(0, 16), BarSegment::new(16, 0))
        .unwrap();
    (bars, handle)
}

fn solid_then_blank(solid: usize, total: usize) -> Vec<u8> {
    let mut row = vec![FULL_BLOCK_CHAR; solid];
    row.resize(total, BLANK_CHAR);
    row
}

#[test]
fn test_construction_issues_no_writes() {
    let (_bars, lcd) = setup();
    assert_eq!(lcd.op_count(), 0);
}

#[test]
fn test_scenario_half_of_percent_range() {
    // range [0,100], value 50: level 128, 8 solid cells, 9th blank
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 100);
    bars.draw(50, 0).unwrap();

    assert_eq!(lcd.row_codes(ROW), solid_then_blank(8, 16));
}

#[test]
fn test_scenario_full_scale() {
    // range [0,100], value 100: all 16 cells solid, no partial glyph
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 100);
    bars.draw(100, 0).unwrap();

    assert_eq!(lcd.row_codes(ROW), solid_then_blank(16, 16));
    // the solid block is built in, nothing was programmed
    let state = lcd.state();
    assert!(
        !state
            .lock()
            .unwrap()
            .ops
            .iter()
            .any(|op| matches!(op, Op::DefineGlyph { .. }))
    );
}

#[test]
fn test_scenario_signed_domain() {
    // [-50,50] at 0 is half of span, same pattern as 50 of [0,100]
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, -50, 50);
    bars.draw(0, 0).unwrap();

    assert_eq!(lcd.row_codes(ROW), solid_then_blank(8, 16));
}

#[test]
fn test_scenario_two_bars_independent() {
    // bar1 [0,10]=5 over its 8 cells, bar2 [0,10]=10 over its 8 cells
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);
    bars.set_range(BarId::Two, 0, 10);
    bars.draw(5, 10).unwrap();

    let mut expected = solid_then_blank(4, 8);
    expected.extend(vec![FULL_BLOCK_CHAR; 8]);
    assert_eq!(lcd.row_codes(ROW), expected);
}

#[test]
fn test_first_draw_paints_whole_segments() {
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);
    bars.set_range(BarId::Two, 0, 10);
    bars.draw(0, 0).unwrap();

    // 2 cursor moves + 8 cells per bar, no glyph programming for blanks
    assert_eq!(lcd.op_count(), 18);
    assert_eq!(lcd.row_codes(ROW), vec![BLANK_CHAR; 16]);
}

#[test]
fn test_write_minimization_on_identical_draw() {
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 100);
    bars.set_range(BarId::Two, 0, 100);
    bars.draw(30, 60).unwrap();

    lcd.clear_ops();
    bars.draw(30, 60).unwrap();
    assert_eq!(lcd.op_count(), 0);
}

#[test]
fn test_write_window_is_bounded_on_growth() {
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 100);
    bars.draw(0, 0).unwrap();

    lcd.clear_ops();
    // 25 of [0,100]: level 64, 4 solid cells, blank boundary at cell 5
    bars.draw(25, 0).unwrap();
    assert_eq!(lcd.op_count(), 6); // 1 move + 5 cells
    assert_eq!(lcd.row_codes(ROW), solid_then_blank(4, 16));
}

#[test]
fn test_shrinking_bar_erases_stale_fill() {
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 100);
    bars.draw(100, 0).unwrap();

    lcd.clear_ops();
    bars.draw(50, 0).unwrap();
    assert_eq!(lcd.row_codes(ROW), solid_then_blank(8, 16));
    // previous fill reached the end, so the rewrite spans the segment
    assert_eq!(lcd.op_count(), 17);
}

#[test]
fn test_disabled_bar_renders_blank_for_any_value() {
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);
    bars.set_range(BarId::Two, 0, 10);
    bars.draw(10, 10).unwrap();

    bars.disable_bar(BarId::One);
    bars.draw(7, 10).unwrap();

    let row = lcd.row_codes(ROW);
    assert_eq!(&row[..8], &[BLANK_CHAR; 8]);
    assert_eq!(&row[8..], &[FULL_BLOCK_CHAR; 8]);

    // any further value on the disabled bar is a no-op
    lcd.clear_ops();
    bars.draw(3, 10).unwrap();
    bars.draw(-99, 10).unwrap();
    assert_eq!(lcd.op_count(), 0);
}

#[test]
fn test_unconfigured_bar_stays_blank() {
    // never configured = disabled; passing 0 for it is a documented no-op
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);
    bars.draw(10, 0).unwrap();

    let row = lcd.row_codes(ROW);
    assert_eq!(&row[..8], &[FULL_BLOCK_CHAR; 8]);
    assert_eq!(&row[8..], &[BLANK_CHAR; 8]);
}

#[test]
fn test_out_of_domain_values_clamp() {
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 10);

    bars.draw(15, 0).unwrap();
    let above = lcd.row_codes(ROW);
    assert_eq!(above, solid_then_blank(16, 16));

    bars.draw(-3, 0).unwrap();
    let below = lcd.row_codes(ROW);
    assert_eq!(below, vec![BLANK_CHAR; 16]);
}

#[test]
fn test_boundary_glyph_selection() {
    // [0,256] over 16 cells maps values to levels 1:1; value 40 is
    // 2 solid cells plus remainder 8 -> glyph slot 3 in the 3rd cell
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 256);
    bars.draw(40, 0).unwrap();

    let row = lcd.row_codes(ROW);
    assert_eq!(&row[..2], &[FULL_BLOCK_CHAR; 2]);
    assert_eq!(row[2], 3);
    assert_eq!(&row[3..], &[BLANK_CHAR; 13]);
}

#[test]
fn test_glyph_slots_programmed_lazily_and_once() {
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 256);

    bars.draw(1, 0).unwrap(); // level 1 -> slot 0
    assert_eq!(lcd.define_count(0), 1);

    // level 2 renders with the same glyph: appearance unchanged, no writes
    lcd.clear_ops();
    bars.draw(2, 0).unwrap();
    assert_eq!(lcd.op_count(), 0);

    bars.draw(3, 0).unwrap(); // level 3 -> slot 1
    assert_eq!(lcd.define_count(1), 1);

    // back to slot 0: already programmed, only cell writes happen
    bars.draw(1, 0).unwrap();
    assert_eq!(lcd.define_count(0), 1);
    assert_eq!(lcd.define_count(1), 1);
}

#[test]
fn test_appearance_diffing_survives_reconfiguration() {
    // [0,100] at 50 and [0,200] at 100 land on the same appearance;
    // the range change alone forces no rewrite
    let (mut bars, lcd) = setup_single_bar();
    bars.set_range(BarId::One, 0, 100);
    bars.draw(50, 0).unwrap();

    lcd.clear_ops();
    bars.set_range(BarId::One, 0, 200);
    bars.draw(100, 0).unwrap();
    assert_eq!(lcd.op_count(), 0);
}

#[test]
fn test_relayout_forces_full_repaint() {
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);
    bars.set_range(BarId::Two, 0, 10);
    bars.draw(5, 5).unwrap();

    lcd.clear_ops();
    bars.set_layout(BarSegment::new(0, 4), BarSegment::new(4, 12))
        .unwrap();
    bars.draw(5, 5).unwrap();
    // both segments repaint end to end: (1 move + 4) + (1 move + 12)
    assert_eq!(lcd.op_count(), 18);
}

#[test]
fn test_adapter_failure_propagates() {
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);

    lcd.state().lock().unwrap().simulate_write_failure = true;
    assert!(bars.draw(5, 0).is_err());

    // the failed draw must not be recorded as rendered
    lcd.state().lock().unwrap().simulate_write_failure = false;
    lcd.clear_ops();
    bars.draw(5, 0).unwrap();
    assert!(lcd.op_count() > 0);
}

#[test]
fn test_draw_values_is_a_pure_alias() {
    let (mut bars, lcd) = setup();
    bars.set_range(BarId::One, 0, 10);
    bars.set_range(BarId::Two, 0, 10);
    bars.draw_values(5, 10).unwrap();

    let via_alias = lcd.row_codes(ROW);

    let (mut bars2, lcd2) = setup();
    bars2.set_range(BarId::One, 0, 10);
    bars2.set_range(BarId::Two, 0, 10);
    bars2.draw(5, 10).unwrap();

    assert_eq!(via_alias, lcd2.row_codes(ROW));
}

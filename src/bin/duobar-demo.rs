/*
 *  bin/duobar-demo.rs
 *
 *  duobar terminal demo - two bars sweeping on an emulated panel
 *
 *  (c) 2020-26 Stuart Hunter
 *
 *  Usage:
 *    cargo run --bin duobar-demo
 *    cargo run --bin duobar-demo -- --cols 20 --bar1-max 200
 *    cargo run --bin duobar-demo -- --log-level debug --frames 50
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 */

use std::{thread, time::Duration};

use env_logger::Env;
use log::info;

use duobar::config;
use duobar::display::drivers::terminal::TerminalLcd;
use duobar::display::traits::CharDisplay;
use duobar::{BarId, DuoBar};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::load()?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(cfg.log_level.as_deref().unwrap_or("info")),
    )
    .init();

    info!("duobar demo, built {}", BUILD_DATE);

    let panel = cfg.panel.unwrap_or_default();
    let cols = panel.cols.unwrap_or(16);
    let rows = panel.rows.unwrap_or(2);
    let row = panel.row.unwrap_or(0);

    let bars_cfg = cfg.bars.unwrap_or_default();
    let (min1, max1) = range_of(&bars_cfg.bar1, 0, 100);
    let (min2, max2) = range_of(&bars_cfg.bar2, 0, 100);

    let demo = cfg.demo.unwrap_or_default();
    let frames = demo.frames.unwrap_or(100);
    let interval = Duration::from_millis(demo.interval_ms.unwrap_or(40));

    let mut lcd = TerminalLcd::new(cols, rows)?;
    lcd.init()?;

    let mut bars = DuoBar::new(lcd, row, cols)?;
    bars.set_range(BarId::One, min1, max1);
    bars.set_range(BarId::Two, min2, max2);

    info!(
        "bar 1 over [{}, {}], bar 2 over [{}, {}], {} frames",
        min1, max1, min2, max2, frames
    );

    // Sweep bar 1 up while bar 2 runs down
    let mut emitted = 0u16;
    for frame in 0..=frames {
        let v1 = lerp(min1, max1, frame, frames);
        let v2 = lerp(max2, min2, frame, frames);
        bars.draw(v1, v2)?;

        if emitted > 0 {
            // redraw in place
            print!("\x1b[{}A", emitted);
        }
        emitted = bars.display_mut().present();

        thread::sleep(interval);
    }

    info!("done after {} frames", bars.display().frame_count());
    Ok(())
}

fn range_of(cfg: &Option<config::RangeConfig>, min: i32, max: i32) -> (i32, i32) {
    match cfg {
        Some(r) => (r.min.unwrap_or(min), r.max.unwrap_or(max)),
        None => (min, max),
    }
}

fn lerp(from: i32, to: i32, step: u32, steps: u32) -> i32 {
    if steps == 0 {
        return to;
    }
    let delta = i64::from(to) - i64::from(from);
    (i64::from(from) + delta * i64::from(step) / i64::from(steps)) as i32
}

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vip8_core::Chip8;
use vip8_display::Display;

use crate::font::FONT_SET;
use crate::keymap::keymap;

/// Runs a ROM until the window closes or the machine faults.
///
/// Each pass presents any pending frame, drains input into the key latch,
/// advances the machine by one cycle, consumes any beep, and sleeps out
/// the remainder of the cycle period. The machine executes one timer tick
/// per cycle, so `hz` is both the instruction and timer rate.
pub fn run(rom: PathBuf, hz: u32) -> Result<(), String> {
    let mut chip8: Chip8 = Chip8::new();
    chip8.load_font(&FONT_SET).map_err(|e| e.to_string())?;

    let program =
        fs::read(&rom).map_err(|e| format!("unable to read {}: {}", rom.display(), e))?;
    chip8.load(&program).map_err(|e| e.to_string())?;
    info!("loaded {} byte ROM from {}", program.len(), rom.display());

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display: Display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let cycle_time: Duration = Duration::from_secs(1) / hz;
    let mut last_cycle: Instant = Instant::now();

    'event: loop {
        // If a frame is pending, consume it and render
        if let Some(frame) = chip8.take_frame() {
            display.render(&frame)?;
        }

        // Drain input into the key latch before stepping so the two never
        // interleave mid-cycle
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            };
        }

        // Advance the machine by one cycle
        if let Err(fault) = chip8.step() {
            error!("machine halted: {}", fault);
            break 'event;
        }
        if chip8.take_beep() {
            debug!("beep");
        }

        // Handle timing
        let elapsed_cycle_time = last_cycle.elapsed();
        if cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}

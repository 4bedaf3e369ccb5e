use log::{trace, warn};

use crate::constants::{FONT_BASE, FONT_CAPACITY, MEMORY_SIZE, PROGRAM_CAPACITY, PROGRAM_START};
use crate::fault::{Fault, LoadError};
use crate::instruction;
use crate::state::{FrameBuffer, Keys, State};

/// # Chip-8
/// A Chip-8 virtual machine: 4K of memory, sixteen 8-bit registers, a
/// 16-entry call stack, two countdown timers, a 64x32 1-bit display and a
/// hexadecimal keypad latch.
///
/// Owns the current `state` and the externally-written `pressed_keys`
/// latch. The driving loop is expected to serialize key updates and
/// `step` calls; the machine performs no locking of its own.
///
/// Supplies interfaces for:
/// - loading a program image and a font table
/// - pressing and releasing keys
/// - advancing the machine by single cycles
/// - consuming pending frames and beeps
/// - inspecting the fault that halted it, if any
pub struct Chip8 {
    state: State,
    pressed_keys: Keys,
    halt: Option<Fault>,
    beep_pending: bool,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; 16],
            halt: None,
            beep_pending: false,
        }
    }

    /// Returns the machine to its power-on state: zeroed registers, stack,
    /// memory, timers, keys and display, with the program counter at the
    /// program start address. Clears any latched fault and pending
    /// frame/beep, and cancels a parked key wait. Idempotent.
    pub fn reset(&mut self) {
        self.state = State::new();
        self.pressed_keys = [false; 16];
        self.halt = None;
        self.beep_pending = false;
    }

    /// Copies a program image into memory at the program start address.
    ///
    /// An image larger than the space above the program start is rejected
    /// and nothing is written.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > PROGRAM_CAPACITY {
            return Err(LoadError::ProgramTooLarge {
                len: program.len(),
                capacity: PROGRAM_CAPACITY,
            });
        }
        self.state.memory[PROGRAM_START..PROGRAM_START + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Copies a caller-supplied font table into low memory where the glyph
    /// lookup opcode expects it. Rejected if it would reach the program
    /// area.
    pub fn load_font(&mut self, glyphs: &[u8]) -> Result<(), LoadError> {
        if glyphs.len() > FONT_CAPACITY {
            return Err(LoadError::FontTooLarge {
                len: glyphs.len(),
                capacity: FONT_CAPACITY,
            });
        }
        self.state.memory[FONT_BASE..FONT_BASE + glyphs.len()].copy_from_slice(glyphs);
        Ok(())
    }

    /// Sets the pressed status of `key` and delivers it to a register
    /// parked on a key wait, resuming execution.
    ///
    /// # Arguments
    /// * `key` the keypad key 0..F that was pressed
    pub fn key_press(&mut self, key: u8) {
        let key = key & 0xF;
        self.pressed_keys[key as usize] = true;
        if let Some(register) = self.state.register_awaiting_key {
            self.state.v[register as usize] = key;
            self.state.register_awaiting_key = None;
        }
    }

    /// Unsets the pressed status of `key`.
    ///
    /// # Arguments
    /// * `key` the keypad key 0..F that was released
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[(key & 0xF) as usize] = false;
    }

    /// The fault that halted the machine, if any. Distinct from the
    /// unrecognized-opcode case, which only logs and keeps running.
    pub fn fault(&self) -> Option<Fault> {
        self.halt
    }

    /// Returns the frame buffer if the display changed since the last
    /// take, clearing the draw-pending flag.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Returns true if the sound timer expired since the last take,
    /// clearing the pending beep.
    pub fn take_beep(&mut self) -> bool {
        std::mem::replace(&mut self.beep_pending, false)
    }

    /// Performs one fetch-decode-execute-timer cycle.
    ///
    /// While parked on a key wait only the timers advance. A fatal fault
    /// commits none of the cycle's effects, halts the machine, and is
    /// returned from this and every later call until `reset`.
    pub fn step(&mut self) -> Result<(), Fault> {
        if let Some(fault) = self.halt {
            return Err(fault);
        }
        if let Err(fault) = self.advance() {
            self.halt = Some(fault);
            return Err(fault);
        }
        self.tick_timers();
        Ok(())
    }

    /// Fetches and executes the next instruction unless a key wait is
    /// parked. Unrecognized words are reported and skipped so malformed
    /// ROM content doesn't stall the run.
    fn advance(&mut self) -> Result<(), Fault> {
        if self.state.register_awaiting_key.is_some() {
            return Ok(());
        }
        let op = self.fetch()?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            self.state.pc
        );
        match instruction::decode(op) {
            Some(operation) => self.state = operation(op, &self.state, &self.pressed_keys)?,
            None => {
                warn!("unrecognized opcode {:#06X} at {:#05X}", op, self.state.pc);
                self.state.pc += 0x2;
            }
        }
        Ok(())
    }

    /// Reads the two bytes at the program counter big-endian-combined into
    /// one instruction word.
    fn fetch(&self) -> Result<u16, Fault> {
        let pc = self.state.pc as usize;
        if pc + 2 > MEMORY_SIZE {
            return Err(Fault::FetchOutOfBounds {
                addr: self.state.pc,
            });
        }
        let high = u16::from(self.state.memory[pc]);
        let low = u16::from(self.state.memory[pc + 1]);
        Ok(high << 8 | low)
    }

    /// Counts both timers down one step; the sound timer passing 1 queues
    /// a single beep event.
    fn tick_timers(&mut self) {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }
        if self.state.sound_timer > 0 {
            if self.state.sound_timer == 1 {
                self.beep_pending = true;
            }
            self.state.sound_timer -= 1;
        }
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}

use crate::fault::Fault;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::{Keys, State};

/// An opcode's executable semantics: applied to the current state, yields
/// either the fully-updated successor state or a fatal fault with nothing
/// committed.
pub type Operation = fn(op: u16, state: &State, keys: &Keys) -> Result<State, Fault>;

/// Selects the Operation for a given instruction word.
///
/// Dispatch is a single match over the component nibbles, so exactly one
/// family body can ever run for a fetched word. Words matching no pattern
/// decode to None and are reported by the caller.
pub fn decode(op: u16) -> Option<Operation> {
    let operation: Operation = match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => clear_display,
        (0x0, 0x0, 0xE, 0xE) => ret,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => skip_eq_imm,
        (0x4, ..) => skip_ne_imm,
        (0x5, .., 0x0) => skip_eq_reg,
        (0x6, ..) => set_imm,
        (0x7, ..) => add_imm,
        (0x8, .., 0x0) => copy_reg,
        (0x8, .., 0x1) => or_reg,
        (0x8, .., 0x2) => and_reg,
        (0x8, .., 0x3) => xor_reg,
        (0x8, .., 0x4) => add_reg,
        (0x8, .., 0x5) => sub_reg,
        (0x8, .., 0x6) => shift_right,
        (0x8, .., 0x7) => rsub_reg,
        (0x8, .., 0xE) => shift_left,
        (0x9, .., 0x0) => skip_ne_reg,
        (0xA, ..) => set_index,
        (0xB, ..) => jump_offset,
        (0xC, ..) => random,
        (0xD, ..) => draw_sprite,
        (0xE, .., 0x9, 0xE) => skip_key_down,
        (0xE, .., 0xA, 0x1) => skip_key_up,
        (0xF, .., 0x0, 0x7) => read_delay,
        (0xF, .., 0x0, 0xA) => wait_key,
        (0xF, .., 0x1, 0x5) => set_delay,
        (0xF, .., 0x1, 0x8) => set_sound,
        (0xF, .., 0x1, 0xE) => add_index,
        (0xF, .., 0x2, 0x9) => font_index,
        (0xF, .., 0x3, 0x3) => store_bcd,
        (0xF, .., 0x5, 0x5) => store_regs,
        (0xF, .., 0x6, 0x5) => load_regs,
        _ => return None,
    };
    Some(operation)
}

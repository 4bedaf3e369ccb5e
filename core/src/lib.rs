pub use chip8::Chip8;
pub use fault::{Fault, LoadError};

mod chip8;
pub mod constants;
mod fault;
mod instruction;
mod opcode;
mod operations;
pub mod state;

use thiserror::Error;

/// Unrecoverable machine faults.
///
/// Raising one of these halts the machine: the faulting cycle commits none
/// of its effects and every later `step` returns the same fault untouched
/// until the machine is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("instruction fetch out of bounds at {addr:#05X}")]
    FetchOutOfBounds { addr: u16 },

    #[error("memory access out of bounds at {addr:#05X}")]
    MemoryOutOfBounds { addr: u16 },

    #[error("call stack overflow")]
    StackOverflow,

    #[error("return with empty call stack")]
    StackUnderflow,
}

/// Rejected program or font images.
///
/// Unlike a [`Fault`] these leave the machine untouched; the caller may
/// retry with a smaller image without resetting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("program is {len} bytes but only {capacity} fit above the program start address")]
    ProgramTooLarge { len: usize, capacity: usize },

    #[error("font is {len} bytes but only {capacity} fit below the program start address")]
    FontTooLarge { len: usize, capacity: usize },
}

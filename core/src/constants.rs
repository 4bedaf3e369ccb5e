/// Total addressable memory in bytes (0x000..=0xFFF)
pub const MEMORY_SIZE: usize = 4096;

/// Address at which loaded programs begin; everything below it is reserved
/// for interpreter data such as the font glyphs
pub const PROGRAM_START: usize = 0x200;

/// Largest program image that fits between PROGRAM_START and the end of memory
pub const PROGRAM_CAPACITY: usize = MEMORY_SIZE - PROGRAM_START;

/// Number of nested calls the return stack can hold
pub const STACK_DEPTH: usize = 16;

/// Horizontal pixel count of the monochrome display
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical pixel count of the monochrome display
pub const DISPLAY_HEIGHT: usize = 32;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Address at which the caller-supplied font glyphs are expected to live
pub const FONT_BASE: usize = 0x050;

/// Bytes per font glyph; glyph for digit d starts at FONT_BASE + d * FONT_GLYPH_SIZE
pub const FONT_GLYPH_SIZE: usize = 5;

/// Largest font image that fits between FONT_BASE and PROGRAM_START
pub const FONT_CAPACITY: usize = PROGRAM_START - FONT_BASE;

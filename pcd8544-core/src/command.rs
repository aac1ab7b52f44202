//! PCD8544 instruction set
//!
//! Instructions are single command-mode bytes with parameters packed into
//! the low bits. The extended set (H=1) holds the analog settings; the
//! basic set (H=0) holds display control and RAM addressing.

/// Function set, basic instruction set (H=0), horizontal addressing
pub const FUNCTION_SET_BASIC: u8 = 0x20;
/// Function set, extended instruction set (H=1)
pub const FUNCTION_SET_EXTENDED: u8 = 0x21;
/// Function set bit that puts the chip in power-down
pub const FUNCTION_SET_POWER_DOWN: u8 = 0x04;

/// Display control base (basic set)
pub const DISPLAY_CONTROL: u8 = 0x08;
/// Display blank
pub const DISPLAY_BLANK: u8 = 0x08;
/// Normal mode
pub const DISPLAY_NORMAL: u8 = 0x0C;
/// All segments on
pub const DISPLAY_ALL_ON: u8 = 0x09;
/// Inverse video mode
pub const DISPLAY_INVERTED: u8 = 0x0D;

/// Set Y (page) address of RAM, 0..=5 (basic set)
pub const SET_Y_ADDR: u8 = 0x40;
/// Set X (column) address of RAM, 0..=83 (basic set)
pub const SET_X_ADDR: u8 = 0x80;

/// Temperature coefficient, 0..=3 (extended set)
pub const SET_TEMP_COEFF: u8 = 0x04;
/// Bias system, 0..=7 (extended set)
pub const SET_BIAS: u8 = 0x10;
/// Operating voltage Vop, 0..=0x7F (extended set)
pub const SET_VOP: u8 = 0x80;

/// Largest Vop register value
pub const MAX_VOP: u8 = 0x7F;
/// Largest temperature coefficient value
pub const MAX_TEMP_COEFF: u8 = 0x03;
/// Largest bias system value
pub const MAX_BIAS: u8 = 0x07;

/// Y address instruction for a page
pub const fn set_y(page: u8) -> u8 {
    SET_Y_ADDR | (page & 0x07)
}

/// X address instruction for a column
pub const fn set_x(column: u8) -> u8 {
    SET_X_ADDR | (column & 0x7F)
}

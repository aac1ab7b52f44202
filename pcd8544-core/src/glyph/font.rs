//! Fixed-cell ASCII fonts
//!
//! Fonts cover the printable ASCII range, space through tilde. Anything
//! else is drawn as a space.

use super::Glyph;
use crate::frame::PAGE_HEIGHT;

/// First character with a glyph
pub const FIRST_CHAR: char = ' ';

/// Last character with a glyph
pub const LAST_CHAR: char = '~';

/// Number of glyphs in a font table
pub const GLYPH_COUNT: usize = 95;

/// Map a character onto the printable range, replacing the rest with space
pub const fn substitute(ch: char) -> char {
    if ch < FIRST_CHAR || ch > LAST_CHAR {
        FIRST_CHAR
    } else {
        ch
    }
}

/// A table of equally sized glyphs for `' '..='~'`
///
/// Glyphs are stored back to back, each `width * pages` bytes laid out
/// like [`Glyph`] data. The page count comes from the height, so tall
/// fonts need no special casing anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    glyph_width: u8,
    glyph_height: u8,
    data: &'static [u8],
}

impl Font {
    /// Describe a font table
    pub const fn new(glyph_width: u8, glyph_height: u8, data: &'static [u8]) -> Self {
        Self {
            glyph_width,
            glyph_height,
            data,
        }
    }

    /// Width of every glyph, which is also the cursor advance
    pub const fn width(&self) -> usize {
        self.glyph_width as usize
    }

    /// Height of every glyph in pixel rows
    pub const fn height(&self) -> usize {
        self.glyph_height as usize
    }

    /// Page-rows per glyph
    pub const fn pages(&self) -> usize {
        (self.glyph_height as usize).div_ceil(PAGE_HEIGHT)
    }

    /// Bytes per glyph
    const fn stride(&self) -> usize {
        self.width() * self.pages()
    }

    /// Glyph for a character, substituting space outside `' '..='~'`
    ///
    /// A table too short for the character yields an empty glyph that
    /// fails [`Glyph::validate`].
    pub fn glyph(&self, ch: char) -> Glyph<'static> {
        let index = (substitute(ch) as usize) - (FIRST_CHAR as usize);
        let start = index * self.stride();
        let data = self.data.get(start..start + self.stride()).unwrap_or(&[]);
        Glyph::new(self.glyph_width, self.glyph_height, data)
    }

    /// Width in columns of a string rendered in this font
    ///
    /// Saturates instead of wrapping, so an absurd string still fails a
    /// bounds check.
    pub fn text_width(&self, text: &str) -> usize {
        text.chars().count().saturating_mul(self.width())
    }
}

/// Classic 5x7 face, one column per byte
const FACE_5X7: [[u8; 5]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x10, 0x08, 0x08, 0x10, 0x08], // '~'
];

/// Append a blank spacing column to every glyph
const fn pad_columns(face: &[[u8; 5]; GLYPH_COUNT]) -> [u8; GLYPH_COUNT * 6] {
    let mut out = [0u8; GLYPH_COUNT * 6];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let mut col = 0;
        while col < 5 {
            out[glyph * 6 + col] = face[glyph][col];
            col += 1;
        }
        glyph += 1;
    }
    out
}

/// Double each of the low four bits: bit `i` lands on bits `2i` and `2i + 1`
const fn spread_nibble(nibble: u8) -> u8 {
    let mut out = 0u8;
    let mut bit = 0;
    while bit < 4 {
        if nibble & (1 << bit) != 0 {
            out |= 0b11 << (2 * bit);
        }
        bit += 1;
    }
    out
}

/// Scale 6x8 glyphs to 12x16: two page-rows of twelve columns each
const fn scale_2x(small: &[u8; GLYPH_COUNT * 6]) -> [u8; GLYPH_COUNT * 24] {
    let mut out = [0u8; GLYPH_COUNT * 24];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let mut col = 0;
        while col < 6 {
            let byte = small[glyph * 6 + col];
            let top = spread_nibble(byte & 0x0F);
            let bottom = spread_nibble(byte >> 4);
            let base = glyph * 24 + col * 2;
            out[base] = top;
            out[base + 1] = top;
            out[base + 12] = bottom;
            out[base + 13] = bottom;
            col += 1;
        }
        glyph += 1;
    }
    out
}

static FONT_6X8_DATA: [u8; GLYPH_COUNT * 6] = pad_columns(&FACE_5X7);

static FONT_12X16_DATA: [u8; GLYPH_COUNT * 24] = scale_2x(&pad_columns(&FACE_5X7));

/// 6x8 font: the 5x7 face plus one spacing column, 14 characters per line
pub static FONT_6X8: Font = Font::new(6, 8, &FONT_6X8_DATA);

/// 12x16 font: the 6x8 font scaled 2x, two page-rows per glyph
pub static FONT_12X16: Font = Font::new(12, 16, &FONT_12X16_DATA);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute() {
        assert_eq!(substitute('A'), 'A');
        assert_eq!(substitute(' '), ' ');
        assert_eq!(substitute('~'), '~');
        assert_eq!(substitute('\n'), ' ');
        assert_eq!(substitute('\u{7f}'), ' ');
        assert_eq!(substitute('é'), ' ');
    }

    #[test]
    fn test_small_font_glyphs() {
        let zero = FONT_6X8.glyph('0');
        assert_eq!(zero.width(), 6);
        assert_eq!(zero.pages(), 1);
        assert_eq!(zero.data(), &[0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00]);
        assert!(zero.validate().is_ok());

        let tilde = FONT_6X8.glyph('~');
        assert_eq!(tilde.data(), &[0x10, 0x08, 0x08, 0x10, 0x08, 0x00]);
    }

    #[test]
    fn test_unsupported_char_is_space() {
        assert_eq!(FONT_6X8.glyph('\t'), FONT_6X8.glyph(' '));
        assert!(FONT_6X8.glyph('\t').data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_large_font_is_scaled() {
        let glyph = FONT_12X16.glyph('!');
        assert_eq!(glyph.pages(), 2);
        assert!(glyph.validate().is_ok());

        // '!' is 0x5F in column 2 of the small font
        assert_eq!(glyph.row(0)[4], 0xFF);
        assert_eq!(glyph.row(0)[5], 0xFF);
        assert_eq!(glyph.row(1)[4], 0x33);
        assert_eq!(glyph.row(0)[0], 0x00);
    }

    #[test]
    fn test_spread_nibble() {
        assert_eq!(spread_nibble(0b0000), 0b0000_0000);
        assert_eq!(spread_nibble(0b0001), 0b0000_0011);
        assert_eq!(spread_nibble(0b1010), 0b1100_1100);
        assert_eq!(spread_nibble(0b1111), 0xFF);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(FONT_6X8.text_width("Hello"), 30);
        assert_eq!(FONT_12X16.text_width("Hi"), 24);
        assert_eq!(FONT_6X8.text_width(""), 0);
    }
}

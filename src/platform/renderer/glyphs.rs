//=========================================================================
// Score Glyphs
//=========================================================================
//
// 5x7 bitmap digits for the score display.
//
// Each glyph is seven rows, top to bottom. Bit 4 of a row is the
// leftmost pixel.
//
//=========================================================================

pub(crate) const GLYPH_WIDTH: i32 = 5;
pub(crate) const GLYPH_HEIGHT: i32 = 7;

/// Horizontal distance between glyph origins, in glyph pixels.
pub(crate) const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Bitmap rows for `ch`. Characters without a glyph render blank.
pub(crate) fn glyph(ch: char) -> [u8; 7] {
    ch.to_digit(10)
        .map(|d| DIGITS[d as usize])
        .unwrap_or([0; 7])
}

/// Lit pixels of `ch` as (column, row) pairs.
pub(crate) fn lit_pixels(ch: char) -> impl Iterator<Item = (i32, i32)> {
    let rows = glyph(ch);
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        let bits = rows[row as usize];
        (0..GLYPH_WIDTH)
            .filter(move |col| bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0)
            .map(move |col| (col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_fit_in_five_columns() {
        for rows in DIGITS {
            assert!(rows.iter().all(|row| *row < 1 << GLYPH_WIDTH));
        }
    }

    #[test]
    fn one_has_ten_lit_pixels() {
        assert_eq!(lit_pixels('1').count(), 10);
        assert!(lit_pixels('1').any(|p| p == (2, 0)));
    }

    #[test]
    fn unknown_characters_are_blank() {
        assert_eq!(lit_pixels('x').count(), 0);
        assert_eq!(lit_pixels(' ').count(), 0);
    }
}

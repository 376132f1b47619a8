//! 1-bit sprites, one `u16` per row (MSB is the leftmost column)

use glam::IVec2;

#[derive(Debug, Clone, Copy)]
pub struct Icon {
    pub width: u32,
    pub rows: &'static [u16],
}

impl Icon {
    /// Offsets of every lit pixel, row by row
    pub fn pixels(&self) -> impl Iterator<Item = IVec2> + '_ {
        let width = self.width;
        self.rows.iter().enumerate().flat_map(move |(y, row)| {
            (0..width)
                .filter(move |x| (row >> (width - 1 - x)) & 1 == 1)
                .map(move |x| IVec2::new(x as i32, y as i32))
        })
    }
}

/// Invader, 11x9
pub const ENEMY_ICON: Icon = Icon {
    width: 11,
    rows: &[
        0b00100000100,
        0b00010001000,
        0b00111111100,
        0b01101110110,
        0b11111111111,
        0b10111111101,
        0b10111111101,
        0b10100000101,
        0b00011011000,
    ],
};

/// Player gun, 11x6. Also used for the lives row.
pub const GUN_ICON: Icon = Icon {
    width: 11,
    rows: &[
        0b00000100000,
        0b00000100000,
        0b01111111110,
        0b11111111111,
        0b11111111111,
        0b11111111111,
    ],
};

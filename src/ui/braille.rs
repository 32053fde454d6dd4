//! Braille canvas for high-resolution terminal rendering
//! Each terminal cell holds a 2×4 grid of Braille dots, giving 2× horizontal
//! and 4× vertical resolution. Colors are tracked per cell; the last shape
//! drawn into a cell decides its color.

use ratatui::style::Color;

// 3×5 digit glyphs, one row per byte, bit 2 = leftmost column
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

const GLYPH_WIDTH: usize = 3;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>,
    colors: Vec<Vec<Option<Color>>>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            colors: vec![vec![None; width]; height],
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize, color: Color) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 3) => 6,
            (1, 3) => 7,
            (0, row) => row,
            (_, row) => row + 3,
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.colors[cell_y][cell_x] = Some(color);
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Color) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Draw a number in the block digit font. `x` is the left edge of the
    /// first digit and every font pixel becomes a `scale`×`scale` square.
    pub fn draw_number(&mut self, value: u32, x: usize, y: usize, scale: usize, color: Color) {
        let scale = scale.max(1);
        let advance = (GLYPH_WIDTH + 1) * scale;

        for (i, digit) in value.to_string().bytes().enumerate() {
            let glyph = &DIGITS[(digit - b'0') as usize];
            let origin_x = x + i * advance;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            origin_x + col * scale,
                            y + row * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
    }

    /// Width in pixels of `value` drawn by `draw_number`
    pub fn number_width(value: u32, scale: usize) -> usize {
        let digits = value.to_string().len();
        let scale = scale.max(1);
        digits * GLYPH_WIDTH * scale + (digits - 1) * scale
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn color_at(&self, cell_x: usize, cell_y: usize) -> Option<Color> {
        self.colors.get(cell_y)?.get(cell_x).copied().flatten()
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

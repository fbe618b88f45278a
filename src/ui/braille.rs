/// Braille canvas for high-resolution terminal rendering.
/// Each terminal cell holds a 2×4 grid of Braille dots, giving 2× horizontal
/// and 4× vertical resolution over plain character cells.
pub struct BrailleCanvas {
    width: usize,       // Width in terminal cells
    height: usize,      // Height in terminal cells
    dots: Vec<Vec<u8>>, // Per-cell dot patterns (0-255)
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
        }
    }

    /// Set a dot at pixel coordinates.
    /// pixel_x: 0 to (width * 2 - 1), pixel_y: 0 to (height * 4 - 1).
    /// Out-of-range pixels are silently ignored.
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
    }

    /// Fill a rectangle of pixels.
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Draw a full-width horizontal line at pixel row `pixel_y`.
    pub fn draw_horizontal_line(&mut self, pixel_y: usize) {
        for px in 0..self.pixel_width() {
            self.set_pixel(px, pixel_y);
        }
    }

    /// Whether the cell has any dot set.
    pub fn cell_occupied(&self, cell_x: usize, cell_y: usize) -> bool {
        cell_x < self.width && cell_y < self.height && self.dots[cell_y][cell_x] != 0
    }

    /// Convert a cell's dot pattern to its Braille character.
    /// Braille Unicode: U+2800 + dot pattern.
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// Width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot_maps_to_braille_char() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1
        assert!(canvas.cell_occupied(0, 0));
        assert!(!canvas.cell_occupied(1, 0));
    }

    #[test]
    fn test_full_cell_is_all_dots() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(1, 0), '⠀');
    }

    #[test]
    fn test_out_of_range_pixels_are_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(100, 100);
        assert_eq!(canvas.to_char(50, 50), ' ');
    }

    #[test]
    fn test_horizontal_line_spans_every_cell() {
        let mut canvas = BrailleCanvas::new(3, 1);
        canvas.draw_horizontal_line(0);
        for x in 0..3 {
            assert!(canvas.cell_occupied(x, 0));
        }
    }
}

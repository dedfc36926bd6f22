/// Number of entries in the shader's colour palette.
pub const PALETTE_SIZE: usize = 16;

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Escape-time palette, normalized to `[0, 1]`. Indexed by iteration count modulo
/// [`PALETTE_SIZE`] in the fragment shader.
pub const COLOR_PALETTE: [[f32; 3]; PALETTE_SIZE] = [
    rgb(66, 30, 15),    // brown 3
    rgb(25, 7, 26),     // dark violet
    rgb(9, 1, 47),      // darkest blue
    rgb(4, 4, 73),      // blue 5
    rgb(0, 7, 100),     // blue 4
    rgb(12, 44, 138),   // blue 3
    rgb(24, 82, 177),   // blue 2
    rgb(57, 125, 209),  // blue 1
    rgb(134, 181, 229), // blue 0
    rgb(211, 236, 248), // lightest blue
    rgb(241, 233, 191), // lightest yellow
    rgb(248, 201, 95),  // light yellow
    rgb(255, 170, 0),   // dirty yellow
    rgb(204, 128, 0),   // brown 0
    rgb(153, 87, 0),    // brown 1
    rgb(106, 52, 3),    // brown 2
];

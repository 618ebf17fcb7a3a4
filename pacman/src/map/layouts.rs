//! The built-in level catalogue.
//!
//! Twenty layouts are derived from [`BASE_LAYOUT`] by rotating, mirroring and sprinkling extra
//! pellets into blank cells. The sprinkle step is seeded, so the catalogue is identical on
//! every run.

use std::sync::LazyLock;

use crate::constants::BASE_LAYOUT;

/// A raw text layout, one string per row.
pub type Layout = Vec<String>;

/// Probability that a blank cell receives a pellet when sprinkling.
const SPRINKLE_CHANCE: f64 = 0.08;

static CATALOGUE: LazyLock<Vec<Layout>> = LazyLock::new(build_catalogue);

/// All built-in layouts, in level order.
pub fn catalogue() -> &'static [Layout] {
    &CATALOGUE
}

/// The layout for a level index. Indices past the end wrap around.
pub fn level(index: usize) -> &'static Layout {
    &CATALOGUE[index % CATALOGUE.len()]
}

fn build_catalogue() -> Vec<Layout> {
    let m0: Layout = BASE_LAYOUT.iter().map(|row| row.to_string()).collect();
    let m1 = mirror_horizontal(&m0);
    let m2 = mirror_vertical(&m0);
    let m3 = rotate(&m0);
    let m4 = rotate(&m1);
    let m5 = rotate(&m2);
    let m6 = mirror_horizontal(&m3);
    let m7 = mirror_vertical(&m3);
    let m8 = sprinkle(&m0, 2);
    let m9 = sprinkle(&m1, 3);
    let m10 = sprinkle(&m2, 4);
    let m11 = sprinkle(&m3, 5);
    let m12 = sprinkle(&m4, 6);
    let m13 = sprinkle(&m5, 7);
    let m14 = sprinkle(&m6, 8);
    let m15 = sprinkle(&m7, 9);
    let m16 = rotate(&m8);
    let m17 = mirror_horizontal(&m9);
    let m18 = mirror_vertical(&m10);
    let m19 = rotate(&m11);

    vec![
        m0, m1, m2, m3, m4, m5, m6, m7, m8, m9, m10, m11, m12, m13, m14, m15, m16, m17, m18, m19,
    ]
}

/// Rotates a layout a quarter turn clockwise.
pub fn rotate(layout: &[String]) -> Layout {
    let grid: Vec<Vec<char>> = layout.iter().map(|row| row.chars().collect()).collect();
    let height = grid.len();
    let width = grid.first().map_or(0, Vec::len);

    let mut out = vec![vec![' '; height]; width];
    for (y, row) in grid.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            out[x][height - 1 - y] = c;
        }
    }
    out.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Mirrors a layout left-to-right.
pub fn mirror_horizontal(layout: &[String]) -> Layout {
    layout.iter().map(|row| row.chars().rev().collect()).collect()
}

/// Mirrors a layout top-to-bottom.
pub fn mirror_vertical(layout: &[String]) -> Layout {
    layout.iter().rev().cloned().collect()
}

/// Turns some blank cells into pellets, deterministically for a given seed.
pub fn sprinkle(layout: &[String], seed: u32) -> Layout {
    let mut rng = Mulberry32::new(seed);
    layout
        .iter()
        .map(|row| {
            row.chars()
                // Only blank cells draw from the stream
                .map(|c| if c == ' ' && rng.next_f64() < SPRINKLE_CHANCE { '.' } else { c })
                .collect()
        })
        .collect()
}

/// Small 32-bit generator used for sprinkling, so catalogue contents never depend on `rand`'s
/// algorithm choices.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

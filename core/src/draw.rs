use alloc::vec::Vec;

use crate::{GRID_SIZE, GRID_X_SIZE, GRID_Y_SIZE};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(0xff, 0xff, 0xff, 0xff);
    pub const BLACK: Rgba = Rgba::new(0x00, 0x00, 0x00, 0xff);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Opaque asset handles; the frontend loads the actual images at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpriteSheet {
    Walker,
    Borders,
}

/// One draw primitive, in 240x160 logical coordinates. The host renders
/// these in order; nothing here touches a surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
        antialiased: bool,
    },
    Sprite {
        sheet: SpriteSheet,
        src_x: i32,
        src_y: i32,
        src_w: i32,
        src_h: i32,
        x: f32,
        y: f32,
    },
    Text {
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
        text: alloc::string::String,
    },
}

/// Text measurement collaborator. The frontend answers with the rendered
/// size in logical units; tests use a fixed-advance mock.
pub trait MeasureText {
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Checkerboard backdrop shared by every demo scene. Rows are shifted up by
/// half a cell, so the y loop runs one row past the grid height.
pub fn draw_grid(out: &mut Vec<DrawCommand>) {
    for x in 0..GRID_X_SIZE {
        for y in 0..=GRID_Y_SIZE {
            if x % 2 == y % 2 {
                out.push(DrawCommand::Rect {
                    x: (x * GRID_SIZE) as f32,
                    y: (y * GRID_SIZE) as f32 - (GRID_SIZE / 2) as f32,
                    w: GRID_SIZE as f32,
                    h: GRID_SIZE as f32,
                    color: Rgba::new(0x80, 0x80, 0x80, 0xc0),
                    antialiased: true,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_alternating_cells() {
        let mut out = Vec::new();
        draw_grid(&mut out);
        // 15 columns x 11 rows, checkerboarded
        let expected = (0..GRID_X_SIZE)
            .map(|x| (0..=GRID_Y_SIZE).filter(|y| x % 2 == y % 2).count())
            .sum::<usize>();
        assert_eq!(out.len(), expected);
    }
}

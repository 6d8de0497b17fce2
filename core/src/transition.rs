use alloc::format;
use alloc::vec::Vec;

use crate::draw::{DrawCommand, Rgba};
use crate::{GRID_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

pub const TICKS_TO_EMPTY: u64 = 50;
pub const TICKS_TO_FILL: u64 = 100;
pub const TICKS_STATIC: u64 = 50;
pub const CYCLE_TICKS: u64 = TICKS_TO_EMPTY + TICKS_TO_FILL + TICKS_STATIC;

pub const STRIPE_COLOR: Rgba = Rgba::new(0x4c, 0x4f, 0x69, 0xf5);

/// Band width for the given tick. Pure function of `tick mod CYCLE_TICKS`:
/// zero while empty, a linear ramp to screen width while filling, then full
/// width while static.
pub fn stripe_width(tick: u64) -> f32 {
    let state = tick % CYCLE_TICKS;
    if state < TICKS_TO_EMPTY {
        0.0
    } else if state < TICKS_TO_EMPTY + TICKS_TO_FILL {
        (state - TICKS_TO_EMPTY) as f32 / TICKS_TO_FILL as f32 * SCREEN_WIDTH as f32
    } else {
        SCREEN_WIDTH as f32
    }
}

fn phase_name(tick: u64) -> &'static str {
    let state = tick % CYCLE_TICKS;
    if state < TICKS_TO_EMPTY {
        "empty"
    } else if state < TICKS_TO_EMPTY + TICKS_TO_FILL {
        "filling"
    } else {
        "full"
    }
}

/// Alternating horizontal bands, anchored left on even rows and right on odd
/// rows, plus the phase readout in the corner.
pub fn render(tick: u64, out: &mut Vec<DrawCommand>) {
    let width = stripe_width(tick);
    let band = GRID_SIZE / 2;

    for i in 0..SCREEN_HEIGHT / band {
        let x = if i % 2 == 0 {
            0.0
        } else {
            SCREEN_WIDTH as f32 - width
        };
        out.push(DrawCommand::Rect {
            x,
            y: (i * band) as f32,
            w: width,
            h: band as f32,
            color: STRIPE_COLOR,
            antialiased: true,
        });
    }

    out.push(DrawCommand::Text {
        x: 1.0,
        y: 1.0,
        size: 8.0,
        color: Rgba::WHITE,
        text: format!("state: {}\n{}", tick % CYCLE_TICKS, phase_name(tick)),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_the_cycle() {
        let screen = SCREEN_WIDTH as f32;
        assert_eq!(stripe_width(0), 0.0);
        assert_eq!(stripe_width(50), 0.0);
        let expected = 49.0 / 100.0 * screen;
        assert!((stripe_width(99) - expected).abs() < f32::EPSILON);
        assert_eq!(stripe_width(150), screen);
        assert_eq!(stripe_width(199), screen);
        assert_eq!(stripe_width(200), 0.0);
    }

    #[test]
    fn width_is_periodic() {
        for tick in 0..CYCLE_TICKS {
            assert_eq!(stripe_width(tick), stripe_width(tick + CYCLE_TICKS));
        }
    }

    #[test]
    fn bands_alternate_anchor_sides() {
        let mut out = Vec::new();
        render(100, &mut out);
        let width = stripe_width(100);
        let rects: Vec<_> = out
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { x, w, .. } => Some((*x, *w)),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len() as i32, SCREEN_HEIGHT / (GRID_SIZE / 2));
        for (i, (x, w)) in rects.iter().enumerate() {
            assert_eq!(*w, width);
            if i % 2 == 0 {
                assert_eq!(*x, 0.0);
            } else {
                assert_eq!(*x, SCREEN_WIDTH as f32 - width);
            }
        }
    }

    #[test]
    fn empty_phase_draws_zero_width_bands() {
        let mut out = Vec::new();
        render(10, &mut out);
        for c in &out {
            if let DrawCommand::Rect { w, .. } = c {
                assert_eq!(*w, 0.0);
            }
        }
    }
}

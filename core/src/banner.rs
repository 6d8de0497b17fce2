use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::debug;

use crate::draw::{DrawCommand, MeasureText, Rgba, SpriteSheet};
use crate::GRID_SIZE;

pub const BANNER_TARGET: i32 = 3;
pub const BANNER_START: i32 = BANNER_TARGET - GRID_SIZE * 3;
/// Frames to dwell once the banner has fully slid in.
pub const BANNER_PAUSE_TICKS: u64 = 50;

/// Side length of one tile in the 3x3 border tile sheet.
pub const BORDER_SIZE: i32 = 8;
pub const BANNER_FONT_SIZE: f32 = 16.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BannerPhase {
    Idle,
    SlidingIn,
    Paused,
    SlidingOut,
}

/// Vertical slide-and-pause text panel. One cycle runs
/// Idle -> SlidingIn -> Paused -> SlidingOut -> Idle; `y` never leaves
/// `[BANNER_START, BANNER_TARGET]`.
#[derive(Debug)]
pub struct Banner {
    pub x: i32,
    pub y: i32,
    pub phase: BannerPhase,
    pause_start_tick: u64,
    label: String,
    labels: Vec<String>,
    label_index: usize,
}

impl Banner {
    pub fn new() -> Self {
        let labels: Vec<String> = [String::from("Paper Town"), String::from("City Park")].into();
        Self {
            x: BANNER_TARGET,
            y: BANNER_START,
            phase: BannerPhase::Idle,
            pause_start_tick: 0,
            label: labels[0].clone(),
            labels,
            label_index: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Begin a new cycle. Ignored unless Idle; re-triggering mid-animation
    /// is an explicit debounce policy.
    pub fn start(&mut self) {
        if self.phase != BannerPhase::Idle {
            return;
        }

        self.x = BANNER_TARGET;
        self.y = BANNER_START;
        self.label = self.labels[self.label_index].clone();
        self.label_index = (self.label_index + 1) % self.labels.len();
        self.phase = BannerPhase::SlidingIn;
        debug!("banner cycle started: {}", self.label);
    }

    pub fn advance(&mut self, tick: u64) {
        match self.phase {
            BannerPhase::Idle => {}
            BannerPhase::SlidingIn => {
                self.y += 1;
                if self.y >= BANNER_TARGET {
                    self.y = BANNER_TARGET;
                    self.phase = BannerPhase::Paused;
                    self.pause_start_tick = tick;
                }
            }
            BannerPhase::Paused => {
                if tick - self.pause_start_tick > BANNER_PAUSE_TICKS {
                    self.phase = BannerPhase::SlidingOut;
                }
            }
            BannerPhase::SlidingOut => {
                self.y -= 1;
                if self.y <= BANNER_START {
                    self.y = BANNER_START;
                    self.phase = BannerPhase::Idle;
                }
            }
        }
    }

    pub fn render(&self, measure: &dyn MeasureText, out: &mut Vec<DrawCommand>) {
        let text = format!("  {}  ", self.label);
        let (w, h) = measure.measure(&text, BANNER_FONT_SIZE);
        let x = self.x as f32;
        let y = self.y as f32;
        let border = BORDER_SIZE as f32;

        out.push(DrawCommand::Rect {
            x: x + border,
            y: y + border,
            w,
            h,
            color: Rgba::WHITE,
            antialiased: false,
        });

        self.render_border(x, y, w, h, out);

        out.push(DrawCommand::Text {
            x: x + border,
            y: y + border,
            size: BANNER_FONT_SIZE,
            color: Rgba::BLACK,
            text,
        });
    }

    /// Four corner tiles plus 1 px stepped edge runs spanning the measured
    /// text bounds. Zero-sized text still gets its corners.
    fn render_border(&self, x: f32, y: f32, w: f32, h: f32, out: &mut Vec<DrawCommand>) {
        let tile = |src_x: i32, src_y: i32, dst_x: f32, dst_y: f32| DrawCommand::Sprite {
            sheet: SpriteSheet::Borders,
            src_x,
            src_y,
            src_w: BORDER_SIZE,
            src_h: BORDER_SIZE,
            x: dst_x,
            y: dst_y,
        };
        let b = BORDER_SIZE;
        let border = b as f32;

        // corners
        out.push(tile(0, 0, x, y));
        out.push(tile(b * 2, 0, x + w + border, y));
        out.push(tile(0, b * 2, x, y + h + border));
        out.push(tile(b * 2, b * 2, x + w + border, y + h + border));

        // horizontal edges
        for i in b..=(w as i32) {
            out.push(tile(b, 0, x + i as f32, y));
            out.push(tile(b, b * 2, x + i as f32, y + h + border));
        }

        // vertical edges
        for j in b..=(h as i32) {
            out.push(tile(0, b, x, y + j as f32));
            out.push(tile(b * 2, b, x + w + border, y + j as f32));
        }
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedMeasure;

    impl MeasureText for FixedMeasure {
        fn measure(&self, text: &str, size: f32) -> (f32, f32) {
            (text.len() as f32 * size / 2.0, size)
        }
    }

    const TRAVEL: u64 = (BANNER_TARGET - BANNER_START) as u64;

    fn run_cycle(banner: &mut Banner, tick: &mut u64, budget: u64) {
        banner.start();
        for _ in 0..budget {
            *tick += 1;
            banner.advance(*tick);
        }
    }

    #[test]
    fn full_cycle_returns_to_idle_within_budget() {
        let mut banner = Banner::new();
        let mut tick = 0;
        banner.start();
        assert_eq!(banner.phase, BannerPhase::SlidingIn);

        // travel up + transition + dwell + travel down + transition
        let budget = TRAVEL + 1 + BANNER_PAUSE_TICKS + TRAVEL + 1;
        for _ in 0..budget {
            tick += 1;
            banner.advance(tick);
            assert!(banner.y >= BANNER_START && banner.y <= BANNER_TARGET);
        }

        assert_eq!(banner.phase, BannerPhase::Idle);
        assert_eq!(banner.y, BANNER_START);
    }

    #[test]
    fn start_is_a_no_op_mid_animation() {
        let mut banner = Banner::new();
        banner.start();
        for tick in 1..=5 {
            banner.advance(tick);
        }
        let y = banner.y;
        let label = banner.label().to_owned();

        banner.start();
        assert_eq!(banner.phase, BannerPhase::SlidingIn);
        assert_eq!(banner.y, y);
        assert_eq!(banner.label(), label);
    }

    #[test]
    fn labels_rotate_across_cycles() {
        let mut banner = Banner::new();
        let mut tick = 0;
        let budget = TRAVEL + 1 + BANNER_PAUSE_TICKS + TRAVEL + 1;

        run_cycle(&mut banner, &mut tick, budget);
        assert_eq!(banner.phase, BannerPhase::Idle);
        let first = banner.label().to_owned();
        assert_eq!(first, "Paper Town");

        run_cycle(&mut banner, &mut tick, budget);
        assert_eq!(banner.label(), "City Park");

        run_cycle(&mut banner, &mut tick, budget);
        assert_eq!(banner.label(), "Paper Town");
    }

    #[test]
    fn render_emits_background_border_and_text() {
        let mut banner = Banner::new();
        banner.start();
        let mut out = Vec::new();
        banner.render(&FixedMeasure, &mut out);

        let rects = out
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        let tiles = out
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count();
        let texts = out
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
            .count();
        assert_eq!(rects, 1);
        assert_eq!(texts, 1);
        assert!(tiles > 4);
    }

    #[test]
    fn empty_label_still_draws_corner_tiles() {
        struct ZeroMeasure;
        impl MeasureText for ZeroMeasure {
            fn measure(&self, _text: &str, _size: f32) -> (f32, f32) {
                (0.0, 0.0)
            }
        }

        let banner = Banner::new();
        let mut out = Vec::new();
        banner.render(&ZeroMeasure, &mut out);
        let tiles = out
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count();
        assert_eq!(tiles, 4);
    }
}

use alloc::vec::Vec;

use log::debug;

use crate::draw::{DrawCommand, SpriteSheet};
use crate::inputs::{Button, InputMap};
use crate::{GRID_SIZE, GRID_X_SIZE, GRID_Y_SIZE};

pub const SPRITE_WIDTH: i32 = 16;
pub const SPRITE_HEIGHT: i32 = 32;
pub const FRAME_OX: i32 = 0;
pub const FRAME_OY: i32 = 32;
/// Ticks per walk animation frame; a full move takes twice this.
pub const ANIM_TICKS: u64 = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Row in the walk sprite sheet.
    pub fn sheet_row(self) -> i32 {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn from_button(button: Button) -> Option<Self> {
        match button {
            Button::Up => Some(Direction::Up),
            Button::Down => Some(Direction::Down),
            Button::Left => Some(Direction::Left),
            Button::Right => Some(Direction::Right),
            Button::Confirm => None,
        }
    }
}

/// Tile-snapped walker with a three-frame walk cycle. `cell_x`/`cell_y` only
/// change at the moment a move completes; the bottom grid row is reserved
/// and never entered.
#[derive(Debug)]
pub struct Walker {
    pub cell_x: i32,
    pub cell_y: i32,
    pub moving: Option<Direction>,
    pub anim_frame: i32,
    facing: Direction,
    move_start_tick: u64,
    prev_button: Option<Button>,
}

fn in_bounds(x: i32, y: i32) -> bool {
    x >= 0 && x < GRID_X_SIZE && y >= 0 && y < GRID_Y_SIZE - 1
}

impl Walker {
    pub fn new() -> Self {
        Self {
            cell_x: GRID_X_SIZE / 2,
            cell_y: GRID_Y_SIZE / 2,
            moving: None,
            anim_frame: 0,
            facing: Direction::Down,
            move_start_tick: 0,
            prev_button: None,
        }
    }

    pub fn advance(&mut self, tick: u64, inputs: &InputMap) {
        match self.moving {
            None => self.try_start_move(tick, inputs),
            Some(direction) => self.step_animation(tick, direction),
        }
    }

    /// Prefer the previously used key while it stays held, otherwise take
    /// the first pressed key that maps to a direction. A blocked destination
    /// drops the attempt for this frame; held keys retry next frame.
    fn try_start_move(&mut self, tick: u64, inputs: &InputMap) {
        let candidate = self
            .prev_button
            .filter(|b| inputs.get(b).is_some_and(|s| s.is_pressed()))
            .or_else(|| {
                inputs
                    .iter()
                    .filter(|(_, state)| state.is_pressed())
                    .map(|(button, _)| *button)
                    .find(|button| Direction::from_button(*button).is_some())
            });

        let Some(button) = candidate else {
            return;
        };
        let Some(direction) = Direction::from_button(button) else {
            return;
        };

        let (dx, dy) = direction.delta();
        if !in_bounds(self.cell_x + dx, self.cell_y + dy) {
            return;
        }

        self.moving = Some(direction);
        self.facing = direction;
        self.move_start_tick = tick;
        self.anim_frame = 0;
        self.prev_button = Some(button);
        debug!("move started: {:?} from ({}, {})", direction, self.cell_x, self.cell_y);
    }

    fn step_animation(&mut self, tick: u64, direction: Direction) {
        let elapsed = tick - self.move_start_tick;
        if elapsed < ANIM_TICKS {
            self.anim_frame = 1;
        } else if elapsed < ANIM_TICKS * 2 {
            self.anim_frame = 2;
        } else {
            self.anim_frame = 0;
            self.moving = None;
            let (dx, dy) = direction.delta();
            self.cell_x += dx;
            self.cell_y += dy;
        }
    }

    /// Sprite column follows the animation frame; the sub-tile offset slides
    /// the sprite between the two cells over the course of the move.
    pub fn render(&self, out: &mut Vec<DrawCommand>) {
        let (dx, dy) = self.moving.map_or((0, 0), Direction::delta);
        let offset_x = GRID_SIZE / 2 + self.anim_frame * (GRID_SIZE / 3) * dx;
        let offset_y = GRID_SIZE / 2 + self.anim_frame * (GRID_SIZE / 3) * dy;

        out.push(DrawCommand::Sprite {
            sheet: SpriteSheet::Walker,
            src_x: FRAME_OX + self.anim_frame * SPRITE_WIDTH,
            src_y: FRAME_OY * self.facing.sheet_row(),
            src_w: SPRITE_WIDTH,
            src_h: SPRITE_HEIGHT,
            x: (self.cell_x * GRID_SIZE + offset_x - SPRITE_WIDTH / 2) as f32,
            y: (self.cell_y * GRID_SIZE + offset_y - SPRITE_HEIGHT / 2) as f32,
        });
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::KeyState;

    fn held(buttons: &[Button]) -> InputMap {
        let mut map = InputMap::new();
        for b in buttons {
            map.insert(*b, KeyState::Held).unwrap();
        }
        map
    }

    #[test]
    fn held_key_produces_exactly_one_move_per_two_t() {
        let mut walker = Walker::new();
        let inputs = held(&[Button::Left]);
        let start_x = walker.cell_x;

        // tick 1 starts the move; ticks 2..=21 animate and complete it
        walker.advance(1, &inputs);
        assert!(walker.moving.is_some());
        assert_eq!(walker.anim_frame, 0);
        assert_eq!(walker.cell_x, start_x);

        let mut frames = Vec::new();
        for tick in 2..=(1 + ANIM_TICKS * 2) {
            walker.advance(tick, &inputs);
            frames.push(walker.anim_frame);
        }

        assert_eq!(walker.cell_x, start_x - 1);
        assert!(walker.moving.is_none());
        assert_eq!(*frames.last().unwrap(), 0);
        assert!(frames[..frames.len() - 1].iter().all(|f| *f == 1 || *f == 2));
        assert_eq!(frames.iter().filter(|f| **f == 2).count() as u64, ANIM_TICKS);
    }

    #[test]
    fn bottom_row_is_reserved() {
        let mut walker = Walker::new();
        walker.cell_y = GRID_Y_SIZE - 2;
        let inputs = held(&[Button::Down]);

        for tick in 1..=100 {
            walker.advance(tick, &inputs);
            assert!(walker.cell_y <= GRID_Y_SIZE - 2);
        }
        assert!(walker.moving.is_none());
        assert_eq!(walker.cell_y, GRID_Y_SIZE - 2);
    }

    #[test]
    fn cell_stays_in_bounds_for_any_input_sequence() {
        let mut walker = Walker::new();
        let all = [Button::Left, Button::Up, Button::Right, Button::Down];
        for tick in 1..=2000u64 {
            let button = all[(tick % 4) as usize];
            walker.advance(tick, &held(&[button]));
            assert!(walker.cell_x >= 0 && walker.cell_x < GRID_X_SIZE);
            assert!(walker.cell_y >= 0 && walker.cell_y <= GRID_Y_SIZE - 2);
        }
    }

    #[test]
    fn previous_key_wins_while_still_held() {
        let mut walker = Walker::new();
        let inputs = held(&[Button::Right]);
        walker.advance(1, &inputs);
        for tick in 2..=(1 + ANIM_TICKS * 2) {
            walker.advance(tick, &inputs);
        }
        assert!(walker.moving.is_none());

        // both held, Up reported first; Right still wins as the previous key
        let both = held(&[Button::Up, Button::Right]);
        walker.advance(100, &both);
        assert_eq!(walker.moving, Some(Direction::Right));
    }

    #[test]
    fn first_reported_direction_key_starts_the_move() {
        let mut walker = Walker::new();
        let inputs = held(&[Button::Confirm, Button::Up]);
        walker.advance(1, &inputs);
        assert_eq!(walker.moving, Some(Direction::Up));
    }

    #[test]
    fn sprite_row_tracks_facing() {
        let mut walker = Walker::new();
        walker.advance(1, &held(&[Button::Left]));
        let mut out = Vec::new();
        walker.render(&mut out);
        let DrawCommand::Sprite { src_y, .. } = out[0] else {
            panic!("expected a sprite command");
        };
        assert_eq!(src_y, FRAME_OY * 2);
    }
}

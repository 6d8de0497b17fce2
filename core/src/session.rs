use alloc::vec::Vec;

use log::debug;

use crate::banner::Banner;
use crate::draw::{self, DrawCommand, MeasureText};
use crate::inputs::{Button, InputMap, KeyState};
use crate::transition;
use crate::walker::Walker;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    Banner,
    Walker,
    Transition,
}

impl Scene {
    pub fn next(self) -> Self {
        match self {
            Scene::Banner => Scene::Walker,
            Scene::Walker => Scene::Transition,
            Scene::Transition => Scene::Banner,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scene::Banner => "Display Banner",
            Scene::Walker => "Walking",
            Scene::Transition => "Transition",
        }
    }
}

/// Owns everything a demo frame needs: the tick counter, the input snapshot
/// and the per-demo state. One advance-then-render step per host frame;
/// state after N ticks is a pure function of the initial state and the
/// input snapshots seen along the way.
#[derive(Debug)]
pub struct Session {
    pub count: u64,
    pub scene: Scene,
    pub banner: Banner,
    pub walker: Walker,
    pub input_state: InputMap,
}

impl Session {
    pub fn new() -> Self {
        Self {
            count: 0,
            scene: Scene::Banner,
            banner: Banner::new(),
            walker: Walker::new(),
            input_state: InputMap::new(),
        }
    }

    pub fn set_input(&mut self, button: Button, state: KeyState) {
        // capacity covers every Button variant, so this cannot fill up
        let _ = self.input_state.insert(button, state);
    }

    pub fn select_scene(&mut self, scene: Scene) {
        if scene != self.scene {
            debug!("scene switched to {:?}", scene);
            self.scene = scene;
        }
    }

    pub fn advance(&mut self) {
        self.count += 1;

        match self.scene {
            Scene::Banner => {
                let confirm = self
                    .input_state
                    .get(&Button::Confirm)
                    .is_some_and(|s| s.just_pressed());
                if confirm {
                    self.banner.start();
                }
                self.banner.advance(self.count);
            }
            Scene::Walker => {
                self.walker.advance(self.count, &self.input_state);
            }
            Scene::Transition => {}
        }

        self.decay_inputs();
    }

    pub fn render(&self, measure: &dyn MeasureText, out: &mut Vec<DrawCommand>) {
        draw::draw_grid(out);
        match self.scene {
            Scene::Banner => self.banner.render(measure, out),
            Scene::Walker => self.walker.render(out),
            Scene::Transition => transition::render(self.count, out),
        }
    }

    /// JustPressed and JustReleased last exactly one tick.
    fn decay_inputs(&mut self) {
        let buttons: Vec<Button> = self.input_state.keys().copied().collect();
        for button in buttons {
            let state = self.input_state[&button].update();
            let _ = self.input_state.insert(button, state);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::BannerPhase;
    use crate::walker::Direction;

    #[test]
    fn confirm_starts_a_banner_cycle_once() {
        let mut session = Session::new();
        session.set_input(Button::Confirm, KeyState::new(true));
        session.advance();
        assert_eq!(session.banner.phase, BannerPhase::SlidingIn);

        // still held next tick, but no longer just-pressed
        let y = session.banner.y;
        session.advance();
        assert_eq!(session.banner.y, y + 1);
    }

    #[test]
    fn walker_only_moves_in_walker_scene() {
        let mut session = Session::new();
        session.set_input(Button::Left, KeyState::new(true));
        session.advance();
        assert!(session.walker.moving.is_none());

        session.select_scene(Scene::Walker);
        session.set_input(Button::Left, KeyState::new(true));
        session.advance();
        assert_eq!(session.walker.moving, Some(Direction::Left));
    }

    #[test]
    fn replaying_the_same_inputs_reproduces_state() {
        let script: &[(u64, Button)] = &[
            (1, Button::Confirm),
            (10, Button::Right),
            (40, Button::Down),
            (90, Button::Left),
        ];

        let run = || {
            let mut session = Session::new();
            session.select_scene(Scene::Walker);
            for tick in 1..=200u64 {
                for (at, button) in script {
                    if *at == tick {
                        session.set_input(*button, KeyState::new(true));
                    }
                    if *at + 30 == tick {
                        session.set_input(*button, KeyState::new(false));
                    }
                }
                session.advance();
            }
            (
                session.count,
                session.walker.cell_x,
                session.walker.cell_y,
                session.banner.y,
            )
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn scenes_cycle_in_order() {
        assert_eq!(Scene::Banner.next(), Scene::Walker);
        assert_eq!(Scene::Walker.next(), Scene::Transition);
        assert_eq!(Scene::Transition.next(), Scene::Banner);
    }
}

use heapless::FnvIndexMap;

/// Logical buttons the demos care about. The frontend owns the mapping from
/// physical keys to these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Confirm,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyState {
    JustPressed,
    Held,
    JustReleased,
    Released,
}

impl KeyState {
    pub fn new(pressed: bool) -> Self {
        if pressed {
            KeyState::JustPressed
        } else {
            KeyState::Released
        }
    }

    /// Fold a fresh pressed/released report into the current state.
    pub fn update_state(self, pressed: bool) -> Self {
        match (self, pressed) {
            (KeyState::JustPressed, true) | (KeyState::Held, true) => KeyState::Held,
            (_, true) => KeyState::JustPressed,
            (KeyState::JustPressed, false) | (KeyState::Held, false) => KeyState::JustReleased,
            (_, false) => KeyState::Released,
        }
    }

    /// Edge decay at the end of a tick: JustPressed becomes Held,
    /// JustReleased becomes Released.
    pub fn update(self) -> Self {
        match self {
            KeyState::JustPressed => KeyState::Held,
            KeyState::JustReleased => KeyState::Released,
            state => state,
        }
    }

    pub fn is_pressed(self) -> bool {
        matches!(self, KeyState::JustPressed | KeyState::Held)
    }

    pub fn just_pressed(self) -> bool {
        matches!(self, KeyState::JustPressed)
    }
}

/// Snapshot of currently-tracked keys, refreshed once per frame. Iteration
/// order is insertion order, which is the order the host reported the keys.
pub type InputMap = FnvIndexMap<Button, KeyState, 8>;

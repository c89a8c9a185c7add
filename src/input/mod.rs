pub mod drag;

pub use drag::{DragHandler, DragSession, ModifierLatch};

use std::collections::{HashSet, HashMap};
use std::hash::Hash;
pub use winit::keyboard::KeyCode;
pub use winit::event::MouseButton;

/// Represents a raw input source that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Raw hardware state for a single frame.
///
/// `*_held` sets are level-triggered; `*_pressed` / `*_released` sets are
/// edge-triggered and emptied by [`InputState::clear_frame_state`].
#[derive(Debug, Default)]
pub struct InputState {
    pub keys_held: HashSet<KeyCode>,
    pub keys_pressed: HashSet<KeyCode>,
    pub keys_released: HashSet<KeyCode>,

    pub mouse_pos: [f32; 2],
    pub mouse_held: HashSet<MouseButton>,
    pub mouse_pressed: HashSet<MouseButton>,
    pub mouse_released: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_frame_state(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
    }

    /// Record a key-down. OS key repeat keeps the key held but never produces
    /// a second `pressed` edge.
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
        self.keys_released.insert(key);
    }

    pub fn press_mouse(&mut self, button: MouseButton) {
        if self.mouse_held.insert(button) {
            self.mouse_pressed.insert(button);
        }
    }

    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_held.remove(&button);
        self.mouse_released.insert(button);
    }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.keys_held.contains(&key) }
    pub fn is_key_pressed(&self, key: KeyCode) -> bool { self.keys_pressed.contains(&key) }
    pub fn is_key_released(&self, key: KeyCode) -> bool { self.keys_released.contains(&key) }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool { self.mouse_held.contains(&button) }
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool { self.mouse_pressed.contains(&button) }
    pub fn is_mouse_released(&self, button: MouseButton) -> bool { self.mouse_released.contains(&button) }

    /// Either shift key is down.
    pub fn is_shift_held(&self) -> bool {
        self.is_key_held(KeyCode::ShiftLeft) || self.is_key_held(KeyCode::ShiftRight)
    }
}

/// Maps logical actions (defined by the game) to one or more physical inputs.
#[derive(Debug, Clone)]
pub struct ActionMap<A: Hash + Eq + Copy> {
    bindings: HashMap<A, Vec<InputSource>>,
}

impl<A: Hash + Eq + Copy> ActionMap<A> {
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, action: A, source: InputSource) {
        self.bindings.entry(action).or_insert_with(Vec::new).push(source);
    }

    /// Returns true if the action was triggered this frame (pressed).
    pub fn is_pressed(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).map_or(false, |sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_pressed(*k),
                InputSource::Mouse(b) => input.is_mouse_pressed(*b),
            })
        })
    }

    /// Returns true if the action is currently being held.
    pub fn is_held(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).map_or(false, |sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_held(*k),
                InputSource::Mouse(b) => input.is_mouse_held(*b),
            })
        })
    }

    /// Returns true if any bound source was released this frame.
    pub fn is_released(&self, action: A, input: &InputState) -> bool {
        self.bindings.get(&action).map_or(false, |sources| {
            sources.iter().any(|s| match s {
                InputSource::Key(k) => input.is_key_released(*k),
                InputSource::Mouse(b) => input.is_mouse_released(*b),
            })
        })
    }
}

impl<A: Hash + Eq + Copy> Default for ActionMap<A> {
    fn default() -> Self { Self::new() }
}

// ── Playground actions ──────────────────────────────────────────────────────

/// Logical controls of the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Held: pan up, or zoom out with the modifier.
    CameraUp,
    /// Held: pan down, or zoom in with the modifier.
    CameraDown,
    /// Held: pan left, or rotate with the modifier.
    CameraLeft,
    /// Held: pan right, or rotate the other way with the modifier.
    CameraRight,
    /// Swaps pan for zoom/rotate, and image moves for image rotation.
    Modifier,
    Exit,
    ImageUp,
    ImageDown,
    ImageLeft,
    ImageRight,
    Shake,
}

impl Action {
    /// Arrow keys drive the camera, WASD edits the image, Space shakes, Esc exits.
    pub fn default_bindings() -> ActionMap<Action> {
        use InputSource::Key;

        let mut map = ActionMap::new();
        map.bind(Action::CameraUp, Key(KeyCode::ArrowUp));
        map.bind(Action::CameraDown, Key(KeyCode::ArrowDown));
        map.bind(Action::CameraLeft, Key(KeyCode::ArrowLeft));
        map.bind(Action::CameraRight, Key(KeyCode::ArrowRight));
        map.bind(Action::Modifier, Key(KeyCode::ShiftLeft));
        map.bind(Action::Modifier, Key(KeyCode::ShiftRight));
        map.bind(Action::Exit, Key(KeyCode::Escape));
        map.bind(Action::ImageUp, Key(KeyCode::KeyW));
        map.bind(Action::ImageDown, Key(KeyCode::KeyS));
        map.bind(Action::ImageLeft, Key(KeyCode::KeyA));
        map.bind(Action::ImageRight, Key(KeyCode::KeyD));
        map.bind(Action::Shake, Key(KeyCode::Space));
        map
    }
}

//! Input translation
//!
//! Raw platform events arrive through [`InputSource`] and are folded into a
//! persistent movement command mask by [`InputState`]. The mask survives
//! across frames: a key held down keeps its bit set until the matching
//! release arrives, no matter how many frames pass in between.

use bitflags::bitflags;

bitflags! {
    /// Movement commands currently held by the player.
    ///
    /// Bits are only ever combined by OR on press and cleared by AND-NOT on
    /// release; releasing a bit that is not set is a no-op.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MoveCommand: u32 {
        /// Move along the camera heading
        const FORWARD = 1 << 0;
        /// Move against the camera heading
        const BACK = 1 << 1;
        /// Strafe left
        const LEFT = 1 << 2;
        /// Strafe right
        const RIGHT = 1 << 3;
    }
}

/// Keys the walkthrough responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Forward movement key
    W,
    /// Strafe-left key
    A,
    /// Backward movement key
    S,
    /// Strafe-right key
    D,
    /// Exit key
    Escape,
    /// Any other key, carried by raw platform code
    Other(u32),
}

/// Discrete input event drained from the platform queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down
    KeyPress(KeyCode),
    /// A key came back up
    KeyRelease(KeyCode),
    /// Non-keyboard event the walkthrough does not consume
    Other,
}

/// Raw mouse movement since the previous sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseDelta {
    /// Horizontal movement, positive to the right
    pub dx: i32,
    /// Vertical movement, positive downward
    pub dy: i32,
}

/// Pull-based source of platform input.
///
/// Implemented by the windowing/event collaborator. Both operations are
/// non-blocking; an empty queue simply yields `None`.
pub trait InputSource {
    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Mouse movement accumulated since the last call.
    ///
    /// Sampling resets the accumulator as a side effect, so callers must
    /// sample at most once per frame or movement is lost.
    fn sample_mouse_delta(&mut self) -> MouseDelta;
}

/// Tracks held movement keys and the exit signal across frames.
#[derive(Debug, Default)]
pub struct InputState {
    commands: MoveCommand,
    exit_requested: bool,
}

impl InputState {
    /// Create an empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the command mask.
    ///
    /// The exit key raises the termination signal instead of a movement
    /// bit. Unrecognized keys and non-keyboard events are ignored.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPress(key) => match key {
                KeyCode::Escape => self.exit_requested = true,
                KeyCode::W => self.commands |= MoveCommand::FORWARD,
                KeyCode::S => self.commands |= MoveCommand::BACK,
                KeyCode::A => self.commands |= MoveCommand::LEFT,
                KeyCode::D => self.commands |= MoveCommand::RIGHT,
                KeyCode::Other(_) => {}
            },
            InputEvent::KeyRelease(key) => match key {
                KeyCode::W => self.commands &= !MoveCommand::FORWARD,
                KeyCode::S => self.commands &= !MoveCommand::BACK,
                KeyCode::A => self.commands &= !MoveCommand::LEFT,
                KeyCode::D => self.commands &= !MoveCommand::RIGHT,
                KeyCode::Escape | KeyCode::Other(_) => {}
            },
            InputEvent::Other => {}
        }
    }

    /// Movement commands currently held.
    #[must_use]
    pub fn commands(&self) -> MoveCommand {
        self.commands
    }

    /// Whether the exit key has been seen.
    #[must_use]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Reset the command mask to empty. Called once at loop exit.
    pub fn clear(&mut self) {
        self.commands = MoveCommand::empty();
    }
}

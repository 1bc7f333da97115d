use std::fmt;

/// State of a single keyboard key.
///
/// `DOWN` means the key is held (or a lock key is on), `UP` means released (or
/// off). `INVALID` exists so uninitialized values can be told apart. Unknown
/// keys are assumed to be `UP`, hence the `Default`.
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct State(pub u8);
impl State {
    pub const INVALID: State = State(0);
    pub const DOWN: State = State(1);
    pub const UP: State = State(2);

    // Lock-style keys (caps lock, num lock) toggle rather than hold.
    pub const ON: State = State::DOWN;
    pub const OFF: State = State::UP;

    pub fn label(self) -> Option<&'static str> {
        match self {
            State::INVALID => Some("InvalidState"),
            State::DOWN => Some("Down"),
            State::UP => Some("Up"),
            _ => None,
        }
    }
    pub fn is_down(self) -> bool {
        self == State::DOWN
    }
    pub fn is_up(self) -> bool {
        self == State::UP
    }
}
impl Default for State {
    fn default() -> State {
        State::UP
    }
}
impl From<u8> for State {
    fn from(v: u8) -> State {
        State(v)
    }
}
impl From<bool> for State {
    fn from(b: bool) -> State {
        if b { State::DOWN } else { State::UP }
    }
}
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "State({})", self.0),
        }
    }
}

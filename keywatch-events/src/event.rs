use std::{fmt, time::Instant};

use crate::{Key, State};

pub trait Event {
    /// Instant at which the event occurred.
    fn time(&self) -> Instant;
}

/// A keyboard key changed state (pushed down, released, toggled on, ...).
///
/// If `key` is `Key::INVALID` the key has no canonical identity, but it can
/// still be watched through `raw` (special or non-US keys). `raw` must
/// uniquely identify the physical button and must be present regardless of
/// `key`. A scan code is a typical choice.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StateEvent {
    pub t: Instant,
    pub key: Key,
    pub state: State,
    pub raw: u64,
}
impl StateEvent {
    pub fn new(key: Key, state: State, raw: u64) -> StateEvent {
        StateEvent::at(Instant::now(), key, state, raw)
    }
    pub fn at(t: Instant, key: Key, state: State, raw: u64) -> StateEvent {
        StateEvent { t, key, state, raw }
    }
}
impl Event for StateEvent {
    fn time(&self) -> Instant {
        self.t
    }
}
impl fmt::Display for StateEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "StateEvent(Key={}, State={}, Raw={}, Time={:?})",
            self.key, self.state, self.raw, self.t
        )
    }
}

/// Same shape as `StateEvent`; kept for producers that speak in buttons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ButtonEvent {
    pub t: Instant,
    pub key: Key,
    pub state: State,
    pub raw: u64,
}
impl ButtonEvent {
    pub fn new(key: Key, state: State, raw: u64) -> ButtonEvent {
        ButtonEvent::at(Instant::now(), key, state, raw)
    }
    pub fn at(t: Instant, key: Key, state: State, raw: u64) -> ButtonEvent {
        ButtonEvent { t, key, state, raw }
    }
}
impl Event for ButtonEvent {
    fn time(&self) -> Instant {
        self.t
    }
}
impl fmt::Display for ButtonEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ButtonEvent(Key={}, State={}, Raw={}, Time={:?})",
            self.key, self.state, self.raw, self.t
        )
    }
}
impl From<ButtonEvent> for StateEvent {
    fn from(b: ButtonEvent) -> StateEvent {
        StateEvent::at(b.t, b.key, b.state, b.raw)
    }
}
impl From<&ButtonEvent> for StateEvent {
    fn from(b: &ButtonEvent) -> StateEvent {
        StateEvent::from(*b)
    }
}
impl From<StateEvent> for ButtonEvent {
    fn from(e: StateEvent) -> ButtonEvent {
        ButtonEvent::at(e.t, e.key, e.state, e.raw)
    }
}
impl From<&StateEvent> for StateEvent {
    fn from(e: &StateEvent) -> StateEvent {
        *e
    }
}

/// User input produced a single character.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypedEvent {
    pub t: Instant,
    pub rune: char,
}
impl TypedEvent {
    pub fn new(rune: char) -> TypedEvent {
        TypedEvent::at(Instant::now(), rune)
    }
    pub fn at(t: Instant, rune: char) -> TypedEvent {
        TypedEvent { t, rune }
    }
}
impl Event for TypedEvent {
    fn time(&self) -> Instant {
        self.t
    }
}
impl fmt::Display for TypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "TypedEvent(Rune=U+{:04X} {:?}, Time={:?})",
            self.rune as u32,
            self.rune.to_string(),
            self.t
        )
    }
}

/// User input produced a string of text (IME commits, pastes, dead-key
/// sequences).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typed {
    pub t: Instant,
    pub text: String,
}
impl Typed {
    pub fn new<S: Into<String>>(text: S) -> Typed {
        Typed::at(Instant::now(), text)
    }
    pub fn at<S: Into<String>>(t: Instant, text: S) -> Typed {
        Typed { t, text: text.into() }
    }
}
impl Event for Typed {
    fn time(&self) -> Instant {
        self.t
    }
}
impl fmt::Display for Typed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    State(StateEvent),
    Button(ButtonEvent),
    Rune(TypedEvent),
    Text(Typed),
}
impl Input {
    /// The key state change carried by this input, if any.
    pub fn state_event(&self) -> Option<StateEvent> {
        match self {
            Input::State(e) => Some(*e),
            Input::Button(b) => Some(b.into()),
            _ => None,
        }
    }
}
impl Event for Input {
    fn time(&self) -> Instant {
        match self {
            Input::State(e) => e.time(),
            Input::Button(b) => b.time(),
            Input::Rune(r) => r.time(),
            Input::Text(s) => s.time(),
        }
    }
}
impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Input::State(e) => fmt::Display::fmt(e, f),
            Input::Button(b) => fmt::Display::fmt(b, f),
            Input::Rune(r) => fmt::Display::fmt(r, f),
            Input::Text(s) => fmt::Display::fmt(s, f),
        }
    }
}
impl From<StateEvent> for Input {
    fn from(e: StateEvent) -> Input { Input::State(e) }
}
impl From<ButtonEvent> for Input {
    fn from(b: ButtonEvent) -> Input { Input::Button(b) }
}
impl From<TypedEvent> for Input {
    fn from(r: TypedEvent) -> Input { Input::Rune(r) }
}
impl From<Typed> for Input {
    fn from(s: Typed) -> Input { Input::Text(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_event_rendering() {
        let t = Instant::now();
        let e = StateEvent::at(t, Key::A, State::DOWN, 97);
        assert_eq!(
            e.to_string(),
            format!("StateEvent(Key=A, State=Down, Raw=97, Time={:?})", t)
        );
        let b = ButtonEvent::at(t, Key(4000), State(9), 1);
        assert_eq!(
            b.to_string(),
            format!("ButtonEvent(Key=Key(4000), State=State(9), Raw=1, Time={:?})", t)
        );
    }

    #[test]
    fn typed_rendering() {
        let t = Instant::now();
        assert_eq!(
            TypedEvent::at(t, 'a').to_string(),
            format!("TypedEvent(Rune=U+0061 \"a\", Time={:?})", t)
        );
        assert_eq!(
            TypedEvent::at(t, '\u{1F600}').to_string(),
            format!("TypedEvent(Rune=U+1F600 \"\u{1F600}\", Time={:?})", t)
        );
        assert_eq!(
            TypedEvent::at(t, '"').to_string(),
            format!("TypedEvent(Rune=U+0022 \"\\\"\", Time={:?})", t)
        );
        assert_eq!(Typed::at(t, "héllo").to_string(), "héllo");
    }

    #[test]
    fn button_and_state_events_convert() {
        let b = ButtonEvent::new(Key::INVALID, State::UP, 0xE05B);
        let e = StateEvent::from(b);
        assert_eq!((e.t, e.key, e.state, e.raw), (b.t, b.key, b.state, b.raw));
        assert_eq!(ButtonEvent::from(e), b);
    }

    #[test]
    fn input_exposes_time_and_state_changes() {
        let t = Instant::now();
        let inputs: Vec<Input> = vec![
            StateEvent::at(t, Key::A, State::DOWN, 97).into(),
            ButtonEvent::at(t, Key::B, State::UP, 98).into(),
            TypedEvent::at(t, 'a').into(),
            Typed::at(t, "ab").into(),
        ];
        assert!(inputs.iter().all(|i| i.time() == t));
        let changes: Vec<_> = inputs.iter().filter_map(Input::state_event).collect();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1].key, Key::B);
    }
}

//! # keywatch-events
//!
//! Keyboard data model: physical keys, key states and the events input
//! sources produce when keys change state or text is typed.

pub mod event;
pub mod key;
pub mod state;

pub use self::event::{ButtonEvent, Event, Input, StateEvent, Typed, TypedEvent};
pub use self::key::Key;
pub use self::state::State;

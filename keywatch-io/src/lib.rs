extern crate keywatch_events as events;
extern crate keywatch_sync as sync;
extern crate log;

pub mod pump;
pub mod source;

use std::fmt;

pub use self::pump::{Pump, PumpReport};
pub use self::source::{Script, Source};

#[derive(Debug)]
pub enum PumpError {
    Spawn(std::io::Error),
    Panicked,
}
impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PumpError::Spawn(e) => write!(f, "could not start pump thread: {}", e),
            PumpError::Panicked => f.write_str("pump thread panicked"),
        }
    }
}
impl std::error::Error for PumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PumpError::Spawn(e) => Some(e),
            PumpError::Panicked => None,
        }
    }
}
impl From<std::io::Error> for PumpError {
    fn from(e: std::io::Error) -> PumpError {
        PumpError::Spawn(e)
    }
}

pub mod script;

use std::sync::mpsc::{Receiver, TryRecvError};

use events::Input;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub use self::script::Script;

/// Something that produces keyboard input, e.g. an OS event loop.
pub trait Source: Send {
    /// Appends whatever input is pending to `buf`. Returns `false` once the
    /// source will never produce anything again.
    fn next_events(&mut self, buf: &mut Vec<Input>) -> bool;
}

/// Inputs sent from other threads.
impl Source for Receiver<Input> {
    fn next_events(&mut self, buf: &mut Vec<Input>) -> bool {
        loop {
            match self.try_recv() {
                Ok(input) => buf.push(input),
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => {
                    trace!("Input channel dropped.");
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;

    use super::Source;
    use events::{Input, Key, State, StateEvent, TypedEvent};

    #[test]
    fn receiver_drains_until_disconnected() {
        let (tx, mut rx) = channel::<Input>();
        let mut buf = vec![];
        assert!(rx.next_events(&mut buf));
        assert!(buf.is_empty());

        tx.send(StateEvent::new(Key::A, State::DOWN, 30).into()).expect("send");
        tx.send(TypedEvent::new('a').into()).expect("send");
        assert!(rx.next_events(&mut buf));
        assert_eq!(buf.len(), 2);

        tx.send(TypedEvent::new('b').into()).expect("send");
        drop(tx);
        assert!(!rx.next_events(&mut buf));
        assert_eq!(buf.len(), 3);
    }
}

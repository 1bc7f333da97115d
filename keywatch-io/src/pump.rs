//! # Pump
//!
//! A `Pump` is a named thread that drains a `Source` into a shared `Watcher`
//! until the source runs dry or the pump is told to stop.

use std::{
    sync::{
        mpsc::{channel, Sender, TryRecvError},
        Arc,
    },
    thread::{Builder, JoinHandle},
};

use events::Input;
use sync::Watcher;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::{source::Source, PumpError};

/// What a pump did over its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Key state changes applied to the watcher.
    pub applied: usize,
    /// Typed text, in arrival order.
    pub typed: String,
}
impl PumpReport {
    fn apply(&mut self, watcher: &Watcher, input: Input) {
        match input {
            Input::Rune(r) => self.typed.push(r.rune),
            Input::Text(s) => self.typed.push_str(&s.text),
            other => {
                if let Some(e) = other.state_event() {
                    watcher.update(e);
                    self.applied += 1;
                }
            }
        }
    }
}

/// Handle to a running pump.
///
/// Dropping it without calling `finish` tells the thread to stop at its next
/// poll, pending input or not, and detaches it.
pub struct Pump {
    // A message asks for a drain, a dropped sender for an immediate stop.
    control: Sender<()>,
    handle: JoinHandle<PumpReport>,
}
impl Pump {
    /// Starts pumping `source` into `watcher` on a thread called `name`.
    pub fn spawn<S>(name: &str, mut source: S, watcher: Arc<Watcher>) -> Result<Pump, PumpError>
    where
        S: Source + 'static,
    {
        let (tx, rx) = channel::<()>();
        let thread_name = name.to_string();
        let handle = Builder::new().name(thread_name.clone()).spawn(move || {
            let mut report = PumpReport::default();
            let mut buf = Vec::with_capacity(16);
            let mut finishing = false;
            loop {
                let alive = source.next_events(&mut buf);
                let idle = buf.is_empty();
                for input in buf.drain(..) {
                    trace!("{} received {}", thread_name, input);
                    report.apply(&watcher, input);
                }
                if !alive {
                    debug!("{} source exhausted.", thread_name);
                    break;
                }
                if finishing {
                    if idle {
                        debug!("{} drained.", thread_name);
                        break;
                    }
                    continue;
                }
                match rx.try_recv() {
                    Err(TryRecvError::Empty) => (),
                    Ok(()) => {
                        debug!("{} finishing, draining pending input.", thread_name);
                        finishing = true;
                    }
                    Err(TryRecvError::Disconnected) => {
                        debug!("{} stopped.", thread_name);
                        break;
                    }
                }
            }
            info!("{} applied {} key changes.", thread_name, report.applied);
            report
        })?;
        Ok(Pump {
            control: tx,
            handle,
        })
    }
    /// Lets the pump apply whatever its source still has pending, then stops
    /// it and waits for it, returning what it did.
    ///
    /// The pump stops once the source is exhausted or a poll comes back empty.
    pub fn finish(self) -> Result<PumpReport, PumpError> {
        let Pump { control, handle } = self;
        // A pump that already exhausted its source has hung up; nothing to ask.
        let _ = control.send(());
        drop(control);
        handle.join().map_err(|_| PumpError::Panicked)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{mpsc::channel, Arc},
        thread,
        time::Duration,
    };

    use super::Pump;
    use crate::{source::Source, PumpError, Script};
    use events::{ButtonEvent, Input, Key, State, StateEvent, Typed, TypedEvent};
    use sync::Watcher;

    #[test]
    fn pumps_a_script_into_the_watcher() {
        let w = Arc::new(Watcher::new());
        let inputs: Vec<Input> = vec![
            StateEvent::new(Key::H, State::DOWN, 35).into(),
            TypedEvent::new('h').into(),
            StateEvent::new(Key::H, State::UP, 35).into(),
            ButtonEvent::new(Key::INVALID, State::DOWN, 0xE0_5B).into(),
            Typed::new("ï!").into(),
            StateEvent::new(Key::LEFT_SHIFT, State::DOWN, 42).into(),
        ];
        let pump = Pump::spawn("script pump", Script::new(inputs, 2), w.clone()).expect("spawn");
        let report = pump.finish().expect("finish");

        assert_eq!(report.applied, 4);
        assert_eq!(report.typed, "hï!");
        assert!(w.up(Key::H));
        assert!(w.down(Key::LEFT_SHIFT));
        assert!(w.raw_down(0xE0_5B));
        assert_eq!(w.peek(Key::INVALID), None);
    }

    #[test]
    fn finish_stops_a_live_source() {
        let w = Arc::new(Watcher::new());
        let (tx, rx) = channel::<Input>();
        let pump = Pump::spawn("channel pump", rx, w.clone()).expect("spawn");
        tx.send(StateEvent::new(Key::W, State::DOWN, 17).into()).expect("send");
        while w.peek(Key::W).is_none() {
            thread::sleep(Duration::from_millis(1));
        }
        let report = pump.finish().expect("finish");
        assert_eq!(report.applied, 1);
        assert!(w.down(Key::W));
    }

    #[test]
    fn finish_applies_the_whole_script() {
        for run in 0..50 {
            let w = Arc::new(Watcher::new());
            let inputs: Vec<Input> = Key::ALL[1..11]
                .iter()
                .map(|k| StateEvent::new(*k, State::DOWN, k.code() as u64).into())
                .collect();
            let pump = Pump::spawn("short script", Script::new(inputs, 2), w.clone()).expect("spawn");
            let report = pump.finish().expect("finish");
            assert_eq!(report.applied, 10, "run {} lost script input", run);
            assert_eq!(w.len(), 10);
            assert_eq!(w.raw_len(), 10);
        }
    }

    #[test]
    fn finish_drains_queued_channel_input() {
        let w = Arc::new(Watcher::new());
        let (tx, rx) = channel::<Input>();
        for k in &Key::ALL[1..30] {
            tx.send(StateEvent::new(*k, State::DOWN, k.code() as u64).into()).expect("send");
        }
        tx.send(TypedEvent::new('q').into()).expect("send");
        let pump = Pump::spawn("queued channel", rx, w.clone()).expect("spawn");
        let report = pump.finish().expect("finish");
        assert_eq!(report.applied, 29);
        assert_eq!(report.typed, "q");
        drop(tx);
    }

    struct Exploding;
    impl Source for Exploding {
        fn next_events(&mut self, _: &mut Vec<Input>) -> bool {
            panic!("source failure");
        }
    }

    #[test]
    fn panicking_source_is_reported() {
        let pump = Pump::spawn("exploding pump", Exploding, Arc::new(Watcher::new())).expect("spawn");
        match pump.finish() {
            Err(PumpError::Panicked) => (),
            other => panic!("expected a panic report, got {:?}", other),
        }
    }
}

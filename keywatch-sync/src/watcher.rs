use std::{
    collections::HashMap,
    fmt,
    sync::PoisonError,
};

use cb::sync::{ShardedLock, ShardedLockReadGuard, ShardedLockWriteGuard};
use events::{Key, State, StateEvent};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

#[derive(Debug, Default)]
struct States {
    keys: HashMap<Key, State>,
    raw: HashMap<u64, State>,
}

/// Last known state of every keyboard key seen so far.
///
/// Keys are tracked twice, independently: by canonical `Key` and by raw
/// identifier. Setting one never touches the other (`update` sets both
/// explicitly). Entries are never removed.
///
/// Reading the state of a key that was never seen records it as `State::UP`,
/// so `state`, `raw_state` and the `down`/`up` predicates take the write lock.
/// Use `peek`/`peek_raw` for a read that leaves the watcher untouched.
#[derive(Debug, Default)]
pub struct Watcher {
    access: ShardedLock<States>,
}
impl Watcher {
    pub fn new() -> Watcher {
        Watcher::default()
    }

    // Every critical section is a single map operation, so a poisoned lock
    // still guards consistent maps.
    fn read(&self) -> ShardedLockReadGuard<States> {
        self.access.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> ShardedLockWriteGuard<States> {
        self.access.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Sets the current state of `key`.
    pub fn set_state(&self, key: Key, state: State) {
        trace!("Setting {} to {}.", key, state);
        self.write().keys.insert(key, state);
    }
    /// Current state of `key`, recording it as `State::UP` if never seen.
    pub fn state(&self, key: Key) -> State {
        *self.write().keys.entry(key).or_insert_with(|| {
            trace!("First sighting of {}, recording as up.", key);
            State::UP
        })
    }
    /// Stored state of `key`, without recording unseen keys.
    pub fn peek(&self, key: Key) -> Option<State> {
        self.read().keys.get(&key).copied()
    }
    pub fn down(&self, key: Key) -> bool {
        self.state(key) == State::DOWN
    }
    pub fn up(&self, key: Key) -> bool {
        self.state(key) == State::UP
    }
    /// Copy of every tracked key state.
    pub fn states(&self) -> HashMap<Key, State> {
        self.read().keys.clone()
    }

    /// Sets the current state of the raw key value `raw`.
    pub fn set_raw_state(&self, raw: u64, state: State) {
        trace!("Setting raw {} to {}.", raw, state);
        self.write().raw.insert(raw, state);
    }
    /// Current state of `raw`, recording it as `State::UP` if never seen.
    pub fn raw_state(&self, raw: u64) -> State {
        *self.write().raw.entry(raw).or_insert_with(|| {
            trace!("First sighting of raw {}, recording as up.", raw);
            State::UP
        })
    }
    pub fn peek_raw(&self, raw: u64) -> Option<State> {
        self.read().raw.get(&raw).copied()
    }
    pub fn raw_down(&self, raw: u64) -> bool {
        self.raw_state(raw) == State::DOWN
    }
    pub fn raw_up(&self, raw: u64) -> bool {
        self.raw_state(raw) == State::UP
    }
    /// Copy of every tracked raw key state.
    pub fn raw_states(&self) -> HashMap<u64, State> {
        self.read().raw.clone()
    }

    /// Records a key state change under its raw identifier and, unless the key
    /// is `Key::INVALID`, under its canonical key.
    pub fn update<E: Into<StateEvent>>(&self, e: E) {
        let e = e.into();
        trace!("Applying {}.", e);
        let mut ss = self.write();
        ss.raw.insert(e.raw, e.state);
        if !e.key.is_invalid() {
            ss.keys.insert(e.key, e.state);
        }
    }

    /// Calls `visit` with every tracked key and its state until it returns
    /// `false`.
    ///
    /// `visit` sees a snapshot taken before the first call and runs without
    /// any lock held, so it may freely read and write this watcher.
    pub fn each_state<F>(&self, mut visit: F)
    where
        F: FnMut(Key, State) -> bool,
    {
        let snapshot: Vec<(Key, State)> =
            self.read().keys.iter().map(|(k, s)| (*k, *s)).collect();
        for (k, s) in snapshot {
            if !visit(k, s) {
                break;
            }
        }
    }

    /// Number of tracked canonical keys. Raw ids are counted by `raw_len`.
    pub fn len(&self) -> usize {
        self.read().keys.len()
    }
    pub fn raw_len(&self) -> usize {
        self.read().raw.len()
    }
    /// Whether no canonical key is tracked, i.e. `len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.read().keys.is_empty()
    }
}
impl fmt::Display for Watcher {
    /// Lists tracked keys and their states, ordered by key code. Raw states
    /// are left out.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ss: Vec<_> = self.states().into_iter().collect();
        ss.sort_unstable();
        writeln!(f, "Watcher(")?;
        for (k, s) in ss {
            writeln!(f, "    {}: {}", k, s)?;
        }
        write!(f, ")")
    }
}

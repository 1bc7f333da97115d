extern crate keywatch_events as events;
extern crate keywatch_io as io;
extern crate keywatch_sync as sync;
extern crate log;
extern crate simple_logger;

mod config;

use std::{env::args, error::Error, sync::Arc};

use config::Config;
use events::{Input, Key, State, StateEvent, TypedEvent};
use io::{Pump, Script};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use sync::Watcher;

// Fake scan codes, offset so they never collide with key codes.
const RAW_BASE: u64 = 0x1000;

/// Presses and releases every `producers`-th key starting at `slot`, leaving
/// every other one held, typing letters as it goes.
fn script_for(slot: usize, producers: usize) -> Script {
    let mut inputs: Vec<Input> = vec![];
    let keys = Key::ALL.iter().skip(1).enumerate().filter(|(i, _)| i % producers == slot);
    for (n, k) in keys {
        let raw = RAW_BASE + k.code() as u64;
        inputs.push(StateEvent::new(*k, State::DOWN, raw).into());
        if let Some(c) = k.label().filter(|l| l.len() == 1).and_then(|l| l.chars().next()) {
            inputs.push(TypedEvent::new(c.to_ascii_lowercase()).into());
        }
        if n % 2 == 0 {
            inputs.push(StateEvent::new(*k, State::UP, raw).into());
        }
    }
    // A key without a canonical identity, visible only by its raw id.
    inputs.push(StateEvent::new(Key::INVALID, State::DOWN, RAW_BASE * 2 + slot as u64).into());
    Script::new(inputs, 8)
}

fn main() -> Result<(), Box<dyn Error>> {
    let c = Config::new(args().skip(1));
    simple_logger::init_with_level(c.level)?;
    for rejected in c.rejected.iter() {
        warn!("Ignoring {}.", rejected);
    }
    info!("Starting {} producers.", c.producers);
    let watcher = Arc::new(Watcher::new());
    let mut pumps = Vec::with_capacity(c.producers);
    for slot in 0..c.producers {
        pumps.push(Pump::spawn(
            &format!("producer {}", slot),
            script_for(slot, c.producers),
            watcher.clone(),
        )?);
    }
    let mut typed = String::new();
    for pump in pumps {
        let report = pump.finish()?;
        typed.push_str(&report.typed);
    }
    let mut held = 0;
    watcher.each_state(|_, s| {
        held += s.is_down() as usize;
        true
    });
    info!("{}", watcher);
    info!(
        "{} keys tracked, {} held, {} raw ids, typed {:?}.",
        watcher.len(),
        held,
        watcher.raw_len(),
        typed
    );
    Ok(())
}

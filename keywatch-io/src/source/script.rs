use std::vec::IntoIter;

use events::Input;

/// Replays a fixed list of inputs, `chunk` of them per poll.
#[derive(Debug)]
pub struct Script {
    inputs: IntoIter<Input>,
    chunk: usize,
}
impl Script {
    pub fn new<I: IntoIterator<Item = Input>>(inputs: I, chunk: usize) -> Script {
        Script {
            inputs: inputs.into_iter().collect::<Vec<_>>().into_iter(),
            chunk: chunk.max(1),
        }
    }
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}
impl super::Source for Script {
    fn next_events(&mut self, buf: &mut Vec<Input>) -> bool {
        buf.extend(self.inputs.by_ref().take(self.chunk));
        self.inputs.len() != 0
    }
}

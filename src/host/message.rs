#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::host::params::Inlet;

/// Control changes sent to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    SetFloat { inlet: Inlet, value: f64 },
    SetInt { inlet: Inlet, value: i64 },
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}

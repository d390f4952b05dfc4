//! Host-side plumbing around the filter core.
//!
//! A host hands the filter one audio inlet and three parameter inlets per
//! block. Each parameter is either a connected signal or a held number set
//! from the control thread. This module resolves those sources, clamps the
//! parameters into range and drains control messages arriving over a
//! lock-free ring.

/// Control messages and the receiver abstraction over `rtrb`.
pub mod message;
/// Block perform loop owning one filter instance.
pub mod perform;
/// Inlets, parameter ranges and held values.
pub mod params;

pub use message::{ControlMessage, MessageReceiver};
pub use params::{HeldParams, Inlet, ParamRange, ParamSource};
pub use perform::{SignalInlets, Ssm2044Processor};

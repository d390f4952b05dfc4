use crate::{
    config::FilterConfig,
    graph::node::{GraphNode, Modulatable, RenderCtx},
    host::{
        message::{ControlMessage, MessageReceiver},
        params::{HeldParams, Inlet},
        perform::{SignalInlets, Ssm2044Processor},
    },
    MAX_BLOCK_SIZE,
};

/*
SSM2044 Filter Node
===================

Graph wrapper around the filter. Audio rendered into the buffer by the
upstream node is filtered in place.

Parameters:
-----------

Cutoff (Hz): 20 - 20000
  - 200 Hz:    dark, muffled
  - 1000 Hz:   warm
  - 5000 Hz:   open and present

Resonance: 0.0 - 4.0
  - The feedback path is saturated, so even the extreme end stays bounded
  - Past 0.25 the loop sustains itself once excited

Gain: 0.0 - 4.0
  - Drives the input saturator. Above ~1.0 you start hearing it.

Every parameter can be driven per sample with `.modulate()`. Between
modulated blocks the held value is used.

Example usage:
  let acid = OscNode::sawtooth()
      .through(
          Ssm2044Node::new(600.0, 2.5)
              .modulate(LfoNode::sine(0.5), Ssm2044Param::Cutoff, 500.0),
      );
*/

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ssm2044Param {
    Cutoff,
    Resonance,
    Gain,
}

impl Ssm2044Param {
    fn inlet(self) -> Inlet {
        match self {
            Ssm2044Param::Cutoff => Inlet::Cutoff,
            Ssm2044Param::Resonance => Inlet::Resonance,
            Ssm2044Param::Gain => Inlet::Gain,
        }
    }

    fn lane(self) -> usize {
        match self {
            Ssm2044Param::Cutoff => 0,
            Ssm2044Param::Resonance => 1,
            Ssm2044Param::Gain => 2,
        }
    }
}

pub struct Ssm2044Node {
    processor: Ssm2044Processor,
    dry: Vec<f64>,
    /// Per-parameter signal for the next block (cutoff, resonance, gain)
    lanes: [Vec<f64>; 3],
    lane_len: [usize; 3],
}

impl Ssm2044Node {
    pub fn new(cutoff: f64, resonance: f64) -> Self {
        Self::from_config(
            &FilterConfig::default()
                .with_cutoff(cutoff)
                .with_resonance(resonance),
        )
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            processor: Ssm2044Processor::new(config),
            dry: vec![0.0; MAX_BLOCK_SIZE],
            lanes: [
                vec![0.0; MAX_BLOCK_SIZE],
                vec![0.0; MAX_BLOCK_SIZE],
                vec![0.0; MAX_BLOCK_SIZE],
            ],
            lane_len: [0; 3],
        }
    }

    pub fn with_gain(mut self, gain: f64) -> Self {
        self.set_param(Ssm2044Param::Gain, gain);
        self
    }

    pub fn set_param(&mut self, param: Ssm2044Param, value: f64) {
        self.processor.set_float(param.inlet(), value);
    }

    pub fn params(&self) -> &HeldParams {
        self.processor.params()
    }

    pub fn processor(&self) -> &Ssm2044Processor {
        &self.processor
    }

    pub fn handle_message(&mut self, message: ControlMessage) {
        self.processor.handle_message(message);
    }

    pub fn drain_messages<R: MessageReceiver>(&mut self, rx: &mut R) {
        self.processor.drain_messages(rx);
    }
}

/// Slice of a modulation lane covering `start..start + len`, if filled.
fn lane_signal<'a>(
    lanes: &'a [Vec<f64>; 3],
    lane_len: &[usize; 3],
    index: usize,
    start: usize,
    len: usize,
) -> Option<&'a [f64]> {
    let filled = lane_len[index];
    if filled > start {
        Some(&lanes[index][start..filled.min(start + len)])
    } else {
        None
    }
}

impl Modulatable for Ssm2044Node {
    type Param = Ssm2044Param;

    fn get_param(&self, param: Self::Param) -> f64 {
        self.processor
            .params()
            .get(param.inlet())
            .unwrap_or_default()
    }

    fn apply_modulation(&mut self, param: Self::Param, base: f64, modulation: &[f64]) {
        self.set_param(param, base);

        let index = param.lane();
        let len = modulation.len().min(MAX_BLOCK_SIZE);
        for (slot, &offset) in self.lanes[index][..len].iter_mut().zip(modulation) {
            *slot = base + offset;
        }
        self.lane_len[index] = len;
    }
}

impl GraphNode for Ssm2044Node {
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx) {
        if ctx.sample_rate != self.processor.sample_rate() {
            self.processor.dsp_setup(ctx.sample_rate);
        }

        let mut start = 0;
        while start < out.len() {
            let len = (out.len() - start).min(MAX_BLOCK_SIZE);
            let block = &mut out[start..start + len];
            self.dry[..len].copy_from_slice(block);

            let signals = SignalInlets {
                cutoff: lane_signal(&self.lanes, &self.lane_len, 0, start, len),
                resonance: lane_signal(&self.lanes, &self.lane_len, 1, start, len),
                gain: lane_signal(&self.lanes, &self.lane_len, 2, start, len),
            };
            self.processor.perform(&self.dry[..len], signals, block);
            start += len;
        }

        // Modulation is consumed by the block it was applied to
        self.lane_len = [0; 3];
    }

    fn reset(&mut self) {
        self.processor.reset();
    }
}

use crate::dsp::oscillator::{Oscillator, Waveform};
use crate::graph::node::{GraphNode, RenderCtx};

/*
Audio Oscillator
================

Sources to feed the filter. A harmonically rich waveform is what makes a
low-pass filter audible, so the sawtooth is the classic choice: sweep the
cutoff over it and you hear the harmonics open up and close down.

  Saw:       all harmonics, bright and buzzy
  Square:    odd harmonics, hollow
  Triangle:  weak odd harmonics, soft
  Sine:      fundamental only, nothing for a low-pass to remove

Example usage:
  let voice = OscNode::sawtooth()
      .through(Ssm2044Node::new(800.0, 2.0));
*/

pub struct OscNode {
    osc: Oscillator,
    /// Fixed frequency (Hz). If Some, ignores ctx.frequency.
    fixed_frequency: Option<f64>,
}

impl OscNode {
    fn new(waveform: Waveform) -> Self {
        Self {
            osc: Oscillator::new(waveform),
            fixed_frequency: None,
        }
    }

    pub fn sine() -> Self {
        Self::new(Waveform::Sine)
    }

    pub fn sawtooth() -> Self {
        Self::new(Waveform::Saw)
    }

    pub fn square() -> Self {
        Self::new(Waveform::Square)
    }

    pub fn triangle() -> Self {
        Self::new(Waveform::Triangle)
    }

    /// Set a fixed frequency, ignoring the note pitch from RenderCtx.
    pub fn with_frequency(mut self, freq: f64) -> Self {
        self.fixed_frequency = Some(freq);
        self
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx) {
        let frequency = self.fixed_frequency.unwrap_or(ctx.frequency);
        self.osc.render(out, frequency, ctx.sample_rate);
    }

    fn reset(&mut self) {
        self.osc.reset();
    }
}

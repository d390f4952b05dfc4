use crate::{
    dsp::oscillator::{Oscillator, Waveform},
    graph::node::{GraphNode, RenderCtx},
};

/*
LFO (Low Frequency Oscillator)
==============================

An oscillator at sub-audio rate (0.01 Hz - 20 Hz) used to move a parameter
over time. Output is bipolar, -1.0 to +1.0, and ignores the note frequency
from the render context.

  // Slow filter sweep: cutoff swings 1000 ± 800 Hz twice a second
  let sweep = Ssm2044Node::new(1000.0, 2.0)
      .modulate(LfoNode::sine(2.0), Ssm2044Param::Cutoff, 800.0);

Nothing stops you from running an "LFO" at audio rate. The filter re-derives
its coefficients every sample, so a 200 Hz sine on the cutoff gives genuine
audio-rate FM of the filter instead of a stepped approximation.
*/

pub struct LfoNode {
    osc: Oscillator,
    frequency: f64,
}

impl LfoNode {
    fn new(waveform: Waveform, frequency: f64) -> Self {
        Self {
            osc: Oscillator::new(waveform),
            frequency,
        }
    }

    pub fn sine(frequency: f64) -> Self {
        Self::new(Waveform::Sine, frequency)
    }

    pub fn sawtooth(frequency: f64) -> Self {
        Self::new(Waveform::Saw, frequency)
    }

    pub fn square(frequency: f64) -> Self {
        Self::new(Waveform::Square, frequency)
    }

    pub fn triangle(frequency: f64) -> Self {
        Self::new(Waveform::Triangle, frequency)
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

impl GraphNode for LfoNode {
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx) {
        self.osc.render(out, self.frequency, ctx.sample_rate);
    }

    fn reset(&mut self) {
        self.osc.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfo_output_range() {
        let ctx = RenderCtx::from_freq(48_000.0, 440.0);
        for mut lfo in [
            LfoNode::sine(5.0),
            LfoNode::sawtooth(7.0),
            LfoNode::square(3.0),
            LfoNode::triangle(3.0),
        ] {
            let mut buffer = vec![0.0; 2048];
            lfo.render_block(&mut buffer, &ctx);
            for &sample in &buffer {
                assert!(
                    (-1.0..=1.0).contains(&sample),
                    "LFO sample {} out of range [-1.0, 1.0]",
                    sample
                );
            }
        }
    }

    #[test]
    fn test_lfo_ignores_note_frequency() {
        let mut buffer1 = vec![0.0; 512];
        let mut buffer2 = vec![0.0; 512];

        LfoNode::sine(5.0).render_block(&mut buffer1, &RenderCtx::from_freq(48_000.0, 440.0));
        LfoNode::sine(5.0).render_block(&mut buffer2, &RenderCtx::from_freq(48_000.0, 880.0));

        assert_eq!(buffer1, buffer2);
    }
}

use crate::{
    graph::node::{GraphNode, Modulatable, RenderCtx},
    MAX_BLOCK_SIZE,
};

/*
Modulate Node
=============

Connects an LFO (or any signal) to a parameter on another node:

    modulated_value[n] = base_value + lfo[n] × depth

Example with cutoff=1000, depth=500, LFO swinging -1 to +1:
    LFO = -1.0  →  cutoff =  500 Hz
    LFO =  0.0  →  cutoff = 1000 Hz
    LFO = +1.0  →  cutoff = 1500 Hz

Modulation is applied per sample, not averaged per block. The SSM2044
re-derives its coefficients every sample, so an LFO sweeping the cutoff
moves it smoothly inside a block, and audio-rate sources work as expected.
Range clamping happens in the modulated node.
*/

pub struct Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    source: S,                   // The node being modulated
    lfo: L,                      // The modulation source
    param: S::Param,             // Which parameter to modulate
    depth: f64,                  // Modulation amount (scales LFO output)
    lfo_buffer: Vec<f64>,        // Scratch for LFO output
}

impl<S, L> Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    pub fn new(source: S, lfo: L, param: S::Param, depth: f64) -> Self {
        Self {
            source,
            lfo,
            param,
            depth,
            lfo_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reach the modulated node, e.g. to forward control messages.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S, L> GraphNode for Modulate<S, L>
where
    S: GraphNode + Modulatable,
    L: GraphNode,
{
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx) {
        for block in out.chunks_mut(MAX_BLOCK_SIZE) {
            let len = block.len();
            let lfo = &mut self.lfo_buffer[..len];

            self.lfo.render_block(lfo, ctx);
            for sample in lfo.iter_mut() {
                *sample *= self.depth;
            }

            let base_value = self.source.get_param(self.param);
            self.source.apply_modulation(self.param, base_value, lfo);
            self.source.render_block(block, ctx);
        }
    }

    fn reset(&mut self) {
        self.source.reset();
        self.lfo.reset();
    }
}

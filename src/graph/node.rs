/// Context passed to graph nodes during rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch for sources that follow the patch (Hz)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCtx {
    pub sample_rate: f64,
    pub frequency: f64,
}

impl RenderCtx {
    pub fn from_freq(sample_rate: f64, frequency: f64) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }
}

/// Trait for nodes that accept audio-rate parameter modulation
pub trait Modulatable: Send {
    type Param: Copy + Send;

    fn get_param(&self, param: Self::Param) -> f64;

    /// Set `param` to `base + modulation[i]` for frame `i` of the next
    /// rendered block. `modulation` holds one offset per frame.
    fn apply_modulation(&mut self, param: Self::Param, base: f64, modulation: &[f64]);
}

/// Core trait for audio processing graph nodes
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx);

    /// Clear internal state (phase, filter memory)
    fn reset(&mut self) {}
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f64], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

//! The demo patch: sawtooth into an LFO-swept SSM2044

use clap::Args;
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use ssm2044::{
    graph::{
        extensions::NodeExt,
        filter::{Ssm2044Node, Ssm2044Param},
        lfo::LfoNode,
        modulate::Modulate,
        node::RenderCtx,
        oscillator::OscNode,
        through::Through,
    },
    FilterConfig,
};

pub type Patch = Through<OscNode, Modulate<Ssm2044Node, LfoNode>>;

/// Filter and modulation settings shared by `play` and `render`
#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// Cutoff frequency in Hz
    #[arg(short, long, default_value = "800")]
    pub cutoff: f64,

    /// Resonance (0.0 - 4.0)
    #[arg(short = 'q', long, default_value = "0.5")]
    pub resonance: f64,

    /// Input drive (0.0 - 4.0)
    #[arg(short, long, default_value = "1.0")]
    pub gain: f64,

    /// Sawtooth pitch in Hz
    #[arg(short, long, default_value = "110")]
    pub frequency: f64,

    /// Cutoff LFO rate in Hz
    #[arg(long, default_value = "0.25")]
    pub lfo_rate: f64,

    /// Cutoff LFO depth in Hz
    #[arg(long, default_value = "600")]
    pub lfo_depth: f64,
}

impl PatchArgs {
    pub fn config(&self, sample_rate: f64) -> EyreResult<FilterConfig> {
        let config = FilterConfig::default()
            .with_sample_rate(sample_rate)
            .with_cutoff(self.cutoff)
            .with_resonance(self.resonance)
            .with_gain(self.gain);
        config.validate().wrap_err("invalid filter settings")?;
        Ok(config)
    }

    pub fn build(&self, sample_rate: f64) -> EyreResult<Patch> {
        let config = self.config(sample_rate)?;
        let filter = Ssm2044Node::from_config(&config).modulate(
            LfoNode::sine(self.lfo_rate),
            Ssm2044Param::Cutoff,
            self.lfo_depth,
        );
        Ok(OscNode::sawtooth().through(filter))
    }

    pub fn ctx(&self, sample_rate: f64) -> RenderCtx {
        RenderCtx::from_freq(sample_rate, self.frequency)
    }
}

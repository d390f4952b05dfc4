use tracing::debug;

use crate::{
    config::FilterConfig,
    dsp::{saturation::denormal_fix, Ssm2044},
    host::{
        message::{ControlMessage, MessageReceiver},
        params::{HeldParams, Inlet, ParamSource, CUTOFF_RANGE, GAIN_RANGE, RESONANCE_RANGE},
    },
};

/// Signal buffers connected to the parameter inlets for one block.
///
/// `None` means nothing is connected and the held value is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalInlets<'a> {
    pub cutoff: Option<&'a [f64]>,
    pub resonance: Option<&'a [f64]>,
    pub gain: Option<&'a [f64]>,
}

/// Block-level wrapper around one filter instance.
///
/// Owns the held parameter values and resolves, per frame, whether each
/// parameter comes from a connected signal or from its held value.
pub struct Ssm2044Processor {
    filter: Ssm2044,
    params: HeldParams,
}

impl Ssm2044Processor {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            filter: Ssm2044::new(config.sample_rate),
            params: HeldParams::from_config(config),
        }
    }

    pub fn with_params(sample_rate: f64, params: HeldParams) -> Self {
        Self {
            filter: Ssm2044::new(sample_rate),
            params,
        }
    }

    /// Called when the host (re)starts audio, possibly at a new rate.
    pub fn dsp_setup(&mut self, sample_rate: f64) {
        debug!(sample_rate, "ssm2044 dsp setup");
        self.filter.set_sample_rate(sample_rate);
    }

    pub fn sample_rate(&self) -> f64 {
        self.filter.sample_rate()
    }

    pub fn params(&self) -> &HeldParams {
        &self.params
    }

    pub fn filter(&self) -> &Ssm2044 {
        &self.filter
    }

    pub fn set_float(&mut self, inlet: Inlet, value: f64) {
        self.params.set_float(inlet, value);
    }

    pub fn set_int(&mut self, inlet: Inlet, value: i64) {
        self.params.set_int(inlet, value);
    }

    pub fn reset(&mut self) {
        self.filter.reset();
    }

    pub fn handle_message(&mut self, message: ControlMessage) {
        match message {
            ControlMessage::SetFloat { inlet, value } => self.set_float(inlet, value),
            ControlMessage::SetInt { inlet, value } => self.set_int(inlet, value),
            ControlMessage::Reset => self.reset(),
        }
    }

    /// Apply every pending control message. Call at the start of a block.
    pub fn drain_messages<R: MessageReceiver>(&mut self, rx: &mut R) {
        while let Some(message) = rx.pop() {
            self.handle_message(message);
        }
    }

    /// Filter one block.
    ///
    /// Processes `min(audio.len(), out.len())` frames. Parameters are clamped
    /// to their ranges per frame and the emitted output is denormal-fixed.
    pub fn perform(&mut self, audio: &[f64], signals: SignalInlets<'_>, out: &mut [f64]) {
        let cutoff = ParamSource::select(signals.cutoff, self.params.cutoff);
        let resonance = ParamSource::select(signals.resonance, self.params.resonance);
        let gain = ParamSource::select(signals.gain, self.params.gain);

        for (i, (out, &input)) in out.iter_mut().zip(audio).enumerate() {
            let filtered = self.filter.process(
                input,
                CUTOFF_RANGE.clamp(cutoff.value_at(i)),
                RESONANCE_RANGE.clamp(resonance.value_at(i)),
                GAIN_RANGE.clamp(gain.value_at(i)),
            );
            *out = denormal_fix(filtered);
        }
    }
}

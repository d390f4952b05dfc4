//! Offline rendering to WAV

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use std::path::Path;
use tracing::info;

use ssm2044::{graph::node::GraphNode, MAX_BLOCK_SIZE};

use super::patch::PatchArgs;

pub fn run(args: &PatchArgs, output: &Path, duration: f64, sample_rate: u32) -> EyreResult<()> {
    let sr = sample_rate as f64;
    let mut patch = args.build(sr)?;
    let ctx = args.ctx(sr);

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(output, spec)
        .wrap_err_with(|| format!("failed to create {}", output.display()))?;

    let total_frames = (duration.max(0.0) * sr).round() as usize;
    info!(frames = total_frames, sample_rate, path = %output.display(), "rendering");

    let mut block = vec![0.0f64; MAX_BLOCK_SIZE];
    let mut written = 0;
    let mut peak = 0.0f64;
    let mut sum_squares = 0.0f64;

    while written < total_frames {
        let len = (total_frames - written).min(MAX_BLOCK_SIZE);
        let buf = &mut block[..len];
        patch.render_block(buf, &ctx);

        for &sample in buf.iter() {
            peak = peak.max(sample.abs());
            sum_squares += sample * sample;
            writer
                .write_sample(sample as f32)
                .wrap_err("failed to write sample")?;
        }
        written += len;
    }

    writer.finalize().wrap_err("failed to finalize WAV")?;

    let rms = if total_frames > 0 {
        (sum_squares / total_frames as f64).sqrt()
    } else {
        0.0
    };
    info!(peak, rms, "wrote {}", output.display());
    Ok(())
}

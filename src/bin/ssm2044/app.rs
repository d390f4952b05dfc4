//! Realtime playback: cpal output stream plus the terminal UI

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use tracing::{error, info};

use ssm2044::{
    graph::node::GraphNode,
    host::{ControlMessage, HeldParams},
    MAX_BLOCK_SIZE,
};

use super::patch::PatchArgs;
use super::ui::UiApp;

/// Samples buffered for the oscilloscope (about 0.4s at 48kHz)
const VIS_RING_SIZE: usize = 1 << 14;
/// Pending control messages from the UI
const CONTROL_RING_SIZE: usize = 64;

pub fn run(args: &PatchArgs) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f64;
    let channels = config.channels() as usize;
    info!(sample_rate, channels, "opening output stream");

    let mut patch = args.build(sample_rate)?;
    let ctx = args.ctx(sample_rate);
    let params = HeldParams::from_config(&args.config(sample_rate)?);

    let (control_tx, mut control_rx) = RingBuffer::<ControlMessage>::new(CONTROL_RING_SIZE);
    let (mut audio_tx, audio_rx) = RingBuffer::<f32>::new(VIS_RING_SIZE);

    let mut render_buf = vec![0.0f64; MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            // Parameter changes land on a block boundary
            patch
                .filter_mut()
                .source_mut()
                .drain_messages(&mut control_rx);

            let total_frames = data.len() / channels;
            let mut frames_written = 0;

            while frames_written < total_frames {
                let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                let block = &mut render_buf[..frames_to_render];
                patch.render_block(block, &ctx);

                // Mono to all channels
                let out_off = frames_written * channels;
                for (i, &s) in block.iter().enumerate() {
                    let sample = s as f32;
                    for ch in 0..channels {
                        data[out_off + i * channels + ch] = sample;
                    }
                    // UI falls behind: drop rather than block
                    let _ = audio_tx.push(sample);
                }

                frames_written += frames_to_render;
            }
        },
        |err| error!("audio stream error: {}", err),
        None,
    )?;

    stream.play()?;

    let mut terminal = ratatui::init();
    let result = UiApp::new(audio_rx, control_tx, params, sample_rate).run(&mut terminal);
    ratatui::restore();

    drop(stream);
    result
}

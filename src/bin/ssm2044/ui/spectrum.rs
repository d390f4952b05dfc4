//! Spectrum analyzer widget
//!
//! Hann-windowed FFT of the output, folded into log-spaced bands so the
//! filter slope reads as a straight line above the cutoff.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::{f64::consts::TAU, sync::Arc};

const BANDS: usize = 64;
const MIN_FREQ: f64 = 20.0;
const FLOOR_DB: f64 = -100.0;

pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f64>>,
    window: Vec<f64>,
    scratch: Vec<Complex<f64>>,
    /// FFT bin range `[start, end)` covered by each band
    bands: Vec<(usize, usize)>,
    /// (log10 of band centre in Hz, level in dB)
    data: Vec<(f64, f64)>,
}

impl SpectrumAnalyzer {
    pub fn new(size: usize, sample_rate: f64) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(size);
        let denom = size.saturating_sub(1).max(1) as f64;
        let window = (0..size)
            .map(|i| 0.5 * (1.0 - (TAU * i as f64 / denom).cos()))
            .collect();

        let half = (size / 2).max(1);
        let max_freq = (sample_rate / 2.0).min(20_000.0).max(MIN_FREQ * 2.0);
        let bin_hz = sample_rate / size.max(1) as f64;
        let ratio = max_freq / MIN_FREQ;

        let mut bands = Vec::with_capacity(BANDS);
        let mut data = Vec::with_capacity(BANDS);
        for i in 0..BANDS {
            let lo = MIN_FREQ * ratio.powf(i as f64 / BANDS as f64);
            let hi = MIN_FREQ * ratio.powf((i + 1) as f64 / BANDS as f64);
            let start = ((lo / bin_hz).floor() as usize).min(half - 1);
            let end = ((hi / bin_hz).ceil() as usize).clamp(start + 1, half);
            bands.push((start, end));
            data.push(((lo * hi).sqrt().log10(), FLOOR_DB));
        }

        Self {
            fft,
            window,
            scratch: vec![Complex::new(0.0, 0.0); size],
            bands,
            data,
        }
    }

    pub fn update(&mut self, buffer: &[f32]) {
        if buffer.len() != self.window.len() {
            return;
        }

        for ((slot, &sample), &w) in self.scratch.iter_mut().zip(buffer).zip(&self.window) {
            *slot = Complex::new(sample as f64 * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        for (&(start, end), point) in self.bands.iter().zip(self.data.iter_mut()) {
            let power = self.scratch[start..end]
                .iter()
                .map(|c| c.norm_sqr())
                .fold(1e-12, f64::max);
            point.1 = (10.0 * power.log10()).max(FLOOR_DB);
        }
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.data
    }
}

pub fn render_spectrum(frame: &mut Frame, area: Rect, spectrum: &[(f64, f64)]) {
    let block = Block::default().title(" Spectrum ").borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_db = spectrum.iter().map(|&(_, db)| db).fold(FLOOR_DB, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([MIN_FREQ.log10(), 20_000f64.log10()])
                .labels(vec!["20", "200", "2k", "20k"])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([FLOOR_DB, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

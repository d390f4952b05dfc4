//! Status widget: held parameters, derived coefficients and levels

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use ssm2044::{dsp::coefficients, host::HeldParams};

pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    params: &HeldParams,
    sample_rate: f64,
    stats: &AudioStats,
) {
    let block = Block::default().title(" ssm2044 ").borders(Borders::ALL);

    // What the cascade sees for the held (unmodulated) settings
    let coeffs = coefficients::solve(
        params.cutoff,
        params.resonance,
        sample_rate,
        1.0 / sample_rate,
    );

    let params_line = Line::from(vec![
        Span::styled(
            format!(" Cutoff: {:>7.1} Hz  ", params.cutoff),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Resonance: {:.2}  ", params.resonance),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("Gain: {:.2}  ", params.gain),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("{:.1}kHz", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let levels_line = Line::from(vec![
        Span::styled(
            format!(" g: {:.4}  k: {:.2}  ", coeffs.g, coeffs.k),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let paragraph = Paragraph::new(vec![params_line, levels_line]).block(block);
    frame.render_widget(paragraph, area);
}

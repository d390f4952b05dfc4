//! TUI for the ssm2044 player
//!
//! Oscilloscope, spectrum and parameter status. Key presses become
//! control messages for the audio thread.

mod spectrum;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;
use tracing::{debug, warn};

use ssm2044::host::{ControlMessage, HeldParams, Inlet};

use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::render_waveform;

/// Audio visualization buffer size (also the FFT size)
const VIS_BUFFER_SIZE: usize = 1024;

/// Cutoff moves a semitone per key press
const CUTOFF_STEP: f64 = 1.059_463_094_359_295_3;
const RESONANCE_STEP: f64 = 0.1;
const GAIN_STEP: f64 = 0.1;

pub struct UiApp {
    /// Filtered output from the audio thread
    audio_rx: Consumer<f32>,
    /// Control messages to the audio thread
    control_tx: Producer<ControlMessage>,
    /// Held parameters as last sent to the audio thread
    params: HeldParams,
    sample_rate: f64,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        audio_rx: Consumer<f32>,
        control_tx: Producer<ControlMessage>,
        params: HeldParams,
        sample_rate: f64,
    ) -> Self {
        Self {
            audio_rx,
            control_tx,
            params,
            sample_rate,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate),
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.spectrum.update(&self.audio_buffer);

            terminal.draw(|frame| self.render(frame))?;

            // ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep the most recent VIS_BUFFER_SIZE samples
    fn poll_audio(&mut self) {
        while let Ok(sample) = self.audio_rx.pop() {
            self.audio_buffer.push(sample);
        }
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.nudge(Inlet::Cutoff, self.params.cutoff * CUTOFF_STEP),
            KeyCode::Down => self.nudge(Inlet::Cutoff, self.params.cutoff / CUTOFF_STEP),
            KeyCode::Right => {
                self.nudge(Inlet::Resonance, self.params.resonance + RESONANCE_STEP)
            }
            KeyCode::Left => {
                self.nudge(Inlet::Resonance, self.params.resonance - RESONANCE_STEP)
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.nudge(Inlet::Gain, self.params.gain + GAIN_STEP)
            }
            KeyCode::Char('-') => self.nudge(Inlet::Gain, self.params.gain - GAIN_STEP),
            KeyCode::Char('r') | KeyCode::Char('R') => self.send(ControlMessage::Reset),
            _ => {}
        }
    }

    /// Update the local copy (clamped the same way the filter clamps) and
    /// forward the new value.
    fn nudge(&mut self, inlet: Inlet, value: f64) {
        self.params.set_float(inlet, value);
        if let Some(clamped) = self.params.get(inlet) {
            if clamped != value {
                debug!(?inlet, value, clamped, "parameter clamped");
            }
            self.send(ControlMessage::SetFloat {
                inlet,
                value: clamped,
            });
        }
    }

    fn send(&mut self, message: ControlMessage) {
        if self.control_tx.push(message).is_err() {
            warn!(?message, "control ring full, dropping message");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Status
                Constraint::Min(8),    // Waveform
                Constraint::Min(8),    // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(frame, chunks[0], &self.params, self.sample_rate, &stats);
        render_waveform(frame, chunks[1], &self.audio_buffer);
        render_spectrum(frame, chunks[2], self.spectrum.data());

        let help = Paragraph::new(
            " [Up/Down] Cutoff  [Left/Right] Resonance  [+/-] Gain  [R] Reset  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

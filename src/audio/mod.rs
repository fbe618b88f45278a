// Synthesized sound effects. No asset files: each effect is a small fundsp
// unit graph rendered to a sample buffer and played through a detached
// rodio sink, so playback never blocks the game loop.

use anyhow::{Context, Result};
use fundsp::prelude64::*;
use rodio::buffer::SamplesBuffer;
use rodio::{mixer::Mixer, OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioConfig;

// fundsp renders at 44.1kHz by default.
const SAMPLE_RATE: f64 = 44_100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    Flap,
    Score,
    GameOver,
}

pub struct Audio {
    // None when audio is disabled; the stream must stay alive for playback.
    stream: Option<OutputStream>,
}

impl Audio {
    /// Open the default output device, or construct a silent no-op player
    /// when audio is disabled. Device failure with audio enabled is fatal.
    pub fn new(config: &AudioConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self { stream: None });
        }

        let stream = OutputStreamBuilder::open_default_stream()
            .context("failed to open audio output device (set audio.enabled = false to run silent)")?;

        Ok(Self {
            stream: Some(stream),
        })
    }

    /// Fire-and-forget playback.
    pub fn play(&self, effect: SoundEffect) {
        let Some(stream) = &self.stream else {
            return;
        };
        start_playback(stream.mixer(), render_effect(effect));
    }
}

fn start_playback(mixer: &Mixer, samples: Vec<f32>) {
    let sink = Sink::connect_new(mixer);
    sink.append(SamplesBuffer::new(1, SAMPLE_RATE as u32, samples));
    sink.detach(); // Play in background
}

/// Build the unit graph for one effect and render it to mono samples.
fn render_effect(effect: SoundEffect) -> Vec<f32> {
    let (mut sound, seconds): (Box<dyn AudioUnit>, f64) = match effect {
        // Short upward chirp (300Hz to 700Hz over 0.12s).
        SoundEffect::Flap => {
            let freq = lfo(|t: f64| lerp(300.0, 700.0, (t / 0.12).min(1.0)));
            let gain = lfo(|t: f64| lerp(0.12, 0.0, (t / 0.15).min(1.0)));
            (Box::new((freq >> saw()) * gain), 0.15)
        }
        // Two-tone ding: E5 stepping up to A5.
        SoundEffect::Score => {
            let freq = lfo(|t: f64| if t < 0.08 { 659.3 } else { 880.0 });
            let gain = lfo(|t: f64| lerp(0.15, 0.0, (t / 0.2).min(1.0)));
            (Box::new((freq >> sine()) * gain), 0.2)
        }
        // Falling saw (400Hz down to 80Hz over 0.4s) with a slow fade-out.
        SoundEffect::GameOver => {
            let freq = lfo(|t: f64| lerp(400.0, 80.0, (t / 0.4).min(1.0)));
            let gain = lfo(|t: f64| lerp(0.15, 0.0, (t / 0.5).min(1.0)));
            (Box::new((freq >> saw()) * gain), 0.5)
        }
    };

    Wave::render(SAMPLE_RATE, seconds, sound.as_mut())
        .channel(0)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_audio_is_a_silent_noop() {
        let audio = Audio::new(&AudioConfig { enabled: false }).unwrap();
        audio.play(SoundEffect::Flap);
        audio.play(SoundEffect::GameOver);
    }

    #[test]
    fn test_effects_render_audible_finite_samples() {
        for (effect, seconds) in [
            (SoundEffect::Flap, 0.15),
            (SoundEffect::Score, 0.2),
            (SoundEffect::GameOver, 0.5),
        ] {
            let samples = render_effect(effect);
            let expected = (SAMPLE_RATE * seconds) as usize;
            assert!(
                samples.len() >= expected - 1 && samples.len() <= expected + 1,
                "{:?}: rendered {} samples, expected about {}",
                effect,
                samples.len(),
                expected
            );
            assert!(samples.iter().all(|s| s.is_finite()));
            assert!(samples.iter().any(|s| s.abs() > 0.01));
        }
    }

    #[test]
    fn test_effects_fade_out_by_the_end() {
        for effect in [SoundEffect::Flap, SoundEffect::Score, SoundEffect::GameOver] {
            let samples = render_effect(effect);
            let tail = &samples[samples.len() - 10..];
            assert!(tail.iter().all(|s| s.abs() < 0.05), "{:?} does not fade", effect);
        }
    }
}

//! One play session: the fixed-rate simulation loop from the first frame of
//! a fresh bird to the end of the game-over pause.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;

use crate::audio::{Audio, SoundEffect};
use crate::config::Config;
use crate::debug;
use crate::game::{self, GameState, InputAction};
use crate::ui::{self, OverlayMessage};

/// How a session ended.
pub enum SessionOutcome {
    /// Collision happened and the game-over pause elapsed; back to the menu.
    Finished(u32),
    /// The player asked to leave the program entirely.
    Quit,
}

/// Run one session to completion. Every iteration: poll input, step the
/// simulation, turn simulation events into sound, draw, then sleep off the
/// rest of the frame. After a collision the same loop keeps rendering the
/// final score for the configured pause; only quit is honored during it.
pub fn run_session<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    audio: &Audio,
) -> Result<SessionOutcome> {
    debug::log("SESSION", "New session started");

    let mut state = GameState::new(&config.physics);
    let mut rng = rand::thread_rng();

    let frame_millis = (1000 / config.display.target_fps).max(1);
    let frame_duration = Duration::from_millis(frame_millis);
    let pause_total = config.display.game_over_pause_ms / frame_millis;

    // Remaining frames of the game-over pause; None while the bird is alive.
    let mut pause_frames: Option<u64> = None;

    loop {
        let frame_start = Instant::now();

        // The quit signal is checked every iteration, pause included.
        let actions = game::poll_input(&config.keybindings)?;
        for action in &actions {
            match action {
                InputAction::Quit => return Ok(SessionOutcome::Quit),
                InputAction::Flap => {
                    // The pause is non-interactive; flaps only count while alive.
                    if pause_frames.is_none() {
                        state.bird.flap(state.params.flap_strength);
                        audio.play(SoundEffect::Flap);
                    }
                }
            }
        }

        match pause_frames {
            None => {
                let events = game::update(&mut state, &mut rng);
                if events.any() {
                    debug::log(
                        "GAME",
                        &format!(
                            "Frame {}: scored {}, collided {}, score {}",
                            state.frame, events.scored, events.collided, state.score
                        ),
                    );
                }
                if events.scored > 0 {
                    audio.play(SoundEffect::Score);
                }
                if events.collided {
                    audio.play(SoundEffect::GameOver);
                    pause_frames = Some(pause_total);
                }
            }
            Some(0) => {
                debug::log("SESSION", "Game-over pause elapsed, back to menu");
                return Ok(SessionOutcome::Finished(state.score));
            }
            Some(ref mut remaining) => {
                *remaining -= 1;
            }
        }

        let overlay = pause_frames.map(|_| {
            OverlayMessage::game_over(vec![
                "GAME OVER".to_string(),
                String::new(),
                format!("Your Score: {}", state.score),
            ])
        });

        terminal.draw(|f| ui::render(f, &state, &config.display, overlay.as_ref()))?;

        limit_frame_rate(frame_start, frame_duration);
    }
}

/// Sleep off whatever is left of the frame budget so the loop runs at the
/// configured rate regardless of how fast updating and drawing were.
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}

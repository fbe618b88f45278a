use rand::Rng;

use super::state::{GameState, Pipe};

/// What happened during one simulation frame. The physics step stays free of
/// I/O; the session loop turns these into sound and presentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameEvents {
    /// Number of pipes passed this frame (almost always 0 or 1).
    pub scored: u32,
    pub collided: bool,
}

impl FrameEvents {
    pub fn any(&self) -> bool {
        self.scored > 0 || self.collided
    }
}

/// Advance the simulation by exactly one frame.
///
/// Order matters and is fixed: bird falls, a pipe may spawn, pipes move and
/// are pruned, then collision is checked, then scoring. A colliding frame
/// never scores.
pub fn update<R: Rng>(state: &mut GameState, rng: &mut R) -> FrameEvents {
    let mut events = FrameEvents::default();
    if state.game_over {
        return events;
    }

    state.frame += 1;

    state.bird.update(state.params.gravity);

    if state.frame % state.params.pipe_spawn_interval == 0 {
        let pipe = Pipe::spawn(rng, &state.params);
        state.pipes.push(pipe);
    }

    // Advance every pipe first, then prune in a separate pass so removal
    // never happens while iterating.
    for pipe in &mut state.pipes {
        pipe.x -= state.params.pipe_speed;
    }
    let pipe_width = state.params.pipe_width;
    state.pipes.retain(|pipe| pipe.x + pipe_width >= 0.0);

    if check_collision(state) {
        state.game_over = true;
        events.collided = true;
        return events;
    }

    for pipe in &mut state.pipes {
        if !pipe.passed && state.bird.x > pipe.x + pipe_width {
            pipe.passed = true;
            state.score += 1;
            events.scored += 1;
        }
    }

    events
}

/// Collision: the bird leaves the playable vertical band (above the ceiling
/// or into the ground), or its box overlaps either segment of a pipe.
fn check_collision(state: &GameState) -> bool {
    let params = &state.params;

    if state.bird.y < 0.0 || state.bird.y > params.world_height - params.ground_height {
        return true;
    }

    let bird_rect = state.bird_rect();
    state.pipes.iter().any(|pipe| {
        bird_rect.overlaps(&pipe.top_rect(params)) || bird_rect.overlaps(&pipe.bottom_rect(params))
    })
}

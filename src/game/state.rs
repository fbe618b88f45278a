use rand::Rng;

use crate::config::PhysicsConfig;

#[derive(Debug, Clone)]
pub struct Bird {
    /// Horizontal position, fixed for the lifetime of the session.
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
}

impl Bird {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
        }
    }

    /// One frame of free fall: accelerate, then move. No terminal velocity.
    pub fn update(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// A flap replaces the current velocity outright, it never accumulates.
    pub fn flap(&mut self, flap_strength: f32) {
        self.velocity = flap_strength;
    }
}

#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f32,
    /// Height of the top segment; the gap starts right below it.
    pub height: f32,
    /// Set once when the bird clears the right edge, never cleared.
    pub passed: bool,
}

impl Pipe {
    /// Spawn at the right edge of the world with a random top-segment height.
    /// The height range is validated at config-load time to be non-degenerate.
    pub fn spawn<R: Rng>(rng: &mut R, params: &PhysicsConfig) -> Self {
        let height = rng.gen_range(params.min_pipe_height..=params.max_pipe_height());
        Self {
            x: params.world_width,
            height,
            passed: false,
        }
    }

    /// Top rectangle: from the world ceiling down to `height`.
    pub fn top_rect(&self, params: &PhysicsConfig) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            width: params.pipe_width,
            height: self.height,
        }
    }

    /// Bottom rectangle: from the far side of the gap down to the world floor.
    pub fn bottom_rect(&self, params: &PhysicsConfig) -> Rect {
        let top = self.height + params.pipe_gap;
        Rect {
            x: self.x,
            y: top,
            width: params.pipe_width,
            height: params.world_height - top,
        }
    }
}

/// Axis-aligned rectangle in virtual world coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Strict AABB overlap: only a non-zero-area intersection counts,
    /// edge-touching rectangles do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub frame: u64,
    pub game_over: bool,
    pub params: PhysicsConfig,
}

impl GameState {
    /// Fresh session: bird at its start position with zero velocity, no
    /// pipes, score zeroed. Nothing carries over from previous sessions.
    pub fn new(params: &PhysicsConfig) -> Self {
        let bird = Bird::new(params.bird_start_x, params.world_height / 2.0);
        Self {
            bird,
            pipes: Vec::new(),
            score: 0,
            frame: 0,
            game_over: false,
            params: params.clone(),
        }
    }

    pub fn bird_rect(&self) -> Rect {
        Rect {
            x: self.bird.x,
            y: self.bird.y,
            width: self.params.bird_width,
            height: self.params.bird_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bird_gravity_integration() {
        // Reference scenario: y=300, v=0, gravity 0.6 -> v=0.6, y=300.6
        let mut bird = Bird::new(100.0, 300.0);
        bird.update(0.6);
        assert_eq!(bird.velocity, 0.6);
        assert_eq!(bird.y, 300.6);
    }

    #[test]
    fn test_flap_overrides_downward_velocity() {
        let mut bird = Bird::new(100.0, 300.0);
        bird.velocity = 5.0;
        bird.flap(-8.0);
        assert_eq!(bird.velocity, -8.0);
    }

    #[test]
    fn test_flap_has_no_cooldown() {
        let mut bird = Bird::new(100.0, 300.0);
        bird.flap(-8.0);
        bird.flap(-8.0);
        assert_eq!(bird.velocity, -8.0);
    }

    #[test]
    fn test_spawn_height_stays_in_range() {
        let params = PhysicsConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let pipe = Pipe::spawn(&mut rng, &params);
            assert!(pipe.height >= params.min_pipe_height);
            assert!(pipe.height <= params.max_pipe_height());
            assert_eq!(pipe.x, params.world_width);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_pipe_rects_leave_exactly_the_gap() {
        let params = PhysicsConfig::default();
        let pipe = Pipe {
            x: 200.0,
            height: 180.0,
            passed: false,
        };
        let top = pipe.top_rect(&params);
        let bottom = pipe.bottom_rect(&params);
        assert_eq!(top.y, 0.0);
        assert_eq!(top.height, 180.0);
        assert_eq!(bottom.y, 180.0 + params.pipe_gap);
        assert_eq!(bottom.y + bottom.height, params.world_height);
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let touching = Rect {
            x: 10.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let overlapping = Rect {
            x: 9.5,
            y: 9.5,
            width: 10.0,
            height: 10.0,
        };
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
    }

    #[test]
    fn test_new_session_starts_clean() {
        let params = PhysicsConfig::default();
        let state = GameState::new(&params);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert!(state.pipes.is_empty());
        assert!(!state.game_over);
        assert_eq!(state.bird.x, params.bird_start_x);
        assert_eq!(state.bird.velocity, 0.0);
    }
}

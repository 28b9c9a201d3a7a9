/// Match score. There is no win condition; counters only grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player = self.player.saturating_add(1);
    }

    pub fn increment_opponent(&mut self) {
        self.opponent = self.opponent.saturating_add(1);
    }

    pub fn total(&self) -> u64 {
        self.player as u64 + self.opponent as u64
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Commands from the host, applied at the start of the next tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move the player paddle so its centre is at `center_y` (surface pixels)
    SetPlayerTarget { center_y: f32 },
}

/// Pending host commands, in arrival order
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pub commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Take all pending commands, leaving the queue empty
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}

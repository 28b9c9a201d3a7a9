use crate::{
    create_paddle, step, Ball, Command, CommandQueue, Config, ConfigError, Events, GameRng,
    Paddle, Score, ServeDirection, Side, Snapshot,
};
use glam::Vec2;
use hecs::World;

/// Everything one match owns: entities, score and the pending host commands
pub struct Match {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub commands: CommandQueue,
    pub rng: GameRng,
    pub tick: u64,
}

impl Match {
    /// Match on the default surface
    pub fn new(seed: u64) -> Self {
        Self::build(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Opponent, &config);

        // Create ball, served toward the opponent
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_size, config.ball_speed);
        ball.serve(ServeDirection::Right, &config, &mut rng);
        world.spawn((ball,));

        log::debug!(
            "new match on {}x{} surface, seed {seed}",
            config.surface_width,
            config.surface_height
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            commands: CommandQueue::new(),
            rng,
            tick: 0,
        }
    }

    /// Queue a command for the next tick
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn set_player_target(&mut self, center_y: f32) {
        self.push_command(Command::SetPlayerTarget { center_y });
    }

    /// Run one frame of the simulation, returning what happened in it
    pub fn tick(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.commands,
            &mut self.rng,
        );
        self.tick += 1;
        &self.events
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        Snapshot::capture(&self.world, self.score, self.tick)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Overwrite the ball's position and velocity
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}

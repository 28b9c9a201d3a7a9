//! Draw list for one frame
//!
//! The host renderer executes these commands in order on its surface; the
//! scene itself never touches game state beyond reading a [`Snapshot`].

use crate::{ColorTag, Config, Paddle, Params, Snapshot};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the whole surface
    Clear { width: f32, height: f32 },
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: ColorTag,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: ColorTag,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Net, both paddles, ball and scores, back to front
    pub fn build(snapshot: &Snapshot, config: &Config) -> Self {
        let width = config.surface_width;
        let height = config.surface_height;
        let mut commands = vec![DrawCommand::Clear { width, height }];

        // Dashed net down the middle
        let mut y = 0.0;
        while y < height {
            commands.push(DrawCommand::FillRect {
                x: width / 2.0 - Params::NET_WIDTH / 2.0,
                y,
                width: Params::NET_WIDTH,
                height: Params::NET_SEGMENT,
                color: ColorTag::Net,
            });
            y += Params::NET_SEGMENT * 2.0;
        }

        commands.push(paddle_rect(&snapshot.player));
        commands.push(paddle_rect(&snapshot.opponent));

        let ball = &snapshot.ball;
        commands.push(DrawCommand::FillRect {
            x: ball.pos.x,
            y: ball.pos.y,
            width: ball.size,
            height: ball.size,
            color: ColorTag::Ball,
        });

        commands.push(score_text(snapshot.score.player, width / 4.0));
        commands.push(score_text(snapshot.score.opponent, 3.0 * width / 4.0));

        Self { commands }
    }
}

fn paddle_rect(paddle: &Paddle) -> DrawCommand {
    DrawCommand::FillRect {
        x: paddle.pos.x,
        y: paddle.pos.y,
        width: paddle.size.x,
        height: paddle.size.y,
        color: paddle.color,
    }
}

fn score_text(value: u32, x: f32) -> DrawCommand {
    DrawCommand::FillText {
        text: value.to_string(),
        x,
        y: Params::SCORE_BASELINE,
        font: Params::SCORE_FONT,
        color: ColorTag::Score,
    }
}

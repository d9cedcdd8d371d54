use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, Coord, GuessResult};
use crate::player::Player;

/// Computer opponent firing at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the board
/// and the game simply asks again.
pub struct AiPlayer {
    name: &'static str,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { name: "Computer" }
    }

    pub fn named(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn name(&self) -> &str {
        self.name
    }

    fn select_target(&mut self, rng: &mut SmallRng, grid_size: usize) -> Option<Coord> {
        let n = grid_size as i32;
        Some(Coord::new(rng.random_range(0..n), rng.random_range(0..n)))
    }

    fn handle_rejected(&mut self, target: Coord, error: &BoardError) {
        debug!("{} retargeting after {}: {}", self.name, target, error);
    }

    fn handle_guess_result(&mut self, target: Coord, result: GuessResult) {
        debug!("{} fired at {} -> {:?}", self.name, target, result);
    }
}

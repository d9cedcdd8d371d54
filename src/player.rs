use crate::common::{BoardError, Coord, GuessResult};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A player only chooses targets and listens to outcomes. The game owns
/// both boards and applies each chosen target to the opponent's board.
pub trait Player {
    /// Label used in turn announcements and logs.
    fn name(&self) -> &str;

    /// Choose the next target on a `grid_size`×`grid_size` board.
    ///
    /// Returning `None` forfeits the game (e.g. the input source closed).
    fn select_target(&mut self, rng: &mut SmallRng, grid_size: usize) -> Option<Coord>;

    /// Inform the player that the board refused its last target.
    fn handle_rejected(&mut self, _target: Coord, _error: &BoardError) {}

    /// Inform the player of the result of its last guess.
    fn handle_guess_result(&mut self, _target: Coord, _result: GuessResult) {}

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _target: Coord, _result: GuessResult) {}
}

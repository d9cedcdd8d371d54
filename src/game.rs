//! Turn loop: two players take shots at each other's boards until one fleet
//! is gone.

use alloc::boxed::Box;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, GuessResult};
use crate::config::GameConfig;
use crate::player::Player;

/// One of the two seats. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// `winner` sank the whole opposing fleet.
    Finished { winner: Side },
    /// `by` stopped supplying targets.
    Abandoned { by: Side },
}

/// Headline numbers of a game, for the simulator's JSON output.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GameSummary {
    pub winner: Option<Side>,
    pub abandoned_by: Option<Side>,
    /// Accepted shots fired by each side.
    pub shots: [usize; 2],
    /// Enemy ships sunk by each side.
    pub sunk: [usize; 2],
}

/// A match between two players, each with its own board.
///
/// Board `i` belongs to player `i`; a player only ever fires at the other
/// board.
pub struct Game {
    players: [Box<dyn Player>; 2],
    boards: [Board; 2],
    turn: usize,
    shots: [usize; 2],
    status: GameStatus,
}

impl Game {
    /// Seat two players with their boards. Boards nobody has fired at yet
    /// are switched from placement to targeting with [`Board::begin`];
    /// boards with recorded shots keep their blocked cells.
    pub fn new(
        first: Box<dyn Player>,
        first_board: Board,
        second: Box<dyn Player>,
        second_board: Board,
    ) -> Self {
        let mut boards = [first_board, second_board];
        for board in boards.iter_mut() {
            if board.hits().is_empty() && board.misses().is_empty() {
                board.begin();
            }
        }
        Self {
            players: [first, second],
            boards,
            turn: 0,
            shots: [0, 0],
            status: GameStatus::InProgress,
        }
    }

    /// Game with a freshly generated random fleet on each side.
    pub fn with_random_fleets<R: Rng>(
        config: &GameConfig,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let first_board = Board::random(config, rng)?;
        let second_board = Board::random(config, rng)?;
        info!(
            "new {}x{} game: {} vs {}",
            config.grid_size,
            config.grid_size,
            first.name(),
            second.name()
        );
        Ok(Self::new(first, first_board, second, second_board))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of times the turn has passed so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Side whose shot comes next: even turns belong to `First`.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    pub fn player(&self, side: Side) -> &dyn Player {
        self.players[side.index()].as_ref()
    }

    /// Accepted shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Play one shot for the active side. A hit keeps the turn with the
    /// shooter; a miss or a sink passes it. Does nothing once the game is
    /// over.
    pub fn step(&mut self, rng: &mut SmallRng) -> GameStatus {
        if self.status != GameStatus::InProgress {
            return self.status;
        }
        let side = self.active_side();
        let Some(result) = self.fire(side, rng) else {
            info!("{} abandoned the game", self.players[side.index()].name());
            self.status = GameStatus::Abandoned { by: side };
            return self.status;
        };

        if self.boards[side.opponent().index()].all_sunk() {
            info!(
                "{} wins after {} shots",
                self.players[side.index()].name(),
                self.shots[side.index()]
            );
            self.status = GameStatus::Finished { winner: side };
        } else if !result.grants_extra_shot() {
            self.turn += 1;
        }
        self.status
    }

    /// Step until the game is finished or abandoned.
    pub fn run(&mut self, rng: &mut SmallRng) -> GameStatus {
        while self.status == GameStatus::InProgress {
            self.step(rng);
        }
        self.status
    }

    /// Ask `side` for targets until the opposing board accepts one. Refused
    /// targets are reported back to the shooter. `None` if the shooter gives
    /// up.
    fn fire(&mut self, side: Side, rng: &mut SmallRng) -> Option<GuessResult> {
        let (me, them) = (side.index(), side.opponent().index());
        let grid_size = self.boards[them].size();
        loop {
            let target = self.players[me].select_target(rng, grid_size)?;
            match self.boards[them].guess(target) {
                Ok(result) => {
                    debug!("{} -> {}: {:?}", self.players[me].name(), target, result);
                    self.shots[me] += 1;
                    self.players[me].handle_guess_result(target, result);
                    self.players[them].handle_opponent_guess(target, result);
                    return Some(result);
                }
                Err(e) => {
                    debug!("{} -> {} refused: {}", self.players[me].name(), target, e);
                    self.players[me].handle_rejected(target, &e);
                }
            }
        }
    }

    #[cfg(feature = "std")]
    pub fn summary(&self) -> GameSummary {
        let (winner, abandoned_by) = match self.status {
            GameStatus::InProgress => (None, None),
            GameStatus::Finished { winner } => (Some(winner), None),
            GameStatus::Abandoned { by } => (None, Some(by)),
        };
        GameSummary {
            winner,
            abandoned_by,
            shots: self.shots,
            sunk: [self.boards[1].sunk_count(), self.boards[0].sunk_count()],
        }
    }
}

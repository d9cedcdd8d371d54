#![cfg(feature = "std")]

//! Terminal text around the game: banner, board views and the final result.

use crate::game::{Game, GameStatus, Side};

const RULE: &str = "--------------------";

/// Welcome banner with the input format.
pub fn greeting() -> String {
    [
        RULE,
        "   Welcome to",
        "   ~ Sea Battle ~",
        RULE,
        " input format: row col",
        " e.g. `2 5` fires at row 2, column 5",
        " `q` leaves the game",
    ]
    .join("\n")
}

pub fn greet() {
    println!("{}", greeting());
}

/// Both boards, each under a heading naming its owner.
pub fn boards_view(game: &Game) -> String {
    let mut out = String::new();
    for side in [Side::First, Side::Second] {
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("{}'s board:\n", game.player(side).name()));
        out.push_str(&game.board(side).to_string());
        out.push('\n');
    }
    out
}

pub fn print_boards(game: &Game) {
    print!("{}", boards_view(game));
}

pub fn print_turn(game: &Game) {
    println!("{}", RULE);
    println!("{} to move", game.player(game.active_side()).name());
}

/// One-line description of how the game ended.
pub fn outcome(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => "Game in progress".to_string(),
        GameStatus::Finished { winner } => format!("{} won!", game.player(winner).name()),
        GameStatus::Abandoned { by } => format!("{} left the game", game.player(by).name()),
    }
}

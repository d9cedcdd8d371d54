#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::common::{BoardError, Coord, GuessResult};
use crate::player::Player;

/// What a line of terminal input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire(Coord),
    Quit,
}

/// Parse `"<row> <col>"` with 1-based numbers (a comma may separate them),
/// or `q`/`quit`. The returned coordinate is 0-based and not bounds checked.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err("Enter two coordinates: row and column".to_string());
    }
    let mut nums = [0i32; 2];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err("Enter numbers!".to_string());
        }
        *slot = part
            .parse()
            .map_err(|_| format!("Coordinate {} is too large", part))?;
    }
    Ok(Command::Fire(Coord::new(nums[0] - 1, nums[1] - 1)))
}

fn describe(result: GuessResult) -> String {
    match result {
        GuessResult::Hit => "hit!".to_string(),
        GuessResult::Miss => "miss.".to_string(),
        GuessResult::Sink(name) => format!("{} sunk!", name),
    }
}

/// Human player reading targets from a line-based input source.
pub struct CliPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Player".to_string(),
            input,
            output,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Everything written to the player so far.
    pub fn output(&self) -> &W {
        &self.output
    }

    // Terminal write failures are not game events; the next read will
    // notice a closed terminal and forfeit.
    fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{}", line);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_target(&mut self, _rng: &mut SmallRng, _grid_size: usize) -> Option<Coord> {
        loop {
            let _ = write!(self.output, "Your move (row col): ");
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    warn!("failed to read move: {}", e);
                    return None;
                }
            }
            match parse_command(&line) {
                Ok(Command::Fire(target)) => return Some(target),
                Ok(Command::Quit) => return None,
                Err(msg) => self.say(&msg),
            }
        }
    }

    fn handle_rejected(&mut self, _target: Coord, error: &BoardError) {
        self.say(&error.to_string());
    }

    fn handle_guess_result(&mut self, target: Coord, result: GuessResult) {
        let line = format!(
            "You fired at {} {}: {}",
            target.row + 1,
            target.col + 1,
            describe(result)
        );
        self.say(&line);
    }

    fn handle_opponent_guess(&mut self, target: Coord, result: GuessResult) {
        let line = format!(
            "Opponent fired at {} {}: {}",
            target.row + 1,
            target.col + 1,
            describe(result)
        );
        self.say(&line);
    }
}

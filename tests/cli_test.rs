#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::cell::RefCell;
    use std::io::{self, Cursor, Write};
    use std::rc::Rc;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        parse_command, ui, AiPlayer, Board, BoardError, CliPlayer, Command, Coord, Game,
        GameStatus, GuessResult, Orientation, Player, Ship, ShipType, Side,
    };

    /// Output sink that stays readable after the player is boxed into a game.
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scripted(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(player: &CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(player.output().clone()).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("2 5"), Ok(Command::Fire(Coord::new(1, 4))));
        assert_eq!(parse_command(" 1   1 \n"), Ok(Command::Fire(Coord::new(0, 0))));
        assert_eq!(parse_command("3,4"), Ok(Command::Fire(Coord::new(2, 3))));
        assert_eq!(parse_command("3, 4"), Ok(Command::Fire(Coord::new(2, 3))));
        // zero passes parsing and is left to the board's bounds check
        assert_eq!(parse_command("0 3"), Ok(Command::Fire(Coord::new(-1, 2))));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT\n"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_command_rejects_malformed() {
        for input in ["", "1", "1 2 3", "hello"] {
            assert_eq!(
                parse_command(input),
                Err("Enter two coordinates: row and column".to_string()),
                "input {:?}",
                input
            );
        }
        for input in ["a b", "1 x", "-1 2", "+1 2", "1.5 2"] {
            assert_eq!(
                parse_command(input),
                Err("Enter numbers!".to_string()),
                "input {:?}",
                input
            );
        }
        assert!(parse_command("99999999999 1").is_err());
    }

    #[test]
    fn test_malformed_input_reprompts() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut player = scripted("hello\n1 x\n3 4\n");
        assert_eq!(player.select_target(&mut rng, 6), Some(Coord::new(2, 3)));

        let out = output_of(&player);
        assert_eq!(out.matches("Your move").count(), 3);
        assert!(out.contains("Enter two coordinates"));
        assert!(out.contains("Enter numbers!"));
    }

    #[test]
    fn test_closed_input_or_quit_forfeits() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(scripted("").select_target(&mut rng, 6), None);
        assert_eq!(scripted("bad\n").select_target(&mut rng, 6), None);
        assert_eq!(scripted("q\n2 2\n").select_target(&mut rng, 6), None);
    }

    #[test]
    fn test_feedback_messages() {
        let mut player = scripted("");
        player.handle_rejected(Coord::new(0, 0), &BoardError::AlreadyGuessed);
        player.handle_rejected(Coord::new(6, 0), &BoardError::OutOfBounds);
        player.handle_guess_result(Coord::new(0, 1), GuessResult::Hit);
        player.handle_guess_result(Coord::new(0, 2), GuessResult::Sink("Cruiser"));
        player.handle_opponent_guess(Coord::new(4, 4), GuessResult::Miss);

        let out = output_of(&player);
        assert!(out.contains("You have already fired at this cell"));
        assert!(out.contains("You are trying to fire outside the board!"));
        assert!(out.contains("You fired at 1 2: hit!"));
        assert!(out.contains("You fired at 1 3: Cruiser sunk!"));
        assert!(out.contains("Opponent fired at 5 5: miss."));
    }

    #[test]
    fn test_human_wins_scripted_game() {
        let mut rng = SmallRng::seed_from_u64(3);
        let out = SharedBuf::default();
        let human = CliPlayer::new(
            Cursor::new(b"7 7\n1 1\n".to_vec()),
            out.clone(),
        )
        .with_name("Tester");

        let boat = ShipType::new("Boat", 1);
        let mut human_board = Board::new(6).unwrap();
        human_board
            .place(Ship::new(boat, Orientation::Horizontal, Coord::new(5, 5)))
            .unwrap();
        human_board.begin();
        let mut ai_board = Board::new(6).unwrap();
        ai_board
            .place(Ship::new(boat, Orientation::Horizontal, Coord::new(0, 0)))
            .unwrap();
        ai_board.begin();

        let mut game = Game::new(
            Box::new(human),
            human_board,
            Box::new(AiPlayer::new()),
            ai_board,
        );
        game.board_mut(Side::Second).set_concealed(true);

        let view = ui::boards_view(&game);
        assert!(view.contains("Tester's board:"));
        assert!(view.contains("Computer's board:"));
        assert!(view.contains(" 6 | . | . | . | . | . | S |"));
        assert!(!view.contains(" 1 | S |"));

        assert_eq!(
            game.step(&mut rng),
            GameStatus::Finished {
                winner: Side::First
            }
        );
        let text = out.text();
        assert!(text.contains("You are trying to fire outside the board!"));
        assert!(text.contains("You fired at 1 1: Boat sunk!"));
        assert_eq!(ui::outcome(&game), "Tester won!");
    }

    #[test]
    fn test_greeting_explains_input() {
        let banner = ui::greeting();
        assert!(banner.contains("Sea Battle"));
        assert!(banner.contains("row col"));
    }
}

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    Board, BoardError, Coord, GameConfig, GuessResult, Orientation, Ship, ShipType, NUM_SHIPS,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::random(&GameConfig::default(), &mut rng).unwrap()
}

fn orientation(vertical: bool) -> Orientation {
    if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ship_cells_are_contiguous(
        row in -2i32..8,
        col in -2i32..8,
        len in 1usize..=3,
        vertical in any::<bool>(),
    ) {
        let ship = Ship::new(ShipType::new("Test", len), orientation(vertical), Coord::new(row, col));
        let cells: Vec<_> = ship.cells().collect();
        prop_assert_eq!(cells.len(), len);
        prop_assert_eq!(cells[0], Coord::new(row, col));
        for (i, cell) in cells.iter().enumerate() {
            let i = i as i32;
            if vertical {
                prop_assert_eq!(*cell, Coord::new(row + i, col));
            } else {
                prop_assert_eq!(*cell, Coord::new(row, col + i));
            }
            prop_assert!(ship.contains(*cell));
        }
    }

    #[test]
    fn in_bounds_placement_on_empty_board_succeeds(
        row in 0i32..6,
        col in 0i32..6,
        len in 1usize..=3,
        vertical in any::<bool>(),
    ) {
        let end = (if vertical { row } else { col }) + len as i32 - 1;
        prop_assume!(end < 6);
        let ship = Ship::new(ShipType::new("Test", len), orientation(vertical), Coord::new(row, col));
        let mut board = Board::new(6).unwrap();
        prop_assert_eq!(board.place(ship), Ok(()));
        for cell in ship.cells() {
            prop_assert!(board.is_blocked(cell));
            let boat = Ship::new(ShipType::new("Boat", 1), Orientation::Horizontal, cell);
            prop_assert_eq!(board.place(boat), Err(BoardError::ShipOverlaps));
        }
    }

    #[test]
    fn second_shot_always_rejected(seed in any::<u64>(), row in 0i32..6, col in 0i32..6) {
        let mut board = random_board(seed);
        let target = Coord::new(row, col);
        prop_assert!(board.guess(target).is_ok());
        prop_assert_eq!(board.guess(target), Err(BoardError::AlreadyGuessed));
    }

    #[test]
    fn ship_sinks_after_exactly_length_hits(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let ships: Vec<Ship> = board.ships().to_vec();
        for (n, ship) in ships.iter().enumerate() {
            let cells: Vec<_> = ship.cells().collect();
            for (i, cell) in cells.iter().enumerate() {
                let result = board.guess(*cell).unwrap();
                if i + 1 < cells.len() {
                    prop_assert_eq!(result, GuessResult::Hit);
                    prop_assert_eq!(board.sunk_count(), n);
                } else {
                    prop_assert_eq!(result, GuessResult::Sink(ship.ship_type().name()));
                    prop_assert_eq!(board.sunk_count(), n + 1);
                }
            }
            prop_assert!(board.ships()[n].is_sunk());
        }
        prop_assert_eq!(board.sunk_count(), NUM_SHIPS);
        prop_assert!(board.all_sunk());
    }
}

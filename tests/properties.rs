// tests/properties.rs
use proptest::prelude::*;
use toy_robot::{Bearing, Game, Instruction, Phase, Position, Robot, Rotation};

fn bearing() -> impl Strategy<Value = Bearing> {
    prop::sample::select(Bearing::ALL.to_vec())
}

proptest! {
    #[test]
    fn place_then_report(x in 0..=5i32, y in 0..=5i32, b in bearing()) {
        let mut game = Game::default();
        let placed = game.process(&format!("PLACE {x},{y},{}", b.name().to_uppercase()));
        prop_assert!(placed.success, "{}", placed.error_message);
        prop_assert_eq!(game.phase(), Phase::Placed);
        prop_assert_eq!(game.process("REPORT").message, format!("{x},{y},{b}"));
    }

    #[test]
    fn four_turns_restore_bearing(b in bearing()) {
        for rotation in [Rotation::Left, Rotation::Right] {
            let mut robot = Robot::new(Position::new(0, 0, b));
            for _ in 0..4 {
                robot.rotate(rotation);
            }
            prop_assert_eq!(robot.position().bearing, b);
        }
    }

    #[test]
    fn opposite_turns_cancel(b in bearing()) {
        prop_assert_eq!(b.turned(Rotation::Left).turned(Rotation::Right), b);
        prop_assert_eq!(b.turned(Rotation::Right).turned(Rotation::Left), b);
    }

    #[test]
    fn move_changes_one_coordinate(x in 1..=4i32, y in 1..=4i32, b in bearing()) {
        let mut game = Game::default();
        game.execute(Instruction::Place { x, y, bearing: Some(b) }).unwrap();
        game.execute(Instruction::Move).unwrap();

        let after = game.robot().unwrap().position();
        let (dx, dy) = match b {
            Bearing::North => (0, 1),
            Bearing::South => (0, -1),
            Bearing::East => (1, 0),
            Bearing::West => (-1, 0),
        };
        prop_assert_eq!(after, Position::new(x + dx, y + dy, b));
    }

    #[test]
    fn position_never_leaves_grid(commands in prop::collection::vec(0..3u8, 0..60)) {
        let mut game = Game::default();
        game.process("place 2,3,north");
        for command in commands {
            let line = ["move", "left", "right"][command as usize];
            let before = game.robot().unwrap().position();
            let result = game.process(line);
            let after = game.robot().unwrap().position();
            prop_assert!(game.grid().contains(after.cell));
            if !result.success {
                prop_assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn nothing_but_place_starts_the_game(line in "(move|left|right|report|jump)") {
        let mut game = Game::default();
        let result = game.process(&line);
        prop_assert!(!result.success);
        prop_assert_eq!(game.phase(), Phase::Uninitialized);
    }
}

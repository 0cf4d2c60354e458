use monopoly_rs::board::{Field, FIELD_COUNT};
use monopoly_rs::dice::LoadedDice;
use monopoly_rs::game::Game;
use monopoly_rs::rules::Rules;
use monopoly_rs::token::Token;
use monopoly_rs::turn::Landing;
use proptest::prelude::*;

fn quiet_rules() -> Rules {
    Rules { income_tax: 0, luxury_tax: 0, free_parking_bonus: 0, ..Rules::default() }
}

proptest! {
    #[test]
    fn advance_wraps_with_go_flag(start in 0usize..FIELD_COUNT, steps in 2usize..=12) {
        let from = Field::from_index(start).unwrap();
        let (to, passed) = from.advance(steps);
        prop_assert_eq!(to.index(), (start + steps) % FIELD_COUNT);
        prop_assert_eq!(passed, start + steps >= FIELD_COUNT);
        prop_assert!(to.is_on_board());
    }

    #[test]
    fn go_bonus_is_paid_exactly_when_go_is_crossed(
        seed in any::<u64>(),
        rolls in prop::collection::vec((1u8..=6, 1u8..=6), 1..12),
        moves in 1usize..60,
    ) {
        let mut game = Game::seeded(&[Token::Train, Token::Horse], quiet_rules(), seed)
            .unwrap()
            .with_dice(LoadedDice::from_faces(&rolls).unwrap());

        for _ in 0..moves {
            let me = game.current_token();
            let before = game.player(me).unwrap().balance();
            let rolled = game.roll_dice(me).unwrap();
            let moved = game.move_player(me).unwrap();
            let after = game.player(me).unwrap().balance();

            if moved.landing != Landing::SentToJail {
                let start =
                    if moved.from == Field::InJail { Field::JustVisiting } else { moved.from };
                let raw = start.index() + rolled.roll.sum();
                prop_assert_eq!(moved.field.index(), raw % FIELD_COUNT);
                prop_assert_eq!(moved.passed_go, raw >= FIELD_COUNT);
            }
            let bonus = if moved.passed_go { 200 } else { 0 };
            prop_assert_eq!(after - before, bonus);

            game.continue_turn(me).unwrap();
            game.end_turn(me).unwrap();
        }
    }
}

#[test]
fn in_jail_is_never_reached_by_wrapping() {
    for field in Field::BOARD {
        for steps in 2..=12 {
            assert_ne!(field.advance(steps).0, Field::InJail);
        }
    }
    assert_eq!(Field::InJail.advance(4), (Field::VirginiaAvenue, false));
}

use monopoly_rs::agents::{Action, AgentKind, AgentTable, ManualAgent, RandomAgent, Step};
use monopoly_rs::game::{Game, Phase};
use monopoly_rs::property::Money;
use monopoly_rs::rules::Rules;
use monopoly_rs::token::Token;

const TOKENS: [Token; 3] = [Token::Car, Token::Hat, Token::Horse];

fn balances(game: &Game) -> Vec<Money> {
    game.players().iter().map(|p| p.balance()).collect()
}

#[test]
fn random_table_completes_the_requested_turns() {
    let mut game = Game::seeded(&TOKENS, Rules::default(), 10).unwrap();
    let mut table = AgentTable::random(TOKENS.len(), Some(10), 1.0);
    assert_eq!(table.play_turns(&mut game, 90).unwrap(), 90);
    assert_eq!(game.phase(), Phase::TurnStart);
    let owned: usize = game.players().iter().map(|p| p.inventory().len()).sum();
    assert!(owned > 0);
}

#[test]
fn seeded_simulations_are_reproducible() {
    let run = || {
        let mut game = Game::seeded(&TOKENS, Rules::default(), 99).unwrap();
        let mut table = AgentTable::random(TOKENS.len(), Some(99), 0.5);
        table.play_turns(&mut game, 60).unwrap();
        (balances(&game), game.players().iter().map(|p| p.inventory()).collect::<Vec<_>>())
    };
    assert_eq!(run(), run());
}

#[test]
fn manual_seat_pauses_the_table() {
    let mut game = Game::seeded(&TOKENS, Rules::default(), 4).unwrap();
    let manual_seat = (game.current() + 1) % TOKENS.len();
    let mut table = AgentTable::random(TOKENS.len(), Some(4), 1.0);
    table.set_agent(manual_seat, Some(Box::new(ManualAgent::new())));
    assert_eq!(table.agent_kind(manual_seat), Some(AgentKind::Manual));

    assert_eq!(table.play_turns(&mut game, 5).unwrap(), 1);
    assert_eq!(game.current(), manual_seat);

    for action in [Action::Roll, Action::Move, Action::Continue, Action::EndTurn] {
        assert!(table.receive(manual_seat, action));
    }
    let mut steps = Vec::new();
    loop {
        let step = table.on_turn(&mut game).unwrap();
        steps.push(step);
        if matches!(step, Step::Ended { .. }) {
            break;
        }
    }
    assert_eq!(steps.len(), 4);
    assert!(matches!(steps[0], Step::Rolled(_)));
    assert!(matches!(steps[1], Step::Moved(_)));
}

#[test]
fn buy_probability_is_clamped() {
    assert_eq!(RandomAgent::new(Some(1)).with_buy_probability(3.0).buy_probability(), 1.0);
    assert_eq!(RandomAgent::new(Some(1)).with_buy_probability(-1.0).buy_probability(), 0.0);
    assert_eq!(RandomAgent::new(Some(1)).with_buy_probability(f64::NAN).buy_probability(), 0.0);
    assert_eq!(RandomAgent::new(None).buy_probability(), 1.0);
}

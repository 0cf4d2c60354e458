use monopoly_rs::dice::LoadedDice;
use monopoly_rs::game::Game;
use monopoly_rs::player::HoldingError;
use monopoly_rs::property::{ColorGroup, Property, PropertyKind, PropertyState};
use monopoly_rs::rules::Rules;
use monopoly_rs::token::Token;

/// A two-player game where the first player has just bought Baltic Avenue.
fn owner_of_baltic() -> (Game, Token) {
    let mut game = Game::seeded(&[Token::Penguin, Token::Unicorn], Rules::default(), 4)
        .unwrap()
        .with_dice(LoadedDice::from_faces(&[(1, 2)]).unwrap());
    let me = game.current_token();
    game.roll_dice(me).unwrap();
    game.move_player(me).unwrap();
    assert_eq!(game.buy_property(me), Ok(Property::BalticAvenue));
    (game, me)
}

#[test]
fn mortgage_round_trip_costs_ten_percent() {
    for property in Property::ALL {
        assert_eq!(property.mortgage_value(), property.base_cost() / 2, "{property}");
        assert!(property.unmortgage_cost() >= property.mortgage_value());
    }
    let expected = [
        (Property::Boardwalk, 200, 220),
        (Property::StCharlesPlace, 70, 77),
        (Property::KentuckyAvenue, 110, 121),
        (Property::MediterraneanAvenue, 30, 33),
    ];
    for (property, value, cost) in expected {
        assert_eq!(property.mortgage_value(), value, "{property}");
        assert_eq!(property.unmortgage_cost(), cost, "{property}");
    }

    let (game, me) = owner_of_baltic();
    let player = game.player(me).unwrap();
    let before = player.balance();
    assert_eq!(player.mortgage(Property::BalticAvenue), Ok(30));
    assert_eq!(player.state_of(Property::BalticAvenue), Some(PropertyState::Mortgaged));
    assert_eq!(player.cancel_mortgage(Property::BalticAvenue), Ok(33));
    assert_eq!(player.state_of(Property::BalticAvenue), Some(PropertyState::Normal));
    assert_eq!(player.balance(), before - 3);
}

#[test]
fn a_mortgaged_property_is_still_owned() {
    let (game, me) = owner_of_baltic();
    game.player(me).unwrap().mortgage(Property::BalticAvenue).unwrap();
    assert!(!game.is_available(Property::BalticAvenue));
    assert_eq!(game.find_owner(Property::BalticAvenue), Some((me, PropertyState::Mortgaged)));
}

#[test]
fn build_and_sell_walk_the_ladder() {
    let (game, me) = owner_of_baltic();
    let player = game.player(me).unwrap();
    let mut seen = vec![PropertyState::Normal];
    while player.can_build_house(Property::BalticAvenue) {
        seen.push(player.buy_house(Property::BalticAvenue).unwrap());
    }
    assert_eq!(seen.last(), Some(&PropertyState::Hotel));
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
    let state = PropertyState::Hotel;
    assert_eq!(
        player.mortgage(Property::BalticAvenue),
        Err(HoldingError::NotMortgageable { property: Property::BalticAvenue, state })
    );

    while player.can_sell_house(Property::BalticAvenue) {
        player.sell_house(Property::BalticAvenue).unwrap();
    }
    assert_eq!(player.state_of(Property::BalticAvenue), Some(PropertyState::Normal));
    // five houses bought at 50, sold back at 25
    assert_eq!(player.balance(), 5000 - 60 - 5 * 25);
}

#[test]
fn holdings_need_ownership() {
    let (game, me) = owner_of_baltic();
    let other = game.players().iter().map(|p| p.token()).find(|t| *t != me).unwrap();
    let stranger = game.player(other).unwrap();
    assert!(!stranger.can_build_house(Property::BalticAvenue));
    assert_eq!(
        stranger.buy_house(Property::BalticAvenue),
        Err(HoldingError::NotOwned(Property::BalticAvenue))
    );
    assert_eq!(
        stranger.mortgage(Property::BalticAvenue),
        Err(HoldingError::NotOwned(Property::BalticAvenue))
    );
}

#[test]
fn rent_never_decreases_up_the_ladder() {
    for property in Property::ALL {
        let rents: Vec<_> = PropertyState::ALL.iter().map(|s| property.rent(*s)).collect();
        assert_eq!(rents[0], 0, "{property} mortgaged");
        assert!(rents.windows(2).all(|w| w[0] <= w[1]), "{property}: {rents:?}");
        if let PropertyKind::Street(_) = property.kind() {
            assert!(rents[1..].windows(2).all(|w| w[0] < w[1]), "{property}: {rents:?}");
        }
    }
}

#[test]
fn house_costs_follow_color_tiers() {
    let tiers: Vec<_> = ColorGroup::ALL.iter().map(|c| c.house_cost()).collect();
    assert_eq!(tiers, vec![50, 50, 100, 100, 150, 150, 200, 200]);
    assert_eq!(Property::ShortLine.house_cost(), 0);
    assert_eq!(Property::WaterWorks.house_cost(), 0);
    let streets: usize = ColorGroup::ALL.iter().map(|c| c.properties().len()).sum();
    assert_eq!(streets, 22);
}

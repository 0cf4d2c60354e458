//! Turn actions on [`Game`].
//!
//! A turn walks `TurnStart -> RolledDice -> MovedToField -> Turn` and back to
//! `TurnStart`. Each action checks the caller and the phase before touching
//! any state, so a rejected call leaves the session exactly as it was.

use crate::board::{Field, FieldKind, SpecialField};
use crate::cards::{CardDeck, CardEffect};
use crate::dice::DiceRoll;
use crate::game::{Game, Phase};
use crate::player::Account;
use crate::property::{
    Money, Property, PropertyKind, PropertyState, RAILROAD_BASE_RENT, UTILITY_RENT_FACTOR,
    UTILITY_RENT_OFFSET,
};
use crate::token::Token;
use std::fmt;
use tracing::{debug, info, instrument};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnError {
    #[error("it is {current}'s turn, not {caller}'s")]
    NotYourTurn { caller: Token, current: Token },
    #[error("action needs phase {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("no player with token {0}")]
    UnknownPlayer(Token),
    #[error("cannot buy: {0}")]
    NotPurchasable(PurchaseCheck),
}

/// Answer to "may this player buy the field they stand on?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseCheck {
    NotAProperty,
    Unavailable(Property),
    Unaffordable(Property),
    Buyable(Property),
}

impl PurchaseCheck {
    pub fn is_buyable(self) -> bool {
        matches!(self, PurchaseCheck::Buyable(_))
    }

    pub fn property(self) -> Option<Property> {
        match self {
            PurchaseCheck::NotAProperty => None,
            PurchaseCheck::Unavailable(p)
            | PurchaseCheck::Unaffordable(p)
            | PurchaseCheck::Buyable(p) => Some(p),
        }
    }
}

impl fmt::Display for PurchaseCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseCheck::NotAProperty => f.write_str("field is not a property"),
            PurchaseCheck::Unavailable(p) => write!(f, "{p} is already owned"),
            PurchaseCheck::Unaffordable(p) => write!(f, "{p} costs more than the player has"),
            PurchaseCheck::Buyable(p) => write!(f, "{p} can be bought"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RollOutcome {
    pub roll: DiceRoll,
    /// Where the following move will take the player.
    pub destination: Field,
}

/// What happened on the field a move ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Landing {
    /// GO or just visiting.
    Nothing,
    Unowned(Property),
    OwnProperty(Property),
    Rent { property: Property, owner: Token, amount: Money },
    Tax(Money),
    FreeParking(Money),
    Card { deck: CardDeck, effect: CardEffect },
    SentToJail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct MoveOutcome {
    pub from: Field,
    /// Final position, after any trip to jail.
    pub field: Field,
    pub passed_go: bool,
    pub landing: Landing,
}

#[derive(Debug, Clone, Copy)]
enum MovePlan {
    /// Doubles streak hit the limit.
    Speeding,
    Walk { destination: Field, passed_go: bool },
}

impl MovePlan {
    fn destination(self) -> Field {
        match self {
            MovePlan::Speeding => Field::InJail,
            MovePlan::Walk { destination, .. } => destination,
        }
    }
}

/// Rent `owner` collects for landing on `property` in `state`.
pub(crate) fn rent_due(
    property: Property,
    state: PropertyState,
    owner: &Account,
    roll: DiceRoll,
) -> Money {
    if state == PropertyState::Mortgaged {
        return 0;
    }
    match property.kind() {
        PropertyKind::Street(_) => property.rent(state),
        PropertyKind::Railroad => {
            let owned = owner.count_where(Property::is_railroad) as Money;
            RAILROAD_BASE_RENT * owned
        }
        PropertyKind::Utility => {
            let owned = owner.count_where(Property::is_utility) as Money;
            (UTILITY_RENT_FACTOR * owned - UTILITY_RENT_OFFSET) * roll.sum() as Money
        }
    }
}

impl Game {
    fn ensure_turn(&self, caller: Token, expected: Phase) -> Result<(), TurnError> {
        let seat = self.seat_of(caller).ok_or(TurnError::UnknownPlayer(caller))?;
        if seat != self.current {
            return Err(TurnError::NotYourTurn { caller, current: self.current_token() });
        }
        if self.phase != expected {
            return Err(TurnError::WrongPhase { expected, actual: self.phase });
        }
        Ok(())
    }

    /// A jailed player leaves from Just Visiting, so `advance` covers them too.
    fn plan_move(&self, roll: DiceRoll) -> MovePlan {
        if self.doubles >= self.rules.doubles_to_jail {
            return MovePlan::Speeding;
        }
        let (destination, passed_go) = self.players[self.current].position().advance(roll.sum());
        MovePlan::Walk { destination, passed_go }
    }

    /// Roll both dice for `caller`.
    ///
    /// Doubles extend the streak, wherever the roller stands; anything else
    /// ends it. The returned destination is where [`Game::move_player`] will go.
    #[instrument(skip(self))]
    pub fn roll_dice(&mut self, caller: Token) -> Result<RollOutcome, TurnError> {
        self.ensure_turn(caller, Phase::TurnStart)?;
        let roll = self.dice.roll();
        self.doubles = if roll.is_doubles() { self.doubles.saturating_add(1) } else { 0 };
        self.last_roll = Some(roll);
        let destination = self.plan_move(roll).destination();
        self.phase = Phase::RolledDice;
        debug!(%roll, %destination, doubles = self.doubles, "rolled");
        Ok(RollOutcome { roll, destination })
    }

    /// Move `caller` by the last roll and settle the field they land on.
    #[instrument(skip(self))]
    pub fn move_player(&mut self, caller: Token) -> Result<MoveOutcome, TurnError> {
        self.ensure_turn(caller, Phase::RolledDice)?;
        let Some(roll) = self.last_roll else {
            return Err(TurnError::WrongPhase { expected: Phase::RolledDice, actual: self.phase });
        };
        let seat = self.current;
        let from = self.players[seat].position();
        let (landing, passed_go) = match self.plan_move(roll) {
            MovePlan::Speeding => {
                self.send_to_jail();
                (Landing::SentToJail, false)
            }
            MovePlan::Walk { destination, passed_go } => {
                {
                    let mut account = self.players[seat].lock();
                    account.position = destination;
                    if passed_go {
                        account.money += self.rules.pass_go_bonus;
                    }
                }
                if passed_go {
                    info!(token = %caller, bonus = self.rules.pass_go_bonus, "passed GO");
                }
                (self.resolve_landing(destination, roll), passed_go)
            }
        };
        self.phase = Phase::MovedToField;
        let field = self.players[seat].position();
        debug!(%from, %field, ?landing, "moved");
        Ok(MoveOutcome { from, field, passed_go, landing })
    }

    fn resolve_landing(&mut self, field: Field, roll: DiceRoll) -> Landing {
        let seat = self.current;
        match field.kind() {
            FieldKind::Street(p) | FieldKind::Railroad(p) | FieldKind::Utility(p) => {
                self.settle_property(p, roll)
            }
            FieldKind::Special(special) => match special {
                SpecialField::IncomeTax => self.charge_tax(seat, self.rules.income_tax),
                SpecialField::LuxuryTax => self.charge_tax(seat, self.rules.luxury_tax),
                SpecialField::FreeParking => {
                    let bonus = self.rules.free_parking_bonus;
                    self.adjust_cash(seat, bonus);
                    info!(token = %self.current_token(), bonus, "free parking");
                    Landing::FreeParking(bonus)
                }
                SpecialField::Chance => self.draw_card(CardDeck::Chance),
                SpecialField::CommunityChest => self.draw_card(CardDeck::CommunityChest),
                SpecialField::GoToJail => {
                    self.send_to_jail();
                    Landing::SentToJail
                }
                SpecialField::Go | SpecialField::JustVisiting | SpecialField::InJail => {
                    Landing::Nothing
                }
            },
        }
    }

    fn charge_tax(&self, seat: usize, amount: Money) -> Landing {
        self.adjust_cash(seat, -amount);
        info!(token = %self.players[seat].token(), amount, "tax paid");
        Landing::Tax(amount)
    }

    fn settle_property(&self, property: Property, roll: DiceRoll) -> Landing {
        let Some(owner) = self.owner_seat(property) else {
            return Landing::Unowned(property);
        };
        if owner == self.current {
            return Landing::OwnProperty(property);
        }
        let amount = {
            let (mut payer, mut payee) = self.lock_pair(self.current, owner);
            let amount = match payee.inventory.get(&property) {
                Some(state) => rent_due(property, *state, &payee, roll),
                None => 0,
            };
            payer.money -= amount;
            payee.money += amount;
            amount
        };
        let owner = self.players[owner].token();
        info!(payer = %self.current_token(), %owner, %property, amount, "rent paid");
        Landing::Rent { property, owner, amount }
    }

    fn draw_card(&mut self, deck: CardDeck) -> Landing {
        let drawer = self.current_token();
        let effect = self.cards.draw(deck, drawer);
        match effect {
            CardEffect::Nothing => {}
            CardEffect::Collect(amount) => self.adjust_cash(self.current, amount),
            CardEffect::Pay(amount) => self.adjust_cash(self.current, -amount),
            CardEffect::GoToJail => self.send_to_jail(),
        }
        debug!(?deck, ?effect, "card drawn");
        Landing::Card { deck, effect }
    }

    /// Whether `caller` could buy the field they are standing on. Not tied to
    /// a phase.
    pub fn can_buy_property(&self, caller: Token) -> Result<PurchaseCheck, TurnError> {
        let player = self.player(caller).ok_or(TurnError::UnknownPlayer(caller))?;
        let (position, money) = {
            let account = player.lock();
            (account.position, account.money)
        };
        let Some(property) = position.property() else {
            return Ok(PurchaseCheck::NotAProperty);
        };
        if !self.is_available(property) {
            return Ok(PurchaseCheck::Unavailable(property));
        }
        if money < property.base_cost() {
            return Ok(PurchaseCheck::Unaffordable(property));
        }
        Ok(PurchaseCheck::Buyable(property))
    }

    /// Buy the field `caller` just moved to. The phase does not change.
    #[instrument(skip(self))]
    pub fn buy_property(&mut self, caller: Token) -> Result<Property, TurnError> {
        self.ensure_turn(caller, Phase::MovedToField)?;
        let property = match self.can_buy_property(caller)? {
            PurchaseCheck::Buyable(p) => p,
            other => return Err(TurnError::NotPurchasable(other)),
        };
        {
            let mut account = self.players[self.current].lock();
            account.money -= property.base_cost();
            account.inventory.insert(property, PropertyState::Normal);
        }
        info!(token = %caller, %property, price = property.base_cost(), "bought");
        Ok(property)
    }

    /// Done with the landing; open the free part of the turn.
    #[instrument(skip(self))]
    pub fn continue_turn(&mut self, caller: Token) -> Result<(), TurnError> {
        self.ensure_turn(caller, Phase::MovedToField)?;
        self.phase = Phase::Turn;
        debug!("turn continues");
        Ok(())
    }

    /// Finish the turn. Returns `true` when the same player rolls again
    /// because of doubles.
    #[instrument(skip(self))]
    pub fn end_turn(&mut self, caller: Token) -> Result<bool, TurnError> {
        self.ensure_turn(caller, Phase::Turn)?;
        let again = self.doubles > 0;
        if !again {
            self.advance_turn();
        }
        self.phase = Phase::TurnStart;
        debug!(again, "turn ended");
        Ok(again)
    }
}

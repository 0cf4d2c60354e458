//! Chance and community chest draws.
//!
//! The engine only needs a seam to invoke: whatever implements
//! [`CardStrategy`] decides the effect, the turn engine applies it. The
//! default [`NoCards`] draws blanks.

use crate::property::Money;
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardDeck {
    Chance,
    CommunityChest,
}

/// What a drawn card does to the player who drew it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardEffect {
    Nothing,
    Collect(Money),
    Pay(Money),
    GoToJail,
}

pub trait CardStrategy {
    fn draw(&mut self, deck: CardDeck, drawer: Token) -> CardEffect;
}

/// Every card is blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCards;

impl CardStrategy for NoCards {
    fn draw(&mut self, _deck: CardDeck, _drawer: Token) -> CardEffect {
        CardEffect::Nothing
    }
}

/// Hands out a fixed list of effects in order, then blanks.
#[derive(Debug, Clone, Default)]
pub struct StackedCards {
    effects: Vec<CardEffect>,
}

impl StackedCards {
    pub fn new(mut effects: Vec<CardEffect>) -> Self {
        effects.reverse();
        Self { effects }
    }

    pub fn remaining(&self) -> usize {
        self.effects.len()
    }
}

impl CardStrategy for StackedCards {
    fn draw(&mut self, _deck: CardDeck, _drawer: Token) -> CardEffect {
        self.effects.pop().unwrap_or(CardEffect::Nothing)
    }
}

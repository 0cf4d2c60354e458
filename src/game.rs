use crate::board::Field;
use crate::cards::{CardStrategy, NoCards};
use crate::dice::{Dice, DiceRoll, RandomDice};
use crate::player::{Account, HoldingError, Player};
use crate::property::{Money, Property, PropertyState};
use crate::rules::{ConfigError, Rules};
use crate::token::Token;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::MutexGuard;
use tracing::{debug, info};

/// Where the current player is inside their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    TurnStart,
    RolledDice,
    MovedToField,
    Turn,
}

impl Phase {
    pub const ALL: [Phase; 4] =
        [Phase::TurnStart, Phase::RolledDice, Phase::MovedToField, Phase::Turn];

    pub const fn symbol(self) -> &'static str {
        match self {
            Phase::TurnStart => "GAME_TURN_START",
            Phase::RolledDice => "GAME_ROLLED_DICE",
            Phase::MovedToField => "GAME_MOVED_TO_FIELD",
            Phase::Turn => "GAME_TURN",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SetupError {
    #[error("need at least two players, got {0}")]
    TooFewPlayers(usize),
    #[error("token {0} is taken twice")]
    DuplicateToken(Token),
    #[error(transparent)]
    Rules(#[from] ConfigError),
}

/// One session: the roster in turn order plus the turn pointer, phase and
/// doubles counter. Turn actions live in [`crate::turn`].
#[non_exhaustive]
pub struct Game {
    pub(crate) rules: Rules,
    pub(crate) players: Vec<Player>,
    pub(crate) current: usize,
    pub(crate) phase: Phase,
    pub(crate) last_roll: Option<DiceRoll>,
    pub(crate) doubles: u8,
    pub(crate) dice: Box<dyn Dice + Send + Sync>,
    pub(crate) cards: Box<dyn CardStrategy + Send + Sync>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("last_roll", &self.last_roll)
            .field("doubles", &self.doubles)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Seat `tokens` in the given order with a random starting player.
    pub fn new(tokens: &[Token], rules: Rules) -> Result<Self, SetupError> {
        Self::build(tokens, rules, &mut rand::rng(), RandomDice::from_entropy())
    }

    /// Like [`Game::new`], but the starting player and the default dice come
    /// from `seed`.
    ///
    /// ```
    /// use monopoly_rs::game::Game;
    /// use monopoly_rs::rules::Rules;
    /// use monopoly_rs::token::Token;
    ///
    /// let tokens = [Token::Cat, Token::Dog, Token::Hat];
    /// let a = Game::seeded(&tokens, Rules::default(), 9).unwrap();
    /// let b = Game::seeded(&tokens, Rules::default(), 9).unwrap();
    /// assert_eq!(a.current_token(), b.current_token());
    /// assert!(Game::seeded(&[Token::Cat], Rules::default(), 9).is_err());
    /// ```
    pub fn seeded(tokens: &[Token], rules: Rules, seed: u64) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dice = RandomDice::seeded(rng.random());
        Self::build(tokens, rules, &mut rng, dice)
    }

    fn build<R: Rng>(
        tokens: &[Token],
        rules: Rules,
        rng: &mut R,
        dice: RandomDice,
    ) -> Result<Self, SetupError> {
        if tokens.len() < 2 {
            return Err(SetupError::TooFewPlayers(tokens.len()));
        }
        let mut seen = BTreeSet::new();
        if let Some(dup) = tokens.iter().find(|t| !seen.insert(**t)) {
            return Err(SetupError::DuplicateToken(*dup));
        }
        rules.validate()?;
        let players: Vec<Player> =
            tokens.iter().map(|t| Player::new(*t, rules.starting_cash)).collect();
        let current = rng.random_range(0..players.len());
        info!(players = players.len(), starting = %players[current].token(), "game created");
        Ok(Self {
            rules,
            players,
            current,
            phase: Phase::TurnStart,
            last_roll: None,
            doubles: 0,
            dice: Box::new(dice),
            cards: Box::new(NoCards),
        })
    }

    /// Replace the dice source.
    pub fn with_dice(mut self, dice: impl Dice + Send + Sync + 'static) -> Self {
        self.dice = Box::new(dice);
        self
    }

    /// Replace the chance and community chest strategy.
    pub fn with_cards(mut self, cards: impl CardStrategy + Send + Sync + 'static) -> Self {
        self.cards = Box::new(cards);
        self
    }

    /// Returns the player whose turn it is and the phase they are in
    pub fn current_player(&self) -> (&Player, Phase) {
        (&self.players[self.current], self.phase)
    }

    /// Returns the token of the player whose turn it is
    pub fn current_token(&self) -> Token {
        self.players[self.current].token()
    }

    /// Returns the seat index of the current player
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the most recent roll of the session
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    /// Returns the number of consecutive doubles of the current player
    pub fn doubles(&self) -> u8 {
        self.doubles
    }

    /// Returns the players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, token: Token) -> Option<&Player> {
        self.players.iter().find(|p| p.token() == token)
    }

    pub fn seat_of(&self, token: Token) -> Option<usize> {
        self.players.iter().position(|p| p.token() == token)
    }

    /// Returns the rules of this session
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Holder of `property` and its state. Locks one account at a time.
    pub fn find_owner(&self, property: Property) -> Option<(Token, PropertyState)> {
        self.owner_seat(property).and_then(|seat| {
            let player = &self.players[seat];
            player.state_of(property).map(|state| (player.token(), state))
        })
    }

    pub(crate) fn owner_seat(&self, property: Property) -> Option<usize> {
        self.players.iter().position(|p| p.owns(property))
    }

    pub fn is_available(&self, property: Property) -> bool {
        self.owner_seat(property).is_none()
    }

    /// Move the turn pointer to the next seat, wrapping. The phase is left alone.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
        debug!(current = %self.current_token(), "turn passed");
    }

    /// Sell `property` from `seller` to `buyer` for `price`, keeping its state.
    ///
    /// Both accounts are locked for the whole exchange, so the property is
    /// never held by two players or by none.
    pub fn transfer_property(
        &self,
        seller: Token,
        buyer: Token,
        property: Property,
        price: Money,
    ) -> Result<(), HoldingError> {
        let from = self.seat_of(seller).ok_or(HoldingError::UnknownPlayer(seller))?;
        let to = self.seat_of(buyer).ok_or(HoldingError::UnknownPlayer(buyer))?;
        if from == to {
            return Err(HoldingError::SameParty);
        }
        let (mut s, mut b) = self.lock_pair(from, to);
        let state = s.inventory.get(&property).copied().ok_or(HoldingError::NotOwned(property))?;
        if b.money < price {
            return Err(HoldingError::InsufficientFunds { needed: price, available: b.money });
        }
        s.inventory.remove(&property);
        b.inventory.insert(property, state);
        s.money += price;
        b.money -= price;
        drop((s, b));
        info!(%seller, %buyer, %property, price, "property traded");
        Ok(())
    }

    /// Lock two distinct accounts, lower seat first, and return the guards
    /// in argument order.
    pub(crate) fn lock_pair(
        &self,
        a: usize,
        b: usize,
    ) -> (MutexGuard<'_, Account>, MutexGuard<'_, Account>) {
        debug_assert_ne!(a, b, "lock_pair needs two different seats");
        if a < b {
            let first = self.players[a].lock();
            let second = self.players[b].lock();
            (first, second)
        } else {
            let second = self.players[b].lock();
            let first = self.players[a].lock();
            (first, second)
        }
    }

    pub(crate) fn adjust_cash(&self, seat: usize, delta: Money) {
        self.players[seat].lock().money += delta;
    }

    /// Put the current player in jail and end any doubles streak.
    pub(crate) fn send_to_jail(&mut self) {
        self.players[self.current].lock().position = Field::InJail;
        self.doubles = 0;
        info!(token = %self.current_token(), "sent to jail");
    }
}

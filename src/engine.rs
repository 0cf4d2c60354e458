// Turn engine API boundary. Drivers (agents, the simulation binary, an
// interactive frontend) go through this trait instead of touching `Game`
// internals. It is implemented for the core `Game` type.

use crate::board::Field;
use crate::dice::DiceRoll;
use crate::game::{Game, Phase};
use crate::property::{Money, Property, PropertyState};
use crate::token::Token;
use crate::turn::{MoveOutcome, PurchaseCheck, RollOutcome, TurnError};

pub trait TurnEngine {
    // Turn lifecycle
    fn roll_dice(&mut self, caller: Token) -> Result<RollOutcome, TurnError>;
    fn move_player(&mut self, caller: Token) -> Result<MoveOutcome, TurnError>;
    fn buy_property(&mut self, caller: Token) -> Result<Property, TurnError>;
    fn continue_turn(&mut self, caller: Token) -> Result<(), TurnError>;
    fn end_turn(&mut self, caller: Token) -> Result<bool, TurnError>;

    // Queries
    fn can_buy_property(&self, caller: Token) -> Result<PurchaseCheck, TurnError>;
    fn current_token(&self) -> Token;
    fn phase(&self) -> Phase;
    fn last_roll(&self) -> Option<DiceRoll>;
    fn tokens(&self) -> Vec<Token>;
    fn balance(&self, token: Token) -> Option<Money>;
    fn position(&self, token: Token) -> Option<Field>;
    fn owner(&self, property: Property) -> Option<(Token, PropertyState)>;
}

impl TurnEngine for Game {
    fn roll_dice(&mut self, caller: Token) -> Result<RollOutcome, TurnError> {
        self.roll_dice(caller)
    }
    fn move_player(&mut self, caller: Token) -> Result<MoveOutcome, TurnError> {
        self.move_player(caller)
    }
    fn buy_property(&mut self, caller: Token) -> Result<Property, TurnError> {
        self.buy_property(caller)
    }
    fn continue_turn(&mut self, caller: Token) -> Result<(), TurnError> {
        self.continue_turn(caller)
    }
    fn end_turn(&mut self, caller: Token) -> Result<bool, TurnError> {
        self.end_turn(caller)
    }

    fn can_buy_property(&self, caller: Token) -> Result<PurchaseCheck, TurnError> {
        self.can_buy_property(caller)
    }
    fn current_token(&self) -> Token {
        self.current_token()
    }
    fn phase(&self) -> Phase {
        self.phase
    }
    fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }
    fn tokens(&self) -> Vec<Token> {
        self.players.iter().map(|p| p.token()).collect()
    }
    fn balance(&self, token: Token) -> Option<Money> {
        self.player(token).map(|p| p.balance())
    }
    fn position(&self, token: Token) -> Option<Field> {
        self.player(token).map(|p| p.position())
    }
    fn owner(&self, property: Property) -> Option<(Token, PropertyState)> {
        self.find_owner(property)
    }
}

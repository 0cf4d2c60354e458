use crate::board::Field;
use crate::property::{Money, Property, PropertyState};
use crate::token::Token;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::info;

/// Owned properties and their improvement level.
pub type Inventory = BTreeMap<Property, PropertyState>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HoldingError {
    #[error("{0} is not owned by this player")]
    NotOwned(Property),
    #[error("{0} is not a street and cannot carry houses")]
    NotAStreet(Property),
    #[error("{0} already carries a hotel")]
    FullyImproved(Property),
    #[error("{0} has no houses to sell")]
    NoHouses(Property),
    #[error("{property} cannot be mortgaged in state {state}")]
    NotMortgageable { property: Property, state: PropertyState },
    #[error("{0} is not mortgaged")]
    NotMortgaged(Property),
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Money, available: Money },
    #[error("a player cannot trade with themselves")]
    SameParty,
    #[error("no player with token {0}")]
    UnknownPlayer(Token),
}

/// The lock-protected part of a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub(crate) money: Money,
    pub(crate) position: Field,
    pub(crate) inventory: Inventory,
}

impl Account {
    pub(crate) fn new(starting_cash: Money) -> Self {
        Self { money: starting_cash, position: Field::Go, inventory: Inventory::new() }
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn position(&self) -> Field {
        self.position
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub(crate) fn count_where(&self, pred: impl Fn(Property) -> bool) -> usize {
        self.inventory.keys().filter(|p| pred(**p)).count()
    }

    fn require_funds(&self, needed: Money) -> Result<(), HoldingError> {
        if self.money < needed {
            return Err(HoldingError::InsufficientFunds { needed, available: self.money });
        }
        Ok(())
    }

    fn owned_state(&self, property: Property) -> Result<PropertyState, HoldingError> {
        self.inventory.get(&property).copied().ok_or(HoldingError::NotOwned(property))
    }

    fn check_build(&self, property: Property) -> Result<PropertyState, HoldingError> {
        let state = self.owned_state(property)?;
        if !property.is_street() {
            return Err(HoldingError::NotAStreet(property));
        }
        match state.built_up() {
            Some(next) => Ok(next),
            None if state == PropertyState::Hotel => Err(HoldingError::FullyImproved(property)),
            None => Err(HoldingError::NotMortgageable { property, state }),
        }
    }

    fn check_sell(&self, property: Property) -> Result<PropertyState, HoldingError> {
        let state = self.owned_state(property)?;
        state.torn_down().ok_or(HoldingError::NoHouses(property))
    }
}

/// A seat in the game: the token plus its account behind a per-player lock.
#[derive(Debug)]
pub struct Player {
    token: Token,
    account: Mutex<Account>,
}

impl Player {
    pub(crate) fn new(token: Token, starting_cash: Money) -> Self {
        Self { token, account: Mutex::new(Account::new(starting_cash)) }
    }

    pub fn token(&self) -> Token {
        self.token
    }

    /// Every write happens after its checks pass, so a poisoned lock still
    /// guards a consistent account.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Account> {
        self.account.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the account at this instant.
    pub fn snapshot(&self) -> Account {
        self.lock().clone()
    }

    pub fn balance(&self) -> Money {
        self.lock().money
    }

    pub fn position(&self) -> Field {
        self.lock().position
    }

    pub fn is_in_jail(&self) -> bool {
        self.position() == Field::InJail
    }

    pub fn inventory(&self) -> Inventory {
        self.lock().inventory.clone()
    }

    pub fn state_of(&self, property: Property) -> Option<PropertyState> {
        self.lock().inventory.get(&property).copied()
    }

    pub fn owns(&self, property: Property) -> bool {
        self.state_of(property).is_some()
    }

    /// Held, a street, and below hotel.
    pub fn can_build_house(&self, property: Property) -> bool {
        self.lock().check_build(property).is_ok()
    }

    /// `can_build_house` and enough cash for one house.
    pub fn can_buy_house(&self, property: Property) -> bool {
        let account = self.lock();
        account.check_build(property).is_ok() && account.money >= property.house_cost()
    }

    /// Put one house on `property` and return the new state.
    pub fn buy_house(&self, property: Property) -> Result<PropertyState, HoldingError> {
        let mut account = self.lock();
        let next = account.check_build(property)?;
        let cost = property.house_cost();
        account.require_funds(cost)?;
        account.money -= cost;
        account.inventory.insert(property, next);
        info!(token = %self.token, %property, state = %next, cost, "built");
        Ok(next)
    }

    pub fn can_sell_house(&self, property: Property) -> bool {
        self.lock().check_sell(property).is_ok()
    }

    /// Sell one house back to the bank for half its cost.
    pub fn sell_house(&self, property: Property) -> Result<PropertyState, HoldingError> {
        let mut account = self.lock();
        let prev = account.check_sell(property)?;
        let refund = property.house_cost() / 2;
        account.money += refund;
        account.inventory.insert(property, prev);
        info!(token = %self.token, %property, state = %prev, refund, "sold house");
        Ok(prev)
    }

    /// Mortgage an unimproved property for its mortgage value.
    pub fn mortgage(&self, property: Property) -> Result<Money, HoldingError> {
        let mut account = self.lock();
        let state = account.owned_state(property)?;
        if state != PropertyState::Normal {
            return Err(HoldingError::NotMortgageable { property, state });
        }
        let value = property.mortgage_value();
        account.money += value;
        account.inventory.insert(property, PropertyState::Mortgaged);
        info!(token = %self.token, %property, value, "mortgaged");
        Ok(value)
    }

    /// Lift a mortgage for the mortgage value plus 10% (rounded down).
    pub fn cancel_mortgage(&self, property: Property) -> Result<Money, HoldingError> {
        let mut account = self.lock();
        if account.owned_state(property)? != PropertyState::Mortgaged {
            return Err(HoldingError::NotMortgaged(property));
        }
        let cost = property.unmortgage_cost();
        account.require_funds(cost)?;
        account.money -= cost;
        account.inventory.insert(property, PropertyState::Normal);
        info!(token = %self.token, %property, cost, "mortgage lifted");
        Ok(cost)
    }
}

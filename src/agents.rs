//! Agents: pluggable seat drivers.
//!
//! `PlayerAgent` is the trait a seat controller implements; `AgentTable`
//! decides which agent acts for the current player. `RandomAgent` plays
//! uniformly random turns and `ManualAgent` replays queued actions, which is
//! the hook an interactive frontend uses. Each `on_turn` call performs at most
//! one turn action.

use crate::engine::TurnEngine;
use crate::game::Phase;
use crate::property::Property;
use crate::token::Token;
use crate::turn::{MoveOutcome, PurchaseCheck, RollOutcome, TurnError};
use core::fmt;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::VecDeque;
use tracing::debug;

/// Kinds of agents attached to seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Manual,
    Random,
}

/// One turn action, as queued by a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Roll,
    Move,
    Buy,
    Continue,
    EndTurn,
}

/// What a single `on_turn` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Step {
    /// Nothing to do right now.
    Idle,
    Rolled(RollOutcome),
    Moved(MoveOutcome),
    Bought(Property),
    Continued,
    Ended { again: bool },
}

/// A seat controller that acts for a player when it is their turn.
pub trait PlayerAgent {
    /// Called when `token` is the current player.
    fn on_turn(&mut self, engine: &mut dyn TurnEngine, token: Token) -> Result<Step, TurnError>;
    /// The kind of this agent.
    fn kind(&self) -> AgentKind {
        AgentKind::Manual
    }
    /// Optionally accept an action intent; the default ignores it.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

fn perform(engine: &mut dyn TurnEngine, token: Token, action: Action) -> Result<Step, TurnError> {
    Ok(match action {
        Action::Roll => Step::Rolled(engine.roll_dice(token)?),
        Action::Move => Step::Moved(engine.move_player(token)?),
        Action::Buy => Step::Bought(engine.buy_property(token)?),
        Action::Continue => {
            engine.continue_turn(token)?;
            Step::Continued
        }
        Action::EndTurn => Step::Ended { again: engine.end_turn(token)? },
    })
}

/// Executes actions queued by a frontend, one per call.
#[derive(Debug, Default)]
pub struct ManualAgent {
    queue: VecDeque<Action>,
}

impl ManualAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl PlayerAgent for ManualAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Manual
    }
    fn receive(&mut self, action: Action) -> bool {
        self.queue.push_back(action);
        true
    }
    fn on_turn(&mut self, engine: &mut dyn TurnEngine, token: Token) -> Result<Step, TurnError> {
        if engine.current_token() != token {
            return Ok(Step::Idle);
        }
        match self.queue.pop_front() {
            Some(action) => perform(engine, token, action),
            None => Ok(Step::Idle),
        }
    }
}

/// Plays legal turns at random. The only real choice is whether to buy,
/// taken with `buy_probability`.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
    buy_probability: f64,
}

impl RandomAgent {
    /// A `None` seed draws one from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng, buy_probability: 1.0 }
    }

    /// Clamped to `0.0..=1.0`; NaN counts as never.
    pub fn with_buy_probability(mut self, p: f64) -> Self {
        self.buy_probability = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self
    }

    pub fn buy_probability(&self) -> f64 {
        self.buy_probability
    }

    fn wants_to_buy(&mut self) -> bool {
        self.rng.random::<f64>() < self.buy_probability
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PlayerAgent for RandomAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }
    fn on_turn(&mut self, engine: &mut dyn TurnEngine, token: Token) -> Result<Step, TurnError> {
        if engine.current_token() != token {
            return Ok(Step::Idle);
        }
        let action = match engine.phase() {
            Phase::TurnStart => Action::Roll,
            Phase::RolledDice => Action::Move,
            Phase::MovedToField => match engine.can_buy_property(token)? {
                PurchaseCheck::Buyable(_) if self.wants_to_buy() => Action::Buy,
                _ => Action::Continue,
            },
            Phase::Turn => Action::EndTurn,
        };
        perform(engine, token, action)
    }
}

/// One optional agent per seat; drives the agent of the current player.
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
}

impl fmt::Debug for AgentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags: String = self
            .seats
            .iter()
            .map(|a| match a.as_deref().map(|ag| ag.kind()) {
                Some(AgentKind::Random) => 'R',
                Some(AgentKind::Manual) => 'M',
                None => '-',
            })
            .collect();
        write!(f, "AgentTable({flags})")
    }
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        seats.resize_with(n, || None);
        Self { seats }
    }

    /// A random agent on every seat, seeded from `seed` plus the seat index.
    pub fn random(n: usize, seed: Option<u64>, buy_probability: f64) -> Self {
        let mut table = Self::for_seats(n);
        for seat in 0..n {
            let agent = RandomAgent::new(seed.map(|s| s.wrapping_add(seat as u64)))
                .with_buy_probability(buy_probability);
            table.set_agent(seat, Some(Box::new(agent)));
        }
        table
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.seats.resize_with(seat + 1, || None);
        }
        self.seats[seat] = agent;
    }

    /// Return the kind of agent at a seat, if any.
    pub fn agent_kind(&self, seat: usize) -> Option<AgentKind> {
        self.seats.get(seat).and_then(|a| a.as_deref().map(|ag| ag.kind()))
    }

    /// Send an action intent to a specific seat agent, if any.
    pub fn receive(&mut self, seat: usize, action: Action) -> bool {
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            return agent.receive(action);
        }
        false
    }

    /// Whether a seat currently has an agent assigned.
    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).map(|a| a.is_some()).unwrap_or(false)
    }

    /// Drive the agent assigned to the current player, if any.
    pub fn on_turn(&mut self, engine: &mut dyn TurnEngine) -> Result<Step, TurnError> {
        let token = engine.current_token();
        let Some(seat) = engine.tokens().iter().position(|t| *t == token) else {
            return Ok(Step::Idle);
        };
        match self.seats.get_mut(seat) {
            Some(Some(agent)) => agent.on_turn(engine, token),
            _ => Ok(Step::Idle),
        }
    }

    /// Run agents until `turns` turns have been handed to the next player.
    ///
    /// Stops early when the current seat has nothing to do, and returns the
    /// number of completed turns.
    pub fn play_turns(
        &mut self,
        engine: &mut dyn TurnEngine,
        turns: usize,
    ) -> Result<usize, TurnError> {
        let mut completed = 0;
        while completed < turns {
            match self.on_turn(engine)? {
                Step::Idle => break,
                Step::Ended { again: false } => completed += 1,
                _ => {}
            }
        }
        debug!(completed, "agents stopped");
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::LoadedDice;
    use crate::game::Game;
    use crate::rules::Rules;

    fn mk_game() -> Game {
        Game::seeded(&[Token::Cat, Token::Dog], Rules::default(), 8)
            .unwrap()
            .with_dice(LoadedDice::from_faces(&[(1, 2)]).unwrap())
    }

    #[test]
    fn random_agent_buys_what_it_lands_on() {
        let mut game = mk_game();
        let me = game.current_token();
        let mut agent = RandomAgent::new(Some(1));
        assert!(matches!(agent.on_turn(&mut game, me).unwrap(), Step::Rolled(_)));
        assert!(matches!(agent.on_turn(&mut game, me).unwrap(), Step::Moved(_)));
        assert_eq!(agent.on_turn(&mut game, me).unwrap(), Step::Bought(Property::BalticAvenue));
        assert_eq!(agent.on_turn(&mut game, me).unwrap(), Step::Continued);
        assert_eq!(agent.on_turn(&mut game, me).unwrap(), Step::Ended { again: false });
        assert_eq!(agent.on_turn(&mut game, me).unwrap(), Step::Idle);
    }

    #[test]
    fn zero_buy_probability_never_buys() {
        let mut game = mk_game();
        let mut table = AgentTable::random(2, Some(3), 0.0);
        assert_eq!(table.play_turns(&mut game, 6).unwrap(), 6);
        assert!(game.players().iter().all(|p| p.inventory().is_empty()));
    }

    #[test]
    fn manual_agent_replays_queue() {
        let mut game = mk_game();
        let seat = game.current();
        let mut table = AgentTable::for_seats(2);
        table.set_agent(seat, Some(Box::new(ManualAgent::new())));
        for action in [Action::Roll, Action::Move, Action::Continue] {
            assert!(table.receive(seat, action));
        }
        assert!(matches!(table.on_turn(&mut game).unwrap(), Step::Rolled(_)));
        assert!(matches!(table.on_turn(&mut game).unwrap(), Step::Moved(_)));
        assert_eq!(table.on_turn(&mut game).unwrap(), Step::Continued);
        assert_eq!(table.on_turn(&mut game).unwrap(), Step::Idle);
        assert_eq!(game.phase(), Phase::Turn);
    }

    #[test]
    fn manual_agent_surfaces_illegal_actions() {
        let mut game = mk_game();
        let me = game.current_token();
        let mut agent = ManualAgent::new();
        agent.receive(Action::Move);
        assert!(matches!(agent.on_turn(&mut game, me), Err(TurnError::WrongPhase { .. })));
        assert_eq!(agent.pending(), 0);
    }

    #[test]
    fn empty_seat_stops_play() {
        let mut game = mk_game();
        let mut table = AgentTable::for_seats(2);
        assert!(!table.has_agent(0));
        assert_eq!(table.play_turns(&mut game, 10).unwrap(), 0);
        assert_eq!(format!("{table:?}"), "AgentTable(--)");
        table.set_agent(1, Some(Box::new(RandomAgent::default())));
        assert_eq!(table.agent_kind(1), Some(AgentKind::Random));
        assert_eq!(format!("{table:?}"), "AgentTable(-R)");
    }
}

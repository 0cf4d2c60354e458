//! monopoly-rs: Monopoly turn engine
//!
//! Goals:
//! - Legal turn progression enforced by a small state machine
//! - Rent, house and mortgage economics from static tables
//! - Per-player locks so holdings can be managed from several threads
//! - No panics for illegal calls; every action returns a `Result`
//!
//! ## Quick start: play one turn
//! ```
//! use monopoly_rs::board::Field;
//! use monopoly_rs::dice::LoadedDice;
//! use monopoly_rs::game::Game;
//! use monopoly_rs::rules::Rules;
//! use monopoly_rs::token::Token;
//!
//! let dice = LoadedDice::from_faces(&[(1, 2)]).unwrap();
//! let mut game = Game::seeded(&[Token::Cat, Token::Dog], Rules::default(), 1)
//!     .unwrap()
//!     .with_dice(dice);
//! let me = game.current_token();
//!
//! game.roll_dice(me).unwrap();
//! let moved = game.move_player(me).unwrap();
//! assert_eq!(moved.field, Field::BalticAvenue);
//! game.buy_property(me).unwrap();
//! game.continue_turn(me).unwrap();
//! assert!(!game.end_turn(me).unwrap());
//! assert_ne!(game.current_token(), me);
//! ```
//!
//! ## Simulation
//! Run random turns with:
//! ```sh
//! cargo run --bin monopoly -- --tokens cat,dog,hat --turns 100 --seed 7
//! ```

pub mod agents;
pub mod board;
pub mod cards;
pub mod dice;
pub mod engine;
pub mod game;
pub mod lang;
pub mod player;
pub mod property;
pub mod rules;
pub mod token;
pub mod turn;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

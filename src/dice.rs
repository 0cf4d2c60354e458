use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiceError {
    #[error("die face out of range 1..=6: {0}")]
    FaceOutOfRange(u8),
    #[error("loaded dice need at least one roll")]
    EmptySequence,
}

/// The faces of two six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiceRoll(u8, u8);

impl DiceRoll {
    /// ```
    /// use monopoly_rs::dice::DiceRoll;
    ///
    /// let roll = DiceRoll::new(3, 3).unwrap();
    /// assert!(roll.is_doubles());
    /// assert_eq!(roll.sum(), 6);
    /// assert!(DiceRoll::new(0, 3).is_err());
    /// ```
    pub fn new(first: u8, second: u8) -> Result<Self, DiceError> {
        for face in [first, second] {
            if !(1..=6).contains(&face) {
                return Err(DiceError::FaceOutOfRange(face));
            }
        }
        Ok(Self(first, second))
    }

    pub fn first(&self) -> u8 {
        self.0
    }

    pub fn second(&self) -> u8 {
        self.1
    }

    pub fn faces(&self) -> (u8, u8) {
        (self.0, self.1)
    }

    pub fn sum(&self) -> usize {
        usize::from(self.0) + usize::from(self.1)
    }

    pub fn is_doubles(&self) -> bool {
        self.0 == self.1
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}]", self.0, self.1)
    }
}

/// Source of dice rolls for a game session.
pub trait Dice {
    fn roll(&mut self) -> DiceRoll;
}

/// Two independent uniform dice.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: ChaCha8Rng,
}

impl RandomDice {
    /// Seeded for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> DiceRoll {
        DiceRoll(self.rng.random_range(1..=6), self.rng.random_range(1..=6))
    }
}

/// Replays a fixed sequence of rolls, starting over once exhausted.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    rolls: Vec<DiceRoll>,
    next: usize,
}

impl LoadedDice {
    pub fn new(rolls: Vec<DiceRoll>) -> Result<Self, DiceError> {
        if rolls.is_empty() {
            return Err(DiceError::EmptySequence);
        }
        Ok(Self { rolls, next: 0 })
    }

    /// Build from raw face pairs, validating every face.
    ///
    /// ```
    /// use monopoly_rs::dice::{Dice, LoadedDice};
    ///
    /// let mut dice = LoadedDice::from_faces(&[(3, 4), (6, 6)]).unwrap();
    /// assert_eq!(dice.roll().sum(), 7);
    /// assert!(dice.roll().is_doubles());
    /// assert_eq!(dice.roll().sum(), 7);
    /// ```
    pub fn from_faces(faces: &[(u8, u8)]) -> Result<Self, DiceError> {
        let rolls = faces.iter().map(|&(a, b)| DiceRoll::new(a, b)).collect::<Result<_, _>>()?;
        Self::new(rolls)
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> DiceRoll {
        let roll = self.rolls[self.next % self.rolls.len()];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}

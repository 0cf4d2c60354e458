use std::fmt;
use std::str::FromStr;

/// Playing pieces. A token identifies its player for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Boot,
    Cake,
    Car,
    Cat,
    Dog,
    Duck,
    Hat,
    Horse,
    Iron,
    MoneyBag,
    Penguin,
    Ship,
    Thimble,
    Train,
    Unicorn,
    Wheelbarrow,
}

impl Token {
    pub const ALL: [Token; 16] = [
        Token::Boot,
        Token::Cake,
        Token::Car,
        Token::Cat,
        Token::Dog,
        Token::Duck,
        Token::Hat,
        Token::Horse,
        Token::Iron,
        Token::MoneyBag,
        Token::Penguin,
        Token::Ship,
        Token::Thimble,
        Token::Train,
        Token::Unicorn,
        Token::Wheelbarrow,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Token::Boot => "BOOT",
            Token::Cake => "CAKE",
            Token::Car => "CAR",
            Token::Cat => "CAT",
            Token::Dog => "DOG",
            Token::Duck => "DUCK",
            Token::Hat => "HAT",
            Token::Horse => "HORSE",
            Token::Iron => "IRON",
            Token::MoneyBag => "MONEY_BAG",
            Token::Penguin => "PENGUIN",
            Token::Ship => "SHIP",
            Token::Thimble => "THIMBLE",
            Token::Train => "TRAIN",
            Token::Unicorn => "UNICORN",
            Token::Wheelbarrow => "WHEELBARROW",
        }
    }

    /// Key of the token's flavour text, e.g. `monopoly.token.cat.description`.
    pub fn description_key(self) -> String {
        format!("monopoly.token.{}.description", self.symbol().to_ascii_lowercase())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenParseError {
    #[error("invalid token: '{0}'")]
    Invalid(String),
}

impl FromStr for Token {
    type Err = TokenParseError;

    /// Accepts the symbol in any case, with `-`, `_` or nothing between words
    /// (`money_bag`, `Money-Bag`, `moneybag`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '_' && *c != '-').collect();
        let wanted = wanted.to_ascii_uppercase();
        Token::ALL
            .iter()
            .copied()
            .find(|t| t.symbol().replace('_', "") == wanted)
            .ok_or_else(|| TokenParseError::Invalid(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_symbol_variants() {
        assert_eq!("cat".parse::<Token>().unwrap(), Token::Cat);
        assert_eq!("MONEY_BAG".parse::<Token>().unwrap(), Token::MoneyBag);
        assert_eq!("money-bag".parse::<Token>().unwrap(), Token::MoneyBag);
        assert_eq!(" wheelbarrow ".parse::<Token>().unwrap(), Token::Wheelbarrow);
        assert!(matches!("kettle".parse::<Token>(), Err(TokenParseError::Invalid(_))));
    }

    #[test]
    fn description_key_uses_lowercase_symbol() {
        assert_eq!(Token::MoneyBag.description_key(), "monopoly.token.money_bag.description");
    }
}

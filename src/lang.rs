//! Labels and string tables.
//!
//! Every displayable game value has a fixed symbol (`BOARDWALK`,
//! `STATE_HOTEL`, `GAME_TURN_START`) and a dotted label key such as
//! `monopoly.field.boardwalk`. A [`Translations`] source maps keys to text per
//! language; a missing entry renders as the key itself.
//!
//! ```
//! use monopoly_rs::board::Field;
//! use monopoly_rs::lang::{Label, StringTable};
//!
//! let table = StringTable::builtin().unwrap();
//! assert_eq!(Field::FreeParking.label(&table, "en"), "Free Parking");
//! assert_eq!(Field::FreeParking.label(&table, "de"), "Frei Parken");
//! assert_eq!(Field::FreeParking.label(&table, "fr"), "monopoly.field.free_parking");
//! ```

use crate::board::Field;
use crate::game::Phase;
use crate::property::{Money, Property, PropertyState};
use crate::token::Token;
use std::collections::BTreeMap;

const BUILTIN: [(&str, &str); 2] =
    [("en", include_str!("../lang/en.toml")), ("de", include_str!("../lang/de.toml"))];

pub const CURRENCY_KEY: &str = "monopoly.currency";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum LangError {
    #[error("invalid language TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("entry {0} is not a string")]
    NotAString(String),
}

/// Source of localized strings.
pub trait Translations {
    fn lookup(&self, key: &str, lang: &str) -> Option<&str>;
}

pub trait Label {
    /// Fixed language-independent name.
    fn symbol(&self) -> &'static str;

    fn label_key(&self) -> String;

    /// Localized text, or the label key when no translation exists.
    fn label(&self, translations: &dyn Translations, lang: &str) -> String {
        let key = self.label_key();
        match translations.lookup(&key, lang) {
            Some(text) => text.to_string(),
            None => key,
        }
    }
}

impl Label for Field {
    fn symbol(&self) -> &'static str {
        Field::symbol(*self)
    }
    fn label_key(&self) -> String {
        format!("monopoly.field.{}", self.symbol().to_ascii_lowercase())
    }
}

/// Properties share the label of their field.
impl Label for Property {
    fn symbol(&self) -> &'static str {
        Property::symbol(*self)
    }
    fn label_key(&self) -> String {
        self.field().label_key()
    }
}

impl Label for Token {
    fn symbol(&self) -> &'static str {
        Token::symbol(*self)
    }
    fn label_key(&self) -> String {
        format!("monopoly.token.{}.name", self.symbol().to_ascii_lowercase())
    }
}

impl Label for PropertyState {
    fn symbol(&self) -> &'static str {
        PropertyState::symbol(*self)
    }
    fn label_key(&self) -> String {
        let suffix = match self {
            PropertyState::Mortgaged => "mortgaged",
            PropertyState::Normal => "normal",
            PropertyState::House1 => "house.1",
            PropertyState::House2 => "house.2",
            PropertyState::House3 => "house.3",
            PropertyState::House4 => "house.4",
            PropertyState::Hotel => "hotel",
        };
        format!("monopoly.property_state.{suffix}")
    }
}

impl Label for Phase {
    fn symbol(&self) -> &'static str {
        Phase::symbol(*self)
    }
    fn label_key(&self) -> String {
        let name = self.symbol().trim_start_matches("GAME_").to_ascii_lowercase();
        format!("monopoly.game_state.{name}")
    }
}

/// In-memory translations, keyed by language then by dotted key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: BTreeMap<String, BTreeMap<String, String>>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shipped English and German tables.
    pub fn builtin() -> Result<Self, LangError> {
        let mut table = Self::new();
        for (lang, text) in BUILTIN {
            table.load_toml(lang, text)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, lang: &str, key: impl Into<String>, text: impl Into<String>) {
        self.entries.entry(lang.to_string()).or_default().insert(key.into(), text.into());
    }

    /// Merge a TOML document into `lang`. Nested tables become dotted keys:
    /// `[monopoly.field] go = "GO"` defines `monopoly.field.go`. Returns the
    /// number of strings loaded.
    pub fn load_toml(&mut self, lang: &str, text: &str) -> Result<usize, LangError> {
        let doc: toml::Table = text.parse()?;
        let mut flat = Vec::new();
        flatten("", &doc, &mut flat)?;
        let count = flat.len();
        for (key, value) in flat {
            self.insert(lang, key, value);
        }
        Ok(count)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self, lang: &str) -> usize {
        self.entries.get(lang).map_or(0, BTreeMap::len)
    }
}

fn flatten(
    prefix: &str,
    table: &toml::Table,
    out: &mut Vec<(String, String)>,
) -> Result<(), LangError> {
    for (name, value) in table {
        let key = if prefix.is_empty() { name.clone() } else { format!("{prefix}.{name}") };
        match value {
            toml::Value::String(text) => out.push((key, text.clone())),
            toml::Value::Table(inner) => flatten(&key, inner, out)?,
            _ => return Err(LangError::NotAString(key)),
        }
    }
    Ok(())
}

impl Translations for StringTable {
    fn lookup(&self, key: &str, lang: &str) -> Option<&str> {
        self.entries.get(lang).and_then(|t| t.get(key)).map(String::as_str)
    }
}

/// Look up `key` and fill its `{name}` placeholders from `args`. Falls back to
/// the key when untranslated.
pub fn translate(
    translations: &dyn Translations,
    lang: &str,
    key: &str,
    args: &[(&str, &str)],
) -> String {
    let Some(template) = translations.lookup(key, lang) else {
        return key.to_string();
    };
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

/// Render `amount` through the `monopoly.currency` template, or as a plain
/// integer when the language has none.
///
/// ```
/// use monopoly_rs::lang::{format_currency, StringTable};
///
/// let table = StringTable::builtin().unwrap();
/// assert_eq!(format_currency(&table, "en", 1500), "$1500");
/// assert_eq!(format_currency(&table, "xx", -20), "-20");
/// ```
pub fn format_currency(translations: &dyn Translations, lang: &str, amount: Money) -> String {
    let amount = amount.to_string();
    match translations.lookup(CURRENCY_KEY, lang) {
        Some(template) if template.contains("{amount}") => template.replace("{amount}", &amount),
        _ => amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_symbols() {
        assert_eq!(Field::InJail.label_key(), "monopoly.field.in_jail");
        assert_eq!(Property::Boardwalk.label_key(), "monopoly.field.boardwalk");
        assert_eq!(Token::MoneyBag.label_key(), "monopoly.token.money_bag.name");
        assert_eq!(PropertyState::House3.label_key(), "monopoly.property_state.house.3");
        assert_eq!(Phase::MovedToField.label_key(), "monopoly.game_state.moved_to_field");
        assert_eq!(Label::symbol(&PropertyState::Hotel), "STATE_HOTEL");
    }

    #[test]
    fn builtin_tables_cover_every_label() {
        let table = StringTable::builtin().unwrap();
        for lang in ["en", "de"] {
            let mut keys: Vec<String> = Field::BOARD.iter().map(|f| f.label_key()).collect();
            keys.push(Field::InJail.label_key());
            keys.extend(Token::ALL.iter().map(|t| t.label_key()));
            keys.extend(Token::ALL.iter().map(|t| t.description_key()));
            keys.extend(PropertyState::ALL.iter().map(|s| s.label_key()));
            keys.extend(Phase::ALL.iter().map(|p| p.label_key()));
            keys.push(CURRENCY_KEY.to_string());
            for key in keys {
                assert!(table.lookup(&key, lang).is_some(), "{lang}: missing {key}");
            }
        }
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let mut table = StringTable::new();
        let n = table
            .load_toml("en", "top = \"a\"\n[x.y]\nz = \"b\"\n[x.y.house]\n1 = \"c\"\n")
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(table.lookup("top", "en"), Some("a"));
        assert_eq!(table.lookup("x.y.z", "en"), Some("b"));
        assert_eq!(table.lookup("x.y.house.1", "en"), Some("c"));
        assert_eq!(table.len("en"), 3);
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let mut table = StringTable::new();
        assert!(matches!(
            table.load_toml("en", "a.b = 3"),
            Err(LangError::NotAString(k)) if k == "a.b"
        ));
        assert!(matches!(table.load_toml("en", "a = "), Err(LangError::Parse(_))));
    }

    #[test]
    fn translate_fills_placeholders() {
        let mut table = StringTable::new();
        table.insert("en", "greet", "{who} has {cash}");
        let args = [("who", "CAT"), ("cash", "$5")];
        assert_eq!(translate(&table, "en", "greet", &args), "CAT has $5");
        assert_eq!(translate(&table, "de", "greet", &[]), "greet");
    }

    #[test]
    fn currency_template_without_placeholder_is_ignored() {
        let mut table = StringTable::new();
        table.insert("en", CURRENCY_KEY, "dollars");
        assert_eq!(format_currency(&table, "en", 7), "7");
        table.insert("de", CURRENCY_KEY, "{amount} €");
        assert_eq!(format_currency(&table, "de", 7), "7 €");
    }
}

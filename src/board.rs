use crate::property::Property;
use std::fmt;

/// Number of fields on the board loop. `Field::InJail` sits outside of it.
pub const FIELD_COUNT: usize = 40;

/// Board positions in play order, GO first. `InJail` is the off-board cell a
/// jailed token occupies; movement never wraps onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Field {
    Go = 0,
    MediterraneanAvenue = 1,
    CommunityChest1 = 2,
    BalticAvenue = 3,
    IncomeTax = 4,
    ReadingRailroad = 5,
    OrientalAvenue = 6,
    Chance1 = 7,
    VermontAvenue = 8,
    ConnecticutAvenue = 9,
    JustVisiting = 10,
    StCharlesPlace = 11,
    ElectricCompany = 12,
    StatesAvenue = 13,
    VirginiaAvenue = 14,
    PennsylvaniaRailroad = 15,
    StJamesPlace = 16,
    CommunityChest2 = 17,
    TennesseeAvenue = 18,
    NewYorkAvenue = 19,
    FreeParking = 20,
    KentuckyAvenue = 21,
    Chance2 = 22,
    IndianaAvenue = 23,
    IllinoisAvenue = 24,
    BaltimoreOhioRailroad = 25,
    AtlanticAvenue = 26,
    VentnorAvenue = 27,
    WaterWorks = 28,
    MarvinGardens = 29,
    GoToJail = 30,
    PacificAvenue = 31,
    NorthCarolinaAvenue = 32,
    CommunityChest3 = 33,
    PennsylvaniaAvenue = 34,
    ShortLine = 35,
    Chance3 = 36,
    ParkPlace = 37,
    LuxuryTax = 38,
    Boardwalk = 39,
    InJail = 40,
}

/// Non-property fields, grouped by their landing effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SpecialField {
    Go,
    IncomeTax,
    LuxuryTax,
    Chance,
    CommunityChest,
    JustVisiting,
    FreeParking,
    GoToJail,
    InJail,
}

/// Tagged classification of a field, computed from its identity alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Street(Property),
    Railroad(Property),
    Utility(Property),
    Special(SpecialField),
}

impl Field {
    /// The 40 fields of the board loop, indexed by position.
    pub const BOARD: [Field; FIELD_COUNT] = [
        Field::Go,
        Field::MediterraneanAvenue,
        Field::CommunityChest1,
        Field::BalticAvenue,
        Field::IncomeTax,
        Field::ReadingRailroad,
        Field::OrientalAvenue,
        Field::Chance1,
        Field::VermontAvenue,
        Field::ConnecticutAvenue,
        Field::JustVisiting,
        Field::StCharlesPlace,
        Field::ElectricCompany,
        Field::StatesAvenue,
        Field::VirginiaAvenue,
        Field::PennsylvaniaRailroad,
        Field::StJamesPlace,
        Field::CommunityChest2,
        Field::TennesseeAvenue,
        Field::NewYorkAvenue,
        Field::FreeParking,
        Field::KentuckyAvenue,
        Field::Chance2,
        Field::IndianaAvenue,
        Field::IllinoisAvenue,
        Field::BaltimoreOhioRailroad,
        Field::AtlanticAvenue,
        Field::VentnorAvenue,
        Field::WaterWorks,
        Field::MarvinGardens,
        Field::GoToJail,
        Field::PacificAvenue,
        Field::NorthCarolinaAvenue,
        Field::CommunityChest3,
        Field::PennsylvaniaAvenue,
        Field::ShortLine,
        Field::Chance3,
        Field::ParkPlace,
        Field::LuxuryTax,
        Field::Boardwalk,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Board field at `index`, or `None` outside `0..40`.
    ///
    /// ```
    /// use monopoly_rs::board::Field;
    ///
    /// assert_eq!(Field::from_index(39), Some(Field::Boardwalk));
    /// assert_eq!(Field::from_index(40), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Field> {
        Self::BOARD.get(index).copied()
    }

    pub fn is_on_board(self) -> bool {
        self != Field::InJail
    }

    /// Move `steps` fields forward, wrapping at GO. The flag reports whether
    /// GO was crossed or landed on. `InJail` moves as if from `JustVisiting`.
    pub fn advance(self, steps: usize) -> (Field, bool) {
        let start = if self == Field::InJail { Field::JustVisiting } else { self };
        let raw = start.index() + steps;
        (Self::BOARD[raw % FIELD_COUNT], raw >= FIELD_COUNT)
    }

    /// Property on this field, if any.
    pub fn property(self) -> Option<Property> {
        use Field as F;
        use Property as P;
        let p = match self {
            F::MediterraneanAvenue => P::MediterraneanAvenue,
            F::BalticAvenue => P::BalticAvenue,
            F::ReadingRailroad => P::ReadingRailroad,
            F::OrientalAvenue => P::OrientalAvenue,
            F::VermontAvenue => P::VermontAvenue,
            F::ConnecticutAvenue => P::ConnecticutAvenue,
            F::StCharlesPlace => P::StCharlesPlace,
            F::ElectricCompany => P::ElectricCompany,
            F::StatesAvenue => P::StatesAvenue,
            F::VirginiaAvenue => P::VirginiaAvenue,
            F::PennsylvaniaRailroad => P::PennsylvaniaRailroad,
            F::StJamesPlace => P::StJamesPlace,
            F::TennesseeAvenue => P::TennesseeAvenue,
            F::NewYorkAvenue => P::NewYorkAvenue,
            F::KentuckyAvenue => P::KentuckyAvenue,
            F::IndianaAvenue => P::IndianaAvenue,
            F::IllinoisAvenue => P::IllinoisAvenue,
            F::BaltimoreOhioRailroad => P::BaltimoreOhioRailroad,
            F::AtlanticAvenue => P::AtlanticAvenue,
            F::VentnorAvenue => P::VentnorAvenue,
            F::WaterWorks => P::WaterWorks,
            F::MarvinGardens => P::MarvinGardens,
            F::PacificAvenue => P::PacificAvenue,
            F::NorthCarolinaAvenue => P::NorthCarolinaAvenue,
            F::PennsylvaniaAvenue => P::PennsylvaniaAvenue,
            F::ShortLine => P::ShortLine,
            F::ParkPlace => P::ParkPlace,
            F::Boardwalk => P::Boardwalk,
            _ => return None,
        };
        Some(p)
    }

    pub fn kind(self) -> FieldKind {
        if let Some(p) = self.property() {
            return if p.is_railroad() {
                FieldKind::Railroad(p)
            } else if p.is_utility() {
                FieldKind::Utility(p)
            } else {
                FieldKind::Street(p)
            };
        }
        let special = match self {
            Field::Go => SpecialField::Go,
            Field::IncomeTax => SpecialField::IncomeTax,
            Field::LuxuryTax => SpecialField::LuxuryTax,
            Field::Chance1 | Field::Chance2 | Field::Chance3 => SpecialField::Chance,
            Field::CommunityChest1 | Field::CommunityChest2 | Field::CommunityChest3 => {
                SpecialField::CommunityChest
            }
            Field::JustVisiting => SpecialField::JustVisiting,
            Field::FreeParking => SpecialField::FreeParking,
            Field::GoToJail => SpecialField::GoToJail,
            _ => SpecialField::InJail,
        };
        FieldKind::Special(special)
    }

    /// Fixed language-independent name.
    pub const fn symbol(self) -> &'static str {
        match self {
            Field::Go => "GO",
            Field::MediterraneanAvenue => "MEDITERRANEAN_AVENUE",
            Field::CommunityChest1 => "COMMUNITY_CHEST_1",
            Field::BalticAvenue => "BALTIC_AVENUE",
            Field::IncomeTax => "INCOME_TAX",
            Field::ReadingRailroad => "READING_RAILROAD",
            Field::OrientalAvenue => "ORIENTAL_AVENUE",
            Field::Chance1 => "CHANCE_1",
            Field::VermontAvenue => "VERMONT_AVENUE",
            Field::ConnecticutAvenue => "CONNECTICUT_AVENUE",
            Field::JustVisiting => "JUST_VISITING",
            Field::StCharlesPlace => "ST_CHARLES_PLACE",
            Field::ElectricCompany => "ELECTRIC_COMPANY",
            Field::StatesAvenue => "STATES_AVENUE",
            Field::VirginiaAvenue => "VIRGINIA_AVENUE",
            Field::PennsylvaniaRailroad => "PENNSYLVANIA_RAILROAD",
            Field::StJamesPlace => "ST_JAMES_PLACE",
            Field::CommunityChest2 => "COMMUNITY_CHEST_2",
            Field::TennesseeAvenue => "TENNESSEE_AVENUE",
            Field::NewYorkAvenue => "NEW_YORK_AVENUE",
            Field::FreeParking => "FREE_PARKING",
            Field::KentuckyAvenue => "KENTUCKY_AVENUE",
            Field::Chance2 => "CHANCE_2",
            Field::IndianaAvenue => "INDIANA_AVENUE",
            Field::IllinoisAvenue => "ILLINOIS_AVENUE",
            Field::BaltimoreOhioRailroad => "BALTIMORE_OHIO_RAILROAD",
            Field::AtlanticAvenue => "ATLANTIC_AVENUE",
            Field::VentnorAvenue => "VENTNOR_AVENUE",
            Field::WaterWorks => "WATER_WORKS",
            Field::MarvinGardens => "MARVIN_GARDENS",
            Field::GoToJail => "GO_TO_JAIL",
            Field::PacificAvenue => "PACIFIC_AVENUE",
            Field::NorthCarolinaAvenue => "NORTH_CAROLINA_AVENUE",
            Field::CommunityChest3 => "COMMUNITY_CHEST_3",
            Field::PennsylvaniaAvenue => "PENNSYLVANIA_AVENUE",
            Field::ShortLine => "SHORT_LINE",
            Field::Chance3 => "CHANCE_3",
            Field::ParkPlace => "PARK_PLACE",
            Field::LuxuryTax => "LUXURY_TAX",
            Field::Boardwalk => "BOARDWALK",
            Field::InJail => "IN_JAIL",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

use crate::board::Field;
use std::fmt;

/// Signed cash amount. Balances may go negative.
pub type Money = i64;

/// Fixed rent of a single railroad; multiplied by the number the owner holds.
pub const RAILROAD_BASE_RENT: Money = 25;

/// Utility rent is `(UTILITY_RENT_FACTOR * owned - UTILITY_RENT_OFFSET) * dice sum`.
pub const UTILITY_RENT_FACTOR: Money = 6;
pub const UTILITY_RENT_OFFSET: Money = 2;

const BASE_HOUSE_COST: Money = 50;

/// Color sets of the ordinary streets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::DarkBlue,
    ];

    /// Cost of one house on any street of this group.
    pub const fn house_cost(self) -> Money {
        match self {
            ColorGroup::Brown | ColorGroup::LightBlue => BASE_HOUSE_COST,
            ColorGroup::Pink | ColorGroup::Orange => BASE_HOUSE_COST * 2,
            ColorGroup::Red | ColorGroup::Yellow => BASE_HOUSE_COST * 3,
            ColorGroup::Green | ColorGroup::DarkBlue => BASE_HOUSE_COST * 4,
        }
    }

    /// Streets of this group in board order.
    pub fn properties(self) -> Vec<Property> {
        Property::ALL.iter().copied().filter(|p| p.color() == Some(self)).collect()
    }
}

/// Improvement level of an owned property.
///
/// Variants are declared in ladder order, so `Ord` follows the level:
/// `Mortgaged < Normal < House1 < ... < Hotel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PropertyState {
    Mortgaged,
    Normal,
    House1,
    House2,
    House3,
    House4,
    Hotel,
}

impl PropertyState {
    pub const ALL: [PropertyState; 7] = [
        PropertyState::Mortgaged,
        PropertyState::Normal,
        PropertyState::House1,
        PropertyState::House2,
        PropertyState::House3,
        PropertyState::House4,
        PropertyState::Hotel,
    ];

    /// Numeric level: -1 for mortgaged, 0 unimproved, 1..=4 houses, 5 hotel.
    pub const fn level(self) -> i8 {
        match self {
            PropertyState::Mortgaged => -1,
            PropertyState::Normal => 0,
            PropertyState::House1 => 1,
            PropertyState::House2 => 2,
            PropertyState::House3 => 3,
            PropertyState::House4 => 4,
            PropertyState::Hotel => 5,
        }
    }

    /// Next rung of the build ladder. Mortgaged and hotel have none.
    pub const fn built_up(self) -> Option<PropertyState> {
        match self {
            PropertyState::Normal => Some(PropertyState::House1),
            PropertyState::House1 => Some(PropertyState::House2),
            PropertyState::House2 => Some(PropertyState::House3),
            PropertyState::House3 => Some(PropertyState::House4),
            PropertyState::House4 => Some(PropertyState::Hotel),
            PropertyState::Mortgaged | PropertyState::Hotel => None,
        }
    }

    /// Previous rung of the build ladder. Only improved states have one.
    pub const fn torn_down(self) -> Option<PropertyState> {
        match self {
            PropertyState::House1 => Some(PropertyState::Normal),
            PropertyState::House2 => Some(PropertyState::House1),
            PropertyState::House3 => Some(PropertyState::House2),
            PropertyState::House4 => Some(PropertyState::House3),
            PropertyState::Hotel => Some(PropertyState::House4),
            PropertyState::Mortgaged | PropertyState::Normal => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            PropertyState::Mortgaged => "STATE_MORTGAGE",
            PropertyState::Normal => "STATE_NORMAL",
            PropertyState::House1 => "STATE_HOUSE_1",
            PropertyState::House2 => "STATE_HOUSE_2",
            PropertyState::House3 => "STATE_HOUSE_3",
            PropertyState::House4 => "STATE_HOUSE_4",
            PropertyState::Hotel => "STATE_HOTEL",
        }
    }
}

/// Kind of ownable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Street(ColorGroup),
    Railroad,
    Utility,
}

/// The 28 ownable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    MediterraneanAvenue,
    BalticAvenue,
    ReadingRailroad,
    OrientalAvenue,
    VermontAvenue,
    ConnecticutAvenue,
    StCharlesPlace,
    ElectricCompany,
    StatesAvenue,
    VirginiaAvenue,
    PennsylvaniaRailroad,
    StJamesPlace,
    TennesseeAvenue,
    NewYorkAvenue,
    KentuckyAvenue,
    IndianaAvenue,
    IllinoisAvenue,
    BaltimoreOhioRailroad,
    AtlanticAvenue,
    VentnorAvenue,
    WaterWorks,
    MarvinGardens,
    PacificAvenue,
    NorthCarolinaAvenue,
    PennsylvaniaAvenue,
    ShortLine,
    ParkPlace,
    Boardwalk,
}

impl Property {
    pub const ALL: [Property; 28] = [
        Property::MediterraneanAvenue,
        Property::BalticAvenue,
        Property::ReadingRailroad,
        Property::OrientalAvenue,
        Property::VermontAvenue,
        Property::ConnecticutAvenue,
        Property::StCharlesPlace,
        Property::ElectricCompany,
        Property::StatesAvenue,
        Property::VirginiaAvenue,
        Property::PennsylvaniaRailroad,
        Property::StJamesPlace,
        Property::TennesseeAvenue,
        Property::NewYorkAvenue,
        Property::KentuckyAvenue,
        Property::IndianaAvenue,
        Property::IllinoisAvenue,
        Property::BaltimoreOhioRailroad,
        Property::AtlanticAvenue,
        Property::VentnorAvenue,
        Property::WaterWorks,
        Property::MarvinGardens,
        Property::PacificAvenue,
        Property::NorthCarolinaAvenue,
        Property::PennsylvaniaAvenue,
        Property::ShortLine,
        Property::ParkPlace,
        Property::Boardwalk,
    ];

    /// Board field this property occupies.
    pub const fn field(self) -> Field {
        use Field as F;
        use Property as P;
        match self {
            P::MediterraneanAvenue => F::MediterraneanAvenue,
            P::BalticAvenue => F::BalticAvenue,
            P::ReadingRailroad => F::ReadingRailroad,
            P::OrientalAvenue => F::OrientalAvenue,
            P::VermontAvenue => F::VermontAvenue,
            P::ConnecticutAvenue => F::ConnecticutAvenue,
            P::StCharlesPlace => F::StCharlesPlace,
            P::ElectricCompany => F::ElectricCompany,
            P::StatesAvenue => F::StatesAvenue,
            P::VirginiaAvenue => F::VirginiaAvenue,
            P::PennsylvaniaRailroad => F::PennsylvaniaRailroad,
            P::StJamesPlace => F::StJamesPlace,
            P::TennesseeAvenue => F::TennesseeAvenue,
            P::NewYorkAvenue => F::NewYorkAvenue,
            P::KentuckyAvenue => F::KentuckyAvenue,
            P::IndianaAvenue => F::IndianaAvenue,
            P::IllinoisAvenue => F::IllinoisAvenue,
            P::BaltimoreOhioRailroad => F::BaltimoreOhioRailroad,
            P::AtlanticAvenue => F::AtlanticAvenue,
            P::VentnorAvenue => F::VentnorAvenue,
            P::WaterWorks => F::WaterWorks,
            P::MarvinGardens => F::MarvinGardens,
            P::PacificAvenue => F::PacificAvenue,
            P::NorthCarolinaAvenue => F::NorthCarolinaAvenue,
            P::PennsylvaniaAvenue => F::PennsylvaniaAvenue,
            P::ShortLine => F::ShortLine,
            P::ParkPlace => F::ParkPlace,
            P::Boardwalk => F::Boardwalk,
        }
    }

    pub const fn kind(self) -> PropertyKind {
        use ColorGroup as C;
        use Property as P;
        match self {
            P::ReadingRailroad
            | P::PennsylvaniaRailroad
            | P::BaltimoreOhioRailroad
            | P::ShortLine => PropertyKind::Railroad,
            P::ElectricCompany | P::WaterWorks => PropertyKind::Utility,
            P::MediterraneanAvenue | P::BalticAvenue => PropertyKind::Street(C::Brown),
            P::OrientalAvenue | P::VermontAvenue | P::ConnecticutAvenue => {
                PropertyKind::Street(C::LightBlue)
            }
            P::StCharlesPlace | P::StatesAvenue | P::VirginiaAvenue => {
                PropertyKind::Street(C::Pink)
            }
            P::StJamesPlace | P::TennesseeAvenue | P::NewYorkAvenue => {
                PropertyKind::Street(C::Orange)
            }
            P::KentuckyAvenue | P::IndianaAvenue | P::IllinoisAvenue => {
                PropertyKind::Street(C::Red)
            }
            P::AtlanticAvenue | P::VentnorAvenue | P::MarvinGardens => {
                PropertyKind::Street(C::Yellow)
            }
            P::PacificAvenue | P::NorthCarolinaAvenue | P::PennsylvaniaAvenue => {
                PropertyKind::Street(C::Green)
            }
            P::ParkPlace | P::Boardwalk => PropertyKind::Street(C::DarkBlue),
        }
    }

    pub const fn is_railroad(self) -> bool {
        matches!(self.kind(), PropertyKind::Railroad)
    }

    pub const fn is_utility(self) -> bool {
        matches!(self.kind(), PropertyKind::Utility)
    }

    pub const fn is_street(self) -> bool {
        matches!(self.kind(), PropertyKind::Street(_))
    }

    pub const fn color(self) -> Option<ColorGroup> {
        match self.kind() {
            PropertyKind::Street(c) => Some(c),
            _ => None,
        }
    }

    /// Purchase price from the bank.
    pub const fn base_cost(self) -> Money {
        use Property as P;
        match self {
            P::ReadingRailroad
            | P::PennsylvaniaRailroad
            | P::BaltimoreOhioRailroad
            | P::ShortLine => 200,
            P::ElectricCompany | P::WaterWorks => 150,
            P::MediterraneanAvenue | P::BalticAvenue => 60,
            P::OrientalAvenue | P::VermontAvenue => 100,
            P::ConnecticutAvenue => 120,
            P::StCharlesPlace | P::StatesAvenue => 140,
            P::VirginiaAvenue => 160,
            P::StJamesPlace | P::TennesseeAvenue => 180,
            P::NewYorkAvenue => 200,
            P::KentuckyAvenue | P::IndianaAvenue => 220,
            P::IllinoisAvenue => 240,
            P::AtlanticAvenue | P::VentnorAvenue => 260,
            P::MarvinGardens => 280,
            P::PacificAvenue | P::NorthCarolinaAvenue => 300,
            P::PennsylvaniaAvenue => 320,
            P::ParkPlace => 350,
            P::Boardwalk => 400,
        }
    }

    /// Cost of one house; zero for railroads and utilities.
    pub const fn house_cost(self) -> Money {
        match self.kind() {
            PropertyKind::Street(c) => c.house_cost(),
            _ => 0,
        }
    }

    /// What the bank pays out when this property is mortgaged.
    pub const fn mortgage_value(self) -> Money {
        self.base_cost() / 2
    }

    /// What lifting the mortgage costs: the mortgage value plus 10%, rounded down.
    ///
    /// ```
    /// use monopoly_rs::property::Property;
    ///
    /// assert_eq!(Property::MediterraneanAvenue.mortgage_value(), 30);
    /// assert_eq!(Property::MediterraneanAvenue.unmortgage_cost(), 33);
    /// assert_eq!(Property::StCharlesPlace.unmortgage_cost(), 77);
    /// ```
    pub const fn unmortgage_cost(self) -> Money {
        self.mortgage_value() * 11 / 10
    }

    /// Static rent for `state`. Mortgaged and utilities yield 0, a railroad
    /// yields the single-railroad base rent.
    pub const fn rent(self, state: PropertyState) -> Money {
        let level = match state {
            PropertyState::Mortgaged => return 0,
            PropertyState::Normal => 0,
            PropertyState::House1 => 1,
            PropertyState::House2 => 2,
            PropertyState::House3 => 3,
            PropertyState::House4 => 4,
            PropertyState::Hotel => 5,
        };
        match self.rent_table() {
            Some(table) => table[level],
            None if self.is_railroad() => RAILROAD_BASE_RENT,
            None => 0,
        }
    }

    const fn rent_table(self) -> Option<[Money; 6]> {
        use Property as P;
        let table = match self {
            P::MediterraneanAvenue => [2, 10, 30, 90, 160, 250],
            P::BalticAvenue => [4, 20, 60, 180, 320, 450],
            P::OrientalAvenue | P::VermontAvenue => [6, 30, 90, 270, 400, 550],
            P::ConnecticutAvenue => [8, 40, 100, 300, 450, 600],
            P::StCharlesPlace | P::StatesAvenue => [10, 50, 150, 450, 625, 750],
            P::VirginiaAvenue => [12, 60, 180, 500, 700, 900],
            P::StJamesPlace | P::TennesseeAvenue => [14, 70, 200, 550, 750, 950],
            P::NewYorkAvenue => [16, 80, 220, 600, 800, 1000],
            P::KentuckyAvenue | P::IndianaAvenue => [18, 90, 250, 700, 875, 1050],
            P::IllinoisAvenue => [20, 100, 300, 750, 925, 1100],
            P::AtlanticAvenue | P::VentnorAvenue => [22, 110, 330, 800, 975, 1150],
            P::MarvinGardens => [24, 120, 360, 850, 1025, 1200],
            P::PacificAvenue | P::NorthCarolinaAvenue => [26, 130, 390, 900, 1100, 1275],
            P::PennsylvaniaAvenue => [28, 150, 450, 1000, 1200, 1400],
            P::ParkPlace => [35, 175, 500, 1100, 1300, 1500],
            P::Boardwalk => [50, 200, 600, 1400, 1700, 2000],
            _ => return None,
        };
        Some(table)
    }

    pub const fn symbol(self) -> &'static str {
        self.field().symbol()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for PropertyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_and_property_agree() {
        for p in Property::ALL {
            assert_eq!(p.field().property(), Some(p));
        }
    }

    #[test]
    fn street_rent_is_monotonic_in_state() {
        for p in Property::ALL.iter().copied().filter(|p| p.is_street()) {
            let rents: Vec<Money> = PropertyState::ALL.iter().map(|s| p.rent(*s)).collect();
            assert_eq!(rents[0], 0, "{p} mortgaged rent");
            assert!(rents.windows(2).all(|w| w[0] < w[1]), "{p}: {rents:?}");
        }
    }

    #[test]
    fn atlantic_and_ventnor_cost_as_printed() {
        assert_eq!(Property::AtlanticAvenue.base_cost(), 260);
        assert_eq!(Property::VentnorAvenue.base_cost(), 260);
        assert_eq!(Property::MarvinGardens.base_cost(), 280);
        assert_eq!(Property::AtlanticAvenue.mortgage_value(), 130);
    }

    #[test]
    fn railroads_and_utilities_use_formulas() {
        assert_eq!(Property::ShortLine.rent(PropertyState::Normal), RAILROAD_BASE_RENT);
        assert_eq!(Property::ShortLine.rent(PropertyState::Mortgaged), 0);
        assert_eq!(Property::WaterWorks.rent(PropertyState::Normal), 0);
        assert_eq!(Property::WaterWorks.house_cost(), 0);
        assert_eq!(Property::ReadingRailroad.base_cost(), 200);
        assert_eq!(Property::ElectricCompany.base_cost(), 150);
    }

    #[test]
    fn boardwalk_hotel_rent() {
        assert_eq!(Property::Boardwalk.rent(PropertyState::Hotel), 2000);
        assert_eq!(Property::Boardwalk.house_cost(), 200);
    }

    #[test]
    fn ladder_steps_are_inverse() {
        for s in PropertyState::ALL {
            if let Some(up) = s.built_up() {
                assert_eq!(up.torn_down(), Some(s));
                assert_eq!(up.level(), s.level() + 1);
            }
        }
        assert_eq!(PropertyState::Mortgaged.built_up(), None);
        assert_eq!(PropertyState::Normal.torn_down(), None);
    }

    #[test]
    fn color_groups_cover_all_streets() {
        let total: usize = ColorGroup::ALL.iter().map(|c| c.properties().len()).sum();
        assert_eq!(total, 22);
        assert_eq!(
            ColorGroup::DarkBlue.properties(),
            vec![Property::ParkPlace, Property::Boardwalk]
        );
    }
}

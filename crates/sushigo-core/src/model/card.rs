use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Card {
    Tempura = 0,
    Sashimi = 1,
    Dumpling = 2,
    MakiOne = 3,
    MakiTwo = 4,
    MakiThree = 5,
    SalmonNigiri = 6,
    SquidNigiri = 7,
    EggNigiri = 8,
    Wasabi = 9,
}

impl Card {
    pub const ALL: [Card; 10] = [
        Card::Tempura,
        Card::Sashimi,
        Card::Dumpling,
        Card::MakiOne,
        Card::MakiTwo,
        Card::MakiThree,
        Card::SalmonNigiri,
        Card::SquidNigiri,
        Card::EggNigiri,
        Card::Wasabi,
    ];

    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Card::Tempura),
            1 => Some(Card::Sashimi),
            2 => Some(Card::Dumpling),
            3 => Some(Card::MakiOne),
            4 => Some(Card::MakiTwo),
            5 => Some(Card::MakiThree),
            6 => Some(Card::SalmonNigiri),
            7 => Some(Card::SquidNigiri),
            8 => Some(Card::EggNigiri),
            9 => Some(Card::Wasabi),
            _ => None,
        }
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_maki(self) -> bool {
        matches!(self, Card::MakiOne | Card::MakiTwo | Card::MakiThree)
    }

    pub const fn is_nigiri(self) -> bool {
        matches!(self, Card::SalmonNigiri | Card::SquidNigiri | Card::EggNigiri)
    }

    /// Roll icons contributed to the maki contest; zero for non-maki kinds.
    pub const fn maki_rolls(self) -> u8 {
        match self {
            Card::MakiOne => 1,
            Card::MakiTwo => 2,
            Card::MakiThree => 3,
            _ => 0,
        }
    }

    /// Unboosted point value; zero for non-nigiri kinds.
    pub const fn nigiri_points(self) -> u8 {
        match self {
            Card::SalmonNigiri => 2,
            Card::SquidNigiri => 3,
            Card::EggNigiri => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Card::Tempura => "tempura",
            Card::Sashimi => "sashimi",
            Card::Dumpling => "dumpling",
            Card::MakiOne => "maki1",
            Card::MakiTwo => "maki2",
            Card::MakiThree => "maki3",
            Card::SalmonNigiri => "salmon",
            Card::SquidNigiri => "squid",
            Card::EggNigiri => "egg",
            Card::Wasabi => "wasabi",
        };
        f.write_str(text)
    }
}

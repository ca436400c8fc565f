use crate::model::card::Card;

/// Aggregate counters over a pile of cards, one slot per scoring category.
///
/// The three maki denominations roll up into a single icon-weighted counter;
/// the three nigiri kinds roll up into a single card counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub tempura: u8,
    pub sashimi: u8,
    pub dumpling: u8,
    pub maki: u8,
    pub nigiri: u8,
    pub wasabi: u8,
}

impl CategoryCounts {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = Self::default();
        for card in cards.iter().copied() {
            match card {
                Card::Tempura => counts.tempura += 1,
                Card::Sashimi => counts.sashimi += 1,
                Card::Dumpling => counts.dumpling += 1,
                Card::MakiOne | Card::MakiTwo | Card::MakiThree => {
                    counts.maki += card.maki_rolls()
                }
                Card::SalmonNigiri | Card::SquidNigiri | Card::EggNigiri => counts.nigiri += 1,
                Card::Wasabi => counts.wasabi += 1,
            }
        }
        counts
    }
}

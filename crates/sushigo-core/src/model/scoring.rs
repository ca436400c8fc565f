use crate::model::collection::Collection;
use crate::model::counts::CategoryCounts;
use std::cmp::Ordering;

pub const TEMPURA_PAIR_POINTS: i32 = 5;
pub const SASHIMI_SET_POINTS: i32 = 10;
pub const MAKI_FIRST_PRIZE: i32 = 6;
pub const MAKI_SECOND_PRIZE: i32 = 3;

/// Cumulative dumpling payout, capped at five dumplings.
const DUMPLING_POINTS: [i32; 6] = [0, 1, 3, 6, 10, 15];

/// Score both collections, including the maki contest between them.
pub fn score_collections(current: &Collection, opponent: &Collection) -> (i32, i32) {
    let cur_counts = CategoryCounts::from_cards(current.cards());
    let opp_counts = CategoryCounts::from_cards(opponent.cards());
    let (cur_maki, opp_maki) = maki_prizes(cur_counts.maki, opp_counts.maki);
    (
        base_score(current, cur_counts) + cur_maki,
        base_score(opponent, opp_counts) + opp_maki,
    )
}

fn base_score(collection: &Collection, counts: CategoryCounts) -> i32 {
    let mut score = 0;
    score += i32::from(counts.tempura / 2) * TEMPURA_PAIR_POINTS;
    score += i32::from(counts.sashimi / 3) * SASHIMI_SET_POINTS;
    score += DUMPLING_POINTS[usize::from(counts.dumpling.min(5))];
    score += nigiri_score(collection, counts.wasabi);
    score
}

/// Each wasabi triples one nigiri. Pairing is greedy on the most valuable
/// nigiri, which makes the result independent of draft order.
fn nigiri_score(collection: &Collection, wasabi: u8) -> i32 {
    let mut points: Vec<i32> = collection
        .iter()
        .filter(|card| card.is_nigiri())
        .map(|card| i32::from(card.nigiri_points()))
        .collect();
    points.sort_unstable_by(|a, b| b.cmp(a));
    points
        .iter()
        .enumerate()
        .map(|(slot, &value)| {
            if slot < usize::from(wasabi) {
                value * 3
            } else {
                value
            }
        })
        .sum()
}

/// Majority prize 6, runner-up 3. A tie for the majority splits the 6; a
/// player with no rolls takes nothing.
fn maki_prizes(current: u8, opponent: u8) -> (i32, i32) {
    match current.cmp(&opponent) {
        Ordering::Greater => {
            let runner_up = if opponent > 0 { MAKI_SECOND_PRIZE } else { 0 };
            (MAKI_FIRST_PRIZE, runner_up)
        }
        Ordering::Less => {
            let runner_up = if current > 0 { MAKI_SECOND_PRIZE } else { 0 };
            (runner_up, MAKI_FIRST_PRIZE)
        }
        Ordering::Equal => {
            if current > 0 {
                (MAKI_SECOND_PRIZE, MAKI_SECOND_PRIZE)
            } else {
                (0, 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::score_collections;
    use crate::model::card::Card;
    use crate::model::collection::Collection;

    fn collection(cards: &[Card]) -> Collection {
        Collection::with_cards(cards.to_vec())
    }

    #[test]
    fn tempura_scores_per_pair() {
        let (cur, _) = score_collections(
            &collection(&[Card::Tempura, Card::Tempura, Card::Tempura]),
            &Collection::new(),
        );
        assert_eq!(cur, 5);
    }

    #[test]
    fn sashimi_scores_per_triple() {
        let cards = [Card::Sashimi; 6];
        let (cur, _) = score_collections(&collection(&cards), &Collection::new());
        assert_eq!(cur, 20);
    }

    #[test]
    fn dumpling_payout_caps_at_five() {
        let (four, _) = score_collections(&collection(&[Card::Dumpling; 4]), &Collection::new());
        assert_eq!(four, 10);
        let (seven, _) = score_collections(&collection(&[Card::Dumpling; 7]), &Collection::new());
        assert_eq!(seven, 15);
    }

    #[test]
    fn wasabi_triples_the_best_nigiri() {
        let (cur, _) = score_collections(
            &collection(&[Card::Wasabi, Card::EggNigiri, Card::SquidNigiri]),
            &Collection::new(),
        );
        // Squid boosted to 9, egg stays at 1.
        assert_eq!(cur, 10);
    }

    #[test]
    fn spare_wasabi_scores_nothing() {
        let (cur, _) = score_collections(
            &collection(&[Card::Wasabi, Card::Wasabi, Card::SalmonNigiri]),
            &Collection::new(),
        );
        assert_eq!(cur, 6);
    }

    #[test]
    fn maki_majority_takes_six() {
        let (cur, opp) = score_collections(
            &collection(&[Card::MakiThree]),
            &collection(&[Card::MakiOne]),
        );
        assert_eq!((cur, opp), (6, 3));
    }

    #[test]
    fn maki_tie_splits_the_prize() {
        let (cur, opp) = score_collections(
            &collection(&[Card::MakiTwo]),
            &collection(&[Card::MakiTwo]),
        );
        assert_eq!((cur, opp), (3, 3));
    }

    #[test]
    fn no_rolls_means_no_prize() {
        let (cur, opp) = score_collections(
            &collection(&[Card::MakiOne]),
            &collection(&[Card::EggNigiri]),
        );
        assert_eq!((cur, opp), (6, 1));

        let (none_a, none_b) = score_collections(&Collection::new(), &Collection::new());
        assert_eq!((none_a, none_b), (0, 0));
    }
}

use super::Agent;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use sushigo_core::model::card::Card;
use sushigo_core::model::counts::CategoryCounts;
use sushigo_core::model::state::GameState;
use tracing::{Level, event};

/// Expected point value per card kind, indexed by `Card::index()`.
///
/// The weights were tuned as a set; the counter slots each rule reads are
/// part of that tuning and must not be re-derived from the scoring rules.
pub fn card_values(state: &GameState) -> [f64; 10] {
    let cur_hand = CategoryCounts::from_cards(state.current_hand().cards());
    let opp_hand = CategoryCounts::from_cards(state.opponent_hand().cards());
    let cur_coll = CategoryCounts::from_cards(state.current_collection().cards());
    let opp_coll = CategoryCounts::from_cards(state.opponent_collection().cards());
    let collected = state.current_collection().len();

    let mut values = [0.0_f64; 10];

    // Wasabi pairing state is tracked through the tempura/sashimi counters.
    let wasabi_active = cur_coll.tempura < cur_coll.sashimi;

    if wasabi_active {
        values[Card::SalmonNigiri.index()] += 6.0;
        values[Card::SquidNigiri.index()] += 9.0;
        values[Card::EggNigiri.index()] += 3.0;
    } else {
        values[Card::SalmonNigiri.index()] += 2.0;
        values[Card::SquidNigiri.index()] += 3.0;
        values[Card::EggNigiri.index()] += 1.0;
    }

    // Tempura pairing progress lives in the dumpling counters.
    if collected > 1 {
        let pairs_left = cur_hand.dumpling + opp_hand.dumpling;
        if cur_coll.dumpling % 2 == 1 {
            values[Card::Tempura.index()] += 5.0;
        } else if opp_coll.dumpling % 2 == 1 && opp_hand.dumpling == 0 && cur_hand.dumpling == 1 {
            // The one copy that would finish the opponent's pair is ours.
            values[Card::Tempura.index()] += 5.0;
        } else if collected < 4 && pairs_left > 1 {
            values[Card::Tempura.index()] += 2.5 / f64::from(4 - pairs_left.min(3));
        } else {
            values[Card::Tempura.index()] += 0.1;
        }
    }

    // Sashimi is only worth playing to block; set progress lives in the
    // wasabi counters.
    if collected > 1
        && opp_coll.wasabi % 3 == 2
        && opp_hand.wasabi == 0
        && cur_hand.wasabi == 1
    {
        values[Card::Sashimi.index()] += 10.0;
    }

    // Unpaired opponent resources are read off the tempura counter.
    if !wasabi_active && collected < 5 && opp_hand.tempura > 1 {
        values[Card::Wasabi.index()] += 2.5;
    }

    // Dumpling running total is carried in the nigiri counter.
    values[Card::Dumpling.index()] += 1.0 + f64::from(cur_coll.nigiri);
    if collected > 1 && collected < 4 {
        values[Card::Dumpling.index()] += f64::from(cur_hand.nigiri + opp_hand.nigiri) * 0.1;
    }

    if collected > 1 {
        let ours = i32::from(cur_coll.maki);
        let theirs = i32::from(opp_coll.maki);
        let rolls_left = i32::from(cur_hand.maki) + i32::from(opp_hand.maki);
        if ours <= theirs + rolls_left {
            if ours + 1 > theirs + rolls_left - 1 {
                // First place holds even if every remaining roll goes across.
                values[Card::MakiOne.index()] += 3.0;
                values[Card::MakiTwo.index()] += 3.0;
                values[Card::MakiThree.index()] += 3.0;
            } else if ours + 2 > theirs + rolls_left - 2 {
                values[Card::MakiTwo.index()] += 3.0;
                values[Card::MakiThree.index()] += 3.0;
            } else if ours + 3 > theirs + rolls_left - 3 {
                values[Card::MakiThree.index()] += 3.0;
            } else if ours + 1 > theirs {
                values[Card::MakiOne.index()] += 0.15;
                values[Card::MakiTwo.index()] += 0.6;
                values[Card::MakiThree.index()] += 1.35;
            } else if ours + 2 > theirs {
                values[Card::MakiTwo.index()] += 0.15;
                values[Card::MakiThree.index()] += 0.6;
            } else if ours + 3 > theirs {
                values[Card::MakiThree.index()] += 0.15;
            }
        }
    } else {
        values[Card::MakiOne.index()] += 0.15;
        values[Card::MakiTwo.index()] += 0.6;
        values[Card::MakiThree.index()] += 1.35;
    }

    values
}

/// Plays the highest-valued kind that is actually in hand.
///
/// Ranking is a stable descending sort over [`card_values`], so equal values
/// resolve to the lowest kind id; the choice is deterministic.
pub struct HeuristicAgent {
    rng: SmallRng,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> Vec<Card> {
        let values = card_values(state);
        let mut ranked = Card::ALL;
        ranked.sort_by(|a, b| values[b.index()].total_cmp(&values[a.index()]));

        for kind in ranked.iter().copied() {
            if state.current_hand().count(kind) > 0 {
                event!(
                    target: "sushigo_bot::heuristic",
                    Level::TRACE,
                    chosen = %kind,
                    value = values[kind.index()],
                    hand_size = state.current_hand().len(),
                );
                return vec![kind];
            }
        }

        // Every kind maps to a value slot, so this is unreachable while the
        // hand is non-empty.
        let card = state
            .current_hand()
            .cards()
            .choose(&mut self.rng)
            .copied()
            .expect("heuristic agent requires a non-empty hand");
        vec![card]
    }
}

use super::Agent;
use super::heuristic::HeuristicAgent;
use std::collections::HashMap;
use sushigo_core::model::card::Card;
use sushigo_core::model::state::GameState;
use tracing::{Level, event};

/// Depth-bounded tree search over perspective-flipped states.
///
/// Two adversary models, fixed at construction: an exact opponent whose own
/// policy picks its move at every ply, or a uniform chance node over the
/// opponent's hand. Past `max_depth` the search narrows to the heuristic's
/// line for both sides and follows it to the end of the round.
///
/// Results are memoized by state content for the lifetime of the engine, so
/// positions reachable through different move orders resolve once, and the
/// table doubles as a transposition cache across root calls within a match.
pub struct ExpectimaxAgent {
    opponent: Option<Box<dyn Agent>>,
    max_depth: usize,
    memo: HashMap<GameState, (f64, Option<Card>)>,
    heuristic: HeuristicAgent,
}

impl ExpectimaxAgent {
    pub const DEFAULT_MAX_DEPTH: usize = 3;

    /// Search against a modeled opponent, maximizing the final score margin.
    pub fn against(opponent: Box<dyn Agent>, max_depth: usize) -> Self {
        Self {
            opponent: Some(opponent),
            max_depth,
            memo: HashMap::new(),
            heuristic: HeuristicAgent::new(),
        }
    }

    /// Search against a uniformly-random opponent, maximizing the expected
    /// win/loss/draw indicator.
    pub fn against_random(max_depth: usize) -> Self {
        Self {
            opponent: None,
            max_depth,
            memo: HashMap::new(),
            heuristic: HeuristicAgent::new(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Exact-adversary search: the opponent's modeled policy commits its move
    /// first, then the current side maximizes the score margin over its own
    /// candidates.
    pub fn search_against_opponent(
        &mut self,
        state: &GameState,
        depth: usize,
    ) -> (f64, Option<Card>) {
        if let Some(&cached) = self.memo.get(state) {
            return cached;
        }

        if state.is_terminal() {
            let (cur, opp) = state.calculate_scores();
            let margin = f64::from(cur - opp);
            self.memo.insert(state.clone(), (margin, None));
            return (margin, None);
        }

        let mut opp_state = state.flipped();
        let opp_card = self
            .opponent
            .as_mut()
            .expect("opponent-modeled search requires an opponent")
            .select_action(&opp_state)[0];
        let _ = opp_state.play_current(opp_card);

        if depth >= self.max_depth {
            let card = self.heuristic.select_action(state)[0];
            let mut next = opp_state.flipped();
            let _ = next.play_current(card);
            next.swap_hands();
            let (score, _) = self.search_against_opponent(&next, depth + 1);
            return (score, Some(card));
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_card = None;
        for card in state.current_hand().cards().iter().copied() {
            let mut next = opp_state.flipped();
            let _ = next.play_current(card);
            next.swap_hands();
            let (score, _) = self.search_against_opponent(&next, depth + 1);
            if score > best_score {
                best_score = score;
                best_card = Some(card);
            }
        }

        self.memo.insert(state.clone(), (best_score, best_card));
        (best_score, best_card)
    }

    /// Chance-node search: every candidate is scored as the average outcome
    /// over all opponent cards, and the score scale is the win indicator
    /// rather than the margin.
    pub fn search_against_random(
        &mut self,
        state: &GameState,
        depth: usize,
    ) -> (f64, Option<Card>) {
        if let Some(&cached) = self.memo.get(state) {
            return cached;
        }

        if state.is_terminal() {
            let (cur, opp) = state.calculate_scores();
            return (f64::from((cur - opp).signum()), None);
        }

        if depth >= self.max_depth {
            let card = self.heuristic.select_action(state)[0];
            let opp_card = self.heuristic.select_action(&state.flipped())[0];
            let mut next = state.clone();
            let _ = next.play_current(card);
            let _ = next.play_opponent(opp_card);
            next.swap_hands();
            let (score, _) = self.search_against_random(&next, depth + 1);
            return (score, Some(card));
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_card = None;
        for card in state.current_hand().cards().iter().copied() {
            let mut total = 0.0;
            for opp_card in state.opponent_hand().cards().iter().copied() {
                let mut next = state.clone();
                let _ = next.play_current(card);
                let _ = next.play_opponent(opp_card);
                next.swap_hands();
                let (score, _) = self.search_against_random(&next, depth + 1);
                total += score;
            }
            let average = total / state.opponent_hand().len() as f64;
            if average > best_score {
                best_score = average;
                best_card = Some(card);
            }
        }

        self.memo.insert(state.clone(), (best_score, best_card));
        (best_score, best_card)
    }
}

impl Agent for ExpectimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Vec<Card> {
        let (score, card) = if self.opponent.is_some() {
            self.search_against_opponent(state, 0)
        } else {
            self.search_against_random(state, 0)
        };
        event!(
            target: "sushigo_bot::search",
            Level::DEBUG,
            score,
            chosen = ?card,
            max_depth = self.max_depth,
            memo_entries = self.memo.len(),
        );
        card.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ExpectimaxAgent;
    use crate::agent::{Agent, HeuristicAgent};
    use sushigo_core::model::card::Card;
    use sushigo_core::model::collection::Collection;
    use sushigo_core::model::deck::{Deck, HAND_SIZE};
    use sushigo_core::model::hand::Hand;
    use sushigo_core::model::state::GameState;

    fn modeled(max_depth: usize) -> ExpectimaxAgent {
        ExpectimaxAgent::against(Box::new(HeuristicAgent::with_seed(0)), max_depth)
    }

    fn terminal_state() -> GameState {
        GameState::from_parts(
            Hand::new(),
            Collection::with_cards(vec![Card::Tempura, Card::Tempura, Card::EggNigiri]),
            Hand::new(),
            Collection::with_cards(vec![Card::SquidNigiri, Card::EggNigiri]),
        )
    }

    #[test]
    fn terminal_margin_for_modeled_opponent() {
        let state = terminal_state();
        assert_eq!(state.calculate_scores(), (6, 4));
        let mut engine = modeled(0);
        assert_eq!(engine.search_against_opponent(&state, 0), (2.0, None));
    }

    #[test]
    fn terminal_sign_for_random_opponent() {
        let state = terminal_state();
        let mut engine = ExpectimaxAgent::against_random(0);
        assert_eq!(engine.search_against_random(&state, 0), (1.0, None));

        let drawn = GameState::from_parts(
            Hand::new(),
            Collection::with_cards(vec![Card::EggNigiri]),
            Hand::new(),
            Collection::with_cards(vec![Card::EggNigiri]),
        );
        assert_eq!(engine.search_against_random(&drawn, 0), (0.0, None));

        let lost = terminal_state().flipped();
        assert_eq!(engine.search_against_random(&lost, 0), (-1.0, None));
    }

    #[test]
    fn modeled_search_denies_the_opponent_a_set() {
        // Unplayed cards cross the table: holding the sashimi hands it to
        // the opponent, who is two thirds into a 10-point set.
        let state = GameState::from_parts(
            Hand::with_cards(vec![Card::Sashimi, Card::EggNigiri]),
            Collection::new(),
            Hand::with_cards(vec![Card::EggNigiri, Card::EggNigiri]),
            Collection::with_cards(vec![Card::Sashimi, Card::Sashimi]),
        );
        let mut engine = modeled(3);
        let (score, card) = engine.search_against_opponent(&state, 0);
        assert_eq!(card, Some(Card::Sashimi));
        assert_eq!(score, -1.0);
    }

    #[test]
    fn random_search_keeps_the_better_nigiri() {
        // Playing the squid banks 3 now and passes only the egg across.
        let state = GameState::from_parts(
            Hand::with_cards(vec![Card::Sashimi, Card::SquidNigiri]),
            Collection::new(),
            Hand::with_cards(vec![Card::EggNigiri, Card::EggNigiri]),
            Collection::new(),
        );
        let mut engine = ExpectimaxAgent::against_random(3);
        let (score, card) = engine.search_against_random(&state, 0);
        assert_eq!(card, Some(Card::SquidNigiri));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn select_action_is_deterministic_across_fresh_engines() {
        let deck = Deck::shuffled_with_seed(404);
        let (cur, opp) = deck.deal(4);
        let state = GameState::new(cur, opp);

        let first = modeled(2).select_action(&state);
        let second = modeled(2).select_action(&state);
        assert_eq!(first, second);

        let first = ExpectimaxAgent::against_random(2).select_action(&state);
        let second = ExpectimaxAgent::against_random(2).select_action(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn memo_is_a_pure_cache() {
        let deck = Deck::shuffled_with_seed(808);
        let (cur, opp) = deck.deal(4);
        let state = GameState::new(cur, opp);

        let mut warm = modeled(2);
        let cold_result = warm.select_action(&state);
        assert!(!warm.memo.is_empty());
        // Second call resolves from the table and must not change the move.
        let warm_result = warm.select_action(&state);
        assert_eq!(cold_result, warm_result);

        let mut random_engine = ExpectimaxAgent::against_random(2);
        let first = random_engine.select_action(&state);
        let second = random_engine.select_action(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn depth_zero_cutoff_follows_the_heuristic() {
        let deck = Deck::shuffled_with_seed(21);
        let (cur, opp) = deck.deal(HAND_SIZE);
        let state = GameState::new(cur, opp);

        let expected = HeuristicAgent::with_seed(0).select_action(&state);

        let action = modeled(0).select_action(&state);
        assert_eq!(action, expected);
        assert!(state.current_hand().contains(action[0]));

        let action = ExpectimaxAgent::against_random(0).select_action(&state);
        assert_eq!(action, expected);
        assert!(state.current_hand().contains(action[0]));
    }

    #[test]
    fn forced_moves_are_played() {
        let state = GameState::from_parts(
            Hand::with_cards(vec![Card::Tempura]),
            Collection::new(),
            Hand::with_cards(vec![Card::Sashimi]),
            Collection::new(),
        );
        assert_eq!(modeled(3).select_action(&state), vec![Card::Tempura]);
        assert_eq!(
            ExpectimaxAgent::against_random(3).select_action(&state),
            vec![Card::Tempura]
        );
    }
}

use bjterm::{
    BLACKJACK, Card, DEALER_STANDS_ON, Difficulty, Rank, Round, RoundConfig, hand_value,
    is_blackjack,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn arb_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len()).prop_map(|i| Card::new(Rank::ALL[i]))
}

/// Tries every way of counting aces as 1 or 11.
fn best_total(cards: &[Card]) -> u16 {
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u16;
    let hard: u16 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { u16::from(c.value()) })
        .sum();
    (0..=aces)
        .map(|high| hard + high * 10)
        .filter(|&total| total <= BLACKJACK)
        .max()
        .unwrap_or(hard)
}

proptest! {
    #[test]
    fn value_is_best_ace_assignment(cards in prop::collection::vec(arb_card(), 1..60)) {
        prop_assert_eq!(hand_value(&cards), best_total(&cards));
    }

    #[test]
    fn blackjack_is_ace_and_ten(a in arb_card(), b in arb_card()) {
        let expected = (a.is_ace() && b.value() == 10) || (b.is_ace() && a.value() == 10);
        prop_assert_eq!(is_blackjack(&[a, b]), expected);
    }

    #[test]
    fn longer_hands_are_never_blackjack(cards in prop::collection::vec(arb_card(), 3..8)) {
        prop_assert!(!is_blackjack(&cards));
    }

    #[test]
    fn dealer_draws_minimum_to_reach_17(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut round = Round::new(RoundConfig::new(Difficulty::Normal, 1), &mut rng).unwrap();
        round.stand().unwrap();
        let drawn = round.dealer_turn().unwrap();

        let cards = round.dealer_hand().cards();
        prop_assert!(hand_value(cards) >= DEALER_STANDS_ON);
        prop_assert_eq!(cards.len(), 2 + drawn.len());
        for end in 2..cards.len() {
            prop_assert!(hand_value(&cards[..end]) < DEALER_STANDS_ON);
        }
    }

    #[test]
    fn normal_difficulty_never_biases(hand_count in any::<u32>(), total in 0u16..=31, n in any::<i64>()) {
        prop_assert!(!RoundConfig::new(Difficulty::Normal, hand_count).biased_draw_applies(total));
        prop_assume!(n != 2);
        prop_assert!(!RoundConfig::new(Difficulty::from_selector(n), hand_count).biased_draw_applies(total));
    }

    #[test]
    fn fixed_difficulty_biases_every_fifth_hand_from_15(hand_count in any::<u32>(), total in 0u16..=31) {
        let expected = hand_count % 5 == 0 && total >= 15;
        prop_assert_eq!(
            RoundConfig::new(Difficulty::Fixed, hand_count).biased_draw_applies(total),
            expected
        );
    }
}

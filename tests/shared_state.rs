//! Process-wide generator and ranking policy tests.
//!
//! Everything lives in one test so nothing else in this binary touches the
//! shared state concurrently.

use cardeck::{
    Card, Deck, DeckOptions, MersenneRng, RankingPolicy, SharedRng, Suit, Value, ranking_policy,
    reset_ranking_policy, seed_shared_rng, set_ranking_policy,
};
use rand::Rng;

const SEED: u64 = 42;

fn identities<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<(Suit, Value)> {
    cards.into_iter().map(|c| (c.suit(), c.value())).collect()
}

fn random_draw(deck: &mut Deck, n: usize, seed: u64) -> Vec<(Suit, Value)> {
    let cards: Vec<Card> = deck.draw_random(n, Some(seed)).collect();
    identities(&cards)
}

/// Draws `n` cards the way a single generator seeded once with `seed` would.
fn seeded_once(seed: u64, n: usize) -> Vec<(Suit, Value)> {
    let mut cards = identities(&Deck::new());
    let mut rng = MersenneRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let index = rng.below(cards.len());
            cards.remove(index)
        })
        .collect()
}

#[test]
fn shared_state() {
    // Seeded random draws match CPython's random.seed + randint.
    let mut full = Deck::new();
    assert_eq!(
        random_draw(&mut full, 3, SEED),
        vec![
            (Suit::Clubs, Value::Two),
            (Suit::Spades, Value::Eight),
            (Suit::Spades, Value::Two),
        ]
    );
    assert_eq!(full.cards_count(), 49);

    let options = DeckOptions::default().with_shuffle(true).with_seed(SEED);
    let mut shuffled = Deck::with_options(options);
    assert_eq!(
        random_draw(&mut shuffled, 1, SEED),
        vec![(Suit::Diamonds, Value::Queen)]
    );

    let mut short = Deck::with_options(DeckOptions::default().with_n(2));
    assert_eq!(
        random_draw(&mut short, 3, SEED),
        vec![(Suit::Spades, Value::Ace), (Suit::Spades, Value::Two)]
    );
    assert!(short.is_empty());

    // A seeded random draw seeds once and keeps drawing from that stream.
    for seed in [0, 7, SEED, (1 << 40) + 7] {
        assert_eq!(random_draw(&mut Deck::new(), 5, seed), seeded_once(seed, 5));
    }

    // The seed is applied when the draw is created, even if it is never used.
    let mut untouched = Deck::new();
    drop(untouched.draw_random(1, Some(SEED)));
    assert_eq!(untouched.cards_count(), 52);
    assert_eq!(SharedRng.random::<u32>(), 2_746_317_213);

    // Reseeding makes later unseeded operations repeat too.
    seed_shared_rng(7);
    let mut a = Deck::new();
    a.shuffle(None);
    seed_shared_rng(7);
    let mut b = Deck::new();
    b.shuffle(None);
    assert_eq!(identities(&a), identities(&b));

    seed_shared_rng(SEED);
    assert_eq!(SharedRng.random::<u64>(), 2_053_695_854_357_871_005);

    // Shuffle seed and add_card seed both reseed the shared generator.
    let mut c = Deck::new();
    c.shuffle(Some(SEED));
    let after_shuffle: u32 = SharedRng.random();
    let mut d = Deck::new();
    d.shuffle(Some(SEED));
    assert_eq!(SharedRng.random::<u32>(), after_shuffle);

    let mut e = Deck::new_empty();
    e.add_card(Card::new(Suit::Spades, Value::Two), None, Some(SEED)).unwrap();
    let after_add: u32 = SharedRng.random();
    let mut f = Deck::new_empty();
    f.add_card(Card::new(Suit::Spades, Value::Two), None, Some(SEED)).unwrap();
    assert_eq!(SharedRng.random::<u32>(), after_add);

    // The process-wide policy drives card and deck equality.
    assert_eq!(ranking_policy(), RankingPolicy::DEFAULT);
    let two_of_spades = Card::new(Suit::Spades, Value::Two);
    let two_of_clubs = Card::new(Suit::Clubs, Value::Two);
    assert_eq!(two_of_spades, two_of_clubs);

    let previous = set_ranking_policy(RankingPolicy::DEFAULT.with_suit_ordered(true));
    assert_eq!(previous, RankingPolicy::DEFAULT);
    assert_ne!(two_of_spades, two_of_clubs);
    assert!(two_of_clubs < two_of_spades);
    assert_eq!(two_of_spades.rank(), 13);
    assert!(two_of_spades.less_or_equal(&two_of_clubs));

    let spades = Deck::from(vec![two_of_spades]);
    let clubs = Deck::from(vec![two_of_clubs]);
    assert_ne!(spades, clubs);

    let ace_low = RankingPolicy::from_tables(
        Suit::ALL.map(|s| (s, s.ordinal())),
        Value::ALL.map(|v| (v, v.nominal() - 1)),
    )
    .unwrap();
    let suit_ordered = set_ranking_policy(ace_low);
    assert!(suit_ordered.is_suit_ordered());
    assert!(Card::new(Suit::Hearts, Value::Ace) < Card::new(Suit::Hearts, Value::Two));

    assert_eq!(reset_ranking_policy(), ace_low);
    assert_eq!(ranking_policy(), RankingPolicy::DEFAULT);
    assert_eq!(spades, clubs);
    assert_eq!(
        Deck::with_options(DeckOptions::default().with_n(13)),
        Deck::from(Value::ALL.map(|v| Card::new(Suit::Clubs, v)).to_vec())
    );
}

use std::collections::HashMap;

use rayon::prelude::*;

use freecell_rules::{deal_for_seed, shuffle, ClassicRng, DECK};

fn syms(seed: u32) -> Vec<&'static str> {
    deal_for_seed(seed).iter().map(|c| c.sym).collect()
}

#[test]
fn classic_rng_matches_reference_sequence() {
    let draws: Vec<u32> = ClassicRng::new(1).take(5).collect();
    assert_eq!(draws, vec![41, 18467, 6334, 26500, 19169]);

    let mut rng = ClassicRng::new(0);
    assert_eq!(rng.draw(), 38);
    assert_eq!(rng.draw(), 7719);
}

#[test]
fn classic_rng_is_deterministic_per_seed() {
    let a: Vec<u32> = ClassicRng::new(11_982).take(52).collect();
    let b: Vec<u32> = ClassicRng::new(11_982).take(52).collect();
    let c: Vec<u32> = ClassicRng::new(11_983).take(52).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|&v| v <= 0x7FFF));
}

#[test]
fn shuffle_reproduces_published_deals() {
    let games: [(u32, [&str; 52]); 5] = [
        (
            1,
            [
                "JD", "2D", "9H", "JC", "5D", "7H", "7C", "5H", //
                "KD", "KC", "9S", "5S", "AD", "QC", "KH", "3H", //
                "2S", "KS", "9D", "QD", "JS", "AS", "AH", "3C", //
                "4C", "5C", "TS", "QH", "4H", "AC", "4D", "7S", //
                "3S", "TD", "4S", "TH", "8H", "2C", "JH", "7D", //
                "6D", "8S", "8D", "QS", "6C", "3D", "8C", "TC", //
                "6S", "9C", "2H", "6H",
            ],
        ),
        (
            2,
            [
                "QD", "QC", "KC", "3C", "4C", "2C", "KD", "5C", //
                "4D", "JD", "JS", "6H", "QS", "6D", "2D", "9C", //
                "TD", "JC", "8C", "6C", "8S", "4S", "5D", "QH", //
                "7S", "9D", "KS", "7C", "6S", "4H", "AC", "8H", //
                "AH", "9S", "TC", "2S", "3S", "TS", "9H", "2H", //
                "3H", "AD", "7H", "3D", "5H", "8D", "KH", "7D", //
                "AS", "5S", "TH", "JH",
            ],
        ),
        (
            11_982,
            [
                "AH", "AS", "4H", "AC", "2D", "6S", "TS", "JS", //
                "3D", "3H", "QS", "QC", "8S", "7H", "AD", "KS", //
                "KD", "6H", "5S", "4D", "9H", "JH", "9S", "3C", //
                "JC", "5D", "5C", "8C", "9D", "TD", "KH", "7C", //
                "6C", "2C", "TH", "QH", "6D", "TC", "4S", "7S", //
                "JD", "7D", "8H", "9C", "2H", "QD", "4C", "5H", //
                "KC", "8D", "2S", "3S",
            ],
        ),
        (
            31_999,
            [
                "JD", "JH", "AD", "QH", "KH", "6S", "6D", "JC", //
                "AC", "TH", "AS", "8H", "9D", "2H", "8D", "6H", //
                "AH", "7H", "7C", "5D", "7S", "6C", "QC", "JS", //
                "9C", "3D", "5C", "4C", "2S", "8S", "3C", "7D", //
                "5H", "8C", "4H", "TD", "TS", "3H", "4S", "KC", //
                "TC", "4D", "9S", "2C", "KD", "9H", "KS", "5S", //
                "QS", "2D", "QD", "3S",
            ],
        ),
        (
            999_999,
            [
                "AH", "9S", "3D", "6C", "8D", "8H", "QS", "TS", //
                "KD", "3C", "2D", "6D", "5H", "QD", "2S", "4D", //
                "9D", "3S", "6H", "9H", "QC", "JH", "AS", "JS", //
                "3H", "7H", "2H", "7S", "JC", "5D", "TD", "TH", //
                "6S", "4S", "9C", "5C", "8C", "8S", "4C", "TC", //
                "7C", "AC", "KH", "2C", "5S", "KS", "AD", "4H", //
                "QH", "KC", "JD", "7D",
            ],
        ),
    ];

    for (seed, expected) in games {
        let got = syms(seed);
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(got[i], *want, "seed {seed} card {i}: expected {want}, got {}", got[i]);
        }
    }
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in [0u32, 1, 617, 999_999] {
        let mut ids: Vec<u8> = deal_for_seed(seed).iter().map(|c| c.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0u8..52).collect::<Vec<_>>(), "seed {seed}");
    }
}

#[test]
fn shuffle_indexes_into_the_given_ordering() {
    let mut reversed = DECK;
    reversed.reverse();
    let standard = shuffle(7, &DECK);
    let permuted = shuffle(7, &reversed);
    for (a, b) in standard.iter().zip(permuted.iter()) {
        assert_eq!(b.id, 51 - a.id);
    }
}

#[test]
fn original_games_have_unique_deals() {
    let mut seen: HashMap<[u8; 52], u32> = HashMap::with_capacity(32_000);
    for seed in 0u32..32_000 {
        let key = deal_for_seed(seed).map(|c| c.id);
        if let Some(prev) = seen.insert(key, seed) {
            panic!("duplicate deal for games {prev} and {seed}");
        }
    }
}

#[test]
#[ignore = "deals all one million games; run with --ignored"]
fn million_games_have_unique_deals() {
    let mut keys: Vec<[u8; 52]> = (0u32..=999_999)
        .into_par_iter()
        .map(|seed| deal_for_seed(seed).map(|c| c.id))
        .collect();
    keys.par_sort_unstable();
    let total = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), total, "duplicate deals among the first million games");
}

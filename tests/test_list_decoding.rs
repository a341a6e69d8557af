//! Integration tests for interpolation-based list decoding

use proptest::prelude::*;
use rsdecode::corruption::{Corruptor, FixedCorruptor, RandomCorruptor};
use rsdecode::reed_solomon::{symbols_from_text, text_from_polynomial, InterpolationDegrees};
use rsdecode::{
    list_decode, unique_decode, Codeword, Encoder, Gf257, ListDecoder, ListDecoderConfig, Poly,
};

fn encode_text(text: &str, n: usize) -> (Poly<257>, Codeword<257>) {
    let symbols = symbols_from_text(text).unwrap();
    let codeword = Encoder::with_length(n).unwrap().encode(&symbols).unwrap();
    (Poly::new(symbols), codeword)
}

fn assert_sound(list: &[Poly<257>], received: &Codeword<257>, k: usize, e: usize) {
    for candidate in list {
        assert!(candidate.degree().unwrap_or(0) < k, "{} too large", candidate);
        assert!(received.mismatches(candidate) <= e, "{} too far", candidate);
    }
    assert!(list.windows(2).all(|w| w[0] < w[1]), "list not sorted and unique");
}

#[test]
fn test_sixteen_errors_in_thirty() {
    let (message, mut received) = encode_text("abc", 30);
    RandomCorruptor::seeded(11)
        .corrupt(&mut received, 16)
        .unwrap();

    // Unique decoding can only handle (30 - 3) / 2 = 13 errors
    let list = list_decode(&received, 3, 17).unwrap();
    assert!(list.contains(&message));
    assert_sound(&list, &received, 3, 17);

    let texts: Vec<String> = list
        .iter()
        .filter_map(|p| text_from_polynomial(p, 3).ok())
        .collect();
    assert!(texts.iter().any(|t| t == "abc"));
}

#[test]
fn test_seventeen_errors_in_thirty() {
    // One past the guaranteed radius of 16. The kernel vector whose free
    // column is X^7 Y^2 gives Q(X, P(X)) of degree at most 12, which still
    // vanishes at the 13 clean positions.
    for seed in 0..10 {
        let (message, mut received) = encode_text("abc", 30);
        RandomCorruptor::seeded(seed)
            .corrupt(&mut received, 17)
            .unwrap();
        let list = list_decode(&received, 3, 17).unwrap();
        assert!(list.contains(&message), "seed {}", seed);
        assert_sound(&list, &received, 3, 17);
    }
}

#[test]
fn test_beyond_radius_is_sound() {
    for seed in [2, 3, 5] {
        let (_, mut received) = encode_text("abc", 30);
        RandomCorruptor::seeded(seed)
            .corrupt(&mut received, 18)
            .unwrap();
        let list = list_decode(&received, 3, 18).unwrap();
        assert_sound(&list, &received, 3, 18);
    }
}

#[test]
fn test_list_agrees_with_unique_decoding() {
    let (message, mut received) = encode_text("abc", 10);
    FixedCorruptor::at_positions(&[2])
        .corrupt(&mut received, 1)
        .unwrap();
    let unique = unique_decode(&received, 3, 3).unwrap();
    let list = list_decode(&received, 3, 3).unwrap();
    assert_eq!(unique, message);
    assert!(list.contains(&unique));
    assert_sound(&list, &received, 3, 3);
}

#[test]
fn test_single_symbol_code() {
    let (message, received) = encode_text("a", 1);
    assert_eq!(list_decode(&received, 1, 0).unwrap(), vec![message]);
}

#[test]
fn test_thread_configurations_agree() {
    let (_, mut received) = encode_text("rust", 40);
    RandomCorruptor::seeded(77)
        .corrupt(&mut received, 12)
        .unwrap();
    let expected = ListDecoder::new(ListDecoderConfig::sequential())
        .decode(&received, 4, 14)
        .unwrap();
    for config in [ListDecoderConfig::default(), ListDecoderConfig::new(2, true)] {
        assert_eq!(ListDecoder::new(config).decode(&received, 4, 14).unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: within the guaranteed radius the true message is always listed
    #[test]
    fn prop_message_listed_within_radius(
        message in prop::collection::vec(0u32..256, 2..4),
        n in 12usize..28,
        seed in any::<u64>(),
    ) {
        let k = message.len();
        let radius = InterpolationDegrees::for_code(n, k).radius(n, k);
        prop_assume!(radius.is_some());
        let errors = radius.unwrap_or(0);

        let symbols: Vec<Gf257> = message.into_iter().map(Gf257::new).collect();
        let mut received = Encoder::with_length(n).unwrap().encode(&symbols).unwrap();
        RandomCorruptor::seeded(seed).corrupt(&mut received, errors).unwrap();

        let list = ListDecoder::new(ListDecoderConfig::sequential())
            .decode(&received, k, errors)
            .unwrap();
        prop_assert!(list.contains(&Poly::new(symbols)));
        for candidate in &list {
            prop_assert!(received.mismatches(candidate) <= errors);
        }
    }
}

use aoc2017::knot::{self, KnotHasher, Ring};
use aoc2017::KnotError;

#[test]
fn one_pass_checksum_from_comma_separated_lengths() {
    let lengths = knot::pinch_lengths("3, 4, 1, 5\n").unwrap();
    let knot = KnotHasher::new(Ring::identity(5).unwrap()).apply_sequence(&lengths);
    assert_eq!(knot.ring().as_slice(), &[3, 4, 2, 1, 0]);
    assert_eq!(knot::checksum(knot.ring()).unwrap(), 12);
}

#[test]
fn digest_pipeline_by_hand_matches_knot_digest() {
    let lengths = knot::byte_lengths("AoC 2017");
    let sparse = knot::sparse_hash(Ring::identity(knot::RING_CAPACITY).unwrap(), &lengths);
    let dense = knot::dense_hash(&sparse).unwrap();
    assert_eq!(dense.len(), 16);
    assert_eq!(knot::to_hex(&dense), knot::knot_digest("AoC 2017").unwrap());
    assert_eq!(knot::to_hex(&dense), "33efeb34ea91902bb2f59c9920caa6cd");
}

#[test]
fn digest_of_larger_ring_folds_every_block() {
    let sparse = knot::sparse_hash(Ring::identity(32).unwrap(), &knot::byte_lengths("1,2,3"));
    let dense = knot::dense_hash(&sparse).unwrap();
    assert_eq!(dense.len(), 2);
    assert_eq!(knot::to_hex(&dense).len(), 4);
}

#[test]
fn negative_length_is_rejected() {
    assert_eq!(
        knot::pinch_lengths("1,-2,3"),
        Err(KnotError::InvalidInput {token: "-2".to_string()})
    );
}

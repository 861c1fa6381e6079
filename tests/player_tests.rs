use chaser_client::protocol::decode_response;
use chaser_client::{OrderKind, Player, RandomWalker};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_walker_avoids_blocks() {
    // Blocks up, left and down; only right is open.
    let snapshot = decode_response(b"0010100010").unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    let mut player = RandomWalker::new();
    for _ in 0..32 {
        assert_eq!(player.next_order(&mut rng, &snapshot), OrderKind::WalkRight);
    }
}

#[test]
fn test_walker_takes_visible_item() {
    let snapshot = decode_response(b"0000000020").unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        RandomWalker::new().next_order(&mut rng, &snapshot),
        OrderKind::WalkDown
    );
}

#[test]
fn test_walker_boxed_in_looks_around() {
    let snapshot = decode_response(b"0010101010").unwrap();
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(
        RandomWalker::new().next_order(&mut rng, &snapshot),
        OrderKind::LookUp
    );
}

#[test]
fn test_same_seed_same_moves() {
    let snapshot = decode_response(b"0000000000").unwrap();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let mut p1 = RandomWalker::new();
    let mut p2 = RandomWalker::new();
    for _ in 0..16 {
        assert_eq!(
            p1.next_order(&mut rng1, &snapshot),
            p2.next_order(&mut rng2, &snapshot)
        );
    }
}

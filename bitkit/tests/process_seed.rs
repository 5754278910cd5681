//! Runs in its own process so the seed can be set before first use

use bitkit::seed::{accumulator, block_comparer, block_hash};
use bitkit::{init_process_seed, process_seed, BitkitError, Fidelity, HashSeed};

#[test]
fn test_custom_seed_established_once() {
    let custom = HashSeed::new(0x1234_5678);
    assert_eq!(init_process_seed(custom), Ok(()));
    assert_eq!(process_seed(), custom);

    // Repeating the same seed is fine; a different one is not
    assert_eq!(init_process_seed(custom), Ok(()));
    assert_eq!(
        init_process_seed(HashSeed::DEFAULT),
        Err(BitkitError::SeedAlreadyInitialized)
    );

    // Known value for the empty input under this seed
    assert_eq!(block_hash(b"") as u32, 0xBD20_9070);
    assert_eq!(accumulator().finalize() as u32, 0xBD20_9070);

    let data = b"seeded comparer";
    let comparer = block_comparer(Fidelity::UNLIMITED);
    assert_eq!(comparer.hash(&data[..]), bitkit::hash::block_hash(custom, data));
    assert_ne!(comparer.hash(&data[..]), bitkit::hash::block_hash(HashSeed::DEFAULT, data));
}

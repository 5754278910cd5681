//! Sort a batch of buffers, intern them, and inspect a few bit patterns

use bitkit::bits::{leading_zeros, pop_count, rotate_left, trailing_zeros};
use bitkit::{batch, BufferComparer, BufferInterner, Fidelity, HashSeed};

fn main() {
    println!("=== Buffer ordering ===");
    let words = ["pear", "fig", "apple", "kiwi", "fig", "", "banana", "kiwi"];
    let mut buffers: Vec<&[u8]> = words.iter().map(|w| w.as_bytes()).collect();

    let comparer = BufferComparer::DEFAULT;
    comparer.sort_buffers(&mut buffers);
    let sorted: Vec<&str> = buffers
        .iter()
        .map(|b| std::str::from_utf8(b).unwrap_or("?"))
        .collect();
    println!("Length-first order: {sorted:?}");

    println!("\n=== Interning with a 2-byte hash window ===");
    let mut interner = BufferInterner::with_comparer(BufferComparer::fnv(Fidelity::new(2)));
    for word in words {
        let id = interner.intern(word.as_bytes());
        println!("  {word:>8} -> {id:?}");
    }
    println!(
        "{} distinct buffers, {} shared a hash code",
        interner.len(),
        interner.collisions()
    );

    println!("\n=== Parallel hashing ===");
    let block = BufferComparer::block(Fidelity::UNLIMITED, HashSeed::new(42));
    let codes = batch::hash_all(&block, &buffers);
    for (buffer, code) in buffers.iter().zip(&codes) {
        println!("  {:>8}: {:#010x}", String::from_utf8_lossy(buffer), *code as u32);
    }

    println!("\n=== Bit patterns ===");
    for value in [0u32, 1, 0x8000_0000, 0x00F0_0F00, u32::MAX] {
        println!(
            "  {value:#010x}: popcnt {:2}, lz {:2}, tz {:2}, rotl(4) {:#010x}",
            pop_count(value),
            leading_zeros(value),
            trailing_zeros(value),
            rotate_left(value, 4)
        );
    }
}

//! Hash files three ways and compare them by content
//!
//! Usage: cargo run --example hash_file -- <file> [<other file>]

use bitkit::hash::fnv;
use bitkit::{process_seed, stream, BufferComparer, Fidelity};
use std::fs::File;
use std::time::Instant;

fn main() -> bitkit::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        println!("Usage: hash_file <file> [<other file>]");
        return Ok(());
    };

    println!("=== Hashing {path} ===");
    let seed = process_seed();
    println!("Process seed: {:#010x}", seed.value());

    let start = Instant::now();
    let streamed = stream::block_reader(seed, &mut File::open(&path)?)?;
    println!(
        "Block hash (streamed): {:#010x} in {:.3}ms",
        streamed as u32,
        start.elapsed().as_secs_f64() * 1000.0
    );

    let start = Instant::now();
    let fnv_streamed = stream::fnv_reader(&mut File::open(&path)?)?;
    println!(
        "FNV-1a (streamed):     {:#010x} in {:.3}ms",
        fnv_streamed as u32,
        start.elapsed().as_secs_f64() * 1000.0
    );

    #[cfg(feature = "mmap")]
    {
        let start = Instant::now();
        let mapped = bitkit::mapped::hash_file(&BufferComparer::DEFAULT, &path)?;
        println!(
            "FNV-1a (mapped):       {:#010x} in {:.3}ms",
            mapped as u32,
            start.elapsed().as_secs_f64() * 1000.0
        );
        assert_eq!(mapped, fnv_streamed);

        let prefix = bitkit::mapped::hash_file(&BufferComparer::fnv(Fidelity::new(64)), &path)?;
        println!("FNV-1a (first 64 B):   {:#010x}", prefix as u32);

        if let Some(other) = args.next() {
            let ordering = bitkit::mapped::compare_files(&BufferComparer::DEFAULT, &path, &other)?;
            println!("\n{path} vs {other}: {ordering:?}");
        }
    }

    if fnv_streamed == fnv::EMPTY_HASH {
        println!("(file is empty)");
    }
    Ok(())
}

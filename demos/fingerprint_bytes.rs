//! Basic in-memory fingerprinting example with the streaming API.
//!
//! Run with:
//!     cargo run --example fingerprint_bytes

use hazzy::{FingerprintConfig, Fingerprinter, fingerprint_bytes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two similar inputs: the second one has a few bytes changed near the end
    let original: Vec<u8> = (0..300 * 1024).map(|i| ((i / 7) % 200) as u8).collect();
    let mut edited = original.clone();
    edited[250_000..250_016].copy_from_slice(b"edited in place!");

    println!("Fingerprinting {} bytes of data...\n", original.len());

    // Feed the engine in 8 KB batches, as a network stream would
    let fingerprinter = Fingerprinter::new(FingerprintConfig::default())?;
    let mut engine = fingerprinter.engine();
    for batch in original.chunks(8 * 1024) {
        engine.update(batch)?;
    }
    let a = engine.finish()?;

    // Or all at once
    let b = fingerprint_bytes(edited)?;

    println!("original: ratio={} coarse={}", a.ratio(), a.coarse());
    println!("edited:   ratio={} coarse={}", b.ratio(), b.coarse());

    let differing: Vec<usize> = a
        .fine_codes()
        .zip(b.fine_codes())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect();

    println!(
        "\n{} of {} segments differ: {:?}",
        differing.len(),
        a.segment_count(),
        differing
    );

    Ok(())
}

//! Benchmark utilities.

use rand::Rng;

/// Generate random bytes of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate line-oriented text, which compresses like typical input files.
pub fn text_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let line = format!("record_{}\t{}\tACGT\n", rng.gen_range(0..10_000), rng.gen::<u16>());
        out.extend_from_slice(line.as_bytes());
    }
    out.truncate(size);
    out
}

/// File names exercising each writable backend.
pub const BACKEND_FILES: [&str; 3] = ["bench.txt", "bench.gz", "bench.bz2"];

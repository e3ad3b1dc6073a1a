//! Benchmark utilities for the Vedabyte duplex engine
pub mod utils {
    use rand::Rng;

    /// Random little-endian digit vector of the given length.
    pub fn generate_random_digits(len: usize) -> Vec<u8> {
        let mut rng = rand::thread_rng();
        (0..len).map(|_| rng.gen_range(0..10)).collect()
    }
}

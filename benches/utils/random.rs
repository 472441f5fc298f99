use rand::Rng;

pub const DIRECTIONS: [char; 4] = ['U', 'D', 'L', 'R'];

/// A random walk as direction tokens and positive lengths.
#[inline]
pub fn random_walk<R: Rng>(rng: &mut R, count: usize, max_len: i64) -> Vec<(char, i64)> {
    (0..count)
        .map(|_| {
            (
                DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())],
                rng.gen_range(1..max_len),
            )
        })
        .collect()
}

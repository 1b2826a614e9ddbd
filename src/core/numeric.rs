use crate::core::random::RandomGenerator;
use crate::utils::error::Result;

/// `n` independent draws from `[min, max]`.
pub fn generate_sequence(
    rng: &mut RandomGenerator,
    n: usize,
    min: i64,
    max: i64,
) -> Result<Vec<i64>> {
    (0..n).map(|_| rng.random_int(min, max)).collect()
}

pub fn filter_even(seq: &[i64]) -> Vec<i64> {
    seq.iter().copied().filter(|n| n % 2 == 0).collect()
}

// 超出 i64 範圍時飽和
pub fn square_all(seq: &[i64]) -> Vec<i64> {
    seq.iter().map(|n| n.saturating_mul(*n)).collect()
}

pub fn sum(seq: &[i64]) -> i64 {
    seq.iter().fold(0i64, |acc, n| acc.saturating_add(*n))
}

/// Renders a sequence as `[a, b, c]`.
pub fn format_sequence(seq: &[i64]) -> String {
    format!("{:?}", seq)
}

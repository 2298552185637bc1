/// C(n, k) by the multiplicative formula, saturating at `u64::MAX`.
///
/// Zero when `k == 0` or `k > n`: an empty draw is never a hand.
pub fn combinations(n: usize, k: usize) -> u64 {
    if k == 0 || k > n {
        return 0;
    }
    let n = n as u128;
    let k = (k as u128).min(n - k as u128);
    (0..k)
        .try_fold(1u128, |x, i| x.checked_mul(n - i).map(|x| x / (i + 1)))
        .map_or(u64::MAX, |x| u64::try_from(x).unwrap_or(u64::MAX))
}

use super::strength::Strength;
use std::cmp::Ordering;

/// Total order over strengths: class first, then tie-break values.
pub fn compare(a: &Strength, b: &Strength) -> Ordering {
    a.cmp(b)
}

/// Indices of every strength tied for best, in input order.
///
/// A strictly stronger hand resets the set; an equal one joins it.
pub fn find_winners(strengths: &[Strength]) -> Vec<usize> {
    let mut winners = Vec::new();
    let mut best: Option<&Strength> = None;
    for (i, strength) in strengths.iter().enumerate() {
        match best.map(|b| compare(strength, b)) {
            None | Some(Ordering::Greater) => {
                best = Some(strength);
                winners.clear();
                winners.push(i);
            }
            Some(Ordering::Equal) => winners.push(i),
            Some(Ordering::Less) => {}
        }
    }
    winners
}

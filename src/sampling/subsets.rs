use super::combinations::combinations;

/// Subsets walks every k-of-n position mask in increasing numeric order.
///
/// Each item is a u64 with exactly k of its n low bits set; bit i selects
/// element i of whatever slice is being combined. Nothing is stored beyond
/// the current mask, so n must stay below 64.
pub struct Subsets {
    next: u64,
    last: u64,
}

impl Subsets {
    pub fn new(n: usize, k: usize) -> Self {
        if k == 0 || k > n || n >= 64 {
            Self { next: 0, last: 0 }
        } else {
            Self {
                next: (1 << k) - 1,
                last: 1 << n,
            }
        }
    }

    /// Elements of `items` picked out by a mask.
    pub fn select<T: Clone>(mask: u64, items: &[T]) -> Vec<T> {
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, item)| item.clone())
            .collect()
    }

    fn exhausted(&self) -> bool {
        self.next == 0 || self.next >= self.last
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_110                       */ self.next;
        let  a = /* 000_111 <- 000_110 || 000_101 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_001 <-                    */ e >> f;
        /*          001_001 <- 001_000 || 000_001 */ b | g
    }
}

impl Iterator for Subsets {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let mask = self.next;
            self.next = self.permute();
            Some(mask)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted() {
            (0, Some(0))
        } else {
            let n = self.last.trailing_zeros() as usize;
            let k = self.next.count_ones() as usize;
            let remaining = usize::try_from(combinations(n, k)).unwrap_or(usize::MAX);
            (0, Some(remaining))
        }
    }
}

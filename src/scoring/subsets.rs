/// Iterator over every non-empty subset of `len` items, as bitmasks.
///
/// Bit `i` of a mask selects item `i`. Masks are yielded in increasing order,
/// so `len` items produce `2^len - 1` subsets (31 for a full hand).
pub struct Subsets {
    next: u32,
    end: u32,
}

impl Subsets {
    pub fn new(len: usize) -> Self {
        debug_assert!(len < 32, "subset enumeration is limited to 31 items");
        Self { next: 1, end: 1u32 << len }
    }
}

impl Iterator for Subsets {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let mask = self.next;
        self.next += 1;
        Some(mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subsets {}

/// Collect the items selected by `mask`, keeping their original order.
pub fn members<T: Copy>(items: &[T], mask: u32) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, item)| *item)
        .collect()
}

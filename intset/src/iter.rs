use std::iter::FusedIterator;

/// Members of an [`IntSet`](crate::bitset::IntSet) in ascending order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(words: &'a [u64]) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }

        let off = self.current.trailing_zeros() as usize;
        // drop the lowest set bit
        self.current &= self.current - 1;
        Some(self.word_idx * 64 + off)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self
            .words
            .get(self.word_idx + 1..)
            .map_or(0, |rest| rest.iter().map(|w| w.count_ones() as usize).sum());
        let n = self.current.count_ones() as usize + rest;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_words_yield_nothing() {
        let mut it = Iter::new(&[]);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn skips_zero_words() {
        let words = [0, 0, 1 << 3];
        let got: Vec<_> = Iter::new(&words).collect();
        assert_eq!(got, vec![131]);
    }

    #[test]
    fn ascending_within_and_across_words() {
        let words = [(1 << 63) | 1, 0b101];
        let got: Vec<_> = Iter::new(&words).collect();
        assert_eq!(got, vec![0, 63, 64, 66]);
    }

    #[test]
    fn size_hint_is_exact() {
        let words = [0b11, 0, u64::MAX];
        let mut it = Iter::new(&words);
        assert_eq!(it.len(), 66);
        it.next();
        assert_eq!(it.len(), 65);
        assert_eq!(it.count(), 65);
    }
}

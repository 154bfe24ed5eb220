use std::fmt;

use tracing::trace;

use crate::{
    error::{ValueError, ValueErrorKind, to_index},
    iter::Iter,
};

const WORD_BITS: usize = u64::BITS as usize;

/// A set of small non-negative integers.
///
/// Value `x` is stored as bit `x % 64` of word `x / 64`. The word vector only
/// grows on insertion and union, and is emptied by [`IntSet::clear`]; removal
/// never shrinks it.
#[derive(Debug, Clone)]
pub struct IntSet {
    words: Vec<u64>,
}

impl IntSet {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n_bits: usize) -> Self {
        let vec_len = n_bits.div_ceil(WORD_BITS);
        IntSet {
            words: vec![0; vec_len],
        }
    }

    pub fn insert(&mut self, x: usize) {
        let idx = x / WORD_BITS;
        let off = x % WORD_BITS;
        if idx >= self.words.len() {
            trace!(from = self.words.len(), to = idx + 1, "growing word vector");
            self.words.resize(idx + 1, 0);
        }
        self.words[idx] |= 1 << off;
    }

    pub fn insert_all(&mut self, values: impl IntoIterator<Item = usize>) {
        for x in values {
            self.insert(x);
        }
    }

    pub fn remove(&mut self, x: usize) {
        let idx = x / WORD_BITS;
        let off = x % WORD_BITS;
        if let Some(word) = self.words.get_mut(idx) {
            *word &= !(1 << off);
        }
    }

    pub fn contains(&self, x: usize) -> bool {
        let idx = x / WORD_BITS;
        let off = x % WORD_BITS;
        self.words
            .get(idx)
            .is_some_and(|word| (word >> off) & 1 == 1)
    }

    /// Sets `self` to the union of `self` and `other`.
    pub fn union_with(&mut self, other: &IntSet) {
        let shared = self.words.len().min(other.words.len());
        for (word, other_word) in self.words.iter_mut().zip(&other.words[..shared]) {
            *word |= other_word;
        }

        if other.words.len() > shared {
            trace!(
                from = self.words.len(),
                to = other.words.len(),
                "extending word vector from union"
            );
            self.words.extend_from_slice(&other.words[shared..]);
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn clear(&mut self) {
        trace!(words = self.words.len(), "clearing set");
        self.words.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.words)
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Per-word listing of the backing storage, for debugging.
    pub fn dump(&self) -> Dump<'_> {
        Dump { words: &self.words }
    }

    pub fn try_contains(&self, x: i64) -> Result<bool, ValueError> {
        Ok(self.contains(to_index(x)?))
    }

    pub fn try_insert(&mut self, x: i64) -> Result<(), ValueError> {
        let idx = to_index(x)?;
        self.reserve_for(idx, x)?;
        self.insert(idx);
        Ok(())
    }

    pub fn try_remove(&mut self, x: i64) -> Result<(), ValueError> {
        self.remove(to_index(x)?);
        Ok(())
    }

    /// Inserts every value, or none of them if any value is rejected.
    pub fn try_insert_all(
        &mut self,
        values: impl IntoIterator<Item = i64>,
    ) -> Result<(), ValueError> {
        let checked = values
            .into_iter()
            .map(|x| to_index(x).map(|idx| (idx, x)))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(&(idx, x)) = checked.iter().max_by_key(|(idx, _)| *idx) {
            self.reserve_for(idx, x)?;
        }
        self.insert_all(checked.into_iter().map(|(idx, _)| idx));
        Ok(())
    }

    /// Makes room for `idx` without aborting when the allocation fails.
    fn reserve_for(&mut self, idx: usize, value: i64) -> Result<(), ValueError> {
        let needed = (idx / WORD_BITS + 1).saturating_sub(self.words.len());
        self.words.try_reserve(needed).map_err(|_| ValueError {
            kind: ValueErrorKind::TooLarge,
            value,
        })
    }
}

impl Default for IntSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for IntSet {
    fn eq(&self, other: &Self) -> bool {
        let (short, long) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };
        let (head, tail) = long.split_at(short.len());
        head == short.as_slice() && tail.iter().all(|&w| w == 0)
    }
}

impl Eq for IntSet {}

impl Extend<usize> for IntSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.insert_all(iter);
    }
}

impl FromIterator<usize> for IntSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut set = IntSet::new();
        set.insert_all(iter);
        set
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x}")?;
        }
        f.write_str("}")
    }
}

pub struct Dump<'a> {
    words: &'a [u64],
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{i:02}({base:03}): {word:064b} (count: {count})",
                base = i * WORD_BITS,
                count = word.count_ones()
            )?;
        }
        Ok(())
    }
}

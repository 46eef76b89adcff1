//! Interleaved page order for manual double-sided printing.
//!
//! The order mixes two runs: the top half of the document counting down
//! from N, and the bottom half counting up from 1. Starting on the
//! descending run, the active run flips after every even-indexed step, so
//! apart from the first page each run contributes two pages at a time:
//!
//! ```text
//! N = 8   descending: 8 7 6 5   ascending: 1 2 3 4
//!         order:      8 | 1 2 | 7 6 | 3 4 | 5
//! ```

use super::page_count::PageCount;
use std::iter::Rev;
use std::ops::Range;

/// Pages `n, n-1, ..., n/2 + 1`.
pub fn descending_run(n: u32) -> Rev<Range<u32>> {
    (n / 2 + 1..n + 1).rev()
}

/// Pages `1, 2, ..., n/2`.
pub fn ascending_run(n: u32) -> Range<u32> {
    1..n / 2 + 1
}

/// Which run the next page is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveRun {
    Descending,
    Ascending,
}

impl ActiveRun {
    pub fn flip(self) -> Self {
        match self {
            ActiveRun::Descending => ActiveRun::Ascending,
            ActiveRun::Ascending => ActiveRun::Descending,
        }
    }

    /// State after emitting the page at `step`.
    pub fn after(self, step: usize) -> Self {
        if step % 2 == 0 { self.flip() } else { self }
    }
}

/// Lazily yields the mixed page order. Each run keeps its own cursor.
#[derive(Debug, Clone)]
pub struct MixedSeries {
    descending: Rev<Range<u32>>,
    ascending: Range<u32>,
    active: ActiveRun,
    step: usize,
}

impl MixedSeries {
    pub fn new(pages: PageCount) -> Self {
        Self {
            descending: descending_run(pages.get()),
            ascending: ascending_run(pages.get()),
            active: ActiveRun::Descending,
            step: 0,
        }
    }
}

impl Iterator for MixedSeries {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let page = match self.active {
            ActiveRun::Descending => self.descending.next()?,
            ActiveRun::Ascending => self.ascending.next()?,
        };
        self.active = self.active.after(self.step);
        self.step += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.descending.len() + self.ascending.len();
        (0, Some(remaining))
    }
}

pub fn generate(pages: PageCount) -> Vec<u32> {
    let mut series = Vec::with_capacity(pages.get() as usize);
    series.extend(MixedSeries::new(pages));
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn pages(n: i64) -> PageCount {
        PageCount::new(n).unwrap()
    }

    #[test]
    fn test_runs_for_eight() {
        assert_eq!(descending_run(8).collect::<Vec<_>>(), vec![8, 7, 6, 5]);
        assert_eq!(ascending_run(8).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_flip_after_even_steps() {
        let mut active = ActiveRun::Descending;
        let mut seen = Vec::new();
        for step in 0..8 {
            seen.push(active);
            active = active.after(step);
        }
        use ActiveRun::*;
        assert_eq!(
            seen,
            vec![Descending, Ascending, Ascending, Descending, Descending, Ascending, Ascending, Descending]
        );
    }

    #[test]
    fn test_generate_four() {
        assert_eq!(generate(pages(4)), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_generate_eight() {
        assert_eq!(generate(pages(8)), vec![8, 1, 2, 7, 6, 3, 4, 5]);
    }

    #[test]
    fn test_generate_sixteen() {
        assert_eq!(
            generate(pages(16)),
            vec![16, 1, 2, 15, 14, 3, 4, 13, 12, 5, 6, 11, 10, 7, 8, 9]
        );
    }

    #[test]
    fn test_iterator_is_fused_after_exhaustion() {
        let mut series = MixedSeries::new(pages(4));
        assert_eq!(series.by_ref().count(), 4);
        assert_eq!(series.next(), None);
    }

    proptest! {
        #[test]
        fn prop_length_is_n(k in 1i64..2_000) {
            prop_assert_eq!(generate(pages(k * 4)).len() as i64, k * 4);
        }

        #[test]
        fn prop_is_permutation(k in 1i64..2_000) {
            let n = k * 4;
            let series = generate(pages(n));
            let distinct: BTreeSet<u32> = series.iter().copied().collect();
            prop_assert_eq!(distinct.len(), series.len());
            prop_assert_eq!(distinct, (1..=n as u32).collect::<BTreeSet<_>>());
        }

        #[test]
        fn prop_is_deterministic(k in 1i64..500) {
            prop_assert_eq!(generate(pages(k * 4)), generate(pages(k * 4)));
        }
    }
}

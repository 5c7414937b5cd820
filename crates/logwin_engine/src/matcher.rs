use std::collections::VecDeque;

use logwin_domain::{Occurrence, PairingPolicy};

/// A begin matched to an end, as indices into the slices given to
/// [`match_pairs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claim {
    pub begin: usize,
    pub end: usize,
}

/// Raw matcher output. Claims are in end order, not yet sorted by begin line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    pub claims: Vec<Claim>,
    /// Indices of begins no end claimed, ascending
    pub unpaired_begins: Vec<usize>,
    /// Indices of ends that found no eligible begin, ascending
    pub unpaired_ends: Vec<usize>,
}

/// Begins that precede the current end and are still unclaimed.
///
/// Begins are opened in ascending line order; the implementation decides
/// which one an end claims.
trait OpenBegins: Default {
    fn open(&mut self, begin: usize);
    fn claim(&mut self) -> Option<usize>;
}

/// FIFO: the oldest open begin is claimed first.
impl OpenBegins for VecDeque<usize> {
    fn open(&mut self, begin: usize) {
        self.push_back(begin);
    }

    fn claim(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

/// LIFO: the most recently opened begin is claimed first.
impl OpenBegins for Vec<usize> {
    fn open(&mut self, begin: usize) {
        self.push(begin);
    }

    fn claim(&mut self) -> Option<usize> {
        self.pop()
    }
}

/// Matches end occurrences to begin occurrences under `policy`.
///
/// Both inputs must be ascending by line, as produced by
/// [`scan`](crate::scan). Ends are visited in ascending order; each claims
/// one unclaimed begin on a strictly earlier line, or is left unpaired for
/// good. A line holding both markers contributes an independent begin and
/// end, so its end can close an earlier window while its begin opens a new
/// one, but it never pairs with itself.
pub fn match_pairs(
    begins: &[Occurrence],
    ends: &[Occurrence],
    policy: PairingPolicy,
) -> Matching {
    debug_assert!(begins.windows(2).all(|w| w[0].line < w[1].line));
    debug_assert!(ends.windows(2).all(|w| w[0].line < w[1].line));

    match policy {
        PairingPolicy::Fifo => run::<VecDeque<usize>>(begins, ends),
        PairingPolicy::Lifo => run::<Vec<usize>>(begins, ends),
    }
}

fn run<O: OpenBegins>(begins: &[Occurrence], ends: &[Occurrence]) -> Matching {
    let mut open = O::default();
    let mut claimed = vec![false; begins.len()];
    let mut next_begin = 0;
    let mut matching = Matching::default();

    for (end, end_occurrence) in ends.iter().enumerate() {
        while next_begin < begins.len() && begins[next_begin].line < end_occurrence.line {
            open.open(next_begin);
            next_begin += 1;
        }

        match open.claim() {
            Some(begin) => {
                claimed[begin] = true;
                matching.claims.push(Claim { begin, end });
            }
            None => matching.unpaired_ends.push(end),
        }
    }

    matching.unpaired_begins = claimed
        .iter()
        .enumerate()
        .filter(|(_, claimed)| !**claimed)
        .map(|(begin, _)| begin)
        .collect();

    matching
}

use logwin_domain::{Occurrence, Pair, SearchResult};

use crate::Matching;

/// Turns matcher indices back into owned occurrences.
///
/// Pairs come out of the matcher in end order, which under LIFO is not begin
/// order, so they are sorted here by begin line. Unpaired lists keep scan
/// order.
pub fn assemble(begins: &[Occurrence], ends: &[Occurrence], matching: &Matching) -> SearchResult {
    let mut pairs: Vec<Pair> = matching
        .claims
        .iter()
        .map(|claim| Pair::new(begins[claim.begin].clone(), ends[claim.end].clone()))
        .collect();
    pairs.sort_by_key(|pair| pair.begin.line);

    SearchResult {
        pairs,
        unpaired_begins: pick(begins, &matching.unpaired_begins),
        unpaired_ends: pick(ends, &matching.unpaired_ends),
    }
}

fn pick(occurrences: &[Occurrence], indices: &[usize]) -> Vec<Occurrence> {
    indices.iter().map(|index| occurrences[*index].clone()).collect()
}

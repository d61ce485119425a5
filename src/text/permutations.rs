// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::solver::PermutationsEnumerated;
use crate::observability::messages::StructuredLog;

/// All orderings of `items`.
///
/// Each item in turn is fixed as the head, in input order, and the rest are
/// permuted by the same rule. For `[A, B, C]` this yields `ABC, ACB, BAC,
/// BCA, CAB, CBA`. Duplicated items produce duplicated orderings.
///
/// Output grows as `n!`; bounding the input is the caller's job.
pub fn get_permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let perms = permute(items);
    PermutationsEnumerated {
        item_count: items.len(),
        permutation_count: perms.len(),
    }
    .log();
    perms
}

fn permute<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }

    let mut perms = Vec::new();
    for (i, head) in items.iter().enumerate() {
        let remaining: Vec<T> = items[..i].iter().chain(&items[i + 1..]).cloned().collect();
        for tail in permute(&remaining) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(head.clone());
            perm.extend(tail);
            perms.push(perm);
        }
    }
    perms
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_items_in_enumeration_order() {
        let perms = get_permutations(&['A', 'B', 'C']);
        let expected = vec![
            vec!['A', 'B', 'C'],
            vec!['A', 'C', 'B'],
            vec!['B', 'A', 'C'],
            vec!['B', 'C', 'A'],
            vec!['C', 'A', 'B'],
            vec!['C', 'B', 'A'],
        ];
        assert_eq!(perms, expected);
    }

    #[test]
    fn test_every_ordering_appears_once() {
        let perms = get_permutations(&[1, 2, 3, 4]);
        assert_eq!(perms.len(), 24);
        let distinct: HashSet<_> = perms.iter().collect();
        assert_eq!(distinct.len(), 24);
        assert_eq!(perms[0], vec![1, 2, 3, 4]);
        assert_eq!(perms[23], vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_short_inputs_return_themselves() {
        let empty: Vec<Vec<u8>> = get_permutations(&[]);
        assert_eq!(empty, vec![Vec::<u8>::new()]);
        assert_eq!(get_permutations(&["solo"]), vec![vec!["solo"]]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let perms = get_permutations(&['a', 'a']);
        assert_eq!(perms, vec![vec!['a', 'a'], vec!['a', 'a']]);
    }
}

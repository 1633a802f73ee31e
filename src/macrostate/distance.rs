/// disagreement test between a live dot-bracket structure and a
/// predicate target, with early exit once the tolerance is
/// exceeded. wildcard targets may hold '*', which matches any
/// character; with wildcard off every target character counts.
///
/// the accounting is positional, not a plain Hamming distance:
/// a single left-to-right pass tracks both structures' open
/// pairs and charges positions whose pairing the character
/// comparison alone cannot see. mismatched lengths and
/// unbalanced targets are bad input and never match.
pub fn within(ours: &str, target: &str, tolerance: usize, wildcard: bool) -> bool {
    let ours = ours.chars().collect::<Vec<char>>();
    let target = target.chars().collect::<Vec<char>>();
    if ours.len() != target.len() {
        return false;
    }
    let mut d = 0;
    let mut our_pairs = Vec::new();
    let mut stop_pairs = Vec::new();
    for (i, (&a, &b)) in ours.iter().zip(target.iter()).enumerate() {
        if (!wildcard || b != '*') && a != b {
            d += 1;
        }
        if a == '(' {
            our_pairs.push(i);
        }
        if b == '(' {
            stop_pairs.push(i);
        }
        match (a == ')', b == ')') {
            (true, true) => {
                let (Some(p), Some(q)) = (our_pairs.pop(), stop_pairs.pop()) else {
                    return false;
                };
                // both strings close here but the target pair
                // (q, i) is not ours; neither end was visible
                // to the character comparison
                if p != q && ours[q] == '(' {
                    d += 2;
                }
            }
            (true, false) => {
                if our_pairs.pop().is_none() {
                    return false;
                }
            }
            (false, true) => {
                let Some(q) = stop_pairs.pop() else {
                    return false;
                };
                // this index was already charged by the
                // character comparison; the opening of the
                // broken target pair may not have been
                if ours[q] == '(' && a != '(' {
                    d += 1;
                }
            }
            (false, false) => {}
        }
        if d > tolerance {
            return false;
        }
    }
    d <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    /// probe the underlying distance by bisecting tolerances
    fn distance(ours: &str, target: &str, wildcard: bool) -> Option<usize> {
        (0..=ours.len() + target.len())
            .find(|&tol| within(ours, target, tol, wildcard))
    }

    #[test]
    fn topologically_shifted_pairs() {
        assert_eq!(distance("(())", "()()", true), Some(2));
        assert!(!within("(())", "()()", 1, true));
        assert!(within("(())", "()()", 2, true));
    }

    #[test]
    fn identical_structures_are_free() {
        assert_eq!(distance("((..))..", "((..))..", true), Some(0));
        assert_eq!(distance("", "", true), Some(0));
    }

    #[test]
    fn unpaired_opening_is_charged_once() {
        // ours pairs (0,3), the target pairs (0,2): position 0
        // reads identically but belongs to a broken pair
        assert_eq!(distance("(..)", "(.).", true), Some(3));
    }

    #[test]
    fn silent_double_break_is_charged_twice() {
        // both strings close at the last position with matching
        // characters, but ours pairs it with 4 and the target
        // with 0: that closing and our opening at 0 are each
        // charged on top of the two character mismatches
        assert_eq!(distance("(())()", "(()())", true), Some(4));
        // when the broken target pair is visible to the
        // character comparison, nothing extra is charged
        assert_eq!(distance("().()", "()(.)", true), Some(2));
    }

    #[test]
    fn wildcards_match_anything() {
        assert!(within("((((....))))", "************", 0, true));
        assert!(within("..((..))....", "************", 0, true));
        // with wildcards off, '*' is a plain character
        assert!(!within("....", "****", 3, false));
        assert!(within("....", "****", 4, false));
    }

    #[test]
    fn length_mismatch_never_matches() {
        assert!(!within("....", "...", 10, true));
        assert!(!within("", ".", 10, true));
    }

    #[test]
    fn premature_close_never_matches() {
        assert!(!within("....", ")(..", 10, true));
        assert!(!within("))((", "....", 10, true));
    }

    #[test]
    fn tolerance_is_monotone() {
        let ours = "((..))..(())";
        let target = "((....))..()";
        let d = distance(ours, target, true).unwrap();
        for tol in 0..d {
            assert!(!within(ours, target, tol, true));
        }
        for tol in d..d + 4 {
            assert!(within(ours, target, tol, true));
        }
    }

    #[test]
    fn loose_is_a_superset_of_exact() {
        let ours = "((((....))))";
        assert!(within(ours, ours, 0, true));
    }
}

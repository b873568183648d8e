//! Two-column page layout
//!
//! Sibling controls are split into two visual columns, matching the host design
//! surface. With an even count the second column starts at the midpoint itself,
//! with an odd count one later.
//!
//! | count | flags (1-based index) |
//! |-------|-----------------------|
//! | 1     | F                     |
//! | 2     | T T                   |
//! | 3     | F F T                 |
//! | 4     | F T T T               |
//! | 5     | F F F T T             |

/// `ceil(count / 2)`, or `count` itself when that is zero.
pub fn midpoint(count: usize) -> usize {
    let mid = count.div_ceil(2);
    if mid == 0 {
        count
    } else {
        mid
    }
}

/// Whether the sibling at 1-based `index` out of `count` starts the second column.
pub fn starts_second_column(index: usize, count: usize) -> bool {
    let mid = midpoint(count);
    if count % 2 == 0 {
        index >= mid
    } else {
        index > mid
    }
}

/// Separator flag for every sibling; `inherited` is the parent control's flag.
pub fn separator_flags(count: usize, inherited: bool) -> Vec<bool> {
    (1..=count)
        .map(|index| inherited || starts_second_column(index, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(0), 0);
        assert_eq!(midpoint(1), 1);
        assert_eq!(midpoint(2), 1);
        assert_eq!(midpoint(3), 2);
        assert_eq!(midpoint(4), 2);
        assert_eq!(midpoint(5), 3);
    }

    #[test]
    fn test_flags_for_small_counts() {
        assert_eq!(separator_flags(0, false), Vec::<bool>::new());
        assert_eq!(separator_flags(1, false), vec![F]);
        assert_eq!(separator_flags(2, false), vec![T, T]);
        assert_eq!(separator_flags(3, false), vec![F, F, T]);
        assert_eq!(separator_flags(4, false), vec![F, T, T, T]);
        assert_eq!(separator_flags(5, false), vec![F, F, F, T, T]);
    }

    #[test]
    fn test_inherited_flag_wins() {
        assert_eq!(separator_flags(3, true), vec![T, T, T]);
        assert_eq!(separator_flags(1, true), vec![T]);
    }

    #[test]
    fn test_leading_false_run() {
        for count in 1..=9usize {
            let leading = separator_flags(count, false)
                .iter()
                .take_while(|flag| !**flag)
                .count();
            let expected = if count % 2 == 0 {
                midpoint(count) - 1
            } else {
                midpoint(count)
            };
            assert_eq!(leading, expected, "count {}", count);
        }
    }
}

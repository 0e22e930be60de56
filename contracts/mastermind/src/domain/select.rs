//! Branch-free selection helpers.
//!
//! Both candidate values are always evaluated by the caller before the
//! selection happens, so "leave unchanged" is expressed as selecting the old
//! value rather than skipping the computation of the new one.

/// Returns `when_true` if `condition` holds, otherwise `when_false`.
#[inline(always)]
pub fn select<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition {
        when_true
    } else {
        when_false
    }
}

/// 0/1 indicator of a boolean, for multiply-accumulate selection.
#[inline(always)]
pub fn indicator(condition: bool) -> u32 {
    condition as u32
}

/// Sums `indicator(i == index) * values[i]` over every slot and counts how
/// many indicators fired. Exactly one must fire for the read to be valid.
pub fn one_hot_select(values: &[u32], index: u32) -> (u32, u32) {
    let mut selected = 0u32;
    let mut fired = 0u32;
    for (i, value) in values.iter().enumerate() {
        let hit = indicator(i as u32 == index);
        fired += hit;
        selected += hit * value;
    }
    (selected, fired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_picks_by_condition() {
        assert_eq!(select(true, 1, 2), 1);
        assert_eq!(select(false, 1, 2), 2);
    }

    #[test]
    fn test_one_hot_select() {
        let values = [10, 20, 30];
        assert_eq!(one_hot_select(&values, 1), (20, 1));
        assert_eq!(one_hot_select(&values, 3), (0, 0));
    }
}

//! Pairing of a flat ordered sequence into two-column rows. Used for both
//! the image gallery and the feature bullet grid.

/// Pair consecutive items into two-column rows.
///
/// An odd-length input gets an explicit default placeholder in the final
/// right cell; items are never dropped or duplicated.
pub fn pairize<T: Default>(items: Vec<T>) -> Vec<[T; 2]> {
    let mut rows = Vec::with_capacity(items.len().div_ceil(2));
    let mut iter = items.into_iter();
    while let Some(left) = iter.next() {
        let right = iter.next().unwrap_or_default();
        rows.push([left, right]);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(pairize(Vec::<String>::new()), Vec::<[String; 2]>::new());
    }

    #[test]
    fn test_single_item() {
        let rows = pairize(vec!["a".to_string()]);
        assert_eq!(rows, vec![["a".to_string(), String::new()]]);
    }

    #[test]
    fn test_odd_length() {
        let rows = pairize(vec!["a", "b", "c"]);
        assert_eq!(rows, vec![["a", "b"], ["c", ""]]);
    }

    #[test]
    fn test_even_length() {
        let rows = pairize(vec![1, 2, 3, 4]);
        assert_eq!(rows, vec![[1, 2], [3, 4]]);
    }

    #[test]
    fn test_row_count_is_half_rounded_up() {
        for n in 0..20usize {
            let rows = pairize((0..n).collect::<Vec<_>>());
            assert_eq!(rows.len(), n.div_ceil(2));
            if n % 2 == 1 {
                assert_eq!(rows.last().unwrap()[1], usize::default());
            }
        }
    }
}

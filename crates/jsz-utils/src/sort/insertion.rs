/// Insertion sort driven by a host-style comparator.
///
/// An element moves in front of its predecessor only while
/// `compare(predecessor, element)` is positive, so a comparator that never
/// answers negative still sorts ascending and leaves ties in their original
/// order.
///
/// # Examples
///
/// ```
/// use jsz_utils::sort::insertion_sort_by;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// insertion_sort_by(&mut arr, |a, b| (a > b) as i32);
/// assert_eq!(arr, vec![1, 1, 3, 4, 5]);
/// ```
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> i32,
{
    let len = arr.len();
    for i in 1..len {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j]) > 0 {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gt(a: &i32, b: &i32) -> i32 {
        (a > b) as i32
    }

    #[test]
    fn test_insertion_sort_empty() {
        let mut arr: Vec<i32> = vec![];
        insertion_sort_by(&mut arr, gt);
        assert!(arr.is_empty());
    }

    #[test]
    fn test_insertion_sort_reverse() {
        let mut arr = vec![5, 4, 3, 2, 1];
        insertion_sort_by(&mut arr, gt);
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_random() {
        let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
        insertion_sort_by(&mut arr, gt);
        assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_insertion_sort_is_stable() {
        let mut arr = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        insertion_sort_by(&mut arr, |a, b| (a.0 > b.0) as i32);
        assert_eq!(arr, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_negative_answers_are_ignored() {
        let mut arr = vec![1, 2, 3];
        insertion_sort_by(&mut arr, |_, _| -1);
        assert_eq!(arr, vec![1, 2, 3]);
    }
}

/// Sort values in place with a partition-exchange sort.
///
/// Each range is split around the value of its middle element with a Hoare
/// scan, which stops on values equal to the pivot from both sides so runs of
/// duplicates split evenly. Only the smaller side is sorted recursively, so the
/// stack depth stays logarithmic. Values must not contain NaN.
pub fn quick_sort(mut values: &mut [f64]) {
    while values.len() > 1 {
        let split = partition(values);
        let (low, high) = std::mem::take(&mut values).split_at_mut(split);
        if low.len() < high.len() {
            quick_sort(low);
            values = high;
        } else {
            quick_sort(high);
            values = low;
        }
    }
}

/// Partition `values` around the value of its middle element.
///
/// Returns `split` with `0 < split < values.len()`: nothing in
/// `values[..split]` is greater than the pivot and nothing in
/// `values[split..]` is smaller. Needs at least two values.
fn partition(values: &mut [f64]) -> usize {
    let pivot = values[(values.len() - 1) / 2];
    let mut i = 0;
    let mut j = values.len() - 1;

    loop {
        while values[i] < pivot {
            i += 1;
        }
        while values[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j + 1;
        }
        values.swap(i, j);
        i += 1;
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sorted_copy(values: &[f64]) -> Vec<f64> {
        let mut expected = values.to_vec();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expected
    }

    #[test]
    fn test_sort_small() {
        let mut values = vec![3.0, 1.0, 2.0];
        quick_sort(&mut values);
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<f64> = Vec::new();
        quick_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![5.0];
        quick_sort(&mut single);
        assert_eq!(single, vec![5.0]);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut values = vec![2.0, 2.0, 1.0, 2.0, 1.0, 3.0, 3.0, 2.0];
        let expected = sorted_copy(&values);
        quick_sort(&mut values);
        assert_eq!(values, expected);

        let mut same = vec![7.0; 50];
        quick_sort(&mut same);
        assert_eq!(same, vec![7.0; 50]);
    }

    #[test]
    fn test_sort_presorted_and_reversed() {
        let mut ascending: Vec<f64> = (0..100).map(f64::from).collect();
        let expected = ascending.clone();
        quick_sort(&mut ascending);
        assert_eq!(ascending, expected);

        let mut descending: Vec<f64> = (0..100).rev().map(f64::from).collect();
        quick_sort(&mut descending);
        assert_eq!(descending, expected);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [2usize, 3, 10, 257, 1000] {
            let mut values: Vec<f64> = (0..len).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let expected = sorted_copy(&values);
            quick_sort(&mut values);
            assert_eq!(values, expected, "len {}", len);
        }
    }

    #[test]
    fn test_sort_many_equal_values() {
        let mut zeros = vec![0.0; 100_000];
        quick_sort(&mut zeros);
        assert!(zeros.iter().all(|v| *v == 0.0));

        let mut rng = StdRng::seed_from_u64(11);
        let mut flags: Vec<f64> = (0..100_000).map(|_| f64::from(rng.gen_range(0..3u8))).collect();
        let expected = sorted_copy(&flags);
        quick_sort(&mut flags);
        assert_eq!(flags, expected);
    }

    #[test]
    fn test_partition_splits_equal_values_evenly() {
        let mut values = vec![4.0; 10];
        assert_eq!(partition(&mut values), 5);

        let mut pair = vec![2.0, 1.0];
        let split = partition(&mut pair);
        assert_eq!(split, 1);
        assert_eq!(pair, vec![1.0, 2.0]);
    }
}

// End-to-end properties of every registered algorithm, driven through the
// public SortDriver interface one tick at a time.

use sortty::engine::{SortDriver, StepEvent, StepResult};

/// Algorithms with a guaranteed finite step count.
const DETERMINISTIC: &[&str] = &[
    "Bubble", "Selection", "Insertion", "Shell", "Heap", "Merge", "Quick", "Cocktail", "Odd-Even",
    "Gnome", "Comb", "Pancake", "Stooge", "Bitonic", "Radix",
];

/// Drive a sort to completion, collecting every applied event. Panics if
/// the sort exceeds `cap` ticks.
fn run_sort(name: &str, values: Vec<u32>, cap: usize) -> (Vec<u32>, Vec<StepEvent>) {
    let mut driver = SortDriver::start(name, values).expect("algorithm must be registered");
    let mut events = Vec::new();
    for _ in 0..cap {
        match driver.advance().expect("no invariant violations expected") {
            StepResult::Applied(event) => events.push(event),
            StepResult::Finished => return (driver.values().to_vec(), events),
        }
    }
    panic!("{} did not finish within {} ticks", name, cap);
}

fn assert_sorted_permutation(name: &str, input: &[u32], output: &[u32]) {
    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(
        output, expected,
        "{} must sort {:?} into ascending order",
        name, input
    );
}

// Power-of-two length so the bitonic network's full-sort guarantee holds.
const MIXED: [u32; 16] = [13, 2, 7, 16, 5, 11, 1, 9, 14, 4, 10, 6, 15, 3, 12, 8];

#[test]
fn test_every_algorithm_sorts_mixed_input() {
    for &name in DETERMINISTIC {
        let input = MIXED.to_vec();
        let (output, _) = run_sort(name, input.clone(), 1_000_000);
        assert_sorted_permutation(name, &input, &output);
    }
}

#[test]
fn test_every_algorithm_sorts_reverse_input() {
    for &name in DETERMINISTIC {
        let input: Vec<u32> = (1..=16).rev().collect();
        let (output, _) = run_sort(name, input.clone(), 1_000_000);
        assert_sorted_permutation(name, &input, &output);
    }
}

#[test]
fn test_every_algorithm_handles_sorted_input() {
    for &name in DETERMINISTIC {
        let input: Vec<u32> = (1..=16).collect();
        let (output, _) = run_sort(name, input.clone(), 1_000_000);
        assert_sorted_permutation(name, &input, &output);
    }
}

#[test]
fn test_every_algorithm_preserves_duplicates() {
    for &name in DETERMINISTIC {
        let input = vec![5, 3, 5, 1, 3, 5, 1, 2];
        let (output, _) = run_sort(name, input.clone(), 1_000_000);
        assert_sorted_permutation(name, &input, &output);
    }
}

#[test]
fn test_empty_and_single_arrays_finish_immediately() {
    let mut all: Vec<&str> = DETERMINISTIC.to_vec();
    all.push("Bogo");
    for name in all {
        for input in [vec![], vec![42]] {
            let (output, events) = run_sort(name, input.clone(), 16);
            assert_eq!(output, input, "{} must not disturb {:?}", name, input);
            assert!(
                events.iter().all(|e| !e.mutates()),
                "{} must not mutate {:?}",
                name,
                input
            );
        }
    }
}

#[test]
fn test_deterministic_algorithms_replay_identical_traces() {
    for &name in DETERMINISTIC {
        let input = MIXED.to_vec();
        let (_, first) = run_sort(name, input.clone(), 1_000_000);
        let (_, second) = run_sort(name, input, 1_000_000);
        assert_eq!(first, second, "{} must replay the same trace", name);
    }
}

#[test]
fn test_insertion_reference_trace() {
    let (output, events) = run_sort("Insertion", vec![5, 3, 4, 1, 2], 1_000);
    assert_eq!(output, vec![1, 2, 3, 4, 5]);
    let trace: Vec<StepEvent> = events.into_iter().filter(|e| e.mutates()).collect();
    assert_eq!(
        trace,
        vec![
            // 3 settles below 5
            StepEvent::Swap(0, 1),
            // 4 settles below 5
            StepEvent::Swap(1, 2),
            // 1 walks all the way down
            StepEvent::Swap(2, 3),
            StepEvent::Swap(1, 2),
            StepEvent::Swap(0, 1),
            // 2 walks down to second place
            StepEvent::Swap(3, 4),
            StepEvent::Swap(2, 3),
            StepEvent::Swap(1, 2),
        ]
    );
}

#[test]
fn test_bubble_comparison_count_is_exact() {
    // Bubble never short-circuits: always n(n-1)/2 comparisons.
    for input in [(1..=12).collect::<Vec<u32>>(), (1..=12).rev().collect()] {
        let n = input.len() as u64;
        let (_, events) = run_sort("Bubble", input, 1_000_000);
        let comparisons = events
            .iter()
            .filter(|e| matches!(e, StepEvent::Compare(..)))
            .count() as u64;
        assert_eq!(comparisons, n * (n - 1) / 2);
    }
}

#[test]
fn test_quadratic_family_comparison_bound() {
    for name in ["Selection", "Insertion", "Cocktail", "Odd-Even", "Gnome"] {
        let input: Vec<u32> = (1..=20).rev().collect();
        let n = input.len() as u64;
        let (_, events) = run_sort(name, input, 1_000_000);
        let comparisons = events
            .iter()
            .filter(|e| matches!(e, StepEvent::Compare(..)))
            .count() as u64;
        assert!(
            comparisons <= n * n,
            "{} made {} comparisons on {} elements",
            name,
            comparisons,
            n
        );
    }
}

#[test]
fn test_radix_pass_count_matches_digits_of_maximum() {
    // One Overwrite per position per pass; passes equal the digit count of
    // the maximum element.
    for (input, digits) in [
        (vec![5, 3, 9, 1], 1),
        (vec![42, 7, 13, 99], 2),
        (vec![170, 45, 75, 90, 802, 24, 2, 66], 3),
    ] {
        let n = input.len();
        let (output, events) = run_sort("Radix", input.clone(), 1_000_000);
        assert_sorted_permutation("Radix", &input, &output);
        let overwrites = events
            .iter()
            .filter(|e| matches!(e, StepEvent::Overwrite(..)))
            .count();
        assert_eq!(overwrites, digits * n);
        assert!(events
            .iter()
            .all(|e| matches!(e, StepEvent::Overwrite(..))));
    }
}

#[test]
fn test_bogo_sorts_tiny_array() {
    // No guaranteed termination bound; a 3-element array finishing within
    // the cap is a statistical certainty.
    let input = vec![3, 1, 2];
    let (output, _) = run_sort("Bogo", input.clone(), 1_000_000);
    assert_sorted_permutation("Bogo", &input, &output);
}

#[test]
fn test_selection_emits_no_degenerate_swaps() {
    let (_, events) = run_sort("Selection", (1..=8).collect(), 10_000);
    assert!(
        events.iter().all(|e| !e.mutates()),
        "sorted input needs no placing swaps"
    );
}

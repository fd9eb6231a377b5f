//! Static algorithm descriptions shown next to the chart.

use crate::algorithms::Algorithm;

const BUBBLE: &[&str] = &[
    "Bubble Sort compares adjacent elements and swaps them if they’re in the wrong order.",
    "This process is repeated for each element, gradually 'bubbling' the largest value to the end.",
    "It’s simple but inefficient for large arrays.",
    "Best case: O(n) when already sorted | Worst case: O(n²)",
    "Space complexity: O(1) | Stable: Yes",
];

const INSERTION: &[&str] = &[
    "Insertion Sort works like sorting playing cards in your hands.",
    "Each element is compared to its predecessors and inserted into the correct position.",
    "It is efficient for small or nearly sorted datasets.",
    "Best case: O(n) | Worst case: O(n²)",
    "Space complexity: O(1) | Stable: Yes",
];

const SELECTION: &[&str] = &[
    "Selection Sort divides the array into sorted and unsorted parts.",
    "It repeatedly selects the smallest element from the unsorted section and places it in the sorted part.",
    "It performs the minimum number of swaps (at most n).",
    "Time complexity: O(n²) always | Space: O(1)",
    "Stable: No (can be made stable with extra logic)",
];

const QUICK: &[&str] = &[
    "Quick Sort uses divide and conquer strategy with a pivot element.",
    "Elements smaller than the pivot go to the left, larger to the right.",
    "It's fast in practice and has good cache performance.",
    "Best/Average: O(n log n) | Worst: O(n²) when poorly partitioned",
    "Space: O(log n) average | Stable: No",
];

const MERGE: &[&str] = &[
    "Merge Sort splits the array into halves until each part has one element.",
    "It then merges these sorted halves back together.",
    "Always performs in O(n log n) time regardless of initial order.",
    "Good for linked lists and external sorting.",
    "Time: O(n log n) | Space: O(n) | Stable: Yes",
];

const BOGO: &[&str] = &[
    "Bogo Sort is a joke algorithm: it randomly shuffles the array until sorted.",
    "It’s an example of a highly inefficient brute-force approach.",
    "Expected time: O(n!) | Worst case: ∞ theoretically!",
    "It’s more for amusement than practical use.",
    "Space: O(1) | Stable: Random 😄",
    "Keep it 5 to see the effect!",
];

const SLEEP: &[&str] = &[
    "Sleep Sort uses the value of each number to determine its delay in being 'emitted'.",
    "In real implementations, each number sleeps for a time proportional to its value.",
    "It's mostly used as a quirky visual or educational sort.",
    "Time complexity: ~O(n log n) (due to sorting visualization structure)",
    "Space: O(n) due to timers or threads | Stable: Yes",
];

/// Ordered description sentences for `algorithm`.
#[must_use]
pub const fn description(algorithm: Algorithm) -> &'static [&'static str] {
    match algorithm {
        Algorithm::Bubble => BUBBLE,
        Algorithm::Insertion => INSERTION,
        Algorithm::Selection => SELECTION,
        Algorithm::Quick => QUICK,
        Algorithm::Merge => MERGE,
        Algorithm::Bogo => BOGO,
        Algorithm::Sleep => SLEEP,
    }
}

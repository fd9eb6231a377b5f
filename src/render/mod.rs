//! Presentation adapters over the frame model.
//!
//! The core hands renderers one [`Bar`] per array position; how bars are
//! drawn is up to the collaborator (plain text here, ratatui in the TUI).

pub mod text;

use serde::{Deserialize, Serialize};

use crate::frames::{Element, Frame};

pub use text::TextChart;

/// One column of the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Position in the array.
    pub index: usize,
    /// Value at that position.
    pub value: Element,
    /// Whether the algorithm is touching this position.
    pub highlighted: bool,
}

/// Bars for every position of `frame`.
#[must_use]
pub fn bars(frame: &Frame) -> Vec<Bar> {
    frame
        .snapshot()
        .iter()
        .enumerate()
        .map(|(index, &value)| Bar {
            index,
            value,
            highlighted: frame.is_highlighted(index),
        })
        .collect()
}

/// Bars for a final array state, nothing highlighted.
#[must_use]
pub fn plain_bars(state: &[Element]) -> Vec<Bar> {
    state
        .iter()
        .enumerate()
        .map(|(index, &value)| Bar {
            index,
            value,
            highlighted: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::Highlight;

    #[test]
    fn test_bars_mark_highlight_pair() {
        let frame = Frame::new(vec![40, 10, 30], Highlight::Pair(0, 2));
        let bars = bars(&frame);
        assert_eq!(bars.len(), 3);
        assert!(bars[0].highlighted);
        assert!(!bars[1].highlighted);
        assert!(bars[2].highlighted);
        assert_eq!(bars[1].value, 10);
        assert_eq!(bars[2].index, 2);
    }

    #[test]
    fn test_bars_without_highlight() {
        let frame = Frame::new(vec![1, 2], Highlight::None);
        assert!(bars(&frame).iter().all(|b| !b.highlighted));
        assert!(plain_bars(&[1, 2]).iter().all(|b| !b.highlighted));
    }
}

//! Plain-text bar chart sink for terminals and pipes.

use std::io::{self, Write};
use std::time::Duration;

use super::{bars, plain_bars, Bar};
use crate::describe::description;
use crate::frames::{Frame, FrameSequence};
use crate::player::FrameSink;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const HIGHLIGHT_GLYPH: char = '#';
const BAR_GLYPH: char = '|';

/// Draws each frame as a vertical bar chart of `height` rows.
#[derive(Debug)]
pub struct TextChart<W: Write> {
    out: W,
    height: usize,
    clear: bool,
    frames_drawn: usize,
}

impl<W: Write> TextChart<W> {
    /// Chart writing to `out`. `clear` redraws in place with ANSI escapes.
    pub fn new(out: W, height: usize, clear: bool) -> Self {
        Self {
            out,
            height: height.max(1),
            clear,
            frames_drawn: 0,
        }
    }

    /// Frames drawn so far.
    #[must_use]
    pub const fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, bars: &[Bar]) -> io::Result<()> {
        if self.clear {
            write!(self.out, "{CLEAR_SCREEN}")?;
        }
        for line in chart_lines(bars, self.height) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> FrameSink for TextChart<W> {
    type Error = io::Error;

    fn render(&mut self, frame: &Frame, _delay_hint: Duration) -> io::Result<()> {
        self.draw(&bars(frame))?;
        self.frames_drawn += 1;
        match frame.highlight().pair() {
            Some((a, b)) => writeln!(self.out, "frame {} | [{a}, {b}]", self.frames_drawn)?,
            None => writeln!(self.out, "frame {}", self.frames_drawn)?,
        }
        self.out.flush()
    }

    fn complete(&mut self, sequence: &FrameSequence) -> io::Result<()> {
        self.draw(&plain_bars(sequence.final_state()))?;
        writeln!(
            self.out,
            "{} finished: {} frames, {:?}",
            sequence.algorithm(),
            sequence.len(),
            sequence.completion()
        )?;
        writeln!(self.out, "Description:")?;
        for line in description(sequence.algorithm()) {
            writeln!(self.out, "- {line}")?;
        }
        self.out.flush()
    }
}

/// Render `bars` as `height` text rows, tallest value reaching the top.
#[must_use]
pub fn chart_lines(bars: &[Bar], height: usize) -> Vec<String> {
    // i128 keeps value * height exact for any i64 value
    let max = i128::from(bars.iter().map(|b| b.value).max().unwrap_or(0).max(1));
    let rows = i128::try_from(height).unwrap_or(i128::MAX);

    (1..=height)
        .rev()
        .map(|row| {
            let row = i128::try_from(row).unwrap_or(i128::MAX);
            bars.iter()
                .map(|bar| {
                    // ceil(value * height / max) rows are filled
                    let filled = i128::from(bar.value.max(0))
                        .saturating_mul(rows)
                        .saturating_add(max - 1)
                        / max;
                    if filled < row {
                        ' '
                    } else if bar.highlighted {
                        HIGHLIGHT_GLYPH
                    } else {
                        BAR_GLYPH
                    }
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

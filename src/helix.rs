//! ASCII double helix.
//!
//! The sequence is drawn 16 bases per turn, one row per base pair:
//!
//! ```text
//!     at
//!    t--a
//!   t----a
//!  a------t
//!  ...
//! ```
//!
//! The first half of a turn shows the base on the left strand; the second
//! half walks the geometry backwards with the strands swapped.

use std::fmt;
use std::io::{self, Write};

use crate::genetic_code::{complement, FILLER_BASE};
use crate::model::NucleotideSequence;

/// Bases per helix turn.
pub const WINDOW: usize = 16;

/// Leading spaces and dashes for each row of a half turn.
const GEOMETRY: [(usize, usize); WINDOW / 2] = [
    (4, 0),
    (3, 2),
    (2, 4),
    (1, 6),
    (1, 6),
    (2, 4),
    (3, 2),
    (4, 0),
];

/// A rendered helix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Helix {
    lines: Vec<String>,
    base_count: usize,
}

impl Helix {
    /// The rendered rows, one per base pair.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of rows showing a real base (the rest are filler).
    pub fn base_count(&self) -> usize {
        self.base_count
    }
}

impl fmt::Display for Helix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Number of rows drawn for a sequence of `length` bases.
pub fn line_count(length: usize) -> usize {
    length.max(WINDOW).div_ceil(WINDOW) * WINDOW
}

/// Draws a sequence as a double helix.
///
/// Short sequences are padded to a full turn and the last turn is always
/// completed; rows past the end of the sequence pair the filler `n` with
/// itself.
pub fn render(sequence: &NucleotideSequence) -> Helix {
    let bases = sequence.as_bytes();
    let total = line_count(bases.len());

    let mut lines = Vec::with_capacity(total);
    let mut base_count = 0;
    let mut next_base = |pos: usize| match bases.get(pos) {
        Some(&base) => {
            base_count += 1;
            base
        }
        None => FILLER_BASE,
    };

    for start in (0..total).step_by(WINDOW) {
        for (offset, &(spaces, dashes)) in GEOMETRY.iter().enumerate() {
            let base = next_base(start + offset);
            lines.push(row(spaces, base, dashes, complement(base)));
        }
        for (offset, &(spaces, dashes)) in GEOMETRY.iter().rev().enumerate() {
            let base = next_base(start + GEOMETRY.len() + offset);
            lines.push(row(spaces, complement(base), dashes, base));
        }
    }

    Helix { lines, base_count }
}

/// Draws free text, message or DNA, as a double helix.
///
/// The text is read like DNA input: whitespace is dropped and every other
/// character takes one row.
pub fn render_text(text: &str) -> Helix {
    render(&NucleotideSequence::parse(text))
}

/// Writes the helix of a sequence, one row per line.
pub fn write_helix<W: Write>(out: &mut W, sequence: &NucleotideSequence) -> io::Result<()> {
    write!(out, "{}", render(sequence))
}

fn row(spaces: usize, left: u8, dashes: usize, right: u8) -> String {
    format!(
        "{:spaces$}{}{:-<dashes$}{}",
        "",
        left as char,
        "",
        right as char,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_text_fills_one_turn() {
        let helix = render_text("I love you");
        assert_eq!(helix.lines().len(), 16);
        assert_eq!(helix.base_count(), 8);
        assert_eq!(helix.lines()[0], "    in");
        // "you" reads as "yot"
        assert_eq!(helix.lines()[7], "    ta");
        assert_eq!(helix.lines()[8], "    nn");
        assert_eq!(helix.lines()[15], "    nn");
    }

    #[test]
    fn test_non_ascii_takes_one_row() {
        let helix = render_text("aéa");
        let lines = helix.lines();
        assert_eq!(helix.base_count(), 3);
        assert_eq!(lines[0], "    at");
        assert_eq!(lines[1], "   ?--n");
        assert_eq!(lines[2], "  a----t");
        assert_eq!(lines[3], " n------n");
    }

    #[test]
    fn test_row_layout() {
        let helix = render(&NucleotideSequence::parse("acgtacgtacgtacgt"));
        let lines = helix.lines();

        assert_eq!(lines[0], "    at");
        assert_eq!(lines[1], "   c--g");
        assert_eq!(lines[2], "  g----c");
        assert_eq!(lines[3], " t------a");
        assert_eq!(lines[4], " a------t");
        assert_eq!(lines[7], "    ta");
        // Second half: complement on the left
        assert_eq!(lines[8], "    ta");
        assert_eq!(lines[9], "   g--c");
        assert_eq!(lines[11], " a------t");
        assert_eq!(lines[15], "    at");
        assert_eq!(helix.base_count(), 16);
    }

    #[test]
    fn test_padding_rows_use_filler() {
        let helix = render(&NucleotideSequence::parse("ac"));
        let lines = helix.lines();

        assert_eq!(lines[0], "    at");
        assert_eq!(lines[1], "   c--g");
        assert_eq!(lines[2], "  n----n");
        assert_eq!(lines[15], "    nn");
        assert_eq!(helix.base_count(), 2);
    }

    #[test]
    fn test_partial_last_turn_is_completed() {
        let dna = NucleotideSequence::parse(&"a".repeat(30));
        let helix = render(&dna);
        assert_eq!(helix.lines().len(), 32);
        assert_eq!(helix.base_count(), 30);
        assert_eq!(helix.lines()[29], "  t----a");
        assert_eq!(helix.lines()[30], "   n--n");
    }

    #[test]
    fn test_empty_sequence() {
        let helix = render(&NucleotideSequence::default());
        assert_eq!(helix.lines().len(), 16);
        assert_eq!(helix.base_count(), 0);
    }

    #[test]
    fn test_write_helix() {
        let mut out = Vec::new();
        write_helix(&mut out, &NucleotideSequence::parse("acgt")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 16);
        assert!(text.starts_with("    at\n   c--g\n"));
    }

    proptest! {
        #[test]
        fn line_count_depends_only_on_length(text in "[acgtn]{0,100}") {
            let sequence = NucleotideSequence::parse(&text);
            let helix = render(&sequence);
            let expected = sequence.len().max(16).div_ceil(16) * 16;
            prop_assert_eq!(helix.lines().len(), expected);
            prop_assert_eq!(helix.base_count(), sequence.len());
        }
    }
}

//! Data model for the transcoder.
//!
//! This module contains the value types passed between components:
//! - `Symbol` and `Message`: the 27-symbol message alphabet
//! - `Triplet`: a codon, possibly with `n` wildcards
//! - `NucleotideSequence`: encoded DNA text
//! - `Decoded`: the result of decoding, which may contain unknown residues

use std::fmt;

/// One character of the message alphabet: `A`-`Z` or the separator `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    /// Word/segment separator.
    pub const SEPARATOR: Symbol = Symbol(b'*');

    /// Number of distinct symbols.
    pub const COUNT: usize = 27;

    /// Every symbol, letters first, separator last.
    pub const ALPHABET: [Symbol; Symbol::COUNT] = {
        let mut all = [Symbol::SEPARATOR; Symbol::COUNT];
        let mut i = 0;
        while i < 26 {
            all[i] = Symbol(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a symbol from a character, if it belongs to the alphabet.
    pub fn new(c: char) -> Option<Self> {
        match c {
            'A'..='Z' | '*' => Some(Symbol(c as u8)),
            _ => None,
        }
    }

    /// Returns the symbol as a character.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns true for the separator symbol.
    pub fn is_separator(self) -> bool {
        self == Self::SEPARATOR
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered sequence of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Message {
    symbols: Vec<Symbol>,
}

impl Message {
    /// Creates a message from symbols.
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Returns the symbols of the message.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the message is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<Symbol> for Message {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// A codon: three bases over `a`, `c`, `g`, `t` and the wildcard `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triplet([u8; 3]);

impl Triplet {
    /// Wildcard base.
    pub const WILDCARD: u8 = b'n';

    /// Creates a triplet from raw bases.
    ///
    /// Bases are case-insensitive and `u` is read as `t`. Returns `None`
    /// for anything outside `acgtun`.
    pub fn from_bases(bases: [u8; 3]) -> Option<Self> {
        let mut canonical = [0u8; 3];
        for (slot, base) in canonical.iter_mut().zip(bases) {
            *slot = match base.to_ascii_lowercase() {
                b'u' => b't',
                b @ (b'a' | b'c' | b'g' | b't' | b'n') => b,
                _ => return None,
            };
        }
        Some(Triplet(canonical))
    }

    /// Parses a three-character codon.
    pub fn parse(codon: &str) -> Option<Self> {
        let bases: [u8; 3] = codon.as_bytes().try_into().ok()?;
        Self::from_bases(bases)
    }

    /// Returns the lower-case bases.
    pub fn bases(&self) -> [u8; 3] {
        self.0
    }

    /// Returns true if the triplet contains no wildcard.
    pub fn is_concrete(&self) -> bool {
        !self.0.contains(&Self::WILDCARD)
    }

    /// Number of non-wildcard positions (0-3).
    pub fn specificity(&self) -> usize {
        self.0.iter().filter(|&&b| b != Self::WILDCARD).count()
    }

    /// Returns true if this triplet, read as a pattern, covers `other`.
    ///
    /// Every position must be a wildcard or equal to the same position of `other`.
    pub fn covers(&self, other: &Triplet) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&p, &q)| p == Self::WILDCARD || p == q)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Stands in for a non-ASCII character in parsed text.
pub const NON_BASE: char = '?';

/// Encoded DNA text, lower-case.
///
/// Produced by encoding, or parsed from user text before decoding. Parsed
/// text may still hold characters that are not bases; they decode to the
/// unknown marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NucleotideSequence {
    data: String,
}

impl NucleotideSequence {
    /// Builds a sequence from triplets.
    pub fn from_triplets<'a, I: IntoIterator<Item = &'a Triplet>>(triplets: I) -> Self {
        let mut data = String::new();
        for triplet in triplets {
            data.extend(triplet.bases().iter().map(|&b| b as char));
        }
        Self { data }
    }

    /// Parses user text: drops whitespace, lower-cases, reads `u` as `t`.
    ///
    /// Non-ASCII characters become [`NON_BASE`], so every character keeps
    /// exactly one position.
    pub fn parse(text: &str) -> Self {
        let data = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_lowercase() {
                'u' => 't',
                other if other.is_ascii() => other,
                _ => NON_BASE,
            })
            .collect();
        Self { data }
    }

    /// Returns the sequence as a string slice.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Returns the sequence as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if every character is one of `acgtn`.
    pub fn is_valid(&self) -> bool {
        self.data
            .bytes()
            .all(|b| matches!(b, b'a' | b'c' | b'g' | b't' | b'n'))
    }
}

impl fmt::Display for NucleotideSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Marker printed for a triplet that does not decode to any symbol.
pub const UNKNOWN_RESIDUE: char = '.';

/// The result of decoding: one entry per triplet, `None` if unintelligible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    residues: Vec<Option<Symbol>>,
}

impl Decoded {
    /// Creates a decoded result.
    pub fn new(residues: Vec<Option<Symbol>>) -> Self {
        Self { residues }
    }

    /// Returns the decoded residues.
    pub fn residues(&self) -> &[Option<Symbol>] {
        &self.residues
    }

    /// Returns the number of decoded triplets.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Returns true if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of triplets that did not decode.
    pub fn unknown_count(&self) -> usize {
        self.residues.iter().filter(|r| r.is_none()).count()
    }

    /// Returns the message if every triplet decoded.
    pub fn as_message(&self) -> Option<Message> {
        self.residues.iter().copied().collect::<Option<Vec<_>>>().map(Message::new)
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            match residue {
                Some(symbol) => write!(f, "{symbol}")?,
                None => write!(f, "{UNKNOWN_RESIDUE}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_alphabet() {
        assert_eq!(Symbol::ALPHABET.len(), 27);
        assert_eq!(Symbol::ALPHABET[0].as_char(), 'A');
        assert_eq!(Symbol::ALPHABET[25].as_char(), 'Z');
        assert!(Symbol::ALPHABET[26].is_separator());
        assert_eq!(Symbol::new('Q').map(Symbol::as_char), Some('Q'));
        assert_eq!(Symbol::new('q'), None);
        assert_eq!(Symbol::new('.'), None);
    }

    #[test]
    fn test_triplet_parse() {
        let t = Triplet::parse("AUG").unwrap();
        assert_eq!(t.to_string(), "atg");
        assert!(t.is_concrete());
        assert_eq!(t.specificity(), 3);

        assert!(Triplet::parse("xxx").is_none());
        assert!(Triplet::parse("ac").is_none());
        assert!(Triplet::parse("acgt").is_none());
    }

    #[test]
    fn test_parse_keeps_one_position_per_character() {
        let seq = NucleotideSequence::parse("aéa Ü");
        assert_eq!(seq.as_str(), "a?a?");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_valid());
        assert!(seq.as_bytes().is_ascii());
    }

    #[test]
    fn test_triplet_covers() {
        let nac = Triplet::parse("nac").unwrap();
        let nnn = Triplet::parse("nnn").unwrap();
        let tac = Triplet::parse("tac").unwrap();
        let tag = Triplet::parse("tag").unwrap();

        assert!(!nac.is_concrete());
        assert_eq!(nac.specificity(), 2);
        assert_eq!(nnn.specificity(), 0);
        assert!(nac.covers(&tac));
        assert!(!nac.covers(&tag));
        assert!(nnn.covers(&tag));
        assert!(nnn.covers(&nac));
        // A concrete base never covers a wildcard
        assert!(!tac.covers(&nac));
    }

    #[test]
    fn test_sequence_parse() {
        let seq = NucleotideSequence::parse(" ACG\tuua\n");
        assert_eq!(seq.as_str(), "acgtta");
        assert_eq!(seq.len(), 6);
        assert!(seq.is_valid());

        let seq = NucleotideSequence::parse("acx");
        assert!(!seq.is_valid());
    }

    #[test]
    fn test_decoded_display() {
        let h = Symbol::new('H');
        let i = Symbol::new('I');
        let decoded = Decoded::new(vec![h, None, i]);
        assert_eq!(decoded.to_string(), "H.I");
        assert_eq!(decoded.unknown_count(), 1);
        assert_eq!(decoded.as_message(), None);

        let decoded = Decoded::new(vec![h, i]);
        assert_eq!(decoded.as_message().unwrap().to_string(), "HI");
    }
}

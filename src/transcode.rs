//! Encoding messages as DNA and decoding them back.
//!
//! Every symbol is encoded with the first codon the table lists for it, so
//! `decode(encode(m)) == m` for any message. The other direction is lossy:
//! `cac` decodes to `H`, which re-encodes as `cat`.
//!
//! ```
//! use helixcode::transcode::{decode_text, encode_text};
//!
//! let dna = encode_text("I love you").unwrap();
//! assert_eq!(dna.as_str(), "atttaattataggttgaataatattagtga");
//! assert_eq!(decode_text(dna.as_str()).to_string(), "I*LOVE*YOU");
//! ```

use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::codon_table::{CodonTable, CodonTableResult};
use crate::model::{Decoded, Message, NucleotideSequence, Symbol, Triplet};
use crate::normalize::normalize;

/// Errors that can occur while encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error("No codon encodes symbol '{0}'")]
    Unencodable(Symbol),
}

/// Result type for transcoding operations.
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Encodes a message, choosing the first listed codon for every symbol.
pub fn encode(message: &Message, table: &CodonTable) -> TranscodeResult<NucleotideSequence> {
    let triplets = message
        .symbols()
        .iter()
        .map(|&symbol| {
            table
                .reverse(symbol)
                .first()
                .ok_or(TranscodeError::Unencodable(symbol))
        })
        .collect::<TranscodeResult<Vec<&Triplet>>>()?;

    Ok(NucleotideSequence::from_triplets(triplets))
}

/// Decodes a sequence triplet by triplet.
///
/// Triplets the table cannot resolve, or that are not made of bases, decode
/// to `None`. A trailing partial triplet is dropped.
pub fn decode(sequence: &NucleotideSequence, table: &CodonTable) -> Decoded {
    let chunks = sequence.as_bytes().chunks_exact(3);
    let leftover = chunks.remainder().len();
    if leftover > 0 {
        debug!("Dropping {leftover} trailing base(s) of an incomplete codon");
    }

    let residues = chunks
        .map(|codon| {
            let bases = [codon[0], codon[1], codon[2]];
            Triplet::from_bases(bases).and_then(|triplet| table.translate(&triplet))
        })
        .collect();

    Decoded::new(residues)
}

/// A transcoding session over one codon table.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    table: Arc<CodonTable>,
}

impl Transcoder {
    /// Creates a session with the given table.
    pub fn new(table: Arc<CodonTable>) -> Self {
        Self { table }
    }

    /// Creates a session for an NCBI genetic code (unknown IDs fall back to 1).
    pub fn with_genetic_code(id: u8) -> CodonTableResult<Self> {
        CodonTable::build(id).map(|table| Self::new(Arc::new(table)))
    }

    /// The codon table in use.
    pub fn table(&self) -> &CodonTable {
        &self.table
    }

    /// Normalises free text and encodes it.
    pub fn encode_text(&self, text: &str) -> TranscodeResult<NucleotideSequence> {
        encode(&normalize(text), &self.table)
    }

    /// Parses DNA text and decodes it.
    pub fn decode_text(&self, text: &str) -> Decoded {
        decode(&NucleotideSequence::parse(text), &self.table)
    }
}

/// One-shot encode with the standard table.
pub fn encode_text(text: &str) -> TranscodeResult<NucleotideSequence> {
    Transcoder::default().encode_text(text)
}

/// One-shot decode with the standard table.
pub fn decode_text(text: &str) -> Decoded {
    Transcoder::default().decode_text(text)
}

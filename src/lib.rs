//! # helixcode - messages written in DNA
//!
//! Encodes text as a nucleotide sequence using an extended codon table,
//! decodes it back, and draws the result as an ASCII double helix.
//!
//! ## Architecture
//!
//! - `genetic_code`: NCBI genetic codes and base complements
//! - `model`: Symbols, messages, codons and sequences
//! - `codon_table`: Codon table extended to cover A-Z and `*`
//! - `normalize`: Free text to message alphabet
//! - `transcode`: Encoding and decoding
//! - `helix`: ASCII double helix rendering
//! - `input` / `logging`: Command-line plumbing
//!
//! ```
//! use helixcode::transcode::{decode_text, encode_text};
//!
//! let dna = encode_text("Hello BioRuby").unwrap();
//! assert_eq!(decode_text(dna.as_str()).to_string(), "HELLO*BIORUBY");
//! ```

pub mod codon_table;
pub mod genetic_code;
pub mod helix;
pub mod input;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod transcode;

pub use codon_table::{CodonTable, CodonTableBuilder, CodonTableError};
pub use model::{Decoded, Message, NucleotideSequence, Symbol, Triplet};
pub use transcode::{decode, encode, Transcoder, TranscodeError};

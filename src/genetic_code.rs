//! Base genetic code tables and nucleotide pairing.
//!
//! This module provides:
//! - NCBI genetic code tables (1-33, with the usual gaps)
//! - Codon to amino acid translation with the unmodified tables
//! - The Watson-Crick complement of a base
//!
//! The extended message alphabet is layered on top of these tables in
//! [`crate::codon_table`]; nothing here knows about it.

/// Bases in NCBI table order (TCAG on every codon position).
pub const NCBI_BASE_ORDER: [u8; 4] = *b"tcag";

/// Filler base used for unknown or padding positions.
pub const FILLER_BASE: u8 = b'n';

/// A genetic code table for translating codons to amino acids.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    /// NCBI genetic code ID
    pub id: u8,
    /// Name of the genetic code
    pub name: &'static str,
    /// Amino acids of the 64 codons, in NCBI order
    amino_acids: [u8; 64],
}

impl GeneticCode {
    /// Creates a new genetic code from an NCBI `ncbieaa` string.
    ///
    /// # Arguments
    /// * `id` - NCBI genetic code ID
    /// * `name` - Name of the genetic code
    /// * `ncbieaa` - 64-character string of amino acids (NCBI format)
    fn new(id: u8, name: &'static str, ncbieaa: &str) -> Self {
        let mut amino_acids = [b'X'; 64];
        for (slot, aa) in amino_acids.iter_mut().zip(ncbieaa.bytes()) {
            *slot = aa;
        }

        Self {
            id,
            name,
            amino_acids,
        }
    }

    /// Iterates over all 64 codons (lower-case DNA) with their amino acid,
    /// in NCBI order: ttt, ttc, tta, ttg, tct, ...
    pub fn codons(&self) -> impl Iterator<Item = ([u8; 3], char)> + '_ {
        self.amino_acids.iter().enumerate().map(|(idx, &aa)| {
            let codon = [
                NCBI_BASE_ORDER[idx >> 4],
                NCBI_BASE_ORDER[(idx >> 2) & 3],
                NCBI_BASE_ORDER[idx & 3],
            ];
            (codon, aa as char)
        })
    }

    /// Translates a single codon to an amino acid.
    ///
    /// # Rules:
    /// - Codons are case-insensitive and `u` is read as `t`
    /// - Codons with ambiguous nucleotides (not A, C, G, T/U) return 'X'
    /// - Anything that is not three characters long returns 'X'
    pub fn translate_codon(&self, codon: &str) -> char {
        let bytes = codon.as_bytes();
        if bytes.len() != 3 {
            return 'X';
        }

        let mut idx = 0;
        for &b in bytes {
            match base_index(b) {
                Some(i) => idx = idx * 4 + i,
                None => return 'X',
            }
        }

        self.amino_acids[idx] as char
    }

    /// Translates an entire nucleotide sequence to amino acids.
    ///
    /// An incomplete trailing codon is not translated.
    ///
    /// # Arguments
    /// * `sequence` - The nucleotide sequence to translate
    /// * `frame` - Reading frame (0, 1, or 2 for +1, +2, +3)
    pub fn translate_sequence(&self, sequence: &str, frame: usize) -> String {
        let start = frame.min(2);
        sequence
            .get(start..)
            .unwrap_or("")
            .as_bytes()
            .chunks_exact(3)
            .map(|codon| match std::str::from_utf8(codon) {
                Ok(codon) => self.translate_codon(codon),
                Err(_) => 'X',
            })
            .collect()
    }
}

/// Position of a base in [`NCBI_BASE_ORDER`].
fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_lowercase() {
        b't' | b'u' => Some(0),
        b'c' => Some(1),
        b'a' => Some(2),
        b'g' => Some(3),
        _ => None,
    }
}

/// Returns the complementary base (a<->t, c<->g), lower-case.
///
/// `u` pairs like `t`. Anything else, including the filler `n`,
/// pairs with `n`.
pub fn complement(base: u8) -> u8 {
    match base.to_ascii_lowercase() {
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        _ => FILLER_BASE,
    }
}

/// All available genetic codes from NCBI.
pub struct GeneticCodes {
    codes: Vec<GeneticCode>,
}

impl GeneticCodes {
    /// Creates the complete set of NCBI genetic codes.
    pub fn new() -> Self {
        let codes = vec![
            GeneticCode::new(1, "Standard",
                "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(2, "Vertebrate Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
            GeneticCode::new(3, "Yeast Mitochondrial",
                "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(4, "Mold/Protozoan/Coelenterate Mito...",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(5, "Invertebrate Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::new(6, "Ciliate/Dasycladacean/Hexamita Nuclear",
                "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(9, "Echinoderm/Flatworm Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::new(10, "Euplotid Nuclear",
                "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(11, "Bacterial/Archaeal/Plant Plastid",
                "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(12, "Alternative Yeast Nuclear",
                "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(13, "Ascidian Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
            GeneticCode::new(14, "Alternative Flatworm Mitochondrial",
                "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::new(15, "Blepharisma Macronuclear",
                "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(16, "Chlorophycean Mitochondrial",
                "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(21, "Trematode Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
            GeneticCode::new(22, "Scenedesmus obliquus Mitochondrial",
                "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(23, "Thraustochytrium Mitochondrial",
                "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(24, "Rhabdopleuridae Mitochondrial",
                "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
            GeneticCode::new(25, "Candidate Division SR1/Gracilibacteria",
                "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(26, "Pachysolen tannophilus Nuclear",
                "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(27, "Karyorelict Nuclear",
                "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(28, "Condylostoma Nuclear",
                "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(29, "Mesodinium Nuclear",
                "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(30, "Peritrich Nuclear",
                "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(31, "Blastocrithidia Nuclear",
                "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(32, "Balanophoraceae Plastid",
                "FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
            GeneticCode::new(33, "Cephalodiscidae Mitochondrial",
                "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
        ];

        Self { codes }
    }

    /// Returns all genetic codes.
    pub fn all(&self) -> &[GeneticCode] {
        &self.codes
    }

    /// Gets a genetic code by ID.
    pub fn get(&self, id: u8) -> Option<&GeneticCode> {
        self.codes.iter().find(|c| c.id == id)
    }

    /// Gets the default (Standard) genetic code.
    pub fn default_code(&self) -> &GeneticCode {
        self.get(1).expect("Standard genetic code should always exist")
    }
}

impl Default for GeneticCodes {
    fn default() -> Self {
        Self::new()
    }
}

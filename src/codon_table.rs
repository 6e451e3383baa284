//! Extended codon table.
//!
//! A standard NCBI table only names 20 amino acids plus stop, so a handful of
//! codons are reassigned to give every message symbol (`A`-`Z` and `*`) an
//! encoding:
//!
//! | Codon | Symbol | Meaning                                 |
//! |-------|--------|-----------------------------------------|
//! | `tag` | `O`    | Pyl, pyrrolysine                        |
//! | `tga` | `U`    | Sec, selenocysteine                     |
//! | `nac` | `B`    | Asx, asparagine or aspartic acid        |
//! | `ctn` | `J`    | Xle, isoleucine or leucine              |
//! | `nag` | `Z`    | Glx, glutamine or glutamic acid         |
//! | `nnn` | `X`    | Xaa, any amino acid                     |
//!
//! Wildcard codons are kept as pattern entries. A concrete codon always keeps
//! its own (more specific) assignment; patterns only resolve codons that have
//! no exact entry.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use thiserror::Error;

use crate::genetic_code::GeneticCodes;
use crate::model::{Symbol, Triplet};

/// Table used when none is requested, or when the requested one is unknown.
pub const DEFAULT_TABLE_ID: u8 = 1;

/// Reassignments applied on top of the base table, in order.
const EXTENSIONS: [(&str, char); 6] = [
    ("tag", 'O'),
    ("tga", 'U'),
    ("nac", 'B'),
    ("ctn", 'J'),
    ("nag", 'Z'),
    ("nnn", 'X'),
];

/// Errors that can occur while building a codon table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodonTableError {
    #[error("Unknown genetic code: {0}")]
    UnknownTable(u8),

    #[error("Genetic code {table} leaves symbol '{symbol}' without a codon")]
    UncoveredSymbol { table: u8, symbol: Symbol },
}

/// Result type for codon table operations.
pub type CodonTableResult<T> = Result<T, CodonTableError>;

/// A bidirectional codon <-> symbol table covering the whole message alphabet.
#[derive(Debug, Clone)]
pub struct CodonTable {
    id: u8,
    name: &'static str,
    /// Forward entries in assignment order; reassignment keeps the position
    entries: Vec<(Triplet, Symbol)>,
    /// Position of each triplet in `entries`
    index: HashMap<Triplet, usize>,
    /// Triplets of each symbol, in `entries` order
    reverse: HashMap<Symbol, Vec<Triplet>>,
}

impl CodonTable {
    /// Builds the extended table for an NCBI genetic code.
    ///
    /// An unknown `id` falls back to table 1.
    pub fn build(id: u8) -> CodonTableResult<Self> {
        let codes = GeneticCodes::new();
        match Self::from_codes(&codes, id) {
            Err(CodonTableError::UnknownTable(_)) => {
                warn!("Unknown genetic code {id}, using table {DEFAULT_TABLE_ID}");
                Self::from_codes(&codes, DEFAULT_TABLE_ID)
            }
            other => other,
        }
    }

    /// Builds the extended standard table (NCBI table 1).
    pub fn standard() -> Self {
        Self::build(DEFAULT_TABLE_ID).expect("Standard genetic code should cover every symbol")
    }

    /// Builds the extended table for `id` without any fallback.
    pub fn from_codes(codes: &GeneticCodes, id: u8) -> CodonTableResult<Self> {
        let code = codes.get(id).ok_or(CodonTableError::UnknownTable(id))?;

        let mut table = Self {
            id,
            name: code.name,
            entries: Vec::with_capacity(64 + EXTENSIONS.len()),
            index: HashMap::new(),
            reverse: HashMap::new(),
        };

        for (bases, aa) in code.codons() {
            match (Triplet::from_bases(bases), Symbol::new(aa)) {
                (Some(triplet), Some(symbol)) => table.assign(triplet, symbol),
                _ => warn!("Skipping codon {bases:?} -> '{aa}' in genetic code {id}"),
            }
        }

        for (codon, aa) in EXTENSIONS {
            if let (Some(triplet), Some(symbol)) = (Triplet::parse(codon), Symbol::new(aa)) {
                table.assign(triplet, symbol);
            }
        }

        table.build_reverse()?;
        debug!(
            "Built codon table {} ({}) with {} entries",
            table.id,
            table.name,
            table.entries.len()
        );
        Ok(table)
    }

    /// Assigns a symbol, overwriting an existing entry in place.
    fn assign(&mut self, triplet: Triplet, symbol: Symbol) {
        match self.index.get(&triplet) {
            Some(&pos) => self.entries[pos].1 = symbol,
            None => {
                self.index.insert(triplet, self.entries.len());
                self.entries.push((triplet, symbol));
            }
        }
    }

    /// Inverts the forward entries and checks every symbol is reachable.
    fn build_reverse(&mut self) -> CodonTableResult<()> {
        let mut reverse: HashMap<Symbol, Vec<Triplet>> = HashMap::new();
        for &(triplet, symbol) in &self.entries {
            reverse.entry(symbol).or_default().push(triplet);
        }

        if let Some(&symbol) = Symbol::ALPHABET.iter().find(|s| !reverse.contains_key(*s)) {
            return Err(CodonTableError::UncoveredSymbol {
                table: self.id,
                symbol,
            });
        }

        self.reverse = reverse;
        Ok(())
    }

    /// NCBI ID of the base table.
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Name of the base table.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Forward entries in assignment order.
    pub fn entries(&self) -> &[(Triplet, Symbol)] {
        &self.entries
    }

    /// Resolves a triplet to its symbol.
    ///
    /// An exact entry wins. Otherwise the most specific pattern entry that
    /// covers the triplet is used, later entries winning ties.
    pub fn translate(&self, triplet: &Triplet) -> Option<Symbol> {
        if let Some(&pos) = self.index.get(triplet) {
            return Some(self.entries[pos].1);
        }

        self.entries
            .iter()
            .filter(|(pattern, _)| !pattern.is_concrete() && pattern.covers(triplet))
            .max_by_key(|(pattern, _)| pattern.specificity())
            .map(|&(_, symbol)| symbol)
    }

    /// Triplets encoding `symbol`, in table order. The first one is canonical.
    pub fn reverse(&self, symbol: Symbol) -> &[Triplet] {
        self.reverse.get(&symbol).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builds codon tables, remembering the last one built.
///
/// An unknown table ID falls back to the previously built table, and to
/// table 1 when nothing has been built yet.
#[derive(Default)]
pub struct CodonTableBuilder {
    codes: GeneticCodes,
    last: Option<Arc<CodonTable>>,
}

impl CodonTableBuilder {
    /// Creates a builder with no previous table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for `id`, falling back as described above.
    pub fn build(&mut self, id: u8) -> CodonTableResult<Arc<CodonTable>> {
        let table = match CodonTable::from_codes(&self.codes, id) {
            Ok(table) => Arc::new(table),
            Err(CodonTableError::UnknownTable(_)) => match &self.last {
                Some(last) => {
                    warn!("Unknown genetic code {id}, reusing table {}", last.id());
                    return Ok(Arc::clone(last));
                }
                None => {
                    warn!("Unknown genetic code {id}, using table {DEFAULT_TABLE_ID}");
                    Arc::new(CodonTable::from_codes(&self.codes, DEFAULT_TABLE_ID)?)
                }
            },
            Err(e) => return Err(e),
        };

        self.last = Some(Arc::clone(&table));
        Ok(table)
    }

    /// The most recently built table, if any.
    pub fn last(&self) -> Option<&Arc<CodonTable>> {
        self.last.as_ref()
    }
}

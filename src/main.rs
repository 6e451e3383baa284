//! helixcode - messages written in DNA
//!
//! ## Usage
//!
//! ```bash
//! helixcode "BioRuby is fun"                  # encode (default)
//! helixcode -d "atataattataggtagaataatattagtga"
//! helixcode -x "I love you"                   # also draw the helix
//! helixcode -c "A happy new year"             # show how to decode it
//! helixcode messages.txt                      # one message per line
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use helixcode::codon_table::{CodonTableBuilder, DEFAULT_TABLE_ID};
use helixcode::genetic_code::GeneticCodes;
use helixcode::helix::render_text;
use helixcode::input::InputSource;
use helixcode::logging::init_logging;
use helixcode::model::NucleotideSequence;
use helixcode::normalize::normalize;
use helixcode::transcode::{encode, Transcoder};

/// Message used when nothing is given and stdin is a terminal.
const DEFAULT_MESSAGE: &str = "HELLO*BIORUBY";

/// helixcode - encode a message as DNA, decode it, draw the double helix
///
/// INPUT is the text to process, or a file whose lines are processed one by
/// one. Without INPUT, lines are read from standard input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Message, DNA sequence, or file to process
    input: Option<String>,

    /// Encode the input as a DNA sequence (default, -d takes precedence)
    #[arg(short = 'e', long = "encode")]
    encode: bool,

    /// Decode a DNA encoded input
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// Show the DNA double strand helix in ASCII art
    #[arg(short = 'x', long = "helix")]
    helix: bool,

    /// Show the command that decodes the DNA back
    #[arg(short = 'c', long = "code")]
    code: bool,

    /// Genetic code for the codon table (1-33, default: 1 = Standard)
    #[arg(short = 'g', long = "genetic-code", default_value_t = DEFAULT_TABLE_ID)]
    genetic_code: u8,

    /// List the available genetic codes and exit
    #[arg(short = 'l', long = "list-codes")]
    list_codes: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Encodes or decodes one line and writes the requested outputs.
fn process(transcoder: &Transcoder, args: &Args, line: &str, out: &mut impl Write) -> Result<()> {
    let (dna, message) = if args.decode {
        let dna = NucleotideSequence::parse(line);
        if !dna.is_valid() {
            info!("Input contains characters that are not bases");
        }
        let decoded = transcoder.decode_text(line);
        if decoded.unknown_count() > 0 {
            info!("{} codon(s) could not be decoded", decoded.unknown_count());
        }
        writeln!(out, "{decoded}")?;
        (dna, decoded.to_string())
    } else {
        let message = normalize(line);
        let dna = encode(&message, transcoder.table())
            .with_context(|| format!("Cannot encode \"{message}\""))?;
        writeln!(out, "{dna}")?;
        (dna, message.to_string())
    };

    if args.helix {
        writeln!(out)?;
        write!(out, "{}", render_text(line))?;
    }

    if args.code {
        let table = transcoder.table();
        let table_flag = if table.id() == DEFAULT_TABLE_ID {
            String::new()
        } else {
            format!("-g {} ", table.id())
        };
        let codes = GeneticCodes::new();
        let plain = codes
            .get(table.id())
            .unwrap_or_else(|| codes.default_code())
            .translate_sequence(dna.as_str(), 0);

        writeln!(out)?;
        writeln!(out, "% helixcode {table_flag}-d \"{dna}\"")?;
        writeln!(out, " ==> \"{message}\"")?;
        writeln!(out, " ({} code reads \"{plain}\")", table.name())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Prints the genetic codes that can be passed to -g.
fn list_codes(out: &mut impl Write) -> Result<()> {
    for code in GeneticCodes::new().all() {
        writeln!(out, "{:>2}  {}", code.id, code.name)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_codes {
        return list_codes(&mut out);
    }

    if args.encode && args.decode {
        warn!("Both --encode and --decode given, decoding");
    }

    let table = CodonTableBuilder::new()
        .build(args.genetic_code)
        .with_context(|| format!("Cannot use genetic code {}", args.genetic_code))?;
    info!("Using genetic code {} ({})", table.id(), table.name());
    let transcoder = Transcoder::new(table);

    let source = match InputSource::resolve(args.input.as_deref()) {
        InputSource::Stdin if io::stdin().is_terminal() => {
            InputSource::Literal(DEFAULT_MESSAGE.to_string())
        }
        source => source,
    };
    let lines = source.read_lines()?;
    info!("Processing {} line(s) from {:?}", lines.len(), source);

    for line in &lines {
        process(&transcoder, &args, line, &mut out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> String {
        let args = Args::parse_from(argv);
        let transcoder = Transcoder::with_genetic_code(args.genetic_code).unwrap();
        let mut out = Vec::new();
        let line = args.input.clone().unwrap_or_default();
        process(&transcoder, &args, &line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_encode_is_default() {
        assert_eq!(
            run(&["helixcode", "I love you"]),
            "atttaattataggttgaataatattagtga\n"
        );
        assert_eq!(
            run(&["helixcode", "-e", "I*LOVE*YOU"]),
            "atttaattataggttgaataatattagtga\n"
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            run(&["helixcode", "-d", "nacatatagagatganactattaaataagttaattttgaaat"]),
            "BIORUBY*IS*FUN\n"
        );
    }

    #[test]
    fn test_helix_of_input_message() {
        let output = run(&["helixcode", "-x", "I love you"]);
        let lines: Vec<&str> = output.lines().collect();
        // Encoded DNA, blank line, one helix turn
        assert_eq!(lines.len(), 1 + 1 + 16);
        assert_eq!(lines[0], "atttaattataggttgaataatattagtga");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "    in");
    }

    #[test]
    fn test_helix_of_input_dna() {
        let output = run(&["helixcode", "-x", "-d", "atataattat"]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1 + 1 + 16);
        assert_eq!(lines[0], "I*L");
        assert_eq!(lines[2], "    at");
    }

    #[test]
    fn test_code_snippet() {
        let output = run(&["helixcode", "-c", "hi"]);
        assert!(output.contains("% helixcode -d \"catatt\""));
        assert!(output.contains(" ==> \"HI\""));
        assert!(output.contains("(Standard code reads \"HI\")"));
    }

    #[test]
    fn test_code_snippet_names_table() {
        let output = run(&["helixcode", "-c", "-g", "2", "hi"]);
        assert!(output.contains("% helixcode -g 2 -d \"catatt\""));
    }

    #[test]
    fn test_decode_wins_over_encode() {
        assert_eq!(run(&["helixcode", "-e", "-d", "catatt"]), "HI\n");
    }

    #[test]
    fn test_list_codes() {
        let mut out = Vec::new();
        list_codes(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(" 1  Standard\n"));
        assert_eq!(text.lines().count(), 27);
    }
}

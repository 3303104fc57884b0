//! FASTA input and alignment output.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::alignment::Candidate;
use crate::base::Sequence;
use crate::errors::FastaError;

/// Default residues per line when writing.
pub const LINE_WIDTH: usize = 80;

/// A named sequence read from a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First whitespace-delimited token of the header
    pub name: String,
    pub sequence: Sequence,
}

/// Parse a FASTA file.
pub fn parse_fasta(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>, FastaError> {
    let file = File::open(path)?;
    read_fasta(BufReader::new(file))
}

/// Parse FASTA text held in memory.
pub fn parse_fasta_str(text: &str) -> Result<Vec<FastaRecord>, FastaError> {
    read_fasta(text.as_bytes())
}

/// Parse FASTA records from any buffered reader.
///
/// Blank lines are skipped and sequence lines may wrap. Records with an
/// empty sequence are rejected.
pub fn read_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records = Vec::new();
    let mut current: Option<(usize, String)> = None;
    let mut residues = String::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some((start, name)) = current.take() {
                records.push(finish_record(start, name, &residues)?);
                residues.clear();
            }
            let name = header.split_whitespace().next().ok_or_else(|| FastaError::Parse {
                line: line_no,
                message: "Empty FASTA header".to_string(),
            })?;
            current = Some((line_no, name.to_string()));
        } else if current.is_none() {
            return Err(FastaError::Parse {
                line: line_no,
                message: "Sequence data before first header".to_string(),
            });
        } else {
            residues.push_str(line);
        }
    }

    if let Some((start, name)) = current {
        records.push(finish_record(start, name, &residues)?);
    }

    if records.is_empty() {
        return Err(FastaError::Empty);
    }
    Ok(records)
}

fn finish_record(line: usize, name: String, residues: &str) -> Result<FastaRecord, FastaError> {
    if residues.is_empty() {
        return Err(FastaError::Parse {
            line,
            message: format!("Record '{name}' has no sequence"),
        });
    }
    let sequence = residues.parse::<Sequence>().map_err(|e| FastaError::Parse {
        line,
        message: format!("Record '{name}': {e}"),
    })?;
    Ok(FastaRecord { name, sequence })
}

/// Write an alignment as FASTA, one record per row, wrapped at `LINE_WIDTH`.
pub fn write_alignment<W: Write>(
    writer: &mut W,
    names: &[String],
    alignment: &Candidate,
) -> Result<(), FastaError> {
    if names.len() != alignment.len() {
        return Err(FastaError::CountMismatch {
            names: names.len(),
            sequences: alignment.len(),
        });
    }

    for (name, row) in names.iter().zip(alignment.rows()) {
        writeln!(writer, ">{name}")?;
        let text = row.to_string();
        for chunk in text.as_bytes().chunks(LINE_WIDTH) {
            writer.write_all(chunk)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

/// Write an alignment to a file.
pub fn write_alignment_file(
    path: impl AsRef<Path>,
    names: &[String],
    alignment: &Candidate,
) -> Result<(), FastaError> {
    let mut file = File::create(path)?;
    write_alignment(&mut file, names, alignment)?;
    file.flush()?;
    Ok(())
}

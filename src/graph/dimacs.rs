//! Converts DIMACS shortest-path files (`a u v w` arc lines) into the plain
//! edge-list format read by [`crate::graph::loader`].

use std::io::{BufRead, Write};

use log::warn;

use crate::{Error, Result};

/// Summary of a DIMACS conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Vertex count written to the header
    pub vertex_count: usize,
    /// Arc lines written as edges
    pub edges_written: usize,
    /// Lines that were neither arcs, comments, problem lines nor blank, plus
    /// arc lines with non-integer fields
    pub errors: usize,
}

/// Reads DIMACS input and writes `V E` followed by one `u v w` line per arc.
///
/// `V` comes from the `p sp V E` problem line when present, otherwise from
/// the largest vertex id seen on an arc.
pub fn convert_dimacs<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<ConversionReport> {
    let io_error = |source| Error::Io {
        path: "<dimacs>".to_string(),
        source,
    };

    let mut report = ConversionReport::default();
    let mut declared_vertices = None;
    let mut max_vertex = 0;
    let mut arcs = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error)?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.first().copied() {
            None | Some("c") => continue,
            Some("p") => {
                declared_vertices = parts.get(2).and_then(|v| v.parse::<usize>().ok());
            }
            Some(_) if parts.len() >= 4 => match parse_arc(&parts[1..4]) {
                Some((from, to, weight)) => {
                    max_vertex = max_vertex.max(from).max(to);
                    arcs.push((from, to, weight));
                }
                None => {
                    warn!("Line {}: arc fields must be integers: {}", index + 1, line);
                    report.errors += 1;
                }
            },
            Some(_) => {
                warn!("Line {}: expected `a <from> <to> <weight>`: {}", index + 1, line);
                report.errors += 1;
            }
        }
    }

    report.vertex_count = declared_vertices.unwrap_or(max_vertex);
    report.edges_written = arcs.len();

    writeln!(writer, "{} {}", report.vertex_count, report.edges_written).map_err(io_error)?;
    for (from, to, weight) in arcs {
        writeln!(writer, "{} {} {}", from, to, weight).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    Ok(report)
}

fn parse_arc(fields: &[&str]) -> Option<(usize, usize, i64)> {
    let from = fields[0].parse().ok()?;
    let to = fields[1].parse().ok()?;
    let weight = fields[2].parse().ok()?;
    Some((from, to, weight))
}

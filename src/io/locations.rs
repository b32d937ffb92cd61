//! Location file parsing.
//!
//! A location file holds one `name,latitude,longitude` record per line.
//! Blank lines are ignored. Records with missing or non-numeric fields are
//! skipped and remembered so the caller can report them. Fields past the
//! third are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::error::{TourError, TourResult};
use crate::models::Location;

/// One record of a location file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Name as written in the file.
    pub name: String,
    /// Coordinates of the place.
    pub location: Location,
    /// 1-based line number the record came from.
    pub line: usize,
}

/// A line that was dropped while parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// 1-based line number.
    pub line: usize,
    /// Why the line was dropped.
    pub reason: String,
}

/// All places of a location file, in file order.
///
/// # Examples
///
/// ```
/// use u_tour::io::LocationTable;
///
/// let data = "HVN,41.26,-72.89\n\nALB,42.75,-73.80\nbroken line\n";
/// let table = LocationTable::parse(data.as_bytes()).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.skipped().len(), 1);
/// assert_eq!(table.lookup("ALB").unwrap().line, 3);
/// assert!(table.lookup("BDL").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationTable {
    places: Vec<Place>,
    by_name: HashMap<String, usize>,
    skipped: Vec<SkippedRecord>,
}

impl LocationTable {
    /// Reads and parses the location file at `path`.
    pub fn load(path: impl AsRef<Path>) -> TourResult<Self> {
        let path = path.as_ref();
        let unreadable = |source| TourError::InputFileUnreadable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unreadable)?;
        let table = Self::parse(BufReader::new(file)).map_err(unreadable)?;
        info!(
            "loaded {} places from {} ({} lines skipped)",
            table.len(),
            path.display(),
            table.skipped.len()
        );
        Ok(table)
    }

    /// Parses location records from `reader`.
    ///
    /// Only I/O failures are errors; malformed records, including lines that
    /// are not valid UTF-8, are skipped.
    pub fn parse<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut table = Self::default();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let record = match std::str::from_utf8(trim_line_end(&buf)) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_record(line),
                Err(_) => Err("invalid UTF-8".to_string()),
            };
            match record {
                Ok((name, location)) => table.push(Place {
                    name,
                    location,
                    line: line_no,
                }),
                Err(reason) => {
                    warn!("skipping line {line_no}: {reason}");
                    table.skipped.push(SkippedRecord {
                        line: line_no,
                        reason,
                    });
                }
            }
        }
        Ok(table)
    }

    fn push(&mut self, place: Place) {
        // First record with a given name wins
        self.by_name
            .entry(place.name.clone())
            .or_insert(self.places.len());
        self.places.push(place);
    }

    /// First place in file order with the given name.
    pub fn lookup(&self, name: &str) -> Option<&Place> {
        self.by_name.get(name).map(|&i| &self.places[i])
    }

    /// All places, in file order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Lines dropped as malformed.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Number of places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns `true` if no place was parsed.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

/// Strips a trailing `\n` or `\r\n`.
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parses one non-blank line. Empty fields are ignored, so `A,,1,2` reads
/// as `A,1,2`.
fn parse_record(line: &str) -> Result<(String, Location), String> {
    let mut fields = line.split(',').map(str::trim).filter(|f| !f.is_empty());
    let (Some(name), Some(lat), Some(lon)) = (fields.next(), fields.next(), fields.next()) else {
        return Err("expected name,latitude,longitude".to_string());
    };
    let latitude: f64 = lat
        .parse()
        .map_err(|_| format!("invalid latitude '{lat}'"))?;
    let longitude: f64 = lon
        .parse()
        .map_err(|_| format!("invalid longitude '{lon}'"))?;
    let location = Location::new(latitude, longitude)
        .ok_or_else(|| format!("non-finite coordinates '{lat}', '{lon}'"))?;
    Ok((name.to_string(), location))
}

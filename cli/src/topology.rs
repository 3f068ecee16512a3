//! Topology sources: the built-in sample campus, a seeded random campus and
//! JSON edge files.

use std::path::Path;

use anyhow::{Context, Result};
use campus_graph_core::{EdgeRecord, Weight};
use serde::Deserialize;

const BUILDING_KINDS: [&str; 8] = [
    "Dorm",
    "Faculty",
    "Library",
    "Cafeteria",
    "Gym",
    "Park",
    "Lab",
    "Auditorium",
];

/// Simple LCG for deterministic pseudo-random campuses.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }

    /// Uniform in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next(hi - lo + 1)
    }
}

/// Spreadsheet-style suffix: A..Z, then AA, AB, ...
fn letter_suffix(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Random campus of `buildings` named `<Kind>_<Letter>`.
///
/// Consecutive buildings are chained (distance 50..=300) so the campus is
/// connected, then up to `buildings / 3` extra walkways join two distinct
/// random buildings (distance 80..=400). A draw that picks the same building
/// twice adds nothing. The same seed always yields the same edges.
pub fn random_campus(buildings: usize, seed: u64) -> Vec<EdgeRecord> {
    let mut rng = FastRng::new(seed);

    let names: Vec<String> = (0..buildings)
        .map(|i| {
            let kind = BUILDING_KINDS[rng.next(BUILDING_KINDS.len() as u64) as usize];
            format!("{}_{}", kind, letter_suffix(i))
        })
        .collect();

    let mut edges = Vec::with_capacity(buildings + buildings / 3);
    for pair in names.windows(2) {
        let distance = rng.range(50, 300) as Weight;
        edges.push(EdgeRecord::from((pair[0].clone(), pair[1].clone(), distance)));
    }

    if names.is_empty() {
        return edges;
    }
    for _ in 0..buildings / 3 {
        let a = rng.next(names.len() as u64) as usize;
        let b = rng.next(names.len() as u64) as usize;
        if a != b {
            let distance = rng.range(80, 400) as Weight;
            edges.push(EdgeRecord::from((names[a].clone(), names[b].clone(), distance)));
        }
    }

    edges
}

/// Small fixed campus used when no other source is configured.
pub fn sample_campus() -> Vec<EdgeRecord> {
    [
        ("Dorm_A", "Cafeteria", 150.0),
        ("Cafeteria", "Faculty_CS", 200.0),
        ("Dorm_A", "Library", 300.0),
        ("Library", "Faculty_CS", 100.0),
        ("Faculty_CS", "Gym", 250.0),
        ("Cafeteria", "Gym", 180.0),
    ]
    .into_iter()
    .map(EdgeRecord::from)
    .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EdgeEntry {
    Record(EdgeRecord),
    Triplet(String, String, Weight),
}

impl From<EdgeEntry> for EdgeRecord {
    fn from(entry: EdgeEntry) -> Self {
        match entry {
            EdgeEntry::Record(record) => record,
            EdgeEntry::Triplet(from, to, weight) => EdgeRecord { from, to, weight },
        }
    }
}

/// Parse a JSON array of `{"from", "to", "weight"}` objects or
/// `[from, to, weight]` triplets.
pub fn parse_edges(json: &str) -> Result<Vec<EdgeRecord>> {
    let entries: Vec<EdgeEntry> = serde_json::from_str(json).context("invalid edge list")?;
    Ok(entries.into_iter().map(EdgeRecord::from).collect())
}

pub fn load_edge_file(path: &Path) -> Result<Vec<EdgeRecord>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read edge file {}", path.display()))?;
    parse_edges(&text).with_context(|| format!("failed to load edges from {}", path.display()))
}

//! Status code frequency counting

use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use super::read_tracks;
use crate::error::Result;
use crate::hurdat2::Hurdat2Reader;

/// Width of the rule printed above the total
const RULE_WIDTH: usize = 20;

/// Status code counts, ordered by descending count then code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    counts: Vec<(String, usize)>,
}

impl StatusCounts {
    /// Build from any sequence of status codes
    pub fn from_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut tally: HashMap<&str, usize> = HashMap::new();
        for code in codes {
            *tally.entry(code).or_insert(0) += 1;
        }

        let mut counts: Vec<(String, usize)> = tally
            .into_iter()
            .map(|(code, n)| (code.to_string(), n))
            .collect();
        counts.sort_by(|(a_code, a_n), (b_code, b_n)| {
            b_n.cmp(a_n).then_with(|| a_code.cmp(b_code))
        });

        Self { counts }
    }

    pub fn counts(&self) -> &[(String, usize)] {
        &self.counts
    }

    pub fn get(&self, code: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Report text: a heading, one line per code, a rule and the total
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "No status codes found.\n".to_string();
        }

        let mut out = String::from("Tropical cyclone status counts:\n");
        for (code, n) in &self.counts {
            out.push_str(&format!("{:>3} : {}\n", code, n));
        }
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        out.push_str(&format!("Total : {}\n", self.total()));
        out
    }
}

/// Count observation status codes over every readable `*.txt` track in `dir`
pub fn count_directory(dir: &Path, reader: &Hurdat2Reader) -> Result<StatusCounts> {
    let tracks = read_tracks(dir, reader)?;

    let statuses: Vec<&str> = tracks
        .iter()
        .flat_map(|(_, result)| result.observations.iter().map(|o| o.status.as_str()))
        .collect();

    debug!(
        "Counted {} observations across {} files",
        statuses.len(),
        tracks.len()
    );
    Ok(StatusCounts::from_codes(statuses))
}

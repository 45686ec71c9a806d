//! Result rendering: indented text and a schema-versioned JSON report.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use ped_common::{Result, SCHEMA_VERSION};

use crate::inference::posterior::{PersonPosterior, PosteriorTable};

/// Render the per-person distributions as indented text.
///
/// Four decimal places per probability, gene buckets in descending copy
/// order, trait buckets true first.
pub fn render_text(table: &PosteriorTable) -> String {
    let mut out = String::new();
    for person in table.people() {
        let _ = writeln!(out, "{}:", person.name);
        let _ = writeln!(out, "  Gene:");
        let _ = writeln!(out, "    2: {:.4}", person.gene.two);
        let _ = writeln!(out, "    1: {:.4}", person.gene.one);
        let _ = writeln!(out, "    0: {:.4}", person.gene.zero);
        let _ = writeln!(out, "  Trait:");
        let _ = writeln!(out, "    True: {:.4}", person.trait_scores.present);
        let _ = writeln!(out, "    False: {:.4}", person.trait_scores.absent);
    }
    out
}

/// Machine-readable inference report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub schema_version: &'static str,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub people: &'a [PersonPosterior],
}

/// Render the table as a schema-versioned JSON report.
pub fn render_json(table: &PosteriorTable) -> Result<String> {
    let report = JsonReport {
        schema_version: SCHEMA_VERSION,
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        people: table.people(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

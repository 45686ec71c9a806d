//! CSV pedigree loader.
//!
//! Record source format: header `name,mother,father,trait`. Mother and
//! father are either both blank or both name people in the same file;
//! trait is `1`, `0`, or blank for unknown. Parent resolution and
//! duplicate detection happen in [`Population::build`]; this module owns
//! field-level parsing and the single-parent structural check.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ped_common::{Error, Result};

use crate::pedigree::{Parents, Person, Population};

#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    mother: String,
    father: String,
    #[serde(rename = "trait")]
    trait_status: String,
}

/// Load a pedigree CSV from `path`.
pub fn load_pedigree<P: AsRef<Path>>(path: P) -> Result<Population> {
    let file = File::open(path.as_ref())?;
    parse_pedigree(file)
}

/// Parse a pedigree CSV from any reader.
pub fn parse_pedigree<R: Read>(reader: R) -> Result<Population> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut people = Vec::new();
    for record in csv_reader.deserialize() {
        let raw: RawRecord = record.map_err(|e| Error::Load(e.to_string()))?;
        people.push(person_from_raw(raw)?);
    }
    debug!(people = people.len(), "parsed pedigree records");

    Population::build(people)
}

fn person_from_raw(raw: RawRecord) -> Result<Person> {
    let parents = match (raw.mother.is_empty(), raw.father.is_empty()) {
        (true, true) => None,
        (false, false) => Some(Parents {
            mother: raw.mother,
            father: raw.father,
        }),
        _ => return Err(Error::SingleParent { person: raw.name }),
    };

    let trait_status = match raw.trait_status.as_str() {
        "" => None,
        "1" => Some(true),
        "0" => Some(false),
        other => {
            return Err(Error::Load(format!(
                "person {}: trait must be 1, 0, or blank, got {other:?}",
                raw.name
            )))
        }
    };

    Ok(Person {
        name: raw.name,
        parents,
        trait_status,
    })
}

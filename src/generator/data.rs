//! JSON exports of the catalog under `/_data/`.
//!
//! A static build writes these next to the pages; `folio serve` answers
//! `/_data/*.json` requests from memory.

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directory name of the exports, relative to the output root.
pub const DATA_DIR: &str = "_data";

type DataGenerator = fn(&Catalog) -> serde_json::Result<String>;

const DATA_FILES: &[(&str, DataGenerator)] = &[
    ("projects.json", |catalog| serde_json::to_string_pretty(&catalog.projects)),
    ("skills.json", |catalog| serde_json::to_string_pretty(&catalog.skill_groups())),
];

/// Render one export by file name. `None` for unknown names.
pub fn read_data(catalog: &Catalog, name: &str) -> Option<Result<String>> {
    DATA_FILES
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(file, generator)| generator(catalog).with_context(|| format!("Failed to serialize {file}")))
}

/// Write every export into `data_dir`.
pub fn write_to_disk(catalog: &Catalog, data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    for (name, generator) in DATA_FILES {
        let path = data_dir.join(name);
        let json = generator(catalog).with_context(|| format!("Failed to serialize {name}"))?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

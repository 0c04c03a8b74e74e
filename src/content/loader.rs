//! Loader for the RON catalog files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{DataFile, GameplayDefaults, ItemDef, RodDef};
use super::registry::ContentRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let data: DataFile<T> = ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| ContentLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

/// Load all content from `base_path`. Any file that fails to load is
/// reported and replaced by its built-in fallback, so the returned
/// catalogs are always usable.
pub fn load_all_content(
    base_path: &Path,
) -> (ContentRegistry, GameplayDefaults, Vec<ContentLoadError>) {
    let mut errors = Vec::new();
    let fallback = ContentRegistry::fallback();

    let rods = match load_data_file::<RodDef>(&base_path.join("rods.ron")) {
        Ok(rods) => rods,
        Err(e) => {
            errors.push(e);
            fallback.rods.clone()
        }
    };

    let items = match load_data_file::<ItemDef>(&base_path.join("items.ron")) {
        Ok(items) => items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect(),
        Err(e) => {
            errors.push(e);
            fallback.items.clone()
        }
    };

    let defaults = match load_single_file::<GameplayDefaults>(&base_path.join("gameplay.ron")) {
        Ok(defaults) => defaults,
        Err(e) => {
            errors.push(e);
            GameplayDefaults::default()
        }
    };

    (ContentRegistry { rods, items }, defaults, errors)
}

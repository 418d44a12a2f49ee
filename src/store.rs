// Copyright (c) 2025 Founderdeck.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Whole-document persistence.
//!
//! The workspace lives in a single JSON file under the platform data dir.
//! Loading merges whatever was stored over the seeded defaults: missing
//! top-level collections fall back to defaults and each stored product is
//! shallow-merged over the product template, so fields introduced in later
//! versions are backfilled. A document that cannot be read or parsed is
//! discarded wholesale in favor of the defaults.

use crate::models::{Product, Workspace};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.founderdeck", "Founderdeck", "founderdeck"));

/// Fixed storage key; there is no schema version beyond this name.
pub const STORE_FILE: &str = "workspace.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write workspace: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize workspace: {0}")]
    Serde(#[from] serde_json::Error),
}

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(STORE_FILE))
}

/// Load the workspace, falling back to the seeded defaults on any failure.
/// This never errors: a missing file is a fresh workspace and a malformed one
/// is replaced, both silently as far as the user is concerned.
pub fn load_or_default(path: &Path) -> Workspace {
    let raw = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            debug!("no stored workspace at {} ({}), using defaults", path.display(), e);
            return Workspace::default();
        }
    };
    match serde_json::from_str::<Value>(&raw).map(merge_into_defaults) {
        Ok(Ok(doc)) => doc,
        Ok(Err(e)) => {
            warn!("stored workspace is malformed ({}), reverting to defaults", e);
            Workspace::default()
        }
        Err(e) => {
            warn!("stored workspace is not valid JSON ({}), reverting to defaults", e);
            Workspace::default()
        }
    }
}

/// Rewrite the whole document. The document is the unit of persistence;
/// there is no partial save.
pub fn save(path: &Path, doc: &Workspace) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)?;
    debug!("workspace saved to {}", path.display());
    Ok(())
}

/// Merge a parsed document over the default one, field by field at the top
/// level, and each stored product over the product template.
fn merge_into_defaults(parsed: Value) -> Result<Workspace, serde_json::Error> {
    let mut doc = serde_json::to_value(Workspace::default())?;

    if let (Value::Object(base), Value::Object(stored)) = (&mut doc, parsed) {
        for (key, value) in stored {
            // Null is treated the same as absent: the default stands.
            if !value.is_null() {
                base.insert(key, value);
            }
        }
    }

    if let Some(products) = doc.get_mut("products").and_then(Value::as_array_mut) {
        let template = serde_json::to_value(Product::template())?;
        for p in products.iter_mut() {
            *p = merge_product(&template, p.take());
        }
    }

    serde_json::from_value(doc)
}

fn merge_product(template: &Value, stored: Value) -> Value {
    let Value::Object(fields) = stored else {
        return template.clone();
    };
    let mut merged = template.clone();
    if let Some(out) = merged.as_object_mut() {
        for (key, value) in fields {
            if !value.is_null() {
                out.insert(key, value);
            }
        }
    }
    merged
}

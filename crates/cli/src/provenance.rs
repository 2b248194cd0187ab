//! `<output>.provenance.json`: the plan a generated detector encodes.
//!
//! The record carries the radius, both set sizes and the first evaluated
//! boundary pixel straight from the `Plan`, the template it was rendered
//! from, and a BLAKE3 digest of the emitted source. `verify` re-reads both
//! files and re-plans the radius, so a hand-edited detector or one produced
//! by a different planner is caught.

use anyhow::{bail, Context, Result};
use fimd::{Pixel, Plan};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SUFFIX: &str = ".provenance.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// `fimd-gen <version>`
    pub generator: String,
    pub fimd: String,
    /// Revision baked in through `GIT_COMMIT` at build time, if any.
    pub code_rev: Option<String>,
    pub radius: i32,
    pub boundary_len: usize,
    pub interior_len: usize,
    pub first_evaluated: Option<Pixel>,
    pub template: String,
    pub source_blake3: String,
}

impl Provenance {
    pub fn new(plan: &Plan, template: &str, source: &str) -> Self {
        Self {
            generator: format!("fimd-gen {}", env!("CARGO_PKG_VERSION")),
            fimd: fimd::VERSION.to_string(),
            code_rev: option_env!("GIT_COMMIT")
                .filter(|rev| !rev.is_empty())
                .map(str::to_string),
            radius: plan.radius,
            boundary_len: plan.boundary.len(),
            interior_len: plan.interior.len(),
            first_evaluated: plan.boundary.first().copied(),
            template: template.to_string(),
            source_blake3: source_digest(source.as_bytes()),
        }
    }

    fn matches_plan(&self, plan: &Plan) -> bool {
        self.boundary_len == plan.boundary.len()
            && self.interior_len == plan.interior.len()
            && self.first_evaluated == plan.boundary.first().copied()
    }
}

pub fn source_digest(source: &[u8]) -> String {
    blake3::hash(source).to_hex().to_string()
}

/// `fimd_r5.c` -> `fimd_r5.c.provenance.json`, next to the output.
pub fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "detector".into());
    name.push(SUFFIX);
    output.with_file_name(name)
}

pub fn write_sidecar(output: &Path, record: &Provenance) -> Result<PathBuf> {
    let path = sidecar_path(output);
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Check `output` against its sidecar: source digest, then the recorded
/// counts against a fresh plan of the recorded radius.
pub fn verify(output: &Path) -> Result<Provenance> {
    let path = sidecar_path(output);
    let raw = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let record: Provenance =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let source = fs::read(output).with_context(|| format!("reading {}", output.display()))?;

    let digest = source_digest(&source);
    if digest != record.source_blake3 {
        bail!(
            "{} was modified after generation (blake3 {digest}, recorded {})",
            output.display(),
            record.source_blake3
        );
    }
    let plan = fimd::plan(record.radius)
        .with_context(|| format!("re-planning radius {}", record.radius))?;
    if !record.matches_plan(&plan) {
        bail!(
            "{} records {} boundary / {} interior pixels for radius {}, the current planner gives {} / {}",
            path.display(),
            record.boundary_len,
            record.interior_len,
            record.radius,
            plan.boundary.len(),
            plan.interior.len()
        );
    }
    Ok(record)
}

//! File-based generation pipeline: submission JSON in, `.docx` out.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use coshh_assemble::build_coshh_form;
use coshh_docx::DocxPackage;
use coshh_model::ChemicalRecord;

/// Outcome summary of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub chemicals: usize,
    pub output: PathBuf,
}

/// Read a submission payload: a JSON array of `{name, amount, hazards[]}`.
pub fn read_submission(path: &Path) -> Result<Vec<ChemicalRecord>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read submission {}", path.display()))?;
    let records: Vec<ChemicalRecord> = serde_json::from_str(&data)
        .with_context(|| format!("parse submission {}", path.display()))?;
    Ok(records)
}

/// Load both templates, assemble one row per chemical, and write the
/// completed form. Fails atomically; the output file is only written once the
/// whole document has been built.
pub fn generate_form(
    submission: &Path,
    form_template: &Path,
    ticks_template: &Path,
    output: &Path,
) -> Result<GenerateReport> {
    let span = info_span!("generate", submission = %submission.display());
    let _guard = span.enter();

    let records = read_submission(submission)?;

    // Templates are loaded fresh per run: assembly mutates the form instance,
    // so a cached handle must never be shared across requests.
    let mut form = DocxPackage::open(form_template)
        .with_context(|| format!("load form template {}", form_template.display()))?;
    let ticks = DocxPackage::open(ticks_template)
        .with_context(|| format!("load ticks template {}", ticks_template.display()))?;

    build_coshh_form(form.document_mut(), ticks.document(), &records)
        .context("assemble COSHH form")?;

    form.save(output)
        .with_context(|| format!("write output {}", output.display()))?;

    info!(
        chemicals = records.len(),
        output = %output.display(),
        "generated COSHH form"
    );
    Ok(GenerateReport {
        chemicals: records.len(),
        output: output.to_path_buf(),
    })
}

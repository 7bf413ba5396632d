//! Form-row assembly: classification results rendered into the data table.
//!
//! The tick and cross marks in the display cells are rich pre-authored
//! content, so they cannot be written as strings. Each display cell is built
//! by clearing it and splicing in the structural content of one reference
//! cell per vector slot, chosen by that slot's boolean: column 0 of the ticks
//! table means "does not apply", column 1 means "applies". Splice order must
//! follow the classifier's slot indices, because the ticks tables align their
//! rows by the same indices.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use coshh_classify::classify;
use coshh_docx::Document;
use coshh_model::{ChemicalRecord, Classification};

use crate::error::{AssembleError, Result};

/// Index of the chemical data table in the form document.
pub const DATA_TABLE: usize = 2;
/// Index of the reusable template row inside the data table.
pub const TEMPLATE_ROW: usize = 1;

/// Index of the header table carrying the assessment date.
const DATE_TABLE: usize = 0;
const DATE_ROW: usize = 1;
const DATE_CELL: usize = 3;

const NAME_CELL: usize = 0;
const AMOUNT_CELL: usize = 1;
const HAZARDS_CELL: usize = 2;
const ROUTES_CELL: usize = 3;
const MEASURES_CELL: usize = 4;

/// Index of the exposure-route lookup table in the ticks document.
const ROUTE_TICKS_TABLE: usize = 0;
/// Index of the control-measure lookup table in the ticks document.
const MEASURE_TICKS_TABLE: usize = 1;

/// Stamp today's date into the form's header table.
pub fn stamp_form_date(form: &mut Document) -> Result<()> {
    stamp_form_date_as(form, Local::now().date_naive())
}

/// Stamp a specific date; split out so tests are not wall-clock dependent.
pub fn stamp_form_date_as(form: &mut Document, date: NaiveDate) -> Result<()> {
    let mut table = form.table_mut(DATE_TABLE)?;
    let mut row = table.row_mut(DATE_ROW)?;
    row.cell_mut(DATE_CELL)?
        .set_text(&date.format("%d/%m/%Y").to_string());
    Ok(())
}

/// Write a chemical into the template row in place, reusing it as the first
/// data row. The tick display cells keep whatever the template authored.
pub fn overwrite_first_row(form: &mut Document, record: &ChemicalRecord) -> Result<()> {
    let mut table = form.table_mut(DATA_TABLE)?;
    let mut row = table.row_mut(TEMPLATE_ROW)?;
    row.cell_mut(NAME_CELL)?.set_text(&record.name);
    row.cell_mut(AMOUNT_CELL)?.set_text(&record.amount);
    row.cell_mut(HAZARDS_CELL)?.set_text(&record.hazard_text());
    debug!(chemical = %record.name, "overwrote template row");
    Ok(())
}

/// Clone the template row, append the clone as the table's last row, and fill
/// it: three verbatim text cells, then the two display cells spliced from the
/// ticks reference document.
pub fn append_row(
    form: &mut Document,
    ticks: &Document,
    record: &ChemicalRecord,
    classification: &Classification,
) -> Result<()> {
    let mut table = form.table_mut(DATA_TABLE)?;
    let mut row = table.append_cloned_row(TEMPLATE_ROW)?;
    row.cell_mut(NAME_CELL)?.set_text(&record.name);
    row.cell_mut(AMOUNT_CELL)?.set_text(&record.amount);
    row.cell_mut(HAZARDS_CELL)?.set_text(&record.hazard_text());

    let route_slots = classification.routes.slots();
    splice_display_cell(
        &mut row,
        ROUTES_CELL,
        ticks,
        ROUTE_TICKS_TABLE,
        &route_slots,
    )?;
    let measure_slots = classification.measures.slots();
    splice_display_cell(
        &mut row,
        MEASURES_CELL,
        ticks,
        MEASURE_TICKS_TABLE,
        &measure_slots,
    )?;
    debug!(chemical = %record.name, "appended form row");
    Ok(())
}

fn splice_display_cell(
    row: &mut coshh_docx::RowMut<'_>,
    cell: usize,
    ticks: &Document,
    ticks_table: usize,
    slots: &[bool],
) -> Result<()> {
    let mut destination = row.cell_mut(cell)?;
    destination.clear();
    let source_table = ticks.table(ticks_table)?;
    for (slot, applies) in slots.iter().enumerate() {
        let source = source_table.row(slot)?.cell(usize::from(*applies))?;
        destination.extend_from(&source);
    }
    Ok(())
}

/// Assemble the whole submission into the form document.
///
/// Every record, the first included, is appended as a clone of the template
/// row; the template row itself persists unchanged. An empty submission is a
/// client-input error; any structural failure aborts with nothing partial
/// handed back, since the caller owns the document instance.
pub fn build_coshh_form(
    form: &mut Document,
    ticks: &Document,
    records: &[ChemicalRecord],
) -> Result<()> {
    if records.is_empty() {
        return Err(AssembleError::EmptySubmission);
    }
    stamp_form_date(form)?;
    for record in records {
        let classification = classify(&record.hazard_text());
        append_row(form, ticks, record, &classification)?;
    }
    info!(chemicals = records.len(), "assembled COSHH form");
    Ok(())
}

//! Workbook synchronization
//!
//! After any mutation the entire workbook is materialized into the engine:
//! each sheet is looked up or created by name, its full grid of raw inputs
//! is pushed as a complete overwrite, and its named ranges are registered.
//! A full rebuild is deliberately chosen over incremental patching — sheets
//! are modest in size, and a rebuild cannot drift from the model.

use gridbook_core::Workbook;
use gridbook_engine::{FormulaEngine, SheetId};

/// Rebuild the engine's state from the whole workbook.
///
/// Named-range registration is best-effort: failures (duplicate names,
/// malformed references) are logged and swallowed, and registration is
/// re-attempted on the next resync. One sheet's registration failures
/// never abort synchronization of the rest.
///
/// Returns the engine-side sheet id for each workbook sheet, in order.
pub fn resync<E: FormulaEngine>(engine: &mut E, workbook: &Workbook) -> Vec<SheetId> {
    let mut ids = Vec::with_capacity(workbook.sheet_count());

    for sheet in workbook.sheets() {
        let id = engine.create_or_get_sheet(sheet.name());
        engine.set_sheet_content(id, sheet.grid().raw_inputs());

        for named in sheet.names().iter() {
            if let Err(e) = engine.add_named_expression(&named.name, &named.refers_to, id) {
                log::debug!(
                    "named expression '{}' not registered on '{}': {}",
                    named.name,
                    sheet.name(),
                    e
                );
            }
        }

        ids.push(id);
    }

    ids
}

//! Sheet classification and row mapping

use crate::convert::dates;
use crate::convert::schema::{OUTPUT_COLUMNS, RETURN_CATEGORY_MARKER, source};
use crate::convert::serialize::serialize;
use crate::convert::types::{
    Conversion, OrderRecord, RecordKind, ReturnFields, ShipmentFields, SourceRow,
};

/// Convert the decoded rows of one spreadsheet into ERP import CSV.
///
/// Callers must reject empty row sets beforehand (that is a user-facing
/// "file content is empty" error); classification falls back to `Shipment`
/// when there is nothing to inspect. Rows are mapped in input order.
pub fn convert(rows: &[SourceRow]) -> Conversion {
    let kind = classify(rows);
    log::debug!("Classified sheet as {:?} ({} rows)", kind, rows.len());

    let output: Vec<_> = rows
        .iter()
        .map(|row| map_row(kind, row).project())
        .collect();

    Conversion {
        csv: serialize(&OUTPUT_COLUMNS, &output),
        kind,
        row_count: rows.len(),
    }
}

/// Decide the sheet-wide record kind from the first data row only.
///
/// A sheet mixing shipment and return rows is not supported; every row is
/// mapped with the single kind decided here.
pub fn classify(rows: &[SourceRow]) -> RecordKind {
    match rows.first().map(|row| row.get(source::ORDER_CATEGORY)) {
        Some(cell) if cell.is_truthy() && cell.to_string().contains(RETURN_CATEGORY_MARKER) => {
            RecordKind::Return
        }
        _ => RecordKind::Shipment,
    }
}

/// Map one source row onto the compact record shape for `kind`.
///
/// Missing or malformed cells degrade to empty strings or zero; a dirty
/// cell never aborts the row.
pub fn map_row(kind: RecordKind, row: &SourceRow) -> OrderRecord {
    match kind {
        RecordKind::Shipment => OrderRecord::Shipment(ShipmentFields {
            order_id: row.text(source::ORDER_ID),
            sku: row.text(source::SKU),
            price: row.scalar_or_zero(source::PRICE_WITH_TAX),
            customer: row.text(source::RECIPIENT_NAME),
            quantity: row.scalar_or_zero(source::QUANTITY),
            audit_amount: row.scalar_or_zero(source::COST_WITH_TAX),
            product_name: row.text(source::PRODUCT_NAME),
            shipped_time: dates::ship_date(row.get(source::ACTUAL_SHIP_DATE)),
            order_date: dates::order_date(row.get(source::TRANSFER_DATE)),
        }),
        RecordKind::Return => OrderRecord::Return(ReturnFields {
            order_id: row.text(source::ORDER_ID),
            sku: row.text(source::SKU),
            return_time: dates::return_date(row.get(source::RETURN_RECEIVED_DATE)),
            reason: strip_outer_quotes(&row.text(source::RETURN_REASON)),
        }),
    }
}

/// Vendor exports sometimes deliver the return reason pre-quoted; strip one
/// layer so serialization does not double-wrap it.
fn strip_outer_quotes(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

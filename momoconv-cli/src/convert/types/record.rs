//! Record shapes and projection onto the output schema

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::convert::schema::{
    BRAND_MUFE, PLATFORM_MOMO, STATUS_RETURN_CLOSED, STATUS_SHIPPED, out,
};

use super::Field;

/// Which of the two record shapes a sheet holds.
///
/// Decided once per spreadsheet from the first data row; a sheet mixing both
/// kinds is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Shipment,
    Return,
}

impl RecordKind {
    /// Filename prefix the ERP import uses to label the record kind.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            RecordKind::Shipment => "MUFE_MOMO_ZOHO_SHPECOM",
            RecordKind::Return => "MUFE_MOMO_ZOHO_RTN02",
        }
    }

    /// Display label for CLI reports.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Shipment => "出貨 (SHPECOM)",
            RecordKind::Return => "退貨 (RTN)",
        }
    }
}

/// Fields populated on a shipment row.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentFields {
    pub order_id: String,
    pub sku: String,
    /// Populates 商品售價, 折扣後實收總價 and 產品單價 alike
    pub price: Field,
    pub customer: String,
    pub quantity: Field,
    pub audit_amount: Field,
    pub product_name: String,
    /// Pre-formatted ship timestamp, empty when the source date was unusable
    pub shipped_time: String,
    /// Pre-formatted order date, empty when the source date was unusable
    pub order_date: String,
}

/// Fields populated on a return row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnFields {
    pub order_id: String,
    pub sku: String,
    /// Pre-formatted return timestamp, empty when the source date was unusable
    pub return_time: String,
    /// Return reason with one layer of surrounding quotes already stripped
    pub reason: String,
}

/// Tagged union of the two compact record shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRecord {
    Shipment(ShipmentFields),
    Return(ReturnFields),
}

impl OrderRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            OrderRecord::Shipment(_) => RecordKind::Shipment,
            OrderRecord::Return(_) => RecordKind::Return,
        }
    }

    /// Expand the compact shape into the canonical 42-column row. Columns
    /// without a mapping rule are left unset and serialize as empty.
    pub fn project(&self) -> OutputRow {
        let mut row = OutputRow::default();
        match self {
            OrderRecord::Shipment(s) => {
                row.set(out::OMNI_ORDER_ID, Field::Text(s.order_id.clone()));
                row.set(out::SKU_ID, Field::Text(s.sku.clone()));
                row.set(out::MAIN_ORDER_STATUS, Field::text(STATUS_SHIPPED));
                row.set(out::MAIN_ORDER_ID, Field::Text(s.order_id.clone()));
                row.set(out::SOURCE_PLATFORM, Field::text(PLATFORM_MOMO));
                row.set(out::BRAND, Field::text(BRAND_MUFE));
                row.set(out::ITEM_PRICE, s.price.clone());
                row.set(out::CUSTOMER_NAME, Field::Text(s.customer.clone()));
                row.set(out::SHIPPED_TIME, Field::Text(s.shipped_time.clone()));
                row.set(out::PLATFORM_NAME, Field::text(PLATFORM_MOMO));
                row.set(out::DISCOUNTED_TOTAL, s.price.clone());
                row.set(out::QUANTITY, s.quantity.clone());
                row.set(out::AUDIT_AMOUNT, s.audit_amount.clone());
                row.set(out::PRODUCT_NAME, Field::Text(s.product_name.clone()));
                row.set(out::UNIT_PRICE, s.price.clone());
                row.set(out::ORDER_DATE, Field::Text(s.order_date.clone()));
                row.set(out::SALES_ORDER_STATUS, Field::text(STATUS_SHIPPED));
                row.set(out::SALES_ORDER_ID, Field::Text(s.order_id.clone()));
            }
            OrderRecord::Return(r) => {
                row.set(out::SKU_ID, Field::Text(r.sku.clone()));
                row.set(out::RETURN_UPDATED_TIME, Field::Text(r.return_time.clone()));
                row.set(out::SALES_ORDER_STATUS, Field::text(STATUS_RETURN_CLOSED));
                row.set(out::SALES_ORDER_ID, Field::Text(r.order_id.clone()));
                row.set(out::RETURN_REASON, Field::Text(r.reason.clone()));
            }
        }
        row
    }
}

/// Sparse output row keyed by column name.
#[derive(Debug, Clone, Default)]
pub struct OutputRow {
    fields: HashMap<&'static str, Field>,
}

impl OutputRow {
    pub fn set(&mut self, column: &'static str, value: Field) {
        self.fields.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&Field> {
        self.fields.get(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipment() -> OrderRecord {
        OrderRecord::Shipment(ShipmentFields {
            order_id: "A1".into(),
            sku: "SKU1".into(),
            price: Field::Number(100.0),
            customer: "王小明".into(),
            quantity: Field::Number(2.0),
            audit_amount: Field::Number(50.0),
            product_name: "Lipstick".into(),
            shipped_time: "2025/07/10 15:00:00".into(),
            order_date: "2025/07/09".into(),
        })
    }

    #[test]
    fn test_file_prefixes() {
        assert_eq!(RecordKind::Shipment.file_prefix(), "MUFE_MOMO_ZOHO_SHPECOM");
        assert_eq!(RecordKind::Return.file_prefix(), "MUFE_MOMO_ZOHO_RTN02");
    }

    #[test]
    fn test_shipment_projection_duplicates_order_id_and_price() {
        let row = shipment().project();
        assert_eq!(row.get(out::OMNI_ORDER_ID), Some(&Field::Text("A1".into())));
        assert_eq!(row.get(out::MAIN_ORDER_ID), Some(&Field::Text("A1".into())));
        assert_eq!(row.get(out::SALES_ORDER_ID), Some(&Field::Text("A1".into())));
        assert_eq!(row.get(out::ITEM_PRICE), Some(&Field::Number(100.0)));
        assert_eq!(row.get(out::DISCOUNTED_TOTAL), Some(&Field::Number(100.0)));
        assert_eq!(row.get(out::UNIT_PRICE), Some(&Field::Number(100.0)));
    }

    #[test]
    fn test_shipment_projection_leaves_return_columns_unset() {
        let row = shipment().project();
        assert_eq!(row.get(out::RETURN_UPDATED_TIME), None);
        assert_eq!(row.get(out::RETURN_REASON), None);
        assert_eq!(row.get("地址"), None);
    }

    #[test]
    fn test_return_projection_maps_order_id_to_sales_order_only() {
        let record = OrderRecord::Return(ReturnFields {
            order_id: "B2".into(),
            sku: "SKU2".into(),
            return_time: "2025/07/10 11:00:00".into(),
            reason: "想要換色".into(),
        });
        let row = record.project();
        assert_eq!(row.get(out::SALES_ORDER_ID), Some(&Field::Text("B2".into())));
        assert_eq!(row.get(out::OMNI_ORDER_ID), None);
        assert_eq!(row.get(out::MAIN_ORDER_ID), None);
        assert_eq!(
            row.get(out::SALES_ORDER_STATUS),
            Some(&Field::Text("退貨結案".into()))
        );
        assert_eq!(row.len(), 5);
    }
}

//! Fixed Omni ERP import schema and MOMO export field names

/// The 42 output columns, in the exact order the ERP import job expects.
pub const OUTPUT_COLUMNS: [&str; 42] = [
    "Omni ERP 系統訂單編號",
    "SKU ID",
    "主單狀態",
    "主單編號",
    "來源平台",
    "品牌",
    "商品售價",
    "客戶名稱",
    "已出貨狀態時間",
    "平台名稱",
    "折扣後實收總價",
    "數量",
    "核帳金額",
    "產品名稱",
    "產品單價",
    "訂購日期",
    "退貨狀態更新時間",
    "銷售訂單狀態",
    "銷售訂單編號",
    "退貨申請日",
    "退貨原因",
    "地址",
    "LFL 配送代碼",
    "平台預計出貨日",
    "批次更新",
    "收件人",
    "收件人電話",
    "標籤",
    "準備出貨狀態時間",
    "物流方式",
    "缺貨狀態更新時間",
    "訂單取消狀態時間",
    "超取門市退貨日",
    "超取門市進貨日",
    "部分取消狀態時間",
    "郵遞區號",
    "配送條碼",
    "配送編號",
    "銷售訂單分配數",
    "門市代碼",
    "門市名稱",
    "預計到貨時間",
];

/// Output columns populated by the mapper (must match `OUTPUT_COLUMNS`)
pub mod out {
    pub const OMNI_ORDER_ID: &str = "Omni ERP 系統訂單編號";
    pub const SKU_ID: &str = "SKU ID";
    pub const MAIN_ORDER_STATUS: &str = "主單狀態";
    pub const MAIN_ORDER_ID: &str = "主單編號";
    pub const SOURCE_PLATFORM: &str = "來源平台";
    pub const BRAND: &str = "品牌";
    pub const ITEM_PRICE: &str = "商品售價";
    pub const CUSTOMER_NAME: &str = "客戶名稱";
    pub const SHIPPED_TIME: &str = "已出貨狀態時間";
    pub const PLATFORM_NAME: &str = "平台名稱";
    pub const DISCOUNTED_TOTAL: &str = "折扣後實收總價";
    pub const QUANTITY: &str = "數量";
    pub const AUDIT_AMOUNT: &str = "核帳金額";
    pub const PRODUCT_NAME: &str = "產品名稱";
    pub const UNIT_PRICE: &str = "產品單價";
    pub const ORDER_DATE: &str = "訂購日期";
    pub const RETURN_UPDATED_TIME: &str = "退貨狀態更新時間";
    pub const SALES_ORDER_STATUS: &str = "銷售訂單狀態";
    pub const SALES_ORDER_ID: &str = "銷售訂單編號";
    pub const RETURN_REASON: &str = "退貨原因";
}

/// Source columns of the MOMO back-office export referenced by the mapper
pub mod source {
    pub const ORDER_CATEGORY: &str = "訂單類別";
    pub const ORDER_ID: &str = "訂單編號";
    pub const SKU: &str = "商品原廠編號";
    pub const PRICE_WITH_TAX: &str = "售價(含稅)";
    pub const RECIPIENT_NAME: &str = "收件人姓名";
    pub const QUANTITY: &str = "數量";
    pub const COST_WITH_TAX: &str = "進價(含稅)";
    pub const PRODUCT_NAME: &str = "品名";
    pub const ACTUAL_SHIP_DATE: &str = "實際出貨日";
    pub const TRANSFER_DATE: &str = "轉單日";
    pub const RETURN_RECEIVED_DATE: &str = "回收送達日";
    pub const RETURN_REASON: &str = "退貨原因";
}

/// Substring of "訂單類別" that marks a sheet as a return export.
pub const RETURN_CATEGORY_MARKER: &str = "退貨";

/// Status literals the ERP import expects.
pub const STATUS_SHIPPED: &str = "已出貨";
pub const STATUS_RETURN_CLOSED: &str = "退貨結案";

/// Platform and brand literals stamped onto every shipment row.
pub const PLATFORM_MOMO: &str = "MOMO";
pub const BRAND_MUFE: &str = "MUFE";

use serde::{Deserialize, Serialize};

/// Kind of goods declared to customs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Merchandise,
    SampleMerchandise,
    ReturnedMerchandise,
    Documents,
    Gifts,
}

/// What happens to an undeliverable parcel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonDelivery {
    Return,
    Abandon,
}

/// Who pays duties: delivered duty unpaid or paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Incoterm {
    #[serde(rename = "DDU")]
    Ddu,
    #[serde(rename = "DDP")]
    Ddp,
}

/// Customs declaration for cross-border shipments
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customs {
    pub content_type: Option<ContentType>,
    pub invoice_number: Option<String>,
    pub non_delivery: Option<NonDelivery>,
    pub incoterm: Option<Incoterm>,
}

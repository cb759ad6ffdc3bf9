//! Shipments
//!
//! The largest resource: addresses, physical properties, customs and
//! contents as attributes, plus links to the shop, contract, service,
//! options, current status and files. The status history is not part of the
//! wire object; it is either set directly or produced on first read by a
//! registered callback.

use super::{Contract, File, Service, ServiceOption, ShipmentStatus, Shop};
use crate::resource::{impl_resource, ToMany, ToOne};
use crate::values::{Address, Customs, Money, PhysicalProperties, PickupLocation, ShipmentItem, WeightUnit};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Zero-argument producer of a shipment's status history
pub type StatusHistoryProducer = Rc<dyn Fn() -> Result<Vec<ShipmentStatus>>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ShipmentAttributes {
    barcode: Option<String>,
    tracking_code: Option<String>,
    tracking_url: Option<String>,
    channel: Option<String>,
    description: Option<String>,
    price: Money,
    physical_properties: Option<PhysicalProperties>,
    recipient_address: Option<Address>,
    sender_address: Option<Address>,
    return_address: Option<Address>,
    pickup_location: PickupLocation,
    customs: Option<Customs>,
    items: Vec<ShipmentItem>,
    register_at: Option<i64>,
    total_value: Money,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ShipmentRelationships {
    shop: ToOne<Shop>,
    shipment_status: ToOne<ShipmentStatus>,
    service_options: ToMany<ServiceOption>,
    files: ToMany<File>,
    service: ToOne<Service>,
    contract: ToOne<Contract>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ShipmentMeta {
    label_mime_type: Option<String>,
    service_code: Option<String>,
}

impl Default for ShipmentMeta {
    fn default() -> Self {
        Self {
            label_mime_type: Some(File::MIME_TYPE_PDF.to_string()),
            service_code: None,
        }
    }
}

/// Status history state: nothing, a pending producer, or the loaded list
#[derive(Clone, Default)]
enum StatusHistory {
    #[default]
    Unset,
    Deferred(StatusHistoryProducer),
    Loaded(Vec<ShipmentStatus>),
}

impl fmt::Debug for StatusHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusHistory::Unset => f.write_str("Unset"),
            StatusHistory::Deferred(_) => f.write_str("Deferred(..)"),
            StatusHistory::Loaded(statuses) => f.debug_tuple("Loaded").field(statuses).finish(),
        }
    }
}

impl PartialEq for StatusHistory {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StatusHistory::Unset, StatusHistory::Unset) => true,
            (StatusHistory::Deferred(a), StatusHistory::Deferred(b)) => Rc::ptr_eq(a, b),
            (StatusHistory::Loaded(a), StatusHistory::Loaded(b)) => a == b,
            _ => false,
        }
    }
}

/// A parcel to be (or already) registered with a carrier
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shipment {
    id: Option<String>,
    attributes: ShipmentAttributes,
    relationships: ShipmentRelationships,
    meta: ShipmentMeta,
    status_history: StatusHistory,
}

impl_resource!(Shipment => Shipments {
    attributes: ShipmentAttributes,
    relationships: ShipmentRelationships,
    meta: ShipmentMeta,
});

impl Shipment {
    // =========================================================================
    // Addresses
    // =========================================================================

    pub fn set_recipient_address(&mut self, address: Address) -> &mut Self {
        self.attributes.recipient_address = Some(address);
        self
    }

    pub fn recipient_address(&self) -> Option<&Address> {
        self.attributes.recipient_address.as_ref()
    }

    pub fn set_sender_address(&mut self, address: Address) -> &mut Self {
        self.attributes.sender_address = Some(address);
        self
    }

    pub fn sender_address(&self) -> Option<&Address> {
        self.attributes.sender_address.as_ref()
    }

    pub fn set_return_address(&mut self, address: Address) -> &mut Self {
        self.attributes.return_address = Some(address);
        self
    }

    pub fn return_address(&self) -> Option<&Address> {
        self.attributes.return_address.as_ref()
    }

    pub fn set_pickup_location_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.attributes.pickup_location.code = Some(code.into());
        self
    }

    pub fn pickup_location_code(&self) -> Option<&str> {
        self.attributes.pickup_location.code.as_deref()
    }

    pub fn set_pickup_location_address(&mut self, address: Address) -> &mut Self {
        self.attributes.pickup_location.address = Some(address);
        self
    }

    pub fn pickup_location_address(&self) -> Option<&Address> {
        self.attributes.pickup_location.address.as_ref()
    }

    // =========================================================================
    // Descriptive attributes
    // =========================================================================

    pub fn set_channel(&mut self, channel: impl Into<String>) -> &mut Self {
        self.attributes.channel = Some(channel.into());
        self
    }

    pub fn channel(&self) -> Option<&str> {
        self.attributes.channel.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.attributes.description = Some(description.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.attributes.description.as_deref()
    }

    /// Price amount in minor units
    pub fn set_price(&mut self, price: i64) -> &mut Self {
        self.attributes.price.amount = Some(price);
        self
    }

    pub fn price(&self) -> Option<i64> {
        self.attributes.price.amount
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.attributes.price.currency = Some(currency.into());
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.attributes.price.currency.as_deref()
    }

    pub fn set_barcode(&mut self, barcode: impl Into<String>) -> &mut Self {
        self.attributes.barcode = Some(barcode.into());
        self
    }

    pub fn barcode(&self) -> Option<&str> {
        self.attributes.barcode.as_deref()
    }

    pub fn set_tracking_code(&mut self, tracking_code: impl Into<String>) -> &mut Self {
        self.attributes.tracking_code = Some(tracking_code.into());
        self
    }

    pub fn tracking_code(&self) -> Option<&str> {
        self.attributes.tracking_code.as_deref()
    }

    pub fn set_tracking_url(&mut self, tracking_url: impl Into<String>) -> &mut Self {
        self.attributes.tracking_url = Some(tracking_url.into());
        self
    }

    pub fn tracking_url(&self) -> Option<&str> {
        self.attributes.tracking_url.as_deref()
    }

    /// Moment the shipment should be registered with the carrier
    pub fn set_register_at<Tz: TimeZone>(&mut self, at: DateTime<Tz>) -> &mut Self {
        self.attributes.register_at = Some(at.timestamp());
        self
    }

    pub fn register_at(&self) -> Option<DateTime<Utc>> {
        self.attributes
            .register_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn set_total_value_amount(&mut self, amount: i64) -> &mut Self {
        self.attributes.total_value.amount = Some(amount);
        self
    }

    pub fn total_value_amount(&self) -> Option<i64> {
        self.attributes.total_value.amount
    }

    pub fn set_total_value_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.attributes.total_value.currency = Some(currency.into());
        self
    }

    pub fn total_value_currency(&self) -> Option<&str> {
        self.attributes.total_value.currency.as_deref()
    }

    // =========================================================================
    // Physical properties
    // =========================================================================

    pub fn set_physical_properties(&mut self, properties: PhysicalProperties) -> &mut Self {
        self.attributes.physical_properties = Some(properties);
        self
    }

    pub fn physical_properties(&self) -> Option<&PhysicalProperties> {
        self.attributes.physical_properties.as_ref()
    }

    /// Owned physical properties, created empty on first use
    pub fn physical_properties_mut(&mut self) -> &mut PhysicalProperties {
        self.attributes
            .physical_properties
            .get_or_insert_with(PhysicalProperties::default)
    }

    #[deprecated(note = "use `physical_properties_mut().set_weight()` instead")]
    pub fn set_weight(&mut self, weight: f64, unit: WeightUnit) -> &mut Self {
        self.physical_properties_mut().set_weight(weight, unit);
        self
    }

    /// Weight in `unit`; creates empty physical properties when absent
    #[deprecated(note = "use `physical_properties_mut().weight()` instead")]
    pub fn weight(&mut self, unit: WeightUnit) -> Option<i64> {
        self.physical_properties_mut().weight(unit)
    }

    pub fn set_volumetric_weight(&mut self, volumetric_weight: i64) -> &mut Self {
        self.physical_properties_mut()
            .set_volumetric_weight(volumetric_weight);
        self
    }

    /// Volumetric weight; creates empty physical properties when absent
    pub fn volumetric_weight(&mut self) -> Option<i64> {
        self.physical_properties_mut().volumetric_weight()
    }

    // =========================================================================
    // Customs and contents
    // =========================================================================

    pub fn set_customs(&mut self, customs: Customs) -> &mut Self {
        self.attributes.customs = Some(customs);
        self
    }

    pub fn customs(&self) -> Option<&Customs> {
        self.attributes.customs.as_ref()
    }

    pub fn set_items(&mut self, items: Vec<ShipmentItem>) -> &mut Self {
        self.attributes.items.clear();
        for item in items {
            self.add_item(item);
        }
        self
    }

    pub fn add_item(&mut self, item: ShipmentItem) -> &mut Self {
        self.attributes.items.push(item);
        self
    }

    pub fn items(&self) -> &[ShipmentItem] {
        &self.attributes.items
    }

    // =========================================================================
    // Relationships
    // =========================================================================

    pub fn set_shop(&mut self, shop: Shop) -> &mut Self {
        self.relationships.shop.set(shop);
        self
    }

    pub fn shop(&self) -> Option<&Shop> {
        self.relationships.shop.get()
    }

    pub fn set_service_options(&mut self, options: Vec<ServiceOption>) -> &mut Self {
        self.relationships.service_options.clear();
        for option in options {
            self.add_service_option(option);
        }
        self
    }

    pub fn add_service_option(&mut self, option: ServiceOption) -> &mut Self {
        self.relationships.service_options.push(option);
        self
    }

    pub fn service_options(&self) -> &[ServiceOption] {
        self.relationships.service_options.as_slice()
    }

    pub fn set_files(&mut self, files: Vec<File>) -> &mut Self {
        self.relationships.files.clear();
        for file in files {
            self.add_file(file);
        }
        self
    }

    pub fn add_file(&mut self, file: File) -> &mut Self {
        self.relationships.files.push(file);
        self
    }

    pub fn files(&self) -> &[File] {
        self.relationships.files.as_slice()
    }

    /// Files with the given document type, in their original order
    pub fn files_of_type(&self, document_type: &str) -> Vec<&File> {
        self.relationships
            .files
            .iter()
            .filter(|file| file.document_type() == Some(document_type))
            .collect()
    }

    pub fn set_shipment_status(&mut self, status: ShipmentStatus) -> &mut Self {
        self.relationships.shipment_status.set(status);
        self
    }

    pub fn shipment_status(&self) -> Option<&ShipmentStatus> {
        self.relationships.shipment_status.get()
    }

    pub fn set_service(&mut self, service: Service) -> &mut Self {
        self.relationships.service.set(service);
        self
    }

    pub fn service(&self) -> Option<&Service> {
        self.relationships.service.get()
    }

    pub fn set_contract(&mut self, contract: Contract) -> &mut Self {
        self.relationships.contract.set(contract);
        self
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.relationships.contract.get()
    }

    // =========================================================================
    // Status history
    // =========================================================================

    pub fn set_status_history(&mut self, statuses: Vec<ShipmentStatus>) -> &mut Self {
        self.status_history = StatusHistory::Loaded(statuses);
        self
    }

    /// Register the producer used on the first read of the status history.
    ///
    /// Ignored once a history has been set or loaded.
    pub fn set_status_history_callback<F>(&mut self, producer: F) -> &mut Self
    where
        F: Fn() -> Result<Vec<ShipmentStatus>> + 'static,
    {
        if !matches!(self.status_history, StatusHistory::Loaded(_)) {
            self.status_history = StatusHistory::Deferred(Rc::new(producer));
        }
        self
    }

    /// Status history, invoking the registered producer on first read.
    ///
    /// A producer error is returned as is and leaves the producer in place.
    pub fn status_history(&mut self) -> Result<&[ShipmentStatus]> {
        if let StatusHistory::Deferred(producer) = &self.status_history {
            let producer = Rc::clone(producer);
            tracing::debug!("Loading status history for shipment {:?}", self.id);
            let statuses = producer().context("Failed to load shipment status history")?;
            self.status_history = StatusHistory::Loaded(statuses);
        }

        match &self.status_history {
            StatusHistory::Loaded(statuses) => Ok(statuses.as_slice()),
            _ => Ok(&[][..]),
        }
    }

    /// Whether the status history is available without invoking a producer
    pub fn is_status_history_loaded(&self) -> bool {
        matches!(self.status_history, StatusHistory::Loaded(_))
    }

    // =========================================================================
    // Meta
    // =========================================================================

    pub fn set_service_code(&mut self, service_code: impl Into<String>) -> &mut Self {
        self.meta.service_code = Some(service_code.into());
        self
    }

    pub fn service_code(&self) -> Option<&str> {
        self.meta.service_code.as_deref()
    }

    /// MIME type the label should be rendered in; `application/pdf` by default
    pub fn set_label_mime_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
        self.meta.label_mime_type = Some(mime_type.into());
        self
    }

    pub fn label_mime_type(&self) -> Option<&str> {
        self.meta.label_mime_type.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{FromObject, Resource, ResourceType};
    use crate::values::ContentType;
    use anyhow::anyhow;
    use serde_json::json;
    use std::cell::Cell;

    fn file(id: &str, document_type: &str) -> File {
        let mut file = File::default();
        file.set_id(id).set_document_type(document_type);
        file
    }

    fn status(code: &str) -> ShipmentStatus {
        let mut status = ShipmentStatus::default();
        status.set_carrier_status_code(code);
        status
    }

    #[test]
    fn test_id_and_type() {
        let mut shipment = Shipment::default();
        assert_eq!(shipment.id(), None);
        assert_eq!(shipment.set_id("shipment-id").id(), Some("shipment-id"));
        assert_eq!(shipment.resource_type(), ResourceType::Shipments);
    }

    #[test]
    fn test_pickup_location() {
        let mut shipment = Shipment::default();
        assert!(shipment.pickup_location_code().is_none());

        shipment
            .set_pickup_location_code("NO-1234")
            .set_pickup_location_address(Address::new("Storgata 1", "0155", "Oslo", "NO"));

        assert_eq!(shipment.pickup_location_code(), Some("NO-1234"));
        assert_eq!(
            shipment.pickup_location_address().and_then(|a| a.city.as_deref()),
            Some("Oslo")
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_weight_creates_physical_properties() {
        let mut shipment = Shipment::default();
        assert!(shipment.physical_properties().is_none());

        shipment.set_weight(2.0, WeightUnit::Kilogram);

        assert!(shipment.physical_properties().is_some());
        assert_eq!(shipment.weight(WeightUnit::Gram), Some(2000));
        assert_eq!(
            shipment.physical_properties().and_then(|p| p.weight(WeightUnit::Kilogram)),
            Some(2)
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_weight_getter_creates_physical_properties() {
        let mut shipment = Shipment::default();
        assert_eq!(shipment.weight(WeightUnit::Gram), None);
        assert_eq!(shipment.physical_properties(), Some(&PhysicalProperties::default()));

        let mut shipment = Shipment::default();
        assert_eq!(shipment.volumetric_weight(), None);
        assert!(shipment.physical_properties().is_some());

        // Empty properties compact away on the wire
        assert!(shipment.to_json().get("attributes").is_none());
    }

    #[test]
    fn test_volumetric_weight_delegates() {
        let mut shipment = Shipment::default();
        shipment.set_volumetric_weight(3500);

        assert_eq!(shipment.volumetric_weight(), Some(3500));
        assert_eq!(
            shipment.physical_properties().and_then(|p| p.volumetric_weight()),
            Some(3500)
        );
    }

    #[test]
    fn test_files_order_and_filter() {
        let mut shipment = Shipment::default();
        shipment.add_file(file("stale", "label"));
        shipment.set_files(vec![file("label-1", "label"), file("invoice-1", "invoice")]);
        shipment.add_file(file("label-2", "label"));

        let ids: Vec<_> = shipment.files().iter().filter_map(|f| f.id()).collect();
        assert_eq!(ids, vec!["label-1", "invoice-1", "label-2"]);

        let labels: Vec<_> = shipment
            .files_of_type(File::DOCUMENT_TYPE_LABEL)
            .into_iter()
            .filter_map(|f| f.id())
            .collect();
        assert_eq!(labels, vec!["label-1", "label-2"]);
        assert!(shipment.files_of_type(File::DOCUMENT_TYPE_PRINTCODE).is_empty());
        assert_eq!(shipment.files().len(), 3);
    }

    #[test]
    fn test_items_replace_then_append() {
        let mut shipment = Shipment::default();
        shipment
            .set_items(vec![ShipmentItem::new("Shoes", 1), ShipmentItem::new("Socks", 3)])
            .add_item(ShipmentItem::new("Laces", 2));

        let descriptions: Vec<_> = shipment
            .items()
            .iter()
            .filter_map(|i| i.description.as_deref())
            .collect();
        assert_eq!(descriptions, vec!["Shoes", "Socks", "Laces"]);
    }

    #[test]
    fn test_register_at() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut shipment = Shipment::default();
        assert!(shipment.register_at().is_none());
        assert_eq!(shipment.set_register_at(at).register_at(), Some(at));
    }

    #[test]
    fn test_status_history_set_directly() {
        let mut shipment = Shipment::default();
        assert!(shipment.status_history().unwrap().is_empty());

        shipment.set_status_history(vec![status("A"), status("B")]);
        let codes: Vec<_> = shipment
            .status_history()
            .unwrap()
            .iter()
            .filter_map(|s| s.carrier_status_code())
            .collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn test_status_history_callback_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut shipment = Shipment::default();
        shipment.set_status_history_callback(move || {
            counter.set(counter.get() + 1);
            Ok(vec![status("A"), status("B")])
        });
        assert!(!shipment.is_status_history_loaded());
        assert_eq!(calls.get(), 0);

        assert_eq!(shipment.status_history().unwrap().len(), 2);
        assert_eq!(shipment.status_history().unwrap().len(), 2);
        assert_eq!(calls.get(), 1);
        assert!(shipment.is_status_history_loaded());
    }

    #[test]
    fn test_status_history_set_wins_over_callback() {
        let mut shipment = Shipment::default();
        shipment.set_status_history(vec![status("SET")]);
        shipment.set_status_history_callback(|| Ok(vec![status("A"), status("B")]));

        let history = shipment.status_history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].carrier_status_code(), Some("SET"));
    }

    #[test]
    fn test_status_history_failure_is_not_cached() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let mut shipment = Shipment::default();
        shipment.set_status_history_callback(move || {
            counter.set(counter.get() + 1);
            if counter.get() == 1 {
                Err(anyhow!("tracking service unavailable"))
            } else {
                Ok(vec![status("A")])
            }
        });

        let err = shipment.status_history().unwrap_err();
        assert!(format!("{:#}", err).contains("tracking service unavailable"));
        assert!(!shipment.is_status_history_loaded());

        assert_eq!(shipment.status_history().unwrap().len(), 1);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_shipment_json() {
        let shipment = Shipment::default();
        assert_eq!(
            shipment.to_json(),
            json!({
                "type": "shipments",
                "relationships": {
                    "shop": {"data": null},
                    "shipment_status": {"data": null},
                    "service_options": {"data": []},
                    "files": {"data": []},
                    "service": {"data": null},
                    "contract": {"data": null},
                },
                "meta": {"label_mime_type": "application/pdf"},
            })
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_json_serialize() {
        let mut shop = Shop::default();
        shop.set_id("shop-id").set_name("Parcel Shop");

        let mut option = ServiceOption::default();
        option.set_id("option-id").set_name("Sign on delivery");

        let mut shipment = Shipment::default();
        shipment
            .set_id("shipment-id")
            .set_description("Order #8008135")
            .set_recipient_address(Address::new("Storgata 1", "0155", "Oslo", "NO"))
            .set_weight(500.0, WeightUnit::Gram)
            .set_customs(Customs {
                content_type: Some(ContentType::Gifts),
                ..Default::default()
            })
            .add_item(ShipmentItem::new("Scarf", 1))
            .set_total_value_amount(2500)
            .set_total_value_currency("NOK")
            .set_shop(shop)
            .add_service_option(option)
            .add_file(file("file-id", "label"))
            .set_service_code("postnord-parcel");

        assert_eq!(
            shipment.to_json(),
            json!({
                "id": "shipment-id",
                "type": "shipments",
                "attributes": {
                    "description": "Order #8008135",
                    "physical_properties": {"weight": 500},
                    "recipient_address": {
                        "street_1": "Storgata 1",
                        "postal_code": "0155",
                        "city": "Oslo",
                        "country_code": "NO",
                    },
                    "customs": {"content_type": "gifts"},
                    "items": [{"description": "Scarf", "quantity": 1}],
                    "total_value": {"amount": 2500, "currency": "NOK"},
                },
                "relationships": {
                    "shop": {"data": {"id": "shop-id", "type": "shops"}},
                    "shipment_status": {"data": null},
                    "service_options": {"data": [{"id": "option-id", "type": "service-options"}]},
                    "files": {"data": [{"id": "file-id", "type": "files"}]},
                    "service": {"data": null},
                    "contract": {"data": null},
                },
                "meta": {
                    "label_mime_type": "application/pdf",
                    "service_code": "postnord-parcel",
                },
            })
        );
    }

    #[test]
    fn test_hydrate_from_object() {
        let object = serde_json::from_value(json!({
            "id": "shipment-id",
            "type": "shipments",
            "attributes": {
                "barcode": "3SABCD0123456789",
                "price": {"amount": 995, "currency": "EUR"},
                "register_at": 1700000000,
            },
            "relationships": {
                "files": {"data": [
                    {"id": "label-id", "type": "files"},
                    {"id": "invoice-id", "type": "files"},
                ]},
                "contract": {"data": {"id": "contract-id", "type": "contracts"}},
            },
            "meta": {"label_mime_type": "image/png"},
        }))
        .unwrap();

        let shipment = Shipment::from_object(object).unwrap();
        assert_eq!(shipment.id(), Some("shipment-id"));
        assert_eq!(shipment.barcode(), Some("3SABCD0123456789"));
        assert_eq!(shipment.price(), Some(995));
        assert_eq!(shipment.currency(), Some("EUR"));
        assert_eq!(shipment.register_at().map(|at| at.timestamp()), Some(1700000000));
        assert_eq!(shipment.files().len(), 2);
        assert_eq!(shipment.contract().and_then(|c| c.id()), Some("contract-id"));
        assert!(shipment.shop().is_none());
        assert_eq!(shipment.label_mime_type(), Some("image/png"));
    }

    #[test]
    fn test_hydrate_rejects_other_type() {
        let object = serde_json::from_value(json!({"id": "x", "type": "shops"})).unwrap();
        assert!(Shipment::from_object(object).is_err());
    }
}

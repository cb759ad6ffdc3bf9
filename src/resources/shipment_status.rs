use super::{Shipment, Status};
use crate::resource::{impl_resource, ToOne};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ShipmentStatusAttributes {
    carrier_status_code: Option<String>,
    carrier_status_description: Option<String>,
    carrier_timestamp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ShipmentStatusRelationships {
    status: ToOne<Status>,
    shipment: ToOne<Shipment>,
}

/// One entry in a shipment's tracking history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShipmentStatus {
    id: Option<String>,
    attributes: ShipmentStatusAttributes,
    relationships: ShipmentStatusRelationships,
}

impl_resource!(ShipmentStatus => ShipmentStatuses {
    attributes: ShipmentStatusAttributes,
    relationships: ShipmentStatusRelationships,
});

impl ShipmentStatus {
    pub fn set_carrier_status_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.attributes.carrier_status_code = Some(code.into());
        self
    }

    pub fn carrier_status_code(&self) -> Option<&str> {
        self.attributes.carrier_status_code.as_deref()
    }

    pub fn set_carrier_status_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.attributes.carrier_status_description = Some(description.into());
        self
    }

    pub fn carrier_status_description(&self) -> Option<&str> {
        self.attributes.carrier_status_description.as_deref()
    }

    /// Moment the carrier registered the status; stored as a unix timestamp
    pub fn set_carrier_timestamp<Tz: TimeZone>(&mut self, at: DateTime<Tz>) -> &mut Self {
        self.attributes.carrier_timestamp = Some(at.timestamp());
        self
    }

    pub fn carrier_timestamp(&self) -> Option<DateTime<Utc>> {
        self.attributes
            .carrier_timestamp
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    pub fn set_status(&mut self, status: Status) -> &mut Self {
        self.relationships.status.set(status);
        self
    }

    pub fn status(&self) -> Option<&Status> {
        self.relationships.status.get()
    }

    pub fn set_shipment(&mut self, shipment: Shipment) -> &mut Self {
        self.relationships.shipment.set(shipment);
        self
    }

    pub fn shipment(&self) -> Option<&Shipment> {
        self.relationships.shipment.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;
    use serde_json::json;

    #[test]
    fn test_carrier_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let mut status = ShipmentStatus::default();
        status.set_carrier_timestamp(at);

        assert_eq!(status.carrier_timestamp(), Some(at));
        assert_eq!(status.to_json()["attributes"]["carrier_timestamp"], json!(at.timestamp()));
    }

    #[test]
    fn test_relationships_written_as_references() {
        let mut delivered = Status::default();
        delivered.set_id("status-id").set_code("shipment-delivered");

        let mut shipment = Shipment::default();
        shipment.set_id("shipment-id").set_barcode("3SABCD0123456789");

        let mut status = ShipmentStatus::default();
        status
            .set_id("shipment-status-id")
            .set_carrier_status_code("DLV")
            .set_status(delivered)
            .set_shipment(shipment);

        assert_eq!(
            status.to_json(),
            json!({
                "id": "shipment-status-id",
                "type": "shipment-statuses",
                "attributes": {"carrier_status_code": "DLV"},
                "relationships": {
                    "status": {"data": {"id": "status-id", "type": "statuses"}},
                    "shipment": {"data": {"id": "shipment-id", "type": "shipments"}},
                },
            })
        );
    }
}

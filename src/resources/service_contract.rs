use super::{Contract, Service, ServiceGroup, ServiceOptionPrice};
use crate::resource::{impl_resource, ToMany, ToOne};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
struct ServiceContractAttributes {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct ServiceContractRelationships {
    service: ToOne<Service>,
    contract: ToOne<Contract>,
    service_groups: ToMany<ServiceGroup>,
    service_option_prices: ToMany<ServiceOptionPrice>,
}

/// A service offered under a specific carrier contract, with its pricing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceContract {
    id: Option<String>,
    attributes: ServiceContractAttributes,
    relationships: ServiceContractRelationships,
}

impl_resource!(ServiceContract => ServiceContracts {
    attributes: ServiceContractAttributes,
    relationships: ServiceContractRelationships,
});

impl ServiceContract {
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

    pub fn set_service_groups(&mut self, groups: Vec<ServiceGroup>) -> &mut Self {
        self.relationships.service_groups.clear();
        for group in groups {
            self.add_service_group(group);
        }
        self
    }

    pub fn add_service_group(&mut self, group: ServiceGroup) -> &mut Self {
        self.relationships.service_groups.push(group);
        self
    }

    pub fn service_groups(&self) -> &[ServiceGroup] {
        self.relationships.service_groups.as_slice()
    }

    pub fn set_service_option_prices(&mut self, prices: Vec<ServiceOptionPrice>) -> &mut Self {
        self.relationships.service_option_prices.clear();
        for price in prices {
            self.add_service_option_price(price);
        }
        self
    }

    pub fn add_service_option_price(&mut self, price: ServiceOptionPrice) -> &mut Self {
        self.relationships.service_option_prices.push(price);
        self
    }

    pub fn service_option_prices(&self) -> &[ServiceOptionPrice] {
        self.relationships.service_option_prices.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Resource;
    use serde_json::json;

    fn group(id: &str) -> ServiceGroup {
        let mut group = ServiceGroup::default();
        group.set_id(id);
        group
    }

    #[test]
    fn test_service_groups_replace_then_append() {
        let mut contract = ServiceContract::default();
        contract.add_service_group(group("stale"));
        contract.set_service_groups(vec![group("a"), group("b"), group("c")]);
        contract.add_service_group(group("d"));

        let ids: Vec<_> = contract
            .service_groups()
            .iter()
            .filter_map(|g| g.id())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_json_serialize_empty() {
        let mut contract = ServiceContract::default();
        contract.set_id("service-contract-id");

        assert_eq!(
            contract.to_json(),
            json!({
                "id": "service-contract-id",
                "type": "service-contracts",
                "relationships": {
                    "service": {"data": null},
                    "contract": {"data": null},
                    "service_groups": {"data": []},
                    "service_option_prices": {"data": []},
                },
            })
        );
    }

    #[test]
    fn test_json_serialize_links() {
        let mut service = Service::default();
        service.set_id("service-id").set_name("Parcel to Norway");

        let mut price = ServiceOptionPrice::default();
        price.set_id("price-id").set_price(300).set_currency("NOK");

        let mut contract = ServiceContract::default();
        contract
            .set_service(service)
            .add_service_group(group("group-id"))
            .add_service_option_price(price);

        let json = contract.to_json();
        assert_eq!(
            json["relationships"]["service"],
            json!({"data": {"id": "service-id", "type": "services"}})
        );
        assert_eq!(
            json["relationships"]["service_groups"],
            json!({"data": [{"id": "group-id", "type": "service-groups"}]})
        );
        assert_eq!(
            json["relationships"]["service_option_prices"],
            json!({"data": [{"id": "price-id", "type": "service-option-prices"}]})
        );
    }
}

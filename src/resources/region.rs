use crate::resource::impl_resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
struct RegionAttributes {
    country_code: Option<String>,
    region_code: Option<String>,
    currency: Option<String>,
    name: Option<String>,
}

/// Country or sub-country area a service ships from or to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    id: Option<String>,
    attributes: RegionAttributes,
}

impl_resource!(Region => Regions {
    attributes: RegionAttributes,
});

impl Region {
    pub fn set_country_code(&mut self, country_code: impl Into<String>) -> &mut Self {
        self.attributes.country_code = Some(country_code.into());
        self
    }

    pub fn country_code(&self) -> Option<&str> {
        self.attributes.country_code.as_deref()
    }

    pub fn set_region_code(&mut self, region_code: impl Into<String>) -> &mut Self {
        self.attributes.region_code = Some(region_code.into());
        self
    }

    pub fn region_code(&self) -> Option<&str> {
        self.attributes.region_code.as_deref()
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) -> &mut Self {
        self.attributes.currency = Some(currency.into());
        self
    }

    pub fn currency(&self) -> Option<&str> {
        self.attributes.currency.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.attributes.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Resource, ResourceType};
    use serde_json::json;

    #[test]
    fn test_type() {
        let region = Region::default();
        assert_eq!(region.resource_type(), ResourceType::Regions);
    }

    #[test]
    fn test_setters() {
        let mut region = Region::default();
        region
            .set_country_code("GB")
            .set_region_code("ENG")
            .set_currency("GBP")
            .set_name("England");

        assert_eq!(region.country_code(), Some("GB"));
        assert_eq!(region.region_code(), Some("ENG"));
        assert_eq!(region.currency(), Some("GBP"));
        assert_eq!(region.name(), Some("England"));
    }

    #[test]
    fn test_json_serialize() {
        let mut region = Region::default();
        region.set_id("region-id").set_country_code("NL").set_currency("EUR");

        assert_eq!(
            region.to_json(),
            json!({
                "id": "region-id",
                "type": "regions",
                "attributes": {"country_code": "NL", "currency": "EUR"},
            })
        );
    }
}

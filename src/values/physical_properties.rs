use serde::{Deserialize, Serialize};
use std::fmt;

/// Units accepted by the weight accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    #[serde(rename = "grams")]
    Gram,
    #[serde(rename = "kilograms")]
    Kilogram,
    #[serde(rename = "ounces")]
    Ounce,
    #[serde(rename = "pounds")]
    Pound,
    #[serde(rename = "stones")]
    Stone,
}

impl WeightUnit {
    /// Number of grams in one unit
    pub const fn grams(self) -> f64 {
        match self {
            WeightUnit::Gram => 1.0,
            WeightUnit::Kilogram => 1000.0,
            WeightUnit::Ounce => 28.349523125,
            WeightUnit::Pound => 453.59237,
            WeightUnit::Stone => 6350.29318,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Gram => "grams",
            WeightUnit::Kilogram => "kilograms",
            WeightUnit::Ounce => "ounces",
            WeightUnit::Pound => "pounds",
            WeightUnit::Stone => "stones",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight and dimensions of a parcel
///
/// Weight is kept in whole grams on the wire. Dimensions are millimetres and
/// volume is cubic decimetres.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalProperties {
    weight: Option<i64>,
    length: Option<i64>,
    volume: Option<f64>,
    height: Option<i64>,
    width: Option<i64>,
    volumetric_weight: Option<i64>,
}

impl PhysicalProperties {
    /// Store `weight` given in `unit`, rounded to whole grams
    pub fn set_weight(&mut self, weight: f64, unit: WeightUnit) -> &mut Self {
        self.weight = Some((weight * unit.grams()).round() as i64);
        self
    }

    /// Weight converted to `unit`, rounded to a whole number
    pub fn weight(&self, unit: WeightUnit) -> Option<i64> {
        self.weight
            .map(|grams| (grams as f64 / unit.grams()).round() as i64)
    }

    pub fn set_length(&mut self, length: i64) -> &mut Self {
        self.length = Some(length);
        self
    }

    pub fn length(&self) -> Option<i64> {
        self.length
    }

    pub fn set_volume(&mut self, volume: f64) -> &mut Self {
        self.volume = Some(volume);
        self
    }

    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    pub fn set_height(&mut self, height: i64) -> &mut Self {
        self.height = Some(height);
        self
    }

    pub fn height(&self) -> Option<i64> {
        self.height
    }

    pub fn set_width(&mut self, width: i64) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn width(&self) -> Option<i64> {
        self.width
    }

    /// Volumetric weight in grams, as reported by the carrier
    pub fn set_volumetric_weight(&mut self, volumetric_weight: i64) -> &mut Self {
        self.volumetric_weight = Some(volumetric_weight);
        self
    }

    pub fn volumetric_weight(&self) -> Option<i64> {
        self.volumetric_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weight_defaults_to_none() {
        let properties = PhysicalProperties::default();
        assert_eq!(properties.weight(WeightUnit::Gram), None);
    }

    #[test]
    fn test_weight_conversions() {
        let mut properties = PhysicalProperties::default();

        properties.set_weight(1.0, WeightUnit::Kilogram);
        assert_eq!(properties.weight(WeightUnit::Gram), Some(1000));
        assert_eq!(properties.weight(WeightUnit::Kilogram), Some(1));

        properties.set_weight(1.0, WeightUnit::Pound);
        assert_eq!(properties.weight(WeightUnit::Gram), Some(454));
        assert_eq!(properties.weight(WeightUnit::Pound), Some(1));

        properties.set_weight(2.0, WeightUnit::Stone);
        assert_eq!(properties.weight(WeightUnit::Gram), Some(12701));
        assert_eq!(properties.weight(WeightUnit::Ounce), Some(448));
    }

    #[test]
    fn test_weight_is_written_in_grams() {
        let mut properties = PhysicalProperties::default();
        properties
            .set_weight(2.5, WeightUnit::Kilogram)
            .set_length(300)
            .set_volume(6.5);

        let value = serde_json::to_value(&properties).unwrap();
        assert_eq!(value["weight"], json!(2500));
        assert_eq!(value["length"], json!(300));
        assert_eq!(value["volume"], json!(6.5));
        assert!(value["width"].is_null());
    }

    #[test]
    fn test_unit_tags() {
        assert_eq!(
            serde_json::to_value(WeightUnit::Kilogram).unwrap(),
            json!("kilograms")
        );
        assert_eq!(WeightUnit::Stone.to_string(), "stones");
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateSignature {
    #[serde(rename = "Plate_Barcode")]
    pub barcode: String,
    #[serde(rename = "Measurement_Signature")]
    pub signature: String,
}

impl PlateSignature {
    pub fn new(barcode: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            signature: signature.into(),
        }
    }
}

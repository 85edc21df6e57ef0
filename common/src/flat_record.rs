//! Flat, tabular shape of one adverse-event report.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::search_criteria::CriteriaError;

/// One table row. Every column is always present; missing source values are `None`
/// or empty strings, never absent keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlatRecord {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "BrandName")]
    pub brand_name: Option<String>,
    #[serde(rename = "GenericName")]
    pub generic_name: Option<String>,
    #[serde(rename = "ProductCode")]
    pub product_code: Option<String>,
    #[serde(rename = "UdiDi")]
    pub udi_di: Option<String>,
    #[serde(rename = "DeviceNameFDA")]
    pub device_name_fda: Option<String>,
    #[serde(rename = "DeviceClass")]
    pub device_class: Option<String>,
    #[serde(rename = "RegulatoryNumber")]
    pub regulatory_number: String,
    #[serde(rename = "RegulatoryLink")]
    pub regulatory_link: Option<String>,
    #[serde(rename = "EventType")]
    pub event_type: Option<String>,
    #[serde(rename = "EventDate")]
    pub event_date: Option<String>,
    #[serde(rename = "ReceivedDate")]
    pub received_date: Option<String>,
    #[serde(rename = "FeiNumbers")]
    pub fei_numbers: String,
}

/// Rows in provider order (most recently received first).
pub type ResultSet = Vec<FlatRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlatRecordField {
    Manufacturer,
    BrandName,
    GenericName,
    ProductCode,
    UdiDi,
    DeviceNameFda,
    DeviceClass,
    RegulatoryNumber,
    RegulatoryLink,
    EventType,
    EventDate,
    ReceivedDate,
    FeiNumbers,
}

impl FlatRecordField {
    /// Column order used by the table view and both exporters.
    pub const ALL: [FlatRecordField; 13] = [
        FlatRecordField::Manufacturer,
        FlatRecordField::BrandName,
        FlatRecordField::GenericName,
        FlatRecordField::ProductCode,
        FlatRecordField::UdiDi,
        FlatRecordField::DeviceNameFda,
        FlatRecordField::DeviceClass,
        FlatRecordField::RegulatoryNumber,
        FlatRecordField::RegulatoryLink,
        FlatRecordField::EventType,
        FlatRecordField::EventDate,
        FlatRecordField::ReceivedDate,
        FlatRecordField::FeiNumbers,
    ];

    pub fn header_name(&self) -> &'static str {
        match self {
            FlatRecordField::Manufacturer => "Manufacturer",
            FlatRecordField::BrandName => "BrandName",
            FlatRecordField::GenericName => "GenericName",
            FlatRecordField::ProductCode => "ProductCode",
            FlatRecordField::UdiDi => "UdiDi",
            FlatRecordField::DeviceNameFda => "DeviceNameFDA",
            FlatRecordField::DeviceClass => "DeviceClass",
            FlatRecordField::RegulatoryNumber => "RegulatoryNumber",
            FlatRecordField::RegulatoryLink => "RegulatoryLink",
            FlatRecordField::EventType => "EventType",
            FlatRecordField::EventDate => "EventDate",
            FlatRecordField::ReceivedDate => "ReceivedDate",
            FlatRecordField::FeiNumbers => "FeiNumbers",
        }
    }
}

impl Display for FlatRecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header_name())
    }
}

impl FromStr for FlatRecordField {
    type Err = CriteriaError;

    // accepts header names as well as snake_case / kebab-case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        FlatRecordField::ALL
            .into_iter()
            .find(|field| field.header_name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| CriteriaError::InvalidColumn(s.to_string()))
    }
}

impl FlatRecord {
    /// Cell value for a column; `None` means null.
    pub fn value(&self, field: FlatRecordField) -> Option<&str> {
        match field {
            FlatRecordField::Manufacturer => self.manufacturer.as_deref(),
            FlatRecordField::BrandName => self.brand_name.as_deref(),
            FlatRecordField::GenericName => self.generic_name.as_deref(),
            FlatRecordField::ProductCode => self.product_code.as_deref(),
            FlatRecordField::UdiDi => self.udi_di.as_deref(),
            FlatRecordField::DeviceNameFda => self.device_name_fda.as_deref(),
            FlatRecordField::DeviceClass => self.device_class.as_deref(),
            FlatRecordField::RegulatoryNumber => Some(self.regulatory_number.as_str()),
            FlatRecordField::RegulatoryLink => self.regulatory_link.as_deref(),
            FlatRecordField::EventType => self.event_type.as_deref(),
            FlatRecordField::EventDate => self.event_date.as_deref(),
            FlatRecordField::ReceivedDate => self.received_date.as_deref(),
            FlatRecordField::FeiNumbers => Some(self.fei_numbers.as_str()),
        }
    }

    pub fn display_value(&self, field: FlatRecordField) -> &str {
        self.value(field).unwrap_or("")
    }
}

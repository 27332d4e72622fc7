//! Raw listing attributes and derived feature vectors.
//!
//! Maps caller-supplied housing attributes into the exact named feature
//! set the fitted model was trained on: the raw columns, two engineered
//! ratios, and one-hot location encodings. Derivation is pure and total;
//! degenerate inputs are absorbed by explicit fallbacks, never rejected.

use serde::{Deserialize, Serialize};

/// Reference year used to compute `HouseAge` unless the caller overrides it.
pub const DEFAULT_REFERENCE_YEAR: f64 = 2026.0;

/// Derived-feature names, in training column order.
///
/// This is the model's complete input set minus the log-target feature.
pub const FEATURE_NAMES: [&str; 11] = [
    "Size_sqft",
    "Bedrooms",
    "Bathrooms",
    "YearBuilt",
    "Location_City",
    "Location_Rural",
    "Location_Suburb",
    "HouseAge",
    "Rooms_per_1000sqft",
    "Size_per_Bedroom",
    "Is_City",
];

/// Raw housing attributes as supplied by the caller.
///
/// Field types are assumed checked upstream; values themselves are not.
/// Zero bedrooms, zero size, or a future build year are all handled by
/// the derivation fallbacks in [`FeatureVector::derive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    pub size_sqft: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub year_built: f64,
    pub location: String,
}

/// Listing location category.
///
/// Parsed leniently from free-form text: surrounding whitespace is
/// trimmed and the comparison is case-insensitive. Anything outside the
/// known set maps to [`Location::Other`], which zeroes all three
/// indicator features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    City,
    Rural,
    Suburb,
    #[default]
    Other,
}

impl Location {
    /// Parse a location string, normalizing case and whitespace.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "city" => Location::City,
            "rural" => Location::Rural,
            "suburb" => Location::Suburb,
            _ => Location::Other,
        }
    }
}

/// Derived feature vector: every model input except the log target.
///
/// Fields serialize under the exact training column names so the vector
/// can be echoed verbatim in response payloads for caller audit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    #[serde(rename = "Size_sqft")]
    pub size_sqft: f64,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: f64,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: f64,
    #[serde(rename = "YearBuilt")]
    pub year_built: f64,
    #[serde(rename = "Location_City")]
    pub location_city: f64,
    #[serde(rename = "Location_Rural")]
    pub location_rural: f64,
    #[serde(rename = "Location_Suburb")]
    pub location_suburb: f64,
    #[serde(rename = "HouseAge")]
    pub house_age: f64,
    #[serde(rename = "Rooms_per_1000sqft")]
    pub rooms_per_1000sqft: f64,
    #[serde(rename = "Size_per_Bedroom")]
    pub size_per_bedroom: f64,
    #[serde(rename = "Is_City")]
    pub is_city: f64,
}

impl FeatureVector {
    /// Derive the full feature vector from raw listing attributes.
    ///
    /// Edge policies:
    /// - `HouseAge` clamps to zero for build years past `reference_year`.
    /// - `Size_per_Bedroom` falls back to the whole size when
    ///   `bedrooms == 0` (treats the listing as one nominal unit).
    /// - `Rooms_per_1000sqft` is `0.0` when `size_sqft == 0`.
    /// - An unrecognized location yields all-zero indicators.
    pub fn derive(listing: &RawListing, reference_year: f64) -> Self {
        let house_age = (reference_year - listing.year_built).max(0.0);

        let size_per_bedroom = if listing.bedrooms > 0.0 {
            listing.size_sqft / listing.bedrooms
        } else {
            listing.size_sqft
        };

        let rooms_per_1000sqft = if listing.size_sqft > 0.0 {
            (listing.bedrooms + listing.bathrooms) / (listing.size_sqft / 1000.0)
        } else {
            0.0
        };

        let location = Location::parse(&listing.location);
        let location_city = if location == Location::City { 1.0 } else { 0.0 };
        let location_rural = if location == Location::Rural { 1.0 } else { 0.0 };
        let location_suburb = if location == Location::Suburb { 1.0 } else { 0.0 };

        Self {
            size_sqft: listing.size_sqft,
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            year_built: listing.year_built,
            location_city,
            location_rural,
            location_suburb,
            house_age,
            rooms_per_1000sqft,
            size_per_bedroom,
            // The trained model carries the city indicator twice, as its
            // own column.
            is_city: location_city,
        }
    }

    /// Look up a derived value by training column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "Size_sqft" => Some(self.size_sqft),
            "Bedrooms" => Some(self.bedrooms),
            "Bathrooms" => Some(self.bathrooms),
            "YearBuilt" => Some(self.year_built),
            "Location_City" => Some(self.location_city),
            "Location_Rural" => Some(self.location_rural),
            "Location_Suburb" => Some(self.location_suburb),
            "HouseAge" => Some(self.house_age),
            "Rooms_per_1000sqft" => Some(self.rooms_per_1000sqft),
            "Size_per_Bedroom" => Some(self.size_per_bedroom),
            "Is_City" => Some(self.is_city),
            _ => None,
        }
    }
}

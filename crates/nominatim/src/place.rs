use serde::{Deserialize, Serialize};

/// Subset of a Nominatim `jsonv2` reverse answer used for place labels.
///
/// The "unable to geocode" answer arrives as a success response with an
/// `error` body; it deserializes to an empty `display_name` here and is
/// treated as "no place" by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Full human-readable name, most specific part first.
    #[serde(default)]
    pub display_name: String,
    /// Name of the matched feature itself, when it has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Place {
    /// Shortest usable label for a button: the feature name, then the
    /// road, then the locality, then the leading `display_name` segment.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        if let Some(name) = self.name.as_deref().filter(|name| !name.is_empty()) {
            return Some(name.to_owned());
        }

        if let Some(address) = &self.address {
            let road = address.road.as_deref().filter(|road| !road.is_empty());
            if let Some(part) = road.or_else(|| address.locality()) {
                return Some(part.to_owned());
            }
        }

        let head = self.display_name.split(',').next().map_or("", str::trim);
        (!head.is_empty()).then(|| head.to_owned())
    }
}

/// Address fragments of a reverse answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub road: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

impl Address {
    /// Finest populated locality fragment.
    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        [&self.suburb, &self.city, &self.town, &self.village]
            .into_iter()
            .find_map(|part| part.as_deref().filter(|value| !value.is_empty()))
    }
}

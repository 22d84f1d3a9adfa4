use crate::areas::{AreaDefinition, get_all_areas};
use crate::error::{AreaError, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaStatistics {
    pub total_areas: usize,
    pub total_prefectures: usize,
    pub area_prefecture_counts: PrefectureCounts,
    /// NaN when there are no areas.
    pub average_prefectures_per_area: f64,
}

/// Member count per area display name, kept in table order.
///
/// Serializes as a JSON object whose keys follow the area declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefectureCounts(Vec<(String, usize)>);

impl PrefectureCounts {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(area, _)| area == name)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(area, count)| (area.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, usize)> for PrefectureCounts {
    /// A repeated name overwrites the earlier count in place.
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for (name, count) in iter {
            match entries.iter_mut().find(|(area, _)| *area == name) {
                Some(entry) => entry.1 = count,
                None => entries.push((name, count)),
            }
        }
        PrefectureCounts(entries)
    }
}

impl Serialize for PrefectureCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(area, count)| (area, count)))
    }
}

impl<'de> Deserialize<'de> for PrefectureCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = PrefectureCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of area names to prefecture counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, usize>()? {
                    entries.push(entry);
                }
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

impl AreaStatistics {
    /// The mean member count, or an error when it could not be computed.
    pub fn checked_average(&self) -> Result<f64> {
        if self.average_prefectures_per_area.is_finite() {
            Ok(self.average_prefectures_per_area)
        } else {
            Err(AreaError::Statistics(format!(
                "average over {} areas is not a number",
                self.total_areas
            )))
        }
    }
}

/// Statistics for the built-in table.
pub fn get_area_statistics() -> AreaStatistics {
    compute_statistics(get_all_areas())
}

pub fn compute_statistics(areas: &[AreaDefinition]) -> AreaStatistics {
    let area_prefecture_counts = areas
        .iter()
        .map(|area| (area.name.clone(), area.prefectures.len()))
        .collect();

    let total_prefectures: usize = areas.iter().map(|area| area.prefectures.len()).sum();

    AreaStatistics {
        total_areas: areas.len(),
        total_prefectures,
        area_prefecture_counts,
        average_prefectures_per_area: total_prefectures as f64 / areas.len() as f64,
    }
}

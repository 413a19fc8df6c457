use crate::error::{PointsError, Result};
use crate::model::Team;
use crate::registry::Registry;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Borrowed view of a registry that serializes as `{name: points}` in registry order.
struct StoredTeamsRef<'a>(&'a Registry);

impl Serialize for StoredTeamsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for team in self.0.iter() {
            map.serialize_entry(&team.name, &team.points)?;
        }
        map.end()
    }
}

/// Raw `{name: value}` entries in file order.
///
/// Values are kept untyped so a bad point value can be reported against its team.
struct StoredTeams(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for StoredTeams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TeamsVisitor;

        impl<'de> Visitor<'de> for TeamsVisitor {
            type Value = StoredTeams;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping team names to points")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    entries.push((name, value));
                }
                Ok(StoredTeams(entries))
            }
        }

        deserializer.deserialize_map(TeamsVisitor)
    }
}

pub fn encode(registry: &Registry) -> Result<String> {
    Ok(serde_json::to_string_pretty(&StoredTeamsRef(registry))?)
}

/// Parses stored teams into a fresh registry.
///
/// Point values must be non-negative integers; anything else is an
/// `InvalidPointValue` naming the offending team.
pub fn decode(content: &str) -> Result<Registry> {
    let StoredTeams(entries) = serde_json::from_str(content)?;

    let teams = entries
        .into_iter()
        .map(|(name, value)| match value.as_u64() {
            Some(points) => Ok(Team::with_points(name, points)),
            None => Err(PointsError::InvalidPointValue(format!(
                "team '{}' has {} stored, expected a non-negative integer",
                name, value
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    Registry::from_teams(teams)
}

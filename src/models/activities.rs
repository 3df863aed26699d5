// Activity records and the ordered registry that owns them.
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Activity name -> record, kept in insertion order.
///
/// Serializes as a JSON object whose keys follow the seed order, which is the
/// shape served by `GET /activities` and accepted by `SEED_FILE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityRegistry {
    entries: Vec<(String, Activity)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateActivity(pub String);

impl fmt::Display for DuplicateActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate activity name: {}", self.0)
    }
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        activity: Activity,
    ) -> Result<(), DuplicateActivity> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(DuplicateActivity(name));
        }
        self.entries.push((name, activity));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = ActivityRegistry;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of activity name to activity")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut registry = ActivityRegistry::new();
        while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
            registry
                .insert(name, activity)
                .map_err(serde::de::Error::custom)?;
        }
        Ok(registry)
    }
}

impl<'de> Deserialize<'de> for ActivityRegistry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}

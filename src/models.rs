use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus roster size. Goes negative if the server overbooks.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Activities keyed by name, kept in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activities(Vec<(String, Activity)>);

impl Activities {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| name.clone()).collect()
    }
}

impl FromIterator<(String, Activity)> for Activities {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// A HashMap would lose the response's key order, so walk the map by hand.
impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(Activities(entries))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

// Startup data for the registry: built-in list or a JSON file.
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Activity, ActivityRegistry};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const DEFAULT_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Train and play matches against other schools",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        max_participants: 22,
        participants: &["lucas@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice drills and compete in the regional league",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu", "ava@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing and sculpture",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["isabella@mergington.edu", "ethan@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct and stage school theater productions",
        schedule: "Thursdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["amelia@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Build argumentation skills and compete in debate tournaments",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["charlotte@mergington.edu", "liam@mergington.edu"],
    },
    SeedActivity {
        name: "Science Olympiad",
        description: "Prepare for science competitions with hands-on experiments",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 14,
        participants: &["harper@mergington.edu", "benjamin@mergington.edu"],
    },
];

pub fn default_registry() -> ActivityRegistry {
    let mut registry = ActivityRegistry::new();
    for seed in DEFAULT_ACTIVITIES {
        let activity = Activity {
            description: seed.description.to_string(),
            schedule: seed.schedule.to_string(),
            max_participants: seed.max_participants,
            participants: seed.participants.iter().map(|p| p.to_string()).collect(),
        };
        let inserted = registry.insert(seed.name, activity);
        debug_assert!(inserted.is_ok(), "{:?}", inserted);
    }
    registry
}

pub fn load_seed_file(path: &Path) -> Result<ActivityRegistry> {
    let raw = fs::read_to_string(path).map_err(|source| Error::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = parse_seed(&raw)?;
    info!(
        path = %path.display(),
        activities = registry.len(),
        "Loaded activity seed file"
    );
    Ok(registry)
}

pub fn parse_seed(raw: &str) -> Result<ActivityRegistry> {
    let registry: ActivityRegistry = serde_json::from_str(raw)?;
    validate(&registry)?;
    Ok(registry)
}

fn validate(registry: &ActivityRegistry) -> Result<()> {
    if registry.is_empty() {
        return Err(Error::seed_invalid("no activities defined"));
    }
    for (name, activity) in registry.iter() {
        if name.trim().is_empty() {
            return Err(Error::seed_invalid("activity name must not be empty"));
        }
        if activity.max_participants == 0 {
            return Err(Error::seed_invalid(format!(
                "{}: max_participants must be positive",
                name
            )));
        }
        for (i, email) in activity.participants.iter().enumerate() {
            if activity.participants[..i].contains(email) {
                return Err(Error::seed_invalid(format!(
                    "{}: duplicate participant {}",
                    name, email
                )));
            }
        }
    }
    Ok(())
}

use indexmap::IndexMap;

use crate::models::Activity;

use super::Roster;

/// Build the roster seeded with the school's activity catalog.
///
/// Construction-time data: the catalog itself never changes at runtime,
/// only the participant lists do. Seeding through an explicit constructor
/// keeps initialization order out of module-load side effects and lets
/// tests build the same state the server starts with.
pub fn seed() -> Roster {
    let mut activities = IndexMap::new();

    let mut add = |name: &str, description: &str, schedule: &str, max: u32, enrolled: &[&str]| {
        activities.insert(
            name.to_string(),
            Activity {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: max,
                participants: enrolled.iter().map(|p| p.to_string()).collect(),
            },
        );
    };

    add(
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    add(
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    add(
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );
    add(
        "Soccer Team",
        "Join the school soccer team and compete in local matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    );
    add(
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    );
    add(
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    );
    add(
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    );
    add(
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    );
    add(
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    );

    Roster::new(activities)
}

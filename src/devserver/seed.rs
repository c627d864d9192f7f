//! Deterministic sample data: two superhero teams, their members, a few
//! activities per member, a leaderboard ranked by burned calories, and six
//! workout suggestions.

use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::resources::ResourceKind;

const MARVEL: [(&str, &str); 6] = [
    ("Iron Man", "tony.stark@avengers.com"),
    ("Captain America", "steve.rogers@avengers.com"),
    ("Thor", "thor.odinson@avengers.com"),
    ("Black Widow", "natasha.romanoff@avengers.com"),
    ("Hulk", "bruce.banner@avengers.com"),
    ("Spider-Man", "peter.parker@avengers.com"),
];

const DC: [(&str, &str); 6] = [
    ("Superman", "clark.kent@justiceleague.com"),
    ("Batman", "bruce.wayne@justiceleague.com"),
    ("Wonder Woman", "diana.prince@justiceleague.com"),
    ("The Flash", "barry.allen@justiceleague.com"),
    ("Aquaman", "arthur.curry@justiceleague.com"),
    ("Green Lantern", "hal.jordan@justiceleague.com"),
];

const ACTIVITY_TYPES: [&str; 6] = [
    "Running",
    "Cycling",
    "Swimming",
    "Weightlifting",
    "Yoga",
    "Boxing",
];

/// (title, description, exercise type, difficulty, minutes, calories)
const WORKOUTS: [(&str, &str, &str, &str, i64, i64); 6] = [
    (
        "Superhero Circuit Training",
        "High-intensity circuit training to build strength and endurance like a true superhero",
        "Circuit Training",
        "Hard",
        45,
        450,
    ),
    (
        "Speed Force Cardio",
        "Sprint intervals and agility drills to enhance speed and reflexes",
        "Cardio",
        "Medium",
        30,
        350,
    ),
    (
        "Warrior Strength Training",
        "Heavy weightlifting focused on building raw power",
        "Weightlifting",
        "Hard",
        60,
        400,
    ),
    (
        "Zen Mind Yoga Flow",
        "Relaxing yoga session for flexibility and mental clarity",
        "Yoga",
        "Easy",
        45,
        200,
    ),
    (
        "Aquatic Power Swim",
        "Intense swimming workout for full-body conditioning",
        "Swimming",
        "Medium",
        40,
        380,
    ),
    (
        "Combat Skills Boxing",
        "Boxing and martial arts training for combat readiness",
        "Boxing",
        "Hard",
        50,
        500,
    ),
];

/// 24 hex digit identifier in the style of a document store object id
fn object_id(collection: u8, n: usize) -> String {
    format!("65f0a1b2{:02x}{:014x}", collection, n)
}

fn timestamp(days_ago: i64, hour: u32) -> String {
    let base = Utc
        .with_ymd_and_hms(2024, 3, 15, hour, 0, 0)
        .single()
        .unwrap_or_default();
    (base - Duration::days(days_ago)).to_rfc3339()
}

/// Build every seeded collection
pub fn collections() -> HashMap<ResourceKind, Vec<Value>> {
    let teams = [
        (
            object_id(1, 1),
            "Team Marvel",
            "Earth's Mightiest Heroes training together",
        ),
        (
            object_id(1, 2),
            "Team DC",
            "Justice League united in fitness",
        ),
    ];

    let team_records: Vec<Value> = teams
        .iter()
        .enumerate()
        .map(|(i, (id, name, description))| {
            json!({
                "id": id,
                "name": name,
                "description": description,
                "created_at": timestamp(30 - i as i64, 9),
            })
        })
        .collect();

    // (id, team id)
    let mut members = Vec::new();
    let mut user_records = Vec::new();
    let roster = MARVEL
        .iter()
        .map(|hero| (hero, &teams[0].0))
        .chain(DC.iter().map(|hero| (hero, &teams[1].0)));

    for (i, ((name, email), team_id)) in roster.enumerate() {
        let id = object_id(2, i + 1);
        user_records.push(json!({
            "id": id,
            "name": name,
            "email": email,
            "team_id": team_id,
            "created_at": timestamp(28 - i as i64, 10),
        }));
        members.push((id, team_id.clone()));
    }

    let mut activity_records = Vec::new();
    let mut points = Vec::with_capacity(members.len());
    for (i, (user_id, team_id)) in members.iter().enumerate() {
        let mut total = 0;
        for j in 0..(3 + i % 3) {
            let activity_type = ACTIVITY_TYPES[(i * 5 + j * 7) % ACTIVITY_TYPES.len()];
            let duration = 20 + ((i * 13 + j * 17) % 71) as i64;
            let calories = duration * (5 + ((i + j) % 8) as i64);
            let distance = matches!(activity_type, "Running" | "Cycling" | "Swimming")
                .then(|| 1.0 + ((i * 31 + j * 11) % 1400) as f64 / 100.0);

            activity_records.push(json!({
                "id": object_id(3, activity_records.len() + 1),
                "user_id": user_id,
                "activity_type": activity_type,
                "duration": duration,
                "distance": distance,
                "calories": calories,
                "date": timestamp((i + j * 2) as i64, 7 + j as u32),
            }));
            total += calories;
        }
        points.push((user_id, team_id, total));
    }

    // Highest total first; ties keep roster order
    points.sort_by(|a, b| b.2.cmp(&a.2));
    let leaderboard_records: Vec<Value> = points
        .iter()
        .enumerate()
        .map(|(i, (user_id, team_id, total))| {
            json!({
                "id": object_id(4, i + 1),
                "user_id": user_id,
                "team_id": team_id,
                "total_points": total,
                "rank": i + 1,
                "updated_at": timestamp(0, 18),
            })
        })
        .collect();

    let workout_records: Vec<Value> = WORKOUTS
        .iter()
        .enumerate()
        .map(
            |(i, (title, description, exercise_type, difficulty, duration, calories))| {
                json!({
                    "id": object_id(5, i + 1),
                    "title": title,
                    "description": description,
                    "exercise_type": exercise_type,
                    "difficulty": difficulty,
                    "duration": duration,
                    "calories_estimate": calories,
                })
            },
        )
        .collect();

    HashMap::from([
        (ResourceKind::Teams, team_records),
        (ResourceKind::Users, user_records),
        (ResourceKind::Activities, activity_records),
        (ResourceKind::Leaderboard, leaderboard_records),
        (ResourceKind::Workouts, workout_records),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Activity, LeaderboardEntry, Team, User, Workout};

    #[test]
    fn test_seed_counts() {
        let seed = collections();
        assert_eq!(seed[&ResourceKind::Teams].len(), 2);
        assert_eq!(seed[&ResourceKind::Users].len(), 12);
        assert_eq!(seed[&ResourceKind::Leaderboard].len(), 12);
        assert_eq!(seed[&ResourceKind::Workouts].len(), 6);
        // 3 to 5 activities per user
        let activities = seed[&ResourceKind::Activities].len();
        assert!((36..=60).contains(&activities));
    }

    #[test]
    fn test_seed_decodes_into_records() {
        let seed = collections();
        let decode = |kind: ResourceKind| Value::Array(seed[&kind].clone());

        let _: Vec<Team> = serde_json::from_value(decode(ResourceKind::Teams)).unwrap();
        let _: Vec<User> = serde_json::from_value(decode(ResourceKind::Users)).unwrap();
        let _: Vec<Activity> = serde_json::from_value(decode(ResourceKind::Activities)).unwrap();
        let _: Vec<Workout> = serde_json::from_value(decode(ResourceKind::Workouts)).unwrap();
        let board: Vec<LeaderboardEntry> =
            serde_json::from_value(decode(ResourceKind::Leaderboard)).unwrap();

        for pair in board.windows(2) {
            assert!(pair[0].total_points >= pair[1].total_points);
        }
        assert_eq!(board[0].rank, Some(1));
    }

    #[test]
    fn test_seed_is_deterministic() {
        assert_eq!(collections(), collections());
    }

    #[test]
    fn test_object_ids_are_24_hex_digits() {
        let id = object_id(2, 12);
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

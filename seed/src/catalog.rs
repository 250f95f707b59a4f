//! Built-in catalog loaded into empty collections.

use storage::{
    bson::{doc, Document},
    ID_FIELD,
};

/// A teacher account before its credential is hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherSeed {
    pub username: &'static str,
    pub display_name: &'static str,
    pub password: &'static str,
    pub role: &'static str,
}

impl TeacherSeed {
    /// Renders the stored document, with `password_hash` in place of the plaintext.
    pub fn into_document(self, password_hash: String) -> Document {
        doc! {
            ID_FIELD: self.username,
            "username": self.username,
            "display_name": self.display_name,
            "password": password_hash,
            "role": self.role,
        }
    }
}

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    days: &[&str],
    (start_time, end_time): (&str, &str),
    max_participants: i32,
    participants: &[&str],
) -> Document {
    doc! {
        ID_FIELD: name,
        "description": description,
        "schedule": schedule,
        "schedule_details": {
            "days": days.to_vec(),
            "start_time": start_time,
            "end_time": end_time,
        },
        "max_participants": max_participants,
        "participants": participants.to_vec(),
    }
}

/// Every activity offered on a fresh install, keyed by name.
pub fn initial_activities() -> Vec<Document> {
    vec![
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Mondays and Fridays, 3:15 PM - 4:45 PM",
            &["Monday", "Friday"],
            ("15:15", "16:45"),
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 7:00 AM - 8:00 AM",
            &["Tuesday", "Thursday"],
            ("07:00", "08:00"),
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Morning Fitness",
            "Early morning physical training and exercises",
            "Mondays, Wednesdays, Fridays, 6:30 AM - 7:45 AM",
            &["Monday", "Wednesday", "Friday"],
            ("06:30", "07:45"),
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 3:30 PM - 5:30 PM",
            &["Tuesday", "Thursday"],
            ("15:30", "17:30"),
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and compete in basketball tournaments",
            "Wednesdays and Fridays, 3:15 PM - 5:00 PM",
            &["Wednesday", "Friday"],
            ("15:15", "17:00"),
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore various art techniques and create masterpieces",
            "Thursdays, 3:15 PM - 5:00 PM",
            &["Thursday"],
            ("15:15", "17:00"),
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 3:30 PM - 5:30 PM",
            &["Monday", "Wednesday"],
            ("15:30", "17:30"),
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 7:15 AM - 8:00 AM",
            &["Tuesday"],
            ("07:15", "08:00"),
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 3:30 PM - 5:30 PM",
            &["Friday"],
            ("15:30", "17:30"),
            12,
            &["charlotte@mergington.edu", "amelia@mergington.edu"],
        ),
        activity(
            "Weekend Robotics Workshop",
            "Build and program robots in our state-of-the-art workshop",
            "Saturdays, 10:00 AM - 2:00 PM",
            &["Saturday"],
            ("10:00", "14:00"),
            15,
            &["ethan@mergington.edu", "oliver@mergington.edu"],
        ),
        activity(
            "Science Olympiad",
            "Weekend science competition preparation for regional and state events",
            "Saturdays, 1:00 PM - 4:00 PM",
            &["Saturday"],
            ("13:00", "16:00"),
            18,
            &["isabella@mergington.edu", "lucas@mergington.edu"],
        ),
        activity(
            "Sunday Chess Tournament",
            "Weekly tournament for serious chess players with rankings",
            "Sundays, 2:00 PM - 5:00 PM",
            &["Sunday"],
            ("14:00", "17:00"),
            16,
            &["william@mergington.edu", "jacob@mergington.edu"],
        ),
        activity(
            "Manga Maniacs",
            "Explore the fantastic stories of the most interesting characters from Japanese Manga (graphic novels).",
            "Tuesdays, 7:00 PM - 8:30 PM",
            &["Tuesday"],
            ("19:00", "20:30"),
            15,
            &[],
        ),
    ]
}

/// Staff accounts created on a fresh install.
pub fn initial_teachers() -> Vec<TeacherSeed> {
    vec![
        TeacherSeed {
            username: "mrodriguez",
            display_name: "Ms. Rodriguez",
            password: "art123",
            role: "teacher",
        },
        TeacherSeed {
            username: "mchen",
            display_name: "Mr. Chen",
            password: "chess456",
            role: "teacher",
        },
        TeacherSeed {
            username: "principal",
            display_name: "Principal Martinez",
            password: "admin789",
            role: "admin",
        },
    ]
}

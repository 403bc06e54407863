//! Canonical default datasets.
//!
//! Every service seeds its store and mirror from one of these
//! descriptors. Date-bearing rows are computed relative to the current
//! day so a fresh install always shows a plausible week; everything else
//! is fixed content.

use chrono::{Duration, Local, NaiveDate};
use examdesk_persist::SeedDescriptor;
use serde_json::json;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn day(offset: i64) -> String {
    (today() + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

/// Four todos, exactly one already completed.
pub fn todo_rows() -> SeedDescriptor {
    SeedDescriptor::new(vec![
        json!({
            "title": "Finish the calculus problem set",
            "completed": false,
            "priority": "high",
            "due_date": day(0),
            "category": "study",
        }),
        json!({
            "title": "Review English vocabulary",
            "completed": true,
            "priority": "medium",
            "due_date": day(-1),
            "category": "study",
        }),
        json!({
            "title": "Prepare the project report",
            "completed": false,
            "priority": "high",
            "due_date": day(1),
            "category": "work",
        }),
        json!({
            "title": "Read the database lecture notes",
            "completed": false,
            "priority": "low",
            "due_date": day(2),
            "category": "study",
        }),
    ])
}

/// Four schedule entries spread over the next three days.
pub fn schedule_rows() -> SeedDescriptor {
    SeedDescriptor::new(vec![
        json!({
            "title": "Calculus midterm exam",
            "date": day(0),
            "time": "09:00",
            "type": "exam",
            "location": "Lecture Hall 3",
        }),
        json!({
            "title": "English study group",
            "date": day(0),
            "time": "14:00",
            "type": "study",
            "location": "Library Room 204",
        }),
        json!({
            "title": "Project progress meeting",
            "date": day(1),
            "time": "10:00",
            "type": "meeting",
            "location": "Lab 2",
        }),
        json!({
            "title": "Python programming practice",
            "date": day(2),
            "time": "19:00",
            "type": "study",
            "location": "Computer Lab 1",
        }),
    ])
}

/// Five knowledge-base articles across the core subjects.
pub fn knowledge_rows() -> SeedDescriptor {
    SeedDescriptor::new(vec![
        json!({
            "title": "Python Fundamentals Guide",
            "category": "programming",
            "summary": "Core syntax, data types and control flow for getting productive in Python.",
            "content": "Start with variables and the built-in collection types, then work through \
                        conditionals, loops and functions. Write small scripts daily; reading code \
                        is no substitute for running it.",
            "tags": ["python", "basics", "syntax"],
            "views": 1256,
            "rating": 4.8,
        }),
        json!({
            "title": "Calculus Essentials",
            "category": "math",
            "summary": "Limits, derivatives and integrals with the standard techniques for each.",
            "content": "Master the limit definition before memorizing differentiation rules. For \
                        integration, learn substitution first and integration by parts second; most \
                        exam problems reduce to one of the two.",
            "tags": ["calculus", "limits", "derivatives"],
            "views": 892,
            "rating": 4.6,
        }),
        json!({
            "title": "Newtonian Mechanics Overview",
            "category": "physics",
            "summary": "Forces, motion and energy, organized around Newton's three laws.",
            "content": "Draw a free-body diagram for every problem before writing equations. Track \
                        units through each step; a wrong unit is the fastest way to catch a wrong \
                        formula.",
            "tags": ["mechanics", "forces", "motion"],
            "views": 756,
            "rating": 4.5,
        }),
        json!({
            "title": "Organic Reactions Handbook",
            "category": "chemistry",
            "summary": "The reaction families every organic chemistry course builds on.",
            "content": "Group reactions by mechanism rather than by reagent. Substitution and \
                        elimination compete; learn the conditions that favor each and the rest of \
                        the course follows.",
            "tags": ["organic", "reactions", "mechanisms"],
            "views": 634,
            "rating": 4.7,
        }),
        json!({
            "title": "English Grammar Reference",
            "category": "language",
            "summary": "Tense, agreement and sentence structure rules with worked examples.",
            "content": "Focus on the tenses that appear in exam writing tasks: simple past, present \
                        perfect and conditionals. Keep a personal error log and review it before \
                        every mock test.",
            "tags": ["grammar", "writing", "tenses"],
            "views": 1567,
            "rating": 4.9,
        }),
    ])
}

/// The assistant's welcome message.
pub fn chat_rows() -> SeedDescriptor {
    SeedDescriptor::new(vec![json!({
        "role": "assistant",
        "content": crate::chat::WELCOME_MESSAGE,
    })])
}

/// One profile record. No avatar until the user sets one.
pub fn profile_rows() -> SeedDescriptor {
    SeedDescriptor::new(vec![json!({
        "name": "Alex Chen",
        "email": "alex.chen@example.com",
        "phone": "555-0123",
        "location": "Riverside, CA",
        "school": "Riverside University",
        "major": "Computer Science",
        "grade": "Junior",
        "bio": "Third-year student aiming for graduate school; studies best in the morning.",
        "achievements": [
            "Dean's list, spring term",
            "Campus hackathon finalist",
            "Regional math olympiad second place",
            "Volunteer tutor, 40 hours",
        ],
    })])
}

const EXAM_SUBJECTS: [&str; 10] = [
    "Mathematics",
    "English",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "Politics",
    "Computer Science",
    "Chinese",
];

const EXAM_KINDS: [&str; 5] = [
    "Final Exam",
    "Midterm Exam",
    "Unit Test",
    "Mock Exam",
    "Pop Quiz",
];

const EXAM_STATUSES: [&str; 3] = ["draft", "published", "ended"];

/// Twenty-five exams cycling through subjects, exam kinds and statuses,
/// scheduled on successive days at 09:00. Deterministic apart from the
/// anchor date.
pub fn exam_rows() -> SeedDescriptor {
    let rows = (0..25)
        .map(|i| {
            let subject = EXAM_SUBJECTS[i % EXAM_SUBJECTS.len()];
            let kind = EXAM_KINDS[i % EXAM_KINDS.len()];
            let status = EXAM_STATUSES[i % EXAM_STATUSES.len()];
            let duration = 60 + (i * 7) % 61;
            let pass_score = 60 + (i * 3) % 21;
            let date = day(i as i64);
            // Durations stay under three hours, so the end time never
            // rolls past midday arithmetic.
            let end_hour = 9 + duration / 60;
            let end_minute = duration % 60;

            json!({
                "title": format!("2026 Fall Semester {subject} {kind}"),
                "subject": subject,
                "description": format!("{kind} covering this term's {subject} material."),
                "status": status,
                "duration": duration,
                "total_score": 100,
                "pass_score": pass_score,
                "start_time": format!("{date}T09:00:00"),
                "end_time": format!("{date}T{end_hour:02}:{end_minute:02}:00"),
                "created_by": "admin",
            })
        })
        .collect();
    SeedDescriptor::new(rows)
}

//! Built-in default state used when no usable snapshot exists.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{
    CommunityPost, Difficulty, ExperienceLevel, InterviewKind, InterviewSession, Job, JobStatus,
    Priority, Problem, ProblemStatus, ProgressStats, Project, ProjectStatus, Quiz, QuizQuestion,
    Resource, ResourceKind, Resume, RoadmapStep, Snapshot, SystemDesignTopic, Task, TestCase,
    Timeline, User, CURRENT_SCHEMA_VERSION,
};
use crate::time_utils::utc_midnight;

/// Experience points a fresh profile starts with.
pub const DEFAULT_TOTAL_XP: u32 = 2450;
pub const DEFAULT_STREAK: u32 = 7;
pub const DEFAULT_STUDY_MINUTES: u32 = 89 * 60;
pub const DEFAULT_BADGES: [&str; 3] = ["First Week", "Problem Solver", "Consistent Learner"];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The default state, active as of `today`.
pub fn default_snapshot(today: NaiveDate) -> Snapshot {
    Snapshot {
        version: CURRENT_SCHEMA_VERSION,
        user: Some(default_user()),
        progress: ProgressStats {
            total_xp: DEFAULT_TOTAL_XP,
            badges: strings(&DEFAULT_BADGES),
            current_streak: DEFAULT_STREAK,
            last_active_date: Some(today),
            study_minutes: DEFAULT_STUDY_MINUTES,
        },
        tasks: default_tasks(),
        problems: default_problems(),
        projects: default_projects(),
        jobs: default_jobs(),
        roadmap_steps: default_roadmap(),
        interview_sessions: default_interview_sessions(),
        resources: default_resources(),
        community_posts: default_posts(),
        system_design_topics: default_topics(),
        resume: Resume::default(),
        skills: default_skills(),
    }
}

pub fn default_user() -> User {
    User {
        id: "1".to_string(),
        name: "Alex Johnson".to_string(),
        email: "alex@example.com".to_string(),
        has_completed_onboarding: true,
        level: ExperienceLevel::Intermediate,
        target_companies: strings(&["Google", "Meta", "Amazon"]),
        timeline: Timeline::SixMonths,
        avatar: None,
    }
}

fn default_problems() -> Vec<Problem> {
    vec![
        Problem {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            difficulty: Difficulty::Easy,
            platform: "LeetCode".to_string(),
            status: ProblemStatus::Solved,
            attempts: 1,
            time_spent: 15,
            date: date(2024, 1, 15),
            tags: strings(&["Array", "Hash Table"]),
            solution: None,
            notes: None,
            code: None,
            test_cases: vec![
                TestCase {
                    input: "[2,7,11,15], 9".to_string(),
                    output: "[0,1]".to_string(),
                },
                TestCase {
                    input: "[3,2,4], 6".to_string(),
                    output: "[1,2]".to_string(),
                },
            ],
        },
        Problem {
            id: "2".to_string(),
            title: "Binary Tree Level Order Traversal".to_string(),
            difficulty: Difficulty::Medium,
            platform: "LeetCode".to_string(),
            status: ProblemStatus::Solved,
            attempts: 2,
            time_spent: 25,
            date: date(2024, 1, 15),
            tags: strings(&["Tree", "BFS"]),
            solution: None,
            notes: None,
            code: None,
            test_cases: vec![TestCase {
                input: "[3,9,20,null,null,15,7]".to_string(),
                output: "[[3],[9,20],[15,7]]".to_string(),
            }],
        },
        Problem {
            id: "3".to_string(),
            title: "Longest Substring Without Repeating".to_string(),
            difficulty: Difficulty::Medium,
            platform: "LeetCode".to_string(),
            status: ProblemStatus::Attempted,
            attempts: 3,
            time_spent: 45,
            date: date(2024, 1, 14),
            tags: strings(&["String", "Sliding Window"]),
            solution: None,
            notes: None,
            code: None,
            test_cases: vec![
                TestCase {
                    input: "\"abcabcbb\"".to_string(),
                    output: "3".to_string(),
                },
                TestCase {
                    input: "\"bbbbb\"".to_string(),
                    output: "1".to_string(),
                },
            ],
        },
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "TaskFlow - Project Management App".to_string(),
            description: "Full-stack task management with real-time collaboration".to_string(),
            status: ProjectStatus::InProgress,
            progress: 75,
            tech_stack: strings(&["React", "Node.js", "PostgreSQL", "Socket.io"]),
            github_url: Some("https://github.com/user/taskflow".to_string()),
            live_url: Some("https://taskflow-demo.vercel.app".to_string()),
            last_commit: Some("2 days ago".to_string()),
            readme_score: 85,
            test_coverage: 78,
            readiness: 82,
            created_at: utc_midnight(2024, 1, 1),
            completed_at: None,
        },
        Project {
            id: "2".to_string(),
            name: "CryptoTracker - Real-time Dashboard".to_string(),
            description: "Cryptocurrency portfolio tracker with live price updates".to_string(),
            status: ProjectStatus::Completed,
            progress: 100,
            tech_stack: strings(&["Next.js", "TypeScript", "Tailwind", "Chart.js"]),
            github_url: Some("https://github.com/user/crypto-tracker".to_string()),
            live_url: Some("https://crypto-tracker-live.vercel.app".to_string()),
            last_commit: Some("1 week ago".to_string()),
            readme_score: 92,
            test_coverage: 85,
            readiness: 88,
            created_at: utc_midnight(2023, 12, 1),
            completed_at: Some(utc_midnight(2024, 1, 10)),
        },
    ]
}

fn default_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Solve 2 Tree problems on LeetCode".to_string(),
            completed: true,
            category: "DSA".to_string(),
            priority: Priority::High,
            estimated_minutes: 60,
            xp: 50,
            due_date: None,
            created_at: utc_midnight(2024, 1, 15),
            completed_at: Some(utc_midnight(2024, 1, 15)),
        },
        Task {
            id: "2".to_string(),
            title: "Review System Design: Distributed Caching".to_string(),
            completed: false,
            category: "System Design".to_string(),
            priority: Priority::Medium,
            estimated_minutes: 45,
            xp: 40,
            due_date: None,
            created_at: utc_midnight(2024, 1, 15),
            completed_at: None,
        },
        Task {
            id: "3".to_string(),
            title: "Practice behavioral questions (STAR format)".to_string(),
            completed: false,
            category: "Behavioral".to_string(),
            priority: Priority::Medium,
            estimated_minutes: 30,
            xp: 30,
            due_date: None,
            created_at: utc_midnight(2024, 1, 15),
            completed_at: None,
        },
    ]
}

fn default_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Software Engineer L4".to_string(),
            company: "Google".to_string(),
            location: "Mountain View, CA".to_string(),
            salary: "$180K - $250K".to_string(),
            employment_type: "Full-time".to_string(),
            experience: "3-5 years".to_string(),
            description: "Build and maintain large-scale distributed systems...".to_string(),
            requirements: strings(&["JavaScript", "React", "System Design", "Algorithms"]),
            status: JobStatus::NotApplied,
            match_score: 89,
            posted_date: "2 days ago".to_string(),
            url: Some("https://careers.google.com/jobs/123".to_string()),
            applied_at: None,
            notes: None,
        },
        Job {
            id: "2".to_string(),
            title: "Senior Frontend Engineer".to_string(),
            company: "Meta".to_string(),
            location: "Menlo Park, CA".to_string(),
            salary: "$170K - $230K".to_string(),
            employment_type: "Full-time".to_string(),
            experience: "4-6 years".to_string(),
            description: "Work on products used by billions of people...".to_string(),
            requirements: strings(&["React", "TypeScript", "GraphQL", "Testing"]),
            status: JobStatus::Applied,
            match_score: 92,
            posted_date: "1 week ago".to_string(),
            url: Some("https://careers.meta.com/jobs/456".to_string()),
            applied_at: Some(utc_midnight(2024, 1, 14)),
            notes: None,
        },
    ]
}

fn default_roadmap() -> Vec<RoadmapStep> {
    vec![
        RoadmapStep {
            id: "1".to_string(),
            title: "Master Array and String Fundamentals".to_string(),
            description:
                "Learn basic array operations, string manipulation, and two-pointer techniques"
                    .to_string(),
            week: 1,
            phase: "Foundation".to_string(),
            completed: true,
            xp: 100,
            tasks: strings(&[
                "Solve 10 easy array problems",
                "Practice string algorithms",
                "Learn two-pointer technique",
            ]),
            resources: strings(&["LeetCode Array Problems", "String Algorithms Guide"]),
            completed_at: Some(utc_midnight(2024, 1, 10)),
        },
        RoadmapStep {
            id: "2".to_string(),
            title: "Binary Trees and Tree Traversals".to_string(),
            description: "Understand tree data structures and traversal algorithms".to_string(),
            week: 2,
            phase: "Foundation".to_string(),
            completed: false,
            xp: 120,
            tasks: strings(&[
                "Learn tree traversal methods",
                "Solve 15 tree problems",
                "Implement BST operations",
            ]),
            resources: strings(&["Tree Algorithms Course", "Binary Tree Visualization"]),
            completed_at: None,
        },
    ]
}

fn default_interview_sessions() -> Vec<InterviewSession> {
    vec![InterviewSession {
        id: "1".to_string(),
        kind: InterviewKind::Behavioral,
        question: "Tell me about a time you faced a difficult challenge".to_string(),
        answer: "I used the STAR method to structure my response...".to_string(),
        score: 85,
        feedback: "Good structure, could improve on quantifying impact".to_string(),
        duration_secs: 180,
        date: utc_midnight(2024, 1, 15),
    }]
}

fn default_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: "1".to_string(),
            title: "Cracking the Coding Interview".to_string(),
            kind: ResourceKind::Book,
            category: "DSA".to_string(),
            url: "https://example.com/ctci".to_string(),
            description: "Essential book for technical interviews".to_string(),
            rating: 5,
            completed: false,
            bookmarked: true,
        },
        Resource {
            id: "2".to_string(),
            title: "System Design Interview Course".to_string(),
            kind: ResourceKind::Course,
            category: "System Design".to_string(),
            url: "https://example.com/system-design".to_string(),
            description: "Comprehensive system design preparation".to_string(),
            rating: 4,
            completed: true,
            bookmarked: true,
        },
    ]
}

fn default_posts() -> Vec<CommunityPost> {
    vec![CommunityPost {
        id: "1".to_string(),
        title: "How I got into Google after 6 months of preparation".to_string(),
        content: "Here's my complete journey and tips...".to_string(),
        author: "John Doe".to_string(),
        author_id: "user1".to_string(),
        category: "Success Stories".to_string(),
        upvotes: 45,
        downvotes: 2,
        replies: Vec::new(),
        created_at: utc_midnight(2024, 1, 15),
        tags: strings(&["Google", "Success", "Tips"]),
        user_vote: None,
    }]
}

fn default_topics() -> Vec<SystemDesignTopic> {
    vec![SystemDesignTopic {
        id: "1".to_string(),
        title: "Load Balancing".to_string(),
        description: "Understanding different load balancing strategies".to_string(),
        completed: false,
        notes: String::new(),
        quiz: Quiz {
            questions: vec![QuizQuestion {
                id: "1".to_string(),
                question: "What is the main purpose of a load balancer?".to_string(),
                options: strings(&[
                    "Increase security",
                    "Distribute traffic",
                    "Store data",
                    "Compile code",
                ]),
                correct: 1,
                explanation: "Load balancers distribute incoming traffic across multiple servers"
                    .to_string(),
            }],
            score: None,
            completed: false,
        },
        xp: 50,
    }]
}

fn default_skills() -> BTreeMap<String, u32> {
    [
        ("Arrays & Strings", 85),
        ("Trees & Graphs", 72),
        ("Dynamic Programming", 58),
        ("System Design", 65),
        ("Behavioral", 78),
        ("Database Design", 70),
        ("React", 90),
        ("Node.js", 80),
        ("Python", 75),
    ]
    .into_iter()
    .map(|(name, score)| (name.to_string(), score))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_active_today() {
        let today = date(2026, 3, 1);
        let snapshot = default_snapshot(today);

        assert_eq!(snapshot.progress.last_active_date, Some(today));
        assert_eq!(snapshot.progress.total_xp, DEFAULT_TOTAL_XP);
        assert_eq!(snapshot.progress.badges.len(), DEFAULT_BADGES.len());
        assert_eq!(snapshot.skills.len(), 9);
        assert!(snapshot.user.is_some());
    }
}

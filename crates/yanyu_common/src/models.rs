//! Records delivered by the backend.
//!
//! Field names follow the backend's camelCase JSON. Fields the views never
//! read are optional on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Difficulty tier of a course. Ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Label shown on course cards.
    pub fn label(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "入门",
            CourseLevel::Intermediate => "进阶",
            CourseLevel::Advanced => "高级",
        }
    }
}

/// A catalogue course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub instructor: String,
    pub level: CourseLevel,
    /// Human-readable length, e.g. "4周".
    pub duration: String,
    pub price: u32,
    pub rating: f32,
    pub students: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
}

/// A learner's progress on one course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub completed: bool,
    /// Percentage, 0 to 100.
    pub progress: u8,
    /// ISO date (`YYYY-MM-DD`) of the last visit.
    pub last_accessed: String,
}

impl CourseProgress {
    /// Progress clamped to 100.
    pub fn percent(&self) -> u8 {
        self.progress.min(100)
    }
}

/// The signed-in learner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    /// Learner tier shown on the profile page, e.g. "中级学习者".
    #[serde(default)]
    pub level: String,
    pub points: u64,
    /// Consecutive study days.
    pub streak: u32,
    #[serde(default)]
    pub join_date: String,
    pub completed_courses: u32,
    /// Hours.
    pub total_study_time: u32,
    /// Keyed by course id.
    #[serde(default)]
    pub progress: BTreeMap<String, CourseProgress>,
}

impl UserProfile {
    /// Progress entry for a course, if the learner has started it.
    pub fn progress_for(&self, course_id: &str) -> Option<&CourseProgress> {
        self.progress.get(course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "id": "user-001",
        "name": "学习者",
        "email": "learner@example.com",
        "avatar": "/images/default-avatar.png",
        "level": "中级学习者",
        "points": 1250,
        "streak": 7,
        "joinDate": "2024-01-15",
        "completedCourses": 3,
        "totalStudyTime": 45,
        "certificates": [],
        "progress": {
            "ai-basics": { "completed": true, "progress": 100, "lastAccessed": "2024-02-20" },
            "prompt-engineering": { "completed": false, "progress": 65, "lastAccessed": "2024-03-01" }
        },
        "preferences": { "notifications": true, "theme": "light", "language": "zh-CN" }
    }"#;

    #[test]
    fn test_user_decodes_from_camel_case() {
        let user: UserProfile = serde_json::from_str(USER_JSON).unwrap();
        assert_eq!(user.name, "学习者");
        assert_eq!(user.points, 1250);
        assert_eq!(user.completed_courses, 3);
        assert_eq!(user.total_study_time, 45);
        assert_eq!(user.join_date, "2024-01-15");

        let basics = user.progress_for("ai-basics").unwrap();
        assert!(basics.completed);
        assert_eq!(basics.percent(), 100);
        assert_eq!(user.progress_for("prompt-engineering").unwrap().last_accessed, "2024-03-01");
        assert!(user.progress_for("unknown").is_none());
    }

    #[test]
    fn test_user_optional_fields_default() {
        let json = r#"{
            "id": "u", "name": "n", "points": 0, "streak": 0,
            "completedCourses": 0, "totalStudyTime": 0
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.progress.is_empty());
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_course_decodes_and_ignores_chapters() {
        let json = r#"{
            "id": "prompt-engineering",
            "title": "提示词工程",
            "description": "掌握AI对话的艺术，提升AI交互效果",
            "category": "实用技能",
            "level": "intermediate",
            "duration": "3周",
            "price": 399,
            "rating": 4.9,
            "students": 890,
            "instructor": "李专家",
            "image": "/images/prompt-engineering-course.png",
            "tags": ["提示词", "ChatGPT", "实战"],
            "chapters": []
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.level, CourseLevel::Intermediate);
        assert_eq!(course.level.label(), "进阶");
        assert_eq!(course.tags.len(), 3);
    }

    #[test]
    fn test_progress_percent_is_clamped() {
        let over = CourseProgress {
            completed: true,
            progress: 140,
            last_accessed: "2024-03-01".into(),
        };
        assert_eq!(over.percent(), 100);
    }

    #[test]
    fn test_levels_are_ordered_by_difficulty() {
        assert!(CourseLevel::Beginner < CourseLevel::Intermediate);
        assert!(CourseLevel::Intermediate < CourseLevel::Advanced);
    }
}

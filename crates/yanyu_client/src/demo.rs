//! Built-in demo data, used when no API is configured.

use std::collections::BTreeMap;

use futures::future::{self, FutureExt};

use yanyu_common::{Course, CourseLevel, CourseProgress, UserProfile};

use crate::source::{DataSource, SourceFuture};

/// Serves a fixed learner and catalogue without touching the network.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoSource {
    user: UserProfile,
    courses: Vec<Course>,
}

impl DemoSource {
    pub fn new(user: UserProfile, courses: Vec<Course>) -> Self {
        Self { user, courses }
    }
}

impl Default for DemoSource {
    fn default() -> Self {
        Self::new(demo_user(), demo_courses())
    }
}

impl DataSource for DemoSource {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn fetch_user(&self) -> SourceFuture<UserProfile> {
        future::ready(Ok(self.user.clone())).boxed_local()
    }

    fn fetch_courses(&self) -> SourceFuture<Vec<Course>> {
        future::ready(Ok(self.courses.clone())).boxed_local()
    }
}

pub fn demo_courses() -> Vec<Course> {
    vec![
        Course {
            id: "ai-basics".to_string(),
            title: "AI基础入门".to_string(),
            description: "从零开始学习人工智能基础概念".to_string(),
            category: "基础课程".to_string(),
            instructor: "张教授".to_string(),
            level: CourseLevel::Beginner,
            duration: "4周".to_string(),
            price: 299,
            rating: 4.8,
            students: 1250,
            tags: vec!["AI基础".to_string(), "机器学习".to_string(), "入门".to_string()],
            image: "/images/ai-basics-course.png".to_string(),
        },
        Course {
            id: "prompt-engineering".to_string(),
            title: "提示词工程".to_string(),
            description: "掌握AI对话的艺术，提升AI交互效果".to_string(),
            category: "实用技能".to_string(),
            instructor: "李专家".to_string(),
            level: CourseLevel::Intermediate,
            duration: "3周".to_string(),
            price: 399,
            rating: 4.9,
            students: 890,
            tags: vec!["提示词".to_string(), "ChatGPT".to_string(), "实战".to_string()],
            image: "/images/prompt-engineering-course.png".to_string(),
        },
    ]
}

pub fn demo_user() -> UserProfile {
    let mut progress = BTreeMap::new();
    progress.insert(
        "ai-basics".to_string(),
        CourseProgress {
            completed: true,
            progress: 100,
            last_accessed: "2024-02-20".to_string(),
        },
    );
    progress.insert(
        "prompt-engineering".to_string(),
        CourseProgress {
            completed: false,
            progress: 65,
            last_accessed: "2024-03-01".to_string(),
        },
    );

    UserProfile {
        id: "user-001".to_string(),
        name: "学习者".to_string(),
        email: "learner@example.com".to_string(),
        avatar: "/images/default-avatar.png".to_string(),
        level: "中级学习者".to_string(),
        points: 1250,
        streak: 7,
        join_date: "2024-01-15".to_string(),
        completed_courses: 3,
        total_study_time: 45,
        progress,
    }
}

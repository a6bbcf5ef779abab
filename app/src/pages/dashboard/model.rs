//! What the dashboard shows, derived from the two data sources.
//!
//! Everything here is plain data so the selection rules can be tested
//! without a DOM.

use yanyu_common::{Course, CourseLevel, LoadState, UserProfile};

/// Top-level dashboard state.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardModel {
    /// At least one source is still loading; nothing else is shown.
    Loading,
    /// Both sources reported. Each region renders on its own.
    Loaded {
        user: Region<UserProfile>,
        courses: Region<Vec<Course>>,
    },
}

/// Outcome of one source once it has reported.
#[derive(Clone, Debug, PartialEq)]
pub enum Region<T> {
    Failed(String),
    Ready(T),
}

impl<T> Region<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Region::Ready(data) => Some(data),
            Region::Failed(_) => None,
        }
    }
}

/// Applies the loading gate: either source loading hides both regions.
pub fn compose(user: LoadState<UserProfile>, courses: LoadState<Vec<Course>>) -> DashboardModel {
    let user = match user {
        LoadState::Loading => return DashboardModel::Loading,
        LoadState::Error(message) => Region::Failed(message),
        LoadState::Ready(profile) => Region::Ready(profile),
    };
    let courses = match courses {
        LoadState::Loading => return DashboardModel::Loading,
        LoadState::Error(message) => Region::Failed(message),
        LoadState::Ready(list) => Region::Ready(list),
    };
    DashboardModel::Loaded { user, courses }
}

/// One of the four summary tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

pub fn summary_stats(user: &UserProfile) -> [SummaryStat; 4] {
    [
        SummaryStat {
            label: "学习积分",
            value: format_thousands(user.points),
            icon: "⭐",
        },
        SummaryStat {
            label: "完成课程",
            value: user.completed_courses.to_string(),
            icon: "🎓",
        },
        SummaryStat {
            label: "连续学习天数",
            value: user.streak.to_string(),
            icon: "🔥",
        },
        SummaryStat {
            label: "学习时长(小时)",
            value: user.total_study_time.to_string(),
            icon: "⏱",
        },
    ]
}

/// Groups digits in threes with commas: `1250` becomes `"1,250"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// A course card plus the learner's progress on it, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardModel {
    pub course: Course,
    /// 0 to 100. `None` when the learner has not started the course or the
    /// profile is unavailable.
    pub progress: Option<u8>,
}

pub fn course_cards(courses: &[Course], user: Option<&UserProfile>) -> Vec<CourseCardModel> {
    courses
        .iter()
        .map(|course| CourseCardModel {
            course: course.clone(),
            progress: user
                .and_then(|u| u.progress_for(&course.id))
                .map(|p| p.percent()),
        })
        .collect()
}

/// One step of the recommended learning path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub course_id: String,
    pub title: String,
    pub level: CourseLevel,
    pub completed: bool,
}

/// Courses from easiest to hardest, catalogue order kept within a level.
pub fn learning_path(courses: &[Course], user: Option<&UserProfile>) -> Vec<PathStep> {
    let mut ordered: Vec<&Course> = courses.iter().collect();
    ordered.sort_by_key(|course| course.level);

    ordered
        .into_iter()
        .map(|course| PathStep {
            course_id: course.id.clone(),
            title: course.title.clone(),
            level: course.level,
            completed: user
                .and_then(|u| u.progress_for(&course.id))
                .is_some_and(|p| p.completed),
        })
        .collect()
}

//! Route paths.

pub const HOME: &str = "/";
pub const COURSES: &str = "/courses";
pub const EXAM: &str = "/exam";
pub const CAREER_PATH: &str = "/career-path";
pub const PROFILE: &str = "/profile";

/// Old dashboard address, permanently moved to [`HOME`].
pub const LEGACY_DASHBOARD: &str = "/dashboard";
/// Old catalogue address, moved to [`COURSES`].
pub const LEGACY_LEARN: &str = "/learn";
/// Old singular course prefix, rewritten to [`COURSES`].
pub const LEGACY_COURSE_PREFIX: &str = "/course/";

/// Path of a course's detail page.
pub fn course_detail(course_id: &str) -> String {
    format!("{COURSES}/{course_id}")
}

/// Where an outdated address should go, if it is one.
pub fn legacy_redirect(path: &str) -> Option<String> {
    match path {
        LEGACY_DASHBOARD => return Some(HOME.to_string()),
        LEGACY_LEARN => return Some(COURSES.to_string()),
        _ => {}
    }
    path.strip_prefix(LEGACY_COURSE_PREFIX)
        .filter(|id| !id.is_empty() && !id.contains('/'))
        .map(course_detail)
}

//! Reusable UI components.

mod course_card;
mod error_notice;

pub use course_card::CourseCard;
pub use error_notice::ErrorNotice;

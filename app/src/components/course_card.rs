//! Course card used on the dashboard and the catalogue page.

use leptos::prelude::*;

use yanyu_common::{routes, Course};

use crate::navigation::use_navigator;

/// Card with title, instructor and level. Shows a progress bar when
/// `progress` is set. Activating the card opens the course page.
#[component]
pub fn CourseCard(
    course: Course,
    /// Learner progress, 0 to 100
    progress: Option<u8>,
) -> impl IntoView {
    let navigator = use_navigator();
    let key_navigator = navigator.clone();
    let target = routes::course_detail(&course.id);
    let key_target = target.clone();

    view! {
        <div
            class="bg-white dark:bg-gray-900 rounded-lg shadow-sm border border-gray-100 dark:border-gray-800 p-4 cursor-pointer hover:shadow-md transition-shadow"
            role="link"
            tabindex="0"
            data-course-id=course.id.clone()
            on:click=move |_| navigator.navigate_to(&target)
            on:keydown=move |ev| key_navigator.navigate_on_key(&ev, &key_target)
        >
            <div class="flex items-start justify-between gap-2 mb-2">
                <h3 class="text-base font-semibold">{course.title}</h3>
                <span class="shrink-0 text-xs px-2 py-0.5 rounded-full bg-blue-50 text-blue-600">
                    {course.level.label()}
                </span>
            </div>
            <p class="text-sm text-gray-500">{course.instructor}</p>
            <div class="mt-1 text-xs text-gray-400">
                {course.duration} " · " {format!("{:.1}", course.rating)} " ★"
            </div>
            {progress.map(|percent| view! {
                <div class="mt-3">
                    <div class="flex justify-between text-xs text-gray-500 mb-1">
                        <span>"学习进度"</span>
                        <span class="font-medium text-blue-600">{format!("{percent}%")}</span>
                    </div>
                    <div class="h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                        <div
                            class="h-2 bg-blue-600 rounded-full"
                            style=format!("width: {percent}%")
                        ></div>
                    </div>
                </div>
            })}
        </div>
    }
}

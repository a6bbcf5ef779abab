//! Course catalogue and course detail pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use yanyu_client::{use_course, use_courses};
use yanyu_common::{Course, LoadState};

use crate::components::{CourseCard, ErrorNotice};

#[component]
pub fn CoursesView() -> impl IntoView {
    let courses = use_courses();

    view! {
        <div class="container mx-auto px-4 py-6 space-y-4">
            <h1 class="text-xl font-bold">"全部课程"</h1>
            {move || match courses.get() {
                LoadState::Loading => view! { <LoadingLine/> }.into_any(),
                LoadState::Error(message) => view! { <ErrorNotice message=message /> }.into_any(),
                LoadState::Ready(list) if list.is_empty() => view! {
                    <p class="text-sm text-gray-500">"暂无课程"</p>
                }.into_any(),
                LoadState::Ready(list) => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {list.into_iter().map(|course| view! {
                            <CourseCard course=course progress=None />
                        }).collect::<Vec<_>>()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
pub fn CourseDetailView() -> impl IntoView {
    let params = use_params_map();
    let course_id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let course = use_course(course_id);

    view! {
        <div class="container mx-auto px-4 py-6">
            {move || match course.get() {
                LoadState::Loading => view! { <LoadingLine/> }.into_any(),
                LoadState::Error(message) => view! { <ErrorNotice message=message /> }.into_any(),
                LoadState::Ready(None) => view! {
                    <p class="text-sm text-gray-500">"未找到该课程"</p>
                }.into_any(),
                LoadState::Ready(Some(course)) => view! { <CourseDetail course=course /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CourseDetail(course: Course) -> impl IntoView {
    view! {
        <article class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-5 space-y-4">
            <header class="space-y-1">
                <p class="text-xs text-blue-600">{course.category}</p>
                <h1 class="text-2xl font-bold">{course.title}</h1>
                <p class="text-sm text-gray-500">{course.instructor}</p>
            </header>
            <p class="text-sm leading-relaxed">{course.description}</p>
            <dl class="grid grid-cols-2 md:grid-cols-4 gap-3 text-sm">
                <DetailItem label="难度" value=course.level.label().to_string() />
                <DetailItem label="时长" value=course.duration />
                <DetailItem label="评分" value=format!("{:.1}", course.rating) />
                <DetailItem label="学员" value=course.students.to_string() />
            </dl>
            <div class="flex flex-wrap gap-2">
                {course.tags.into_iter().map(|tag| view! {
                    <span class="text-xs px-2 py-0.5 rounded-full bg-gray-100 dark:bg-gray-800">{tag}</span>
                }).collect::<Vec<_>>()}
            </div>
            <p class="text-lg font-semibold text-blue-600">{format!("¥{}", course.price)}</p>
        </article>
    }
}

#[component]
fn DetailItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-xs text-gray-400">{label}</dt>
            <dd class="font-medium">{value}</dd>
        </div>
    }
}

#[component]
fn LoadingLine() -> impl IntoView {
    view! {
        <div class="h-24 bg-gray-200 dark:bg-gray-800 rounded-lg animate-pulse" aria-busy="true"></div>
    }
}

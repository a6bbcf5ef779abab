//! Home dashboard: welcome banner, learning statistics, courses and the
//! recommended learning path.

pub mod model;
mod skeleton;

pub use model::{compose, DashboardModel, Region};
pub use skeleton::DashboardSkeleton;

use leptos::prelude::*;

use yanyu_client::{use_courses, use_user};
use yanyu_common::{Course, LoadState, UserProfile};

use crate::components::{CourseCard, ErrorNotice};
use model::{course_cards, learning_path, summary_stats, PathStep, SummaryStat};

/// Route view: wires the data hooks into [`DashboardContent`].
#[component]
pub fn DashboardView() -> impl IntoView {
    let user = use_user();
    let courses = use_courses();

    view! { <DashboardContent user=user courses=courses /> }
}

/// Renders the dashboard for the given source states.
#[component]
pub fn DashboardContent(
    #[prop(into)] user: Signal<LoadState<UserProfile>>,
    #[prop(into)] courses: Signal<LoadState<Vec<Course>>>,
) -> impl IntoView {
    let model = Memo::new(move |_| compose(user.get(), courses.get()));

    view! {
        <div data-testid="dashboard-container" class="container mx-auto px-4 py-6 space-y-6">
            {move || match model.get() {
                DashboardModel::Loading => view! { <DashboardSkeleton/> }.into_any(),
                DashboardModel::Loaded { user, courses } => {
                    let profile = user.ready().cloned();
                    view! {
                        <UserRegion user=user />
                        <CourseRegion courses=courses profile=profile />
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn UserRegion(user: Region<UserProfile>) -> impl IntoView {
    match user {
        Region::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
        Region::Ready(profile) => {
            let stats = summary_stats(&profile);
            view! {
                <WelcomeBanner name=profile.name />
                <section class="grid grid-cols-2 md:grid-cols-4 gap-3" aria-label="学习统计">
                    {stats.into_iter().map(|stat| view! { <StatTile stat=stat /> }).collect::<Vec<_>>()}
                </section>
            }.into_any()
        }
    }
}

#[component]
fn CourseRegion(courses: Region<Vec<Course>>, profile: Option<UserProfile>) -> impl IntoView {
    match courses {
        Region::Failed(message) => view! { <ErrorNotice message=message /> }.into_any(),
        Region::Ready(list) => {
            let cards = course_cards(&list, profile.as_ref());
            let steps = learning_path(&list, profile.as_ref());
            view! {
                <section class="space-y-3">
                    <h2 class="text-lg font-semibold">"我的课程"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {cards.into_iter().map(|card| view! {
                            <CourseCard course=card.course progress=card.progress />
                        }).collect::<Vec<_>>()}
                    </div>
                </section>
                <LearningPathPanel steps=steps />
            }.into_any()
        }
    }
}

#[component]
fn WelcomeBanner(name: String) -> impl IntoView {
    view! {
        <section class="rounded-xl bg-gradient-to-r from-blue-500 to-purple-600 text-white p-5">
            <h1 class="text-xl font-bold">{format!("欢迎回来，{name}！")}</h1>
            <p class="text-sm text-white/80 mt-1">"继续您的AI学习之旅"</p>
        </section>
    }
}

#[component]
fn StatTile(stat: SummaryStat) -> impl IntoView {
    view! {
        <div data-testid="stat-tile" class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-4 text-center">
            <div class="text-xl mb-1" aria-hidden="true">{stat.icon}</div>
            <div data-testid="stat-value" class="text-2xl font-bold text-blue-600">{stat.value}</div>
            <div data-testid="stat-label" class="text-xs text-gray-500 mt-1">{stat.label}</div>
        </div>
    }
}

#[component]
fn LearningPathPanel(steps: Vec<PathStep>) -> impl IntoView {
    view! {
        <section class="bg-white dark:bg-gray-900 rounded-lg shadow-sm p-4">
            <h2 class="text-lg font-semibold mb-3">"推荐学习路径"</h2>
            <ol class="space-y-2">
                {steps.into_iter().enumerate().map(|(index, step)| {
                    let marker_class = if step.completed {
                        "w-6 h-6 rounded-full bg-green-500 text-white text-xs flex items-center justify-center"
                    } else {
                        "w-6 h-6 rounded-full bg-gray-200 text-gray-600 text-xs flex items-center justify-center"
                    };
                    view! {
                        <li class="flex items-center gap-3" data-completed=step.completed.to_string()>
                            <span class=marker_class>
                                {if step.completed { "✓".to_string() } else { (index + 1).to_string() }}
                            </span>
                            <span class="flex-1 text-sm">{step.title}</span>
                            <span class="text-xs text-gray-400">{step.level.label()}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ol>
        </section>
    }
}

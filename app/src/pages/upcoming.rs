//! Sections that are announced but not open yet, plus the not-found page.

use leptos::prelude::*;

use yanyu_common::routes;

use crate::navigation::use_navigator;

#[component]
fn ComingSoon(title: &'static str, summary: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-10 text-center space-y-3">
            <div class="text-4xl" aria-hidden="true">{icon}</div>
            <h1 class="text-xl font-bold">{title}</h1>
            <p class="text-sm text-gray-500">{summary}</p>
            <p class="text-xs text-gray-400">"即将上线，敬请期待"</p>
        </div>
    }
}

#[component]
pub fn ExamView() -> impl IntoView {
    view! { <ComingSoon title="专业考试" summary="参加专业考试和测试，获取AI工程师认证" icon="🏆" /> }
}

#[component]
pub fn CareerPathView() -> impl IntoView {
    view! { <ComingSoon title="职业路径" summary="查看AI工程师职业发展路径" icon="📊" /> }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <div class="container mx-auto px-4 py-10 text-center space-y-4">
            <h1 class="text-xl font-bold">"页面不存在"</h1>
            <button
                type="button"
                class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm"
                on:click=move |_| navigator.navigate_to(routes::HOME)
            >
                "返回首页"
            </button>
        </div>
    }
}

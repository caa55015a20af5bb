//! Routed pages

mod not_found;
mod page;

pub use not_found::NotFound;
pub use page::PageView;

use leptos::*;
use ng_core::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <PageView page=Route::Home.page()/> }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! { <PageView page=Route::Services.page()/> }
}

#[component]
pub fn HrTrainingPage() -> impl IntoView {
    view! { <PageView page=Route::HrTraining.page()/> }
}

#[component]
pub fn CustomerTrainingPage() -> impl IntoView {
    view! { <PageView page=Route::CustomerTraining.page()/> }
}

//! 404 page

use crate::components::{ActionLink, PageBackdrop};
use leptos::*;
use leptos_meta::Title;
use ng_core::page::{Action, Backdrop, LinkTarget};
use ng_core::Route;

/// Fallback for paths outside the route table
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found | Nemesis Group"/>
        <main class="relative overflow-hidden min-h-[60vh]">
            <PageBackdrop kind=Backdrop::Plain/>
            <section class="relative mx-auto max-w-6xl px-4 py-16">
                <h1 class="text-3xl md:text-5xl font-extrabold tracking-tight">"Page not found"</h1>
                <p class="mt-3 text-white/80 max-w-2xl">
                    "The page you are looking for does not exist or has moved."
                </p>
                <div class="mt-8">
                    <ActionLink action=Action::primary("Back to Home", LinkTarget::Route(Route::Home))/>
                </div>
            </section>
        </main>
    }
}

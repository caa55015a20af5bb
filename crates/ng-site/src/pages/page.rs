//! Generic page renderer: backdrop, hero, then sections in order

use crate::components::{BannerHero, CoverHero, PageBackdrop, SectionView};
use leptos::*;
use leptos_meta::Title;
use ng_core::page::{Hero, Page};

#[component]
pub fn PageView(page: Page) -> impl IntoView {
    let Page {
        route,
        title,
        hero,
        sections,
        backdrop,
        entrance,
    } = page;
    tracing::debug!(%route, sections = sections.len(), "render page");

    let hero = match hero {
        Hero::Cover(cover) => view! { <CoverHero cover=cover/> }.into_view(),
        Hero::Banner {
            title,
            intro,
            blocks,
        } => view! { <BannerHero title=title intro=intro blocks=blocks entrance=entrance/> }.into_view(),
    };

    view! {
        <Title text=title/>
        <main class="relative overflow-hidden">
            <PageBackdrop kind=backdrop/>
            {hero}
            {sections
                .into_iter()
                .map(|section| view! { <SectionView section=section entrance=entrance/> })
                .collect_view()}
            <div class="relative h-10"></div>
        </main>
    }
}

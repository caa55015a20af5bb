//! Decorative pieces: dot grids, hexagon images and page backdrops

use leptos::*;
use ng_core::page::Backdrop;

/// Square SVG dot pattern.
///
/// `id` names the SVG pattern; it has to be unique within the document
/// because several grids share a page.
#[component]
pub fn DotGrid(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(default = 0.22)] opacity: f64,
) -> impl IntoView {
    let fill = format!("url(#{})", id);
    view! {
        <svg class=class viewBox="0 0 200 200" aria-hidden="true" style=format!("opacity:{}", opacity)>
            <defs>
                <pattern id=id x="0" y="0" width="20" height="20" patternUnits="userSpaceOnUse">
                    <circle cx="4" cy="4" r="2.2" fill="white"/>
                </pattern>
            </defs>
            <rect width="200" height="200" fill=fill/>
        </svg>
    }
}

const HEX_CLIP: &str = "clip-path: polygon(25% 6%, 75% 6%, 100% 50%, 75% 94%, 25% 94%, 0% 50%)";

#[component]
pub fn HexImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("relative overflow-hidden {}", class) style=HEX_CLIP>
            <img src=src alt=alt class="h-full w-full object-cover" loading="lazy"/>
            <div class="absolute inset-0 ring-4 ring-brand-sky/60"></div>
            <div class="absolute inset-0 bg-gradient-to-tr from-black/25 via-transparent to-white/10"></div>
        </div>
    }
}

#[component]
pub fn PageBackdrop(kind: Backdrop) -> impl IntoView {
    match kind {
        Backdrop::Full => view! {
            <div class="absolute inset-0 bg-gradient-to-b from-brand via-brand to-brand-deep"></div>
            <div class="absolute -top-40 -left-40 h-[520px] w-[520px] rounded-full bg-white/10 blur-3xl"></div>
            <div class="absolute -bottom-48 -right-40 h-[560px] w-[560px] rounded-full bg-brand-sky/20 blur-3xl"></div>
            <DotGrid id="dots-top-left" class="absolute top-10 left-8 h-32 w-32"/>
            <DotGrid id="dots-top-right" class="absolute top-10 right-8 h-32 w-32"/>
            <DotGrid id="dots-bottom-right" class="absolute bottom-10 right-10 h-36 w-36" opacity=0.18/>
        }
        .into_view(),
        Backdrop::Plain => view! {
            <div class="absolute inset-0 bg-gradient-to-b from-brand to-brand-deep"></div>
            <DotGrid id="dots-corner" class="absolute top-14 right-10 h-36 w-36" opacity=0.18/>
        }
        .into_view(),
    }
}

//! Site navigation bar

use super::icons::Lucide;
use leptos::*;
use leptos_router::use_location;
use ng_core::content::{BRAND, BRAND_MARK, BRAND_TAGLINE};
use ng_core::nav::{nav_tree, Dropdown, NavRoute};
use ng_core::page::Icon;
use ng_core::Route;

const NAV_LINK: &str = "px-3 py-2 rounded-xl text-white/90 hover:text-white hover:bg-white/10 transition";

#[component]
pub fn Navbar() -> impl IntoView {
    let entries = nav_tree()
        .iter()
        .map(|entry| {
            if entry.has_submenu() {
                view! { <SubmenuEntry entry=*entry/> }.into_view()
            } else {
                view! { <a href=entry.target.href() class=NAV_LINK>{entry.label}</a> }.into_view()
            }
        })
        .collect_view();

    view! {
        <header class="sticky top-0 z-50 backdrop-blur-xl bg-brand/55 border-b border-white/10">
            <div class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <a href=Route::Home.path() class="flex items-center gap-2">
                    <div class="h-9 w-9 rounded-2xl bg-white/12 border border-white/15 grid place-items-center shadow-soft">
                        <span class="font-bold tracking-wide">{BRAND_MARK}</span>
                    </div>
                    <div class="leading-tight">
                        <div class="text-sm font-semibold tracking-wide">{BRAND}</div>
                        <div class="text-[11px] text-white/70">{BRAND_TAGLINE}</div>
                    </div>
                </a>

                <nav class="hidden md:flex items-center gap-1">{entries}</nav>

                <a
                    href=Route::Services.path()
                    class="md:hidden px-3 py-2 rounded-xl bg-white/12 border border-white/15"
                >
                    {Route::Services.label()}
                </a>
            </div>
        </header>
    }
}

/// Entry with a dropdown. Each instance owns its open state.
#[component]
fn SubmenuEntry(entry: NavRoute) -> impl IntoView {
    let (dropdown, set_dropdown) = create_signal(Dropdown::new());
    let is_open = move || dropdown.with(Dropdown::is_open);

    let location = use_location();
    create_effect(move |_| {
        location.pathname.track();
        set_dropdown.update(|d| {
            d.route_changed();
        });
    });

    let last = entry.submenu.len().saturating_sub(1);
    let items = move || {
        entry
            .submenu
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let item = *item;
                view! {
                    {(i == last && i > 0).then(|| view! { <div class="h-px bg-white/10"></div> })}
                    <a
                        href=item.target.href()
                        class="block px-4 py-3 hover:bg-white/10 transition"
                        role="menuitem"
                        on:click=move |_| set_dropdown.update(|d| {
                            d.select(&item);
                        })
                    >
                        {item.label}
                        {item.hint.map(|hint| view! { <div class="text-xs text-white/70">{hint}</div> })}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="relative">
            <button
                class=format!("{} flex items-center gap-1", NAV_LINK)
                aria-haspopup="menu"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| set_dropdown.update(|d| {
                    d.toggle();
                })
            >
                {entry.label}
                <Lucide icon=Icon::ChevronDown size=16 class="opacity-90"/>
            </button>
            <Show when=is_open>
                <div
                    class="absolute right-0 mt-2 w-64 rounded-2xl bg-brand-menu/95 border border-white/15 shadow-soft overflow-hidden"
                    role="menu"
                    on:mouseleave=move |_| set_dropdown.update(|d| {
                        d.pointer_leave();
                    })
                >
                    {items()}
                </div>
            </Show>
        </div>
    }
}

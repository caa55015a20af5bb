//! Cards, pills and buttons

use super::icons::Lucide;
use super::reveal::Reveal;
use leptos::*;
use ng_core::content::CONTACT;
use ng_core::page::{Action, Card, ContentItem, Emphasis, Icon, Pill, ServiceTile, TileStyle};
use ng_core::reveal::Motion;

pub const CARD: &str = "rounded-3xl bg-white/10 border border-white/15 p-6 shadow-soft";
const ICON_BOX: &str =
    "h-11 w-11 shrink-0 rounded-2xl bg-white/12 border border-white/15 grid place-items-center";

#[component]
pub fn ActionLink(action: Action) -> impl IntoView {
    let class = match action.emphasis {
        Emphasis::Primary => "inline-flex items-center gap-2 rounded-2xl bg-white text-brand px-5 py-3 font-bold shadow-soft hover:opacity-95 transition",
        Emphasis::Secondary => "inline-flex items-center gap-2 rounded-2xl bg-white/12 border border-white/15 px-5 py-3 font-semibold hover:bg-white/15 transition",
        Emphasis::Compact => "inline-flex items-center gap-2 rounded-2xl bg-white text-brand px-4 py-2 font-bold shadow-soft hover:opacity-95 transition",
        Emphasis::Plain => "inline-flex items-center gap-2 text-white/85 hover:text-white",
    };
    let leading = matches!(action.icon, Some(Icon::ArrowLeft));

    view! {
        <a href=action.target.href() class=class>
            {leading.then(|| view! { <Lucide icon=Icon::ArrowLeft/> })}
            {action.label}
            {action
                .icon
                .filter(|_| !leading)
                .map(|icon| view! { <Lucide icon=icon/> })}
        </a>
    }
}

/// Row of call-to-action buttons
#[component]
pub fn ActionRow(actions: Vec<Action>, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("flex flex-wrap gap-3 {}", class)>
            {actions.into_iter().map(|action| view! { <ActionLink action=action/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn InfoCard(card: Card, motion: Motion) -> impl IntoView {
    view! {
        <Reveal motion=motion class=CARD>
            <div class="flex items-start gap-3">
                <div class=ICON_BOX>
                    <Lucide icon=card.icon/>
                </div>
                <div>
                    <div class="text-lg font-extrabold">{card.title}</div>
                    <div class="mt-1 text-white/80 leading-relaxed">{card.desc}</div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn InfoPill(pill: Pill) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 rounded-full bg-white/12 border border-white/15 px-4 py-2">
            <div class="h-8 w-8 rounded-2xl bg-white/10 border border-white/10 grid place-items-center">
                <Lucide icon=pill.icon/>
            </div>
            <div class="font-semibold text-white/90">{pill.text}</div>
        </div>
    }
}

#[component]
pub fn RolePill(text: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-2xl bg-white/10 border border-white/15 px-4 py-3 font-semibold">{text}</div>
    }
}

/// "STEP n" tile
#[component]
pub fn StepTile(index: usize, step: ContentItem, motion: Motion) -> impl IntoView {
    view! {
        <Reveal motion=motion class="rounded-3xl bg-white/10 border border-white/15 p-5 shadow-soft">
            <div class="text-xs text-white/70 font-semibold tracking-widest">{format!("STEP {}", index + 1)}</div>
            {step.heading.map(|h| view! { <div class="mt-2 font-extrabold">{h}</div> })}
            <div class="mt-2 text-white/80 text-sm leading-relaxed">{step.body}</div>
        </Reveal>
    }
}

/// Service summary. Tiles without a page render as plain boxes.
#[component]
pub fn ServiceTileCard(tile: ServiceTile, style: TileStyle, motion: Motion) -> impl IntoView {
    let href = tile.to.map(|route| route.path());
    let body = match style {
        TileStyle::Arrow => view! {
            <div class="flex items-start justify-between gap-4">
                <div>
                    <div class="text-xl font-extrabold tracking-tight">{tile.title}</div>
                    <div class="mt-2 text-white/75 leading-relaxed">{tile.desc}</div>
                </div>
                <div class="h-10 w-10 rounded-2xl bg-white/10 border border-white/15 grid place-items-center shrink-0">
                    <Lucide icon=Icon::ArrowRight class="opacity-90 group-hover:translate-x-0.5 transition"/>
                </div>
            </div>
        }
        .into_view(),
        TileStyle::Open => view! {
            <div class="text-xl font-extrabold tracking-tight">{tile.title}</div>
            <div class="mt-2 text-white/75">{tile.desc}</div>
            <div class="mt-5 inline-flex items-center gap-2 font-bold">
                "Open"
                <Lucide icon=Icon::ArrowRight class="group-hover:translate-x-0.5 transition"/>
            </div>
        }
        .into_view(),
    };

    let class = "group block rounded-3xl bg-white/10 border border-white/15 p-6 shadow-soft hover:bg-white/12 transition";
    view! {
        <Reveal motion=motion>
            {match href {
                Some(href) => view! { <a href=href class=class data-service-tile="">{body}</a> }.into_view(),
                None => view! { <div class=class data-service-tile="">{body}</div> }.into_view(),
            }}
        </Reveal>
    }
}

/// Phone, email and website rows, plus the postal address when asked
#[component]
pub fn ContactLines(#[prop(optional)] address: bool) -> impl IntoView {
    let row = |icon: Icon, text: &'static str| {
        view! {
            <div class="flex items-center gap-3">
                <div class="h-10 w-10 rounded-2xl bg-white/12 border border-white/15 grid place-items-center">
                    <Lucide icon=icon/>
                </div>
                <div class="font-semibold">{text}</div>
            </div>
        }
    };

    view! {
        <div class="grid gap-4 text-white/90">
            {row(Icon::Phone, CONTACT.phone)}
            {row(Icon::Mail, CONTACT.email)}
            {row(Icon::Globe, CONTACT.website)}
            {address.then(|| view! {
                <div class="flex items-start gap-3">
                    <div class="h-10 w-10 rounded-2xl bg-white/12 border border-white/15 grid place-items-center mt-0.5">
                        <Lucide icon=Icon::MapPin/>
                    </div>
                    <div class="font-semibold leading-relaxed">
                        {CONTACT.address[0]}
                        <br/>
                        {CONTACT.address[1]}
                    </div>
                </div>
            })}
        </div>
    }
}

//! Section and block rendering

use super::cards::{ActionLink, ActionRow, ContactLines, InfoCard, InfoPill, RolePill, ServiceTileCard, StepTile, CARD};
use super::icons::Lucide;
use super::reveal::Reveal;
use leptos::*;
use ng_core::page::{Block, Callout, ContactBlock, Icon, Panel, PanelBody, PageSection, ThankYou};
use ng_core::reveal::Motion;

const LABEL: &str = "text-sm text-white/70 tracking-widest font-semibold";

fn grid_class(columns: u8) -> &'static str {
    match columns {
        0 | 1 => "grid gap-5",
        2 => "grid md:grid-cols-2 gap-5",
        3 => "grid md:grid-cols-3 gap-5",
        4 => "grid md:grid-cols-4 gap-4",
        _ => "grid md:grid-cols-5 gap-4",
    }
}

/// Render one block. Columns nest blocks, so this returns a [`View`]
/// rather than an opaque type.
pub fn block_view(block: Block, entrance: Motion) -> View {
    match block {
        Block::Cards { columns, cards } => view! {
            <div class=grid_class(columns)>
                {cards.iter().map(|card| view! { <InfoCard card=*card motion=entrance/> }).collect_view()}
            </div>
        }
        .into_view(),
        Block::Steps(steps) => view! {
            <div class=grid_class(steps.len() as u8)>
                {steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! {
                        <StepTile index=i step=*step motion=entrance.staggered(i as u32)/>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        Block::ServiceTiles { tiles, style } => view! {
            <div class="grid md:grid-cols-2 gap-5">
                {tiles
                    .iter()
                    .map(|tile| view! { <ServiceTileCard tile=*tile style=style motion=entrance/> })
                    .collect_view()}
            </div>
        }
        .into_view(),
        Block::Columns(columns) => view! {
            <div class="grid lg:grid-cols-2 gap-5 items-start">
                {columns
                    .into_iter()
                    .map(|column| view! {
                        <div class="grid gap-5">
                            {column.into_iter().map(|b| block_view(b, entrance)).collect_view()}
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        Block::Panel(panel) => view! {
            <Reveal motion=entrance class=CARD>
                <PanelContent panel=panel/>
            </Reveal>
        }
        .into_view(),
        Block::Callout(callout) => view! { <CalloutBox callout=callout/> }.into_view(),
        Block::Contact(contact) => view! { <ContactPair contact=contact entrance=entrance/> }.into_view(),
    }
}

/// Check-marked list item
#[component]
pub fn Bullet(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex gap-3">
            <span class="mt-1.5">
                <Lucide icon=Icon::CheckCircle class="text-white/90"/>
            </span>
            <span class="text-white/85 leading-relaxed">{text}</span>
        </li>
    }
}

#[component]
pub fn PanelContent(panel: Panel) -> impl IntoView {
    let body = match panel.body {
        PanelBody::Dots(items) => view! {
            <ul class="mt-4 space-y-3">
                {items
                    .iter()
                    .map(|item| view! {
                        <li class="flex gap-3">
                            <span class="mt-1.5 h-2 w-2 shrink-0 rounded-full bg-white/90"></span>
                            <span class="text-white/85">{*item}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
        PanelBody::Checks(items) => view! {
            <ul class="mt-4 space-y-3">
                {items.iter().map(|item| view! { <Bullet text=*item/> }).collect_view()}
            </ul>
        }
        .into_view(),
        PanelBody::Roles(roles) => view! {
            <div class="mt-4 grid sm:grid-cols-2 gap-3">
                {roles.iter().map(|role| view! { <RolePill text=*role/> }).collect_view()}
            </div>
        }
        .into_view(),
        PanelBody::Timeline(steps) => view! {
            <ol class="mt-4 space-y-4">
                {steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| view! {
                        <li class="flex gap-3">
                            <div class="mt-1 h-8 w-8 shrink-0 rounded-2xl bg-white/12 border border-white/15 grid place-items-center font-extrabold">
                                {i + 1}
                            </div>
                            <div>
                                {step.heading.map(|h| view! { <div class="font-extrabold">{h}</div> })}
                                <div class="mt-1 text-white/80 text-sm leading-relaxed">{step.body}</div>
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>
        }
        .into_view(),
    };

    view! {
        <div class=LABEL>{panel.label}</div>
        {body}
        {panel.note.map(|note| view! { <div class="mt-4 text-white/80">{note}</div> })}
    }
}

#[component]
pub fn CalloutBox(callout: Callout) -> impl IntoView {
    let title_class = if callout.prominent {
        "text-2xl font-extrabold tracking-tight"
    } else {
        "text-lg font-extrabold"
    };
    let checks_class = match callout.check_columns {
        3 => "mt-4 grid md:grid-cols-3 gap-3",
        _ => "mt-4 grid md:grid-cols-2 gap-3",
    };

    let text = view! {
        <div>
            <div class=title_class>{callout.title}</div>
            {callout.body.map(|body| view! {
                <div class="mt-2 text-white/80 leading-relaxed max-w-3xl">{body}</div>
            })}
            {(!callout.pills.is_empty()).then(|| view! {
                <div class="mt-5 flex flex-wrap gap-3">
                    {callout.pills.iter().map(|pill| view! { <InfoPill pill=*pill/> }).collect_view()}
                </div>
            })}
            {(!callout.checks.is_empty()).then(|| view! {
                <ul class=checks_class>
                    {callout.checks.iter().map(|item| view! { <Bullet text=*item/> }).collect_view()}
                </ul>
            })}
            {(!callout.actions.is_empty()).then(|| view! {
                <ActionRow actions=callout.actions.to_vec() class="mt-5"/>
            })}
        </div>
    };

    view! {
        <div class=CARD>
            {match callout.aside {
                Some(aside) => view! {
                    <div class="grid md:grid-cols-2 gap-4 items-center">
                        {text}
                        <div class="rounded-3xl bg-white/8 border border-white/10 p-5">
                            <PanelContent panel=aside/>
                        </div>
                    </div>
                }
                .into_view(),
                None => text.into_view(),
            }}
        </div>
    }
}

#[component]
fn ThankYouCard(thanks: ThankYou, entrance: Motion) -> impl IntoView {
    let next = thanks.next;
    view! {
        <Reveal motion=entrance class=CARD>
            {thanks.label.map(|label| view! { <div class=LABEL>{label}</div> })}
            <div class="mt-3 text-2xl font-extrabold tracking-tight">{thanks.title}</div>
            <div class="mt-2 text-white/80 leading-relaxed">{thanks.body}</div>
            <div class="mt-6 rounded-3xl bg-white/8 border border-white/10 p-5">
                {next.label.map(|label| view! { <div class="text-xs text-white/70 tracking-widest font-semibold">{label}</div> })}
                <div class="font-extrabold">{next.title}</div>
                <div class="mt-2 text-white/80 text-sm">{next.body}</div>
                <div class="mt-4">
                    <ActionLink action=next.action/>
                </div>
            </div>
        </Reveal>
    }
}

/// Contact card beside the thank-you note
#[component]
pub fn ContactPair(contact: ContactBlock, entrance: Motion) -> impl IntoView {
    let ContactBlock {
        show_address,
        actions,
        thanks,
    } = contact;
    view! {
        <div class="grid lg:grid-cols-2 gap-5 items-start">
            <Reveal motion=entrance class=CARD>
                {(!show_address).then(|| view! {
                    <div class="mb-5 text-sm font-bold tracking-wide text-white/90">"CONTACT"</div>
                })}
                <ContactLines address=show_address/>
                <ActionRow actions=actions class="mt-6"/>
            </Reveal>
            <ThankYouCard thanks=thanks entrance=entrance/>
        </div>
    }
}

#[component]
pub fn SectionView(section: PageSection, entrance: Motion) -> impl IntoView {
    let PageSection {
        id,
        eyebrow,
        title,
        subtitle,
        blocks,
    } = section;
    view! {
        <section id=id class="relative py-12 md:py-16">
            <div class="mx-auto max-w-6xl px-4">
                <Reveal motion=entrance>
                    {eyebrow.map(|text| view! {
                        <div class="text-white/75 tracking-[0.22em] text-xs font-semibold uppercase">{text}</div>
                    })}
                    <h2 class="mt-2 text-2xl md:text-4xl font-extrabold tracking-tight">{title}</h2>
                    {subtitle.map(|text| view! {
                        <div class="mt-3 text-white/80 max-w-3xl leading-relaxed">{text}</div>
                    })}
                </Reveal>
                <div class="mt-8 grid gap-6">
                    {blocks.into_iter().map(|block| block_view(block, entrance)).collect_view()}
                </div>
            </div>
        </section>
    }
}

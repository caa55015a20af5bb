//! Page heroes

use super::blocks::{block_view, Bullet};
use super::cards::{ActionLink, ActionRow, ContactLines, InfoPill};
use super::decor::HexImage;
use super::reveal::Reveal;
use leptos::*;
use ng_core::content::training::visit_line;
use ng_core::page::{Block, Cover, HeroVisual};
use ng_core::reveal::Motion;

/// Entrance for the `step`-th element of the hero copy column
fn cascade(step: u32) -> Motion {
    Motion::on_mount(18, 40 + 60 * step)
}

#[component]
pub fn CoverHero(cover: Cover) -> impl IntoView {
    let Cover {
        back,
        kicker,
        headline,
        tagline,
        subline,
        badge,
        pills,
        actions,
        facts,
        footnote,
        visual,
    } = cover;

    view! {
        <section class="relative mx-auto max-w-6xl px-4 pt-10 pb-10 md:pt-12 md:pb-12">
            {back.map(|action| view! { <ActionLink action=action/> })}
            <div class="mt-6 grid lg:grid-cols-2 gap-10 items-center">
                <div>
                    <Reveal motion=Motion::fast(12) class="text-white/85 tracking-widest text-sm font-semibold">
                        {kicker}
                    </Reveal>
                    <Reveal motion=cascade(0)>
                        <h1 class="mt-3 text-4xl md:text-6xl font-extrabold leading-[1.05] tracking-tight">
                            {headline
                                .iter()
                                .map(|line| view! { <span class="block">{*line}</span> })
                                .collect_view()}
                        </h1>
                    </Reveal>
                    <Reveal motion=cascade(1)>
                        <p class="mt-4 text-lg md:text-xl text-white/85 font-semibold">{tagline}</p>
                    </Reveal>
                    {subline.map(|text| view! {
                        <Reveal motion=cascade(2) class="mt-2 text-white/85 font-semibold">{text}</Reveal>
                    })}
                    {badge.map(|text| view! {
                        <Reveal motion=cascade(2)>
                            <div class="mt-7 inline-flex items-center rounded-full bg-white/12 border border-white/15 px-5 py-3 shadow-soft">
                                <span class="text-base font-bold tracking-wide">{text}</span>
                            </div>
                        </Reveal>
                    })}
                    {(!pills.is_empty()).then(|| view! {
                        <Reveal motion=cascade(3) class="mt-6 flex flex-wrap gap-3">
                            {pills.iter().map(|pill| view! { <InfoPill pill=*pill/> }).collect_view()}
                        </Reveal>
                    })}
                    <Reveal motion=cascade(4)>
                        <ActionRow actions=actions class="mt-8"/>
                    </Reveal>
                    {(!facts.is_empty()).then(|| view! {
                        <Reveal motion=cascade(5) class="mt-8 grid sm:grid-cols-3 gap-3">
                            {facts
                                .iter()
                                .map(|(label, value)| view! {
                                    <div class="rounded-3xl bg-white/10 border border-white/15 p-4">
                                        <div class="text-xs text-white/70 tracking-widest font-semibold">{*label}</div>
                                        <div class="mt-1 font-bold">{*value}</div>
                                    </div>
                                })
                                .collect_view()}
                        </Reveal>
                    })}
                    {footnote.map(|text| view! {
                        <Reveal motion=cascade(5).fade() class="mt-6 text-white/70 text-sm font-semibold tracking-wide">
                            {text}
                        </Reveal>
                    })}
                </div>
                <Reveal motion=Motion::scale_in() class="relative">
                    <HeroArt visual=visual/>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn HeroArt(visual: HeroVisual) -> impl IntoView {
    match visual {
        HeroVisual::Collage { images: [first, second, third] } => view! {
            <div class="absolute inset-0 -z-10 grid place-items-center">
                <div class="h-[380px] w-[380px] rounded-full bg-white"></div>
            </div>
            <div class="grid grid-cols-2 gap-4 max-w-[520px] mx-auto">
                <HexImage src=first.src alt=first.alt class="h-56 w-full"/>
                <HexImage src=second.src alt=second.alt class="h-56 w-full"/>
                <div class="col-span-2 flex justify-center">
                    <HexImage src=third.src alt=third.alt class="h-56 w-[65%]"/>
                </div>
            </div>
            <div class="mt-7 rounded-3xl bg-white/10 border border-white/15 p-5 shadow-soft">
                <div class="mb-4 text-sm font-bold tracking-wide text-white/90">"CONTACT"</div>
                <ContactLines/>
            </div>
        }
        .into_view(),
        HeroVisual::Panel {
            title,
            blurb,
            highlights,
            images: [first, second, third],
            cta,
        } => view! {
            <div class="rounded-[32px] bg-white/10 border border-white/15 shadow-soft overflow-hidden">
                <div class="grid md:grid-cols-2 gap-0">
                    <div class="p-6">
                        <div class="text-sm font-bold tracking-wide text-white/90">{title}</div>
                        {blurb.map(|text| view! { <div class="mt-2 text-white/80 text-sm leading-relaxed">{text}</div> })}
                        <ul class="mt-4 space-y-3">
                            {highlights.iter().map(|item| view! { <Bullet text=*item/> }).collect_view()}
                        </ul>
                    </div>
                    <div class="p-6 pt-0 md:pt-6">
                        <div class="grid grid-cols-2 gap-3">
                            <HexImage src=first.src alt=first.alt class="h-36 w-full"/>
                            <HexImage src=second.src alt=second.alt class="h-36 w-full"/>
                            <div class="col-span-2">
                                <HexImage src=third.src alt=third.alt class="h-40 w-full"/>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="h-px bg-white/10"></div>
                <div class="p-6 flex flex-wrap items-center justify-between gap-3">
                    <div class="text-white/85 font-semibold">{visit_line()}</div>
                    <ActionLink action=cta/>
                </div>
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn BannerHero(title: &'static str, intro: &'static str, blocks: Vec<Block>, entrance: Motion) -> impl IntoView {
    view! {
        <section class="relative mx-auto max-w-6xl px-4 py-12">
            <Reveal motion=Motion::on_mount(entrance.offset_y, 0)>
                <h1 class="text-3xl md:text-5xl font-extrabold tracking-tight">{title}</h1>
                <p class="mt-3 text-white/80 max-w-2xl">{intro}</p>
            </Reveal>
            <div class="mt-8 grid gap-6">
                {blocks.into_iter().map(|block| block_view(block, entrance)).collect_view()}
            </div>
        </section>
    }
}

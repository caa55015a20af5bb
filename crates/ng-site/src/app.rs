//! Main application component

use crate::components::Navbar;
use crate::pages::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ng_core::reveal::REVEAL_CSS;
use ng_core::Route as SiteRoute;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/ng-site.css"/>
        <Style>{REVEAL_CSS}</Style>
        <Meta name="description" content="Certified professional training with interview and placement support."/>
        <Router>
            <div class="min-h-screen bg-brand text-white">
                <Navbar/>
                <Routes>
                    <Route path=SiteRoute::Home.path() view=HomePage/>
                    <Route path=SiteRoute::Services.path() view=ServicesPage/>
                    <Route path=SiteRoute::HrTraining.path() view=HrTrainingPage/>
                    <Route path=SiteRoute::CustomerTraining.path() view=CustomerTrainingPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </div>
        </Router>
    }
}

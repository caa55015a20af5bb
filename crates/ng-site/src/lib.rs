//! Nemesis Group site front end
//!
//! Leptos components rendering the `ng-core` page model. The `ssr` feature
//! builds the axum server; `hydrate` builds the browser bundle.

pub mod app;
mod components;
mod pages;
#[cfg(feature = "ssr")]
pub mod fileserv;
#[cfg(feature = "ssr")]
pub mod server;

/// Browser entry point
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use crate::components::reveal::browser::observer_available;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    // Pending reveal styles only apply under this class, so browsers that
    // cannot observe visibility keep every block visible.
    if observer_available() {
        if let Some(root) = leptos::document().document_element() {
            if let Err(err) = root.class_list().add_1("reveal-ready") {
                tracing::warn!(?err, "could not enable reveal styles");
            }
        }
    }

    leptos::mount_to_body(App);
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use crate::app::App;
    use leptos::*;
    use leptos_router::{RouterIntegrationContext, ServerIntegration};
    use ng_core::content::CONTACT;
    use ng_core::validate::check_href;
    use ng_core::Route;

    fn render(path: &str) -> String {
        let path = format!("http://localhost{}", path);
        leptos::ssr::render_to_string(move || {
            provide_context(RouterIntegrationContext::new(ServerIntegration { path }));
            view! { <App/> }
        })
        .to_string()
    }

    fn hrefs(html: &str) -> Vec<String> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    /// `href` of the last link opened before `label` appears
    fn href_before(html: &str, label: &str) -> Option<String> {
        let at = html.find(label)?;
        let start = html[..at].rfind("href=\"")? + "href=\"".len();
        html[start..].split('"').next().map(str::to_string)
    }

    #[test]
    fn test_every_rendered_link_resolves() {
        for route in Route::ALL {
            let html = render(route.path());
            let links = hrefs(&html);
            assert!(!links.is_empty(), "no links on {}", route);
            for href in links.iter().filter(|h| !h.starts_with("/pkg/")) {
                if let Err(err) = check_href(route, href) {
                    panic!("{} on {}: {}", href, route, err);
                }
            }
        }
    }

    #[test]
    fn test_hr_training_page() {
        let html = render("/services/hr-training");
        assert!(html.contains(CONTACT.phone));
        assert!(html.contains("id=\"enroll\""));
        assert!(html.contains("id=\"skills\""));
        assert_eq!(
            href_before(&html, "View Skills Covered").as_deref(),
            Some("#skills")
        );
    }

    #[test]
    fn test_explore_services_leads_to_two_programs() {
        let home = render("/");
        assert_eq!(
            href_before(&home, "Explore Services").as_deref(),
            Some("/services")
        );

        let services = render("/services");
        assert_eq!(services.matches("data-service-tile").count(), 2);
        assert!(services.contains("href=\"/services/hr-training\""));
        assert!(services.contains("href=\"/services/customer-training\""));
    }

    #[test]
    fn test_blocks_render_pending_until_revealed() {
        let html = render("/");
        assert!(html.contains("data-reveal=\"pending\""));
        assert!(!html.contains("data-reveal=\"revealed\""));
        assert!(html.contains("--reveal-y:16px"));
    }

    #[test]
    fn test_dropdown_starts_closed() {
        let html = render("/services");
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("role=\"menu\""));
    }

    #[test]
    fn test_unknown_path_renders_not_found() {
        let html = render("/careers");
        assert!(html.contains("Page not found"));
        assert_eq!(href_before(&html, "Back to Home").as_deref(), Some("/"));
    }
}

// Sticky blog header and the shell that hosts it.
use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_router::{
    SsrMode, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod components;
pub mod config;
pub mod favicon;
pub mod locale;
pub mod nav;
mod pages;
pub mod sticky;
pub mod theme;
pub mod types;
pub mod viewport;

use api::site_config;
use config::HeaderConfig;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/blog.css")
                    .build(),
            ),
        )),
        body().class("bg-day dark:bg-night").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    theme::provide_theme();

    // Blocking so the configuration is serialized into the page for hydration.
    let config = Resource::new_blocking(|| (), |()| async move { site_config().await });

    let routes = move |config: HeaderConfig| {
        provide_context(config);
        view! {
            <FlatRoutes fallback=|| {
                let mut errors = Errors::default();
                errors.insert_with_default_key(error_template::AppError::NotFound);
                error_template::component(errors)
            }>
                <Route path=StaticSegment("") view=pages::home ssr=SsrMode::InOrder/>
                <Route path=StaticSegment("about") view=pages::about/>
                <Route path=StaticSegment("search") view=pages::search/>
            </FlatRoutes>
        }
    };

    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <Suspense fallback=|| ()>
                    {move || {
                        config.get().map(|result| {
                            let config = result.unwrap_or_else(|err| {
                                leptos::logging::error!("falling back to the default header configuration: {err}");
                                HeaderConfig::default()
                            });
                            routes(config)
                        })
                    }}
                </Suspense>
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_function_signatures() {
        // Rendering needs a full Leptos runtime; the signatures are what the server relies on.
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("blog").build();
        assert_eq!(options.output_name.as_ref(), "blog");
    }
}

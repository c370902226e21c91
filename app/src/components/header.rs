//! Sticky site header: sentinel, avatar, logo, title block and navigation.
//!
//! Two pieces of local state drive it. [`FaviconState`] swaps the logo source
//! with the theme and pins it to the default icon after a load error.
//! [`StickyState`] follows the sentinel rendered just above the bar through an
//! `IntersectionObserver` held in an [`ObservationGuard`]; the guard is replaced
//! when the sentinel element changes and dropped when the header unmounts.

use leptos::{ev::MouseEvent, html::Div, prelude::*};

use crate::{
    components::{avatar, header_name, nav_bar},
    config::HeaderConfig,
    favicon::FaviconState,
    locale::Locale,
    nav::visible_nav_links,
    sticky::{HeaderRegion, StickyState, handle_header_click},
    theme::use_theme,
    viewport::{BrowserScroller, BrowserViewport, ObservationGuard, observe_sentinel},
};

const BAR_CLASS: &str = "sticky-nav group m-auto w-full h-6 flex flex-row justify-between items-center mb-2 md:mb-12 py-8 bg-opacity-60";

fn width_class(full_width: bool) -> &'static str {
    if full_width { "px-4 md:px-24" } else { "max-w-3xl px-4" }
}

/// A click counts as a background click only when it lands on the bar itself.
fn bar_click_region(ev: &MouseEvent) -> Option<HeaderRegion> {
    let target = ev.target()?;
    (Some(target) == ev.current_target()).then_some(HeaderRegion::Background)
}

/// Renders the header.
///
/// # Arguments
///
/// * `config` - Site configuration.
/// * `nav_bar_title` - Post title shown in place of the site title while collapsed.
/// * `full_width` - Stretch the bar instead of using the reading width.
pub fn component(config: HeaderConfig, nav_bar_title: Option<String>, full_width: bool) -> impl IntoView {
    let theme = use_theme();
    let links = visible_nav_links(&config, &Locale::for_lang(&config.lang));

    let favicon = RwSignal::new(FaviconState::default());
    let sticky = RwSignal::new(StickyState::initial(config.auto_collapsed_nav_bar));

    let sentinel = NodeRef::<Div>::new();
    let observation = StoredValue::new_local(None::<ObservationGuard<BrowserViewport>>);

    if sticky.get_untracked().is_observing() {
        // Re-runs whenever the sentinel element is (re)mounted.
        Effect::new(move |_| {
            let built = observe_sentinel(sentinel.get(), |element| {
                BrowserViewport::new(element.into(), move |is_intersecting| {
                    sticky.maybe_update(|state| state.observe(is_intersecting));
                })
            });
            match built {
                Ok(guard) => observation.set_value(guard),
                Err(err) => leptos::logging::debug_warn!("header sentinel is not observable: {err:?}"),
            }
        });

        on_cleanup(move || {
            observation.try_update_value(|guard| *guard = None);
        });
    }

    let on_bar_click = move |ev: MouseEvent| {
        if let Some(region) = bar_click_region(&ev) {
            handle_header_click(region, &BrowserScroller);
        }
    };
    let on_title_click = move |_: MouseEvent| {
        handle_header_click(HeaderRegion::Title, &BrowserScroller);
    };
    let on_logo_error = move |_| {
        favicon.maybe_update(|state| {
            let newly_failed = state.mark_failed();
            if newly_failed {
                leptos::logging::debug_warn!("header logo failed to load, using the default icon");
            }
            newly_failed
        });
    };

    let bar_class = move || format!("{BAR_CLASS} {} {}", width_class(full_width), sticky.get().class());
    let logo_src = move || favicon.get().path(theme.get());

    view! {
        <div class="observer-element h-4 md:h-12" node_ref=sentinel></div>
        <div class=bar_class id="sticky-nav" on:click=on_bar_click>
            {avatar::component()}
            <div class="flex items-center">
                <a href="/" aria-label=config.title.clone()>
                    <img
                        src=logo_src
                        width="24"
                        height="24"
                        alt=config.title.clone()
                        on:error=on_logo_error
                    />
                </a>
                {header_name::component(
                    config.title.clone(),
                    config.description.clone(),
                    nav_bar_title,
                    on_title_click,
                )}
            </div>
            {nav_bar::component(links)}
        </div>
    }
}

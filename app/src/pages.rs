//! Pages hosting the header.
//!
//! The blog content itself is served elsewhere; these routes give the header
//! something to scroll over and exercise both layouts.

use leptos::{
    html::{h1, main, p},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

use crate::{components::header, config::HeaderConfig, locale::Locale};

fn page(nav_bar_title: Option<String>, full_width: bool, heading: String, body: Option<String>) -> impl IntoView {
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    let document_title = match &nav_bar_title {
        Some(title) => format!("{title} | {}", config.title),
        None => config.title.clone(),
    };

    (
        Title(TitleProps::builder().text(document_title).build()),
        header::component(config, nav_bar_title, full_width),
        main()
            .class("m-auto flex-grow w-full max-w-3xl px-4 min-h-[150vh]")
            .child((
                h1().class("text-3xl font-bold text-black dark:text-white").child(heading),
                body.map(|body| p().class("mt-4 text-gray-700 dark:text-gray-300").child(body)),
            )),
    )
}

pub fn home() -> impl IntoView {
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    page(None, false, config.title, config.description)
}

pub fn about() -> impl IntoView {
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    let label = Locale::for_lang(&config.lang).nav.about.to_owned();
    page(Some(label.clone()), false, label, None)
}

pub fn search() -> impl IntoView {
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    let label = Locale::for_lang(&config.lang).nav.search.to_owned();
    page(Some(label.clone()), true, label, None)
}

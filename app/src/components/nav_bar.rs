use leptos::{
    html::{a, div, li, ul},
    prelude::*,
};
use leptos_router::components::{A, AProps};

use crate::nav::NavLink;

/// Renders the given entries in order. External entries open in a new tab.
pub fn component(links: Vec<NavLink>) -> impl IntoView {
    let items = links
        .into_iter()
        .map(|link| {
            li().class("block ml-4 text-black dark:text-gray-50 nav")
                .child(link_view(link))
        })
        .collect_view();

    div().class("flex-shrink-0").child(ul().class("flex flex-row").child(items))
}

fn link_view(link: NavLink) -> AnyView {
    match link.target() {
        Some(target) => a()
            .href(link.destination)
            .target(target)
            .rel("noopener noreferrer")
            .child(link.label)
            .into_any(),
        None => {
            let label = link.label;
            A(AProps::builder()
                .href(link.destination)
                .children(ToChildren::to_children(move || label))
                .build())
            .into_any()
        }
    }
}

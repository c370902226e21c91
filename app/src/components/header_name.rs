use leptos::{ev::MouseEvent, prelude::*};

/// Site title and description, with the post title stacked in the same grid
/// cell. The stylesheet decides which one shows depending on the bar state.
pub fn component<F>(
    site_title: String,
    site_description: Option<String>,
    post_title: Option<String>,
    on_click: F,
) -> impl IntoView
where
    F: FnMut(MouseEvent) + 'static,
{
    view! {
        <p
            class="header-name ml-2 font-medium text-gray-600 dark:text-gray-300 capture-pointer-events grid-rows-1 grid-cols-1 items-center"
            on:click=on_click
        >
            {post_title.map(|title| view! {
                <span class="post-title row-start-1 col-start-1">{title}</span>
            })}
            <span class="row-start-1 col-start-1">
                <span class="site-title">{site_title}</span>
                {site_description.map(|description| view! {
                    <span class="site-description font-normal">", "{description}</span>
                })}
            </span>
        </p>
    }
}

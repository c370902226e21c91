//! Error page rendered by the router fallback.
//!
//! On the server the first [`AppError`] also sets the response status.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Pulls the [`AppError`]s out of an error collection, ignoring foreign errors.
fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the errors collected by the router or an error boundary.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    if let Some(first) = errors.first()
        && let Some(response) = use_context::<leptos_axum::ResponseOptions>()
    {
        response.set_status(first.status_code());
    }

    let lines = errors
        .into_iter()
        .map(|error| {
            p().class("text-xl tracking-widest text-gray-500 uppercase")
                .child(format!("{} | {error}", error.status_code().as_u16()))
        })
        .collect_view();

    div().class("grid place-content-center px-4 h-full antialiased").child((
        h1().class("mb-6 text-center text-black dark:text-gray-50").child("Error"),
        lines,
        div().class("mt-6 text-center text-gray-600 dark:text-gray-300 hover:underline").child(A(
            AProps::builder()
                .href("/")
                .children(ToChildren::to_children(|| "Go back home"))
                .build(),
        )),
    ))
}

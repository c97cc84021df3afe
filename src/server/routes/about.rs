use axum::{extract::State, http::request::Parts, response::Html};

use crate::{
    people::TEMPLATE_ABOUT,
    server::{render::Context, Ctx, HtmlErrorPage},
};

pub const PATH_ABOUT: &str = "/about/";

pub async fn handler_about(
    State(ctx): State<Ctx>,
    request: Parts,
) -> Result<Html<String>, HtmlErrorPage> {
    tracing::debug!(template = TEMPLATE_ABOUT, "rendering about page");
    let html = ctx
        .renderer
        .render(&request, TEMPLATE_ABOUT, Context::new())?;

    Ok(html)
}

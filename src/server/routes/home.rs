use axum::{extract::State, http::request::Parts, response::Html};

use crate::{
    people::{POSTS, TEMPLATE_HOME},
    server::{render::Context, Ctx, HtmlErrorPage},
};

pub const PATH_HOME: &str = "/";

pub async fn handler_home(
    State(ctx): State<Ctx>,
    request: Parts,
) -> Result<Html<String>, HtmlErrorPage> {
    let mut context = Context::new();
    context.insert("posts", serde_json::json!(POSTS));

    tracing::debug!(template = TEMPLATE_HOME, "rendering post listing");
    let html = ctx.renderer.render(&request, TEMPLATE_HOME, context)?;

    Ok(html)
}

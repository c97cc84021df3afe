use axum::{http::request::Parts, response::Html};
use cercis::prelude::*;

use crate::{
    people::{Post, TEMPLATE_ABOUT, TEMPLATE_HOME},
    server::{
        render::Context,
        routes::{about::PATH_ABOUT, home::PATH_HOME},
    },
};

use super::HtmlError;

const SITE_NAME: &str = "People Blog";

/// Renders the `people/*` templates as cercis components.
#[derive(Clone, Copy, Debug, Default)]
pub struct Templates;

impl crate::server::render::Render for Templates {
    fn render(
        &self,
        request: &Parts,
        template: &str,
        context: Context,
    ) -> Result<Html<String>, anyhow::Error> {
        let path = request.uri.path();

        let html = match template {
            TEMPLATE_HOME => {
                let posts: Vec<Post> = context.get("posts")?.unwrap_or_default();
                render_homepage(path, &posts)
            }
            TEMPLATE_ABOUT => render_about_page(path),
            other => anyhow::bail!("template '{other}' does not exist"),
        };

        Ok(Html(html))
    }
}

#[component]
fn NavItem<'a>(href: &'a str, label: &'a str, current: &'a str) -> Element {
    let class = if href == current {
        "navbar-item is-active"
    } else {
        "navbar-item"
    };

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            "{label}"
        }
    }
}

#[component]
fn NavBar<'a>(current: &'a str) -> Element {
    rsx! {
        nav {
            class: "navbar is-dark",
            role: "navigation",
            aria_label: "main navigation",

            div {
                class: "navbar-brand",

                a {
                    class: "navbar-item",
                    href: "{PATH_HOME}",
                    b { "{SITE_NAME}" }
                }
            }

            div {
                class: "navbar-menu",

                div {
                    class: "navbar-start",

                    NavItem {
                        href: PATH_HOME,
                        label: "Home",
                        current: current,
                    }

                    NavItem {
                        href: PATH_ABOUT,
                        label: "About",
                        current: current,
                    }
                }
            }
        }
    }
}

#[component]
pub fn PageLayout<'a>(title: &'a str, current: &'a str, children: Element<'a>) -> Element {
    rsx! {
        html {
            head {
                meta {
                    charset: "utf-8",
                }
                link {
                    rel: "stylesheet",
                    href: "https://cdn.jsdelivr.net/npm/bulma@1.0.1/css/bulma.min.css",
                }

                title {
                    "{title}"
                }
            }

            body {
                NavBar {
                    current: current,
                }

                section {
                    class: "section",
                    div {
                        class: "container",
                        children
                    }
                }

                footer {
                    class: "footer",
                    div {
                        class: "content has-text-centered",
                        p {
                            "{SITE_NAME}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PostCard<'a>(post: &'a Post) -> Element {
    rsx! {
        article {
            class: "box",

            div {
                class: "is-flex is-justify-content-space-between mb-2",

                span {
                    class: "has-text-weight-semibold",
                    "{post.author}"
                }

                small {
                    class: "has-text-grey",
                    "{post.date_posted}"
                }
            }

            h2 {
                class: "title is-4",
                "{post.title}"
            }

            p {
                class: "content",
                "{post.content}"
            }
        }
    }
}

#[component]
fn Homepage<'a>(posts: &'a [Post]) -> Element {
    rsx! {
        div {
            if posts.is_empty() {
                p {
                    class: "notification",
                    "No posts yet."
                }
            }

            for post in posts.iter() {
                PostCard {
                    post: post,
                }
            }
        }
    }
}

pub fn render_homepage(current: &str, posts: &[Post]) -> String {
    let output = rsx! {
        PageLayout {
            title: SITE_NAME,
            current: current,
            Homepage {
                posts: posts,
            }
        }
    };

    output.render()
}

pub fn render_about_page(current: &str) -> String {
    let title = format!("{SITE_NAME} - About");

    let output = rsx! {
        PageLayout {
            title: &title,
            current: current,
            div {
                class: "box",
                h1 {
                    class: "title is-2",
                    "About"
                }
                p {
                    "A small blog about learning Python, web development and data science."
                }
            }
        }
    };

    output.render()
}

#[component]
fn HtmlErrorView<'a>(error: &'a HtmlError) -> Element {
    let details = if let Some(err) = &error.source {
        let content = format!("{:#?}", err);

        rsx! {
            hr {}
            pre {
                "{content}"
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        div {
            class: "notification is-danger",

            "{error.message}"

            details
        }
    }
}

pub fn render_html_error_page(error: &HtmlError) -> String {
    let title = format!("{SITE_NAME} - Error");

    let output = rsx! {
        PageLayout {
            title: &title,
            current: "",
            HtmlErrorView {
                error: error,
            }
        }
    };

    output.render()
}

use std::borrow::Cow;

/// Template for the post listing page.
pub const TEMPLATE_HOME: &str = "people/home.html";
/// Template for the static about page.
pub const TEMPLATE_ABOUT: &str = "people/about.html";

/// A single blog entry.
///
/// `date_posted` is kept as written (day/month/year) and never parsed.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub author: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub content: Cow<'static, str>,
    pub date_posted: Cow<'static, str>,
}

impl Post {
    const fn new_static(
        author: &'static str,
        title: &'static str,
        content: &'static str,
        date_posted: &'static str,
    ) -> Self {
        Self {
            author: Cow::Borrowed(author),
            title: Cow::Borrowed(title),
            content: Cow::Borrowed(content),
            date_posted: Cow::Borrowed(date_posted),
        }
    }
}

/// All posts, in display order.
pub static POSTS: [Post; 3] = [
    Post::new_static(
        "Axel-Cleris Gailloty",
        "Learning Python",
        "There are lot of things that can be done with Python",
        "22/04/2020",
    ),
    Post::new_static(
        "Axel-Cleris Gailloty",
        "Web development with Python",
        "I am learning the Django framework for web",
        "24/04/2020",
    ),
    Post::new_static(
        "Axel",
        "Data science with Python",
        "There are quite of good libraries for data science in Python",
        "28/04/2020",
    ),
];

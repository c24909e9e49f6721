//! Placeholder substitution for the home page.
//!
//! Templates are static HTML with marker tokens. Rendering is plain
//! find-and-replace applied in a fixed order; nothing is escaped, so post
//! text reaches the page verbatim.

/// Marker for the post body inside the article fragment.
pub const CONTENT_PLACEHOLDER: &str = "!content!";

/// Marker for the post title inside the article fragment.
pub const TITLE_PLACEHOLDER: &str = "!title!";

/// Marker for the submission time inside the article fragment.
pub const TIME_PLACEHOLDER: &str = "!time!";

/// Marker for the concatenated fragments inside the page template.
pub const ARTICLES_PLACEHOLDER: &str = "!articles!";

/// The three values substituted into one article fragment.
#[derive(Debug, Clone, Copy)]
pub struct ArticleFields<'a> {
    pub content: &'a str,
    pub title: &'a str,
    pub time: &'a str,
}

/// Render one article fragment.
///
/// Replacements run content, then title, then time. A post whose content
/// contains `!title!` therefore has that marker replaced by the title too.
pub fn render_article(template: &str, fields: ArticleFields<'_>) -> String {
    template
        .replace(CONTENT_PLACEHOLDER, fields.content)
        .replace(TITLE_PLACEHOLDER, fields.title)
        .replace(TIME_PLACEHOLDER, fields.time)
}

/// Render every article in order and splice the result into the page.
pub fn render_page<'a, I>(page_template: &str, article_template: &str, articles: I) -> String
where
    I: IntoIterator<Item = ArticleFields<'a>>,
{
    let articles: String = articles
        .into_iter()
        .map(|fields| render_article(article_template, fields))
        .collect();

    page_template.replace(ARTICLES_PLACEHOLDER, &articles)
}

use std::fmt::Write as FmtWrite;

use crate::error::Result;
use crate::model::{BlogPost, Language};

use super::{ColorMode, ansi};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait BlogFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_list(&self, posts: &[BlogPost]) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_post(&self, post: &BlogPost) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_categories(&self, categories: &[String]) -> Result<String>;
}

const fn status(post: &BlogPost) -> &'static str {
    if post.published { "published" } else { "draft" }
}

fn languages(post: &BlogPost) -> String {
    post.translated_languages()
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(",")
}

pub struct BlogTextFormatter {
    use_colors: bool,
}

impl BlogTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.stdout_enabled(),
        }
    }

    fn status(&self, post: &BlogPost) -> String {
        let label = format!("{:<9}", status(post));
        if !self.use_colors {
            return label;
        }
        let color = if post.published {
            ansi::GREEN
        } else {
            ansi::YELLOW
        };
        format!("{color}{label}{}", ansi::RESET)
    }
}

impl BlogFormatter for BlogTextFormatter {
    fn format_list(&self, posts: &[BlogPost]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Blog Posts ({}):", posts.len()).ok();
        if posts.is_empty() {
            writeln!(output, "  (none)").ok();
            return Ok(output);
        }

        for post in posts {
            let featured = if post.featured { " *" } else { "" };
            writeln!(
                output,
                "  {} {}{featured}  {}",
                self.status(post),
                post.slug,
                post.title(Language::En)
            )
            .ok();
            writeln!(
                output,
                "    category: {}  languages: {}  updated: {}  id: {}",
                if post.category.is_empty() {
                    "-"
                } else {
                    post.category.as_str()
                },
                languages(post),
                post.updated_at.format(DATE_FORMAT),
                post.id
            )
            .ok();
        }
        Ok(output)
    }

    fn format_post(&self, post: &BlogPost) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "{}", post.title(Language::En)).ok();
        writeln!(output, "  id: {}", post.id).ok();
        writeln!(output, "  slug: {}", post.slug).ok();
        writeln!(output, "  status: {}", status(post)).ok();
        writeln!(output, "  featured: {}", post.featured).ok();
        writeln!(output, "  author: {}", post.author).ok();
        writeln!(output, "  category: {}", post.category).ok();
        writeln!(output, "  tags: {}", post.tag_list().join(", ")).ok();
        writeln!(output, "  created: {}", post.created_at.to_rfc3339()).ok();
        writeln!(output, "  updated: {}", post.updated_at.to_rfc3339()).ok();

        for (lang, translation) in &post.translations {
            writeln!(output).ok();
            writeln!(output, "[{}] {}", lang.name(), translation.title).ok();
            if !translation.excerpt.is_empty() {
                writeln!(output, "  {}", translation.excerpt).ok();
            }
        }
        Ok(output)
    }

    fn format_categories(&self, categories: &[String]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Categories ({}):", categories.len()).ok();
        if categories.is_empty() {
            writeln!(output, "  (none)").ok();
        }
        for category in categories {
            writeln!(output, "  {category}").ok();
        }
        Ok(output)
    }
}

/// Posts serialize exactly as stored.
pub struct BlogJsonFormatter;

impl BlogFormatter for BlogJsonFormatter {
    fn format_list(&self, posts: &[BlogPost]) -> Result<String> {
        Ok(serde_json::to_string_pretty(posts)?)
    }

    fn format_post(&self, post: &BlogPost) -> Result<String> {
        Ok(serde_json::to_string_pretty(post)?)
    }

    fn format_categories(&self, categories: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(categories)?)
    }
}

pub struct BlogMarkdownFormatter;

impl BlogFormatter for BlogMarkdownFormatter {
    fn format_list(&self, posts: &[BlogPost]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "## Blog Posts ({})\n", posts.len()).ok();
        if posts.is_empty() {
            writeln!(output, "_None._").ok();
            return Ok(output);
        }

        writeln!(output, "| Slug | Title | Category | Status | Languages | Updated |").ok();
        writeln!(output, "|------|-------|----------|--------|-----------|---------|").ok();
        for post in posts {
            writeln!(
                output,
                "| `{}` | {} | {} | {} | {} | {} |",
                post.slug,
                post.title(Language::En),
                post.category,
                status(post),
                languages(post),
                post.updated_at.format(DATE_FORMAT)
            )
            .ok();
        }
        Ok(output)
    }

    fn format_post(&self, post: &BlogPost) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "# {}\n", post.title(Language::En)).ok();
        writeln!(
            output,
            "`{}` · {} · {}\n",
            post.slug,
            status(post),
            post.updated_at.format(DATE_FORMAT)
        )
        .ok();

        for (lang, translation) in &post.translations {
            writeln!(output, "## {} ({})\n", translation.title, lang.name()).ok();
            if !translation.content.is_empty() {
                writeln!(output, "{}\n", translation.content).ok();
            }
        }
        Ok(output)
    }

    fn format_categories(&self, categories: &[String]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "## Categories ({})\n", categories.len()).ok();
        if categories.is_empty() {
            writeln!(output, "_None._").ok();
        }
        for category in categories {
            writeln!(output, "- {category}").ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "blog_tests.rs"]
mod tests;

use std::path::Path;

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::cli::{BlogAction, BlogArgs, Cli};
use crate::error::RecordKind;
use crate::model::{BlogPost, BlogPostDraft, BlogPostPatch, SlugGenerator};
use crate::output::{
    BlogFormatter, BlogJsonFormatter, BlogMarkdownFormatter, BlogTextFormatter, ColorMode,
    OutputFormat,
};
use crate::service::{BlogFilter, BlogService};
use crate::store::{BlogPostStore, Clock};
use crate::{EXIT_SUCCESS, PromoAdminError, Result};

use super::context::{
    color_choice_to_mode, finish, load_effective_config, open_store, read_input, resolve_format,
    write_output,
};

#[must_use]
pub fn run_blog(args: &BlogArgs, cli: &Cli) -> i32 {
    finish(run_blog_impl(args, cli))
}

/// # Errors
/// Returns an error if the configuration or store cannot be loaded, the
/// input document is invalid, or the requested change is rejected.
pub fn run_blog_impl(args: &BlogArgs, cli: &Cli) -> Result<i32> {
    // Slug preview needs neither config nor store.
    if let BlogAction::Slug(slug) = &args.action {
        println!("{}", SlugGenerator::new().generate(&slug.title));
        return Ok(EXIT_SUCCESS);
    }

    let config = load_effective_config(cli)?;
    let mut service = BlogService::new(open_store(cli, &config)?);
    let color_mode = color_choice_to_mode(cli.color);

    match &args.action {
        BlogAction::List(list) => {
            let filter = BlogFilter {
                category: list.category.clone(),
                status: list.status,
            };
            let posts = service.list(&filter)?;
            let format = resolve_format(list.format, &config)?;
            let output = format_list(format, &posts, color_mode)?;
            write_output(None, &output, cli.quiet)?;
        }
        BlogAction::Show(show) => {
            let post = find_post(&service, &show.post)?;
            let format = show.format.unwrap_or(OutputFormat::Json);
            let output = format_post(format, &post, color_mode)?;
            write_output(None, &output, cli.quiet)?;
        }
        BlogAction::Add(add) => {
            let draft: BlogPostDraft = read_document(&add.from)?;
            let post = service.create(draft)?;
            if !cli.quiet {
                println!("Created blog post '{}' ({})", post.slug, post.id);
            }
        }
        BlogAction::Update(update) => {
            let patch: BlogPostPatch = read_document(&update.from)?;
            let post = service.update(update.id, patch)?;
            if !cli.quiet {
                println!("Updated blog post '{}' ({})", post.slug, post.id);
            }
        }
        BlogAction::Delete(delete) => {
            service.delete(delete.id)?;
            if !cli.quiet {
                println!("Deleted blog post {}", delete.id);
            }
        }
        BlogAction::Categories(list) => {
            let categories = service.categories()?;
            let format = resolve_format(list.format, &config)?;
            let output = format_categories(format, &categories, color_mode)?;
            write_output(None, &output, cli.quiet)?;
        }
        BlogAction::Slug(_) => {}
    }
    Ok(EXIT_SUCCESS)
}

/// Look a post up by id, falling back to its slug.
pub(crate) fn find_post<S: BlogPostStore, C: Clock>(
    service: &BlogService<S, C>,
    id_or_slug: &str,
) -> Result<BlogPost> {
    if let Ok(id) = Uuid::parse_str(id_or_slug) {
        return service.get(id);
    }
    service
        .find_by_slug(id_or_slug)?
        .ok_or_else(|| PromoAdminError::NotFound {
            kind: RecordKind::BlogPost,
            id: id_or_slug.to_string(),
        })
}

/// Parse a JSON draft or patch from a file or stdin.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_input(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn format_list(
    format: OutputFormat,
    posts: &[BlogPost],
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => BlogTextFormatter::new(color_mode).format_list(posts),
        OutputFormat::Json => BlogJsonFormatter.format_list(posts),
        OutputFormat::Markdown => BlogMarkdownFormatter.format_list(posts),
    }
}

fn format_post(
    format: OutputFormat,
    post: &BlogPost,
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => BlogTextFormatter::new(color_mode).format_post(post),
        OutputFormat::Json => BlogJsonFormatter.format_post(post),
        OutputFormat::Markdown => BlogMarkdownFormatter.format_post(post),
    }
}

fn format_categories(
    format: OutputFormat,
    categories: &[String],
    color_mode: ColorMode,
) -> Result<String> {
    match format {
        OutputFormat::Text => BlogTextFormatter::new(color_mode).format_categories(categories),
        OutputFormat::Json => BlogJsonFormatter.format_categories(categories),
        OutputFormat::Markdown => BlogMarkdownFormatter.format_categories(categories),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use chrono::Utc;

    use super::*;
    use crate::model::{Language, Translation};
    use crate::store::MemoryStore;

    #[test]
    fn reads_draft_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draft.json");
        std::fs::write(
            &path,
            r#"{"translations": {"en": {"title": "Hello"}}, "category": "news"}"#,
        )
        .unwrap();

        let draft: BlogPostDraft = read_document(&path).unwrap();
        assert_eq!(draft.english_title(), "Hello");
        assert_eq!(draft.category, "news");
        assert!(draft.slug.is_empty());
    }

    #[test]
    fn reads_patch_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("patch.json");
        std::fs::write(
            &path,
            r#"{"published": true, "translations": {"fr": {"title": "Salut"}}}"#,
        )
        .unwrap();

        let patch: BlogPostPatch = read_document(&path).unwrap();
        assert_eq!(patch.published, Some(true));
        assert_eq!(
            patch.translations[&Language::Fr].title.as_deref(),
            Some("Salut")
        );
    }

    fn stored_post(slug: &str) -> BlogPost {
        let mut draft = BlogPostDraft {
            slug: slug.to_string(),
            ..BlogPostDraft::default()
        };
        draft.translations.insert(
            Language::En,
            Translation {
                title: "Launch".to_string(),
                ..Translation::default()
            },
        );
        draft.into_post(Utc::now())
    }

    #[test]
    fn find_post_by_id_or_slug() {
        let post = stored_post("launch");
        let service = BlogService::new(MemoryStore::with_rows(vec![], vec![post.clone()]));

        assert_eq!(find_post(&service, &post.id.to_string()).unwrap().id, post.id);
        assert_eq!(find_post(&service, "launch").unwrap().id, post.id);

        let err = find_post(&service, "missing").unwrap_err();
        assert!(matches!(err, PromoAdminError::NotFound { .. }));
        assert!(err.is_validation());
    }

    #[test]
    fn malformed_document_is_json_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<BlogPostDraft> = read_document(&path);
        assert!(matches!(result, Err(PromoAdminError::Json(_))));
    }
}

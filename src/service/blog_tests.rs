use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::{Translation, TranslationPatch};
use crate::store::{FixedClock, MemoryStore};

use super::*;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap()
}

fn service() -> BlogService<MemoryStore, FixedClock> {
    BlogService::with_clock(MemoryStore::new(), FixedClock(t0()))
}

fn draft(slug: &str, title: &str) -> BlogPostDraft {
    let mut translations = BTreeMap::new();
    translations.insert(
        Language::En,
        Translation {
            title: title.to_string(),
            ..Translation::default()
        },
    );
    BlogPostDraft {
        slug: slug.to_string(),
        translations,
        ..BlogPostDraft::default()
    }
}

fn post(slug: &str, category: &str, published: bool, updated: DateTime<Utc>) -> BlogPost {
    let mut post = BlogPostDraft {
        category: category.to_string(),
        published,
        ..draft(slug, slug)
    }
    .into_post(updated);
    post.updated_at = updated;
    post
}

// ============================================================================
// create
// ============================================================================

#[test]
fn create_sets_timestamps() {
    let mut svc = service();
    let created = svc.create(draft("hello", "Hello")).unwrap();

    assert_eq!(created.created_at, t0());
    assert_eq!(created.updated_at, t0());
    assert_eq!(svc.get(created.id).unwrap(), created);
}

#[test]
fn create_derives_blank_slug_from_english_title() {
    let mut svc = service();
    let created = svc.create(draft("  ", "Summer Sale: 50% Off!")).unwrap();
    assert_eq!(created.slug, "summer-sale-50-off");
}

#[test]
fn create_requires_english_title() {
    let mut svc = service();
    let err = svc.create(draft("has-slug", "   ")).unwrap_err();
    assert!(matches!(err, PromoAdminError::Validation(_)));
    assert!(svc.refresh().unwrap().is_empty());
}

#[test]
fn create_rejects_title_that_slugs_to_nothing() {
    let mut svc = service();
    let err = svc.create(draft("", "日本語")).unwrap_err();
    assert!(matches!(err, PromoAdminError::Validation(_)));
}

#[test]
fn create_rejects_duplicate_slug() {
    let mut svc = service();
    svc.create(draft("same", "First")).unwrap();
    let err = svc.create(draft("same", "Second")).unwrap_err();
    assert!(matches!(err, PromoAdminError::DuplicateSlug(_)));
}

// ============================================================================
// update / delete
// ============================================================================

#[test]
fn update_merges_patch_and_bumps_updated_at() {
    let store = MemoryStore::new();
    let mut svc = BlogService::with_clock(store, FixedClock(t0()));
    let created = svc.create(draft("post", "Post")).unwrap();

    let later = t0() + Duration::hours(2);
    let mut svc = BlogService::with_clock(svc.into_store(), FixedClock(later));

    let mut translations = BTreeMap::new();
    translations.insert(
        Language::Fr,
        TranslationPatch {
            title: Some("Article".to_string()),
            ..TranslationPatch::default()
        },
    );
    let updated = svc
        .update(
            created.id,
            BlogPostPatch {
                published: Some(true),
                translations,
                ..BlogPostPatch::default()
            },
        )
        .unwrap();

    assert!(updated.published);
    assert_eq!(updated.title(Language::En), "Post");
    assert_eq!(updated.title(Language::Fr), "Article");
    assert_eq!(updated.created_at, t0());
    assert_eq!(updated.updated_at, later);
}

#[test]
fn update_cannot_clear_english_title() {
    let mut svc = service();
    let created = svc.create(draft("post", "Post")).unwrap();

    let mut translations = BTreeMap::new();
    translations.insert(
        Language::En,
        TranslationPatch {
            title: Some(String::new()),
            ..TranslationPatch::default()
        },
    );
    let err = svc
        .update(
            created.id,
            BlogPostPatch {
                translations,
                ..BlogPostPatch::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, PromoAdminError::Validation(_)));
    assert_eq!(svc.get(created.id).unwrap().title(Language::En), "Post");
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut svc = service();
    let err = svc
        .update(Uuid::new_v4(), BlogPostPatch::default())
        .unwrap_err();
    assert!(matches!(err, PromoAdminError::NotFound { .. }));
}

#[test]
fn update_slug_collision_is_rejected() {
    let mut svc = service();
    svc.create(draft("taken", "Taken")).unwrap();
    let other = svc.create(draft("other", "Other")).unwrap();

    let err = svc
        .update(
            other.id,
            BlogPostPatch {
                slug: Some("taken".to_string()),
                ..BlogPostPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, PromoAdminError::DuplicateSlug(_)));
}

#[test]
fn delete_then_get_is_not_found() {
    let mut svc = service();
    let created = svc.create(draft("gone", "Gone")).unwrap();

    svc.delete(created.id).unwrap();
    assert!(svc.get(created.id).is_err());
    assert!(svc.delete(created.id).is_err());
}

// ============================================================================
// refresh / list / lookup
// ============================================================================

#[test]
fn refresh_orders_by_updated_at_then_slug() {
    let rows = vec![
        post("old", "", true, t0() - Duration::days(2)),
        post("b", "", true, t0()),
        post("a", "", true, t0()),
    ];
    let svc = BlogService::new(MemoryStore::with_rows(vec![], rows));

    let slugs: Vec<_> = svc.refresh().unwrap().into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["a", "b", "old"]);
}

#[test]
fn list_filters_by_category_and_status() {
    let rows = vec![
        post("news-live", "news", true, t0()),
        post("news-draft", "news", false, t0()),
        post("guide-live", "guides", true, t0()),
    ];
    let svc = BlogService::new(MemoryStore::with_rows(vec![], rows));

    let drafts = svc
        .list(&BlogFilter {
            category: Some("news".to_string()),
            status: PublishStatus::Draft,
        })
        .unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].slug, "news-draft");

    let published = svc
        .list(&BlogFilter {
            category: None,
            status: PublishStatus::Published,
        })
        .unwrap();
    assert_eq!(published.len(), 2);

    assert_eq!(svc.list(&BlogFilter::default()).unwrap().len(), 3);
}

#[test]
fn find_by_slug_returns_match_or_none() {
    let svc = BlogService::new(MemoryStore::with_rows(
        vec![],
        vec![post("here", "", false, t0())],
    ));
    assert!(svc.find_by_slug("here").unwrap().is_some());
    assert!(svc.find_by_slug("missing").unwrap().is_none());
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let rows = vec![
        post("a", "news", true, t0()),
        post("b", "", true, t0()),
        post("c", "guides", true, t0()),
        post("d", "news", true, t0()),
    ];
    assert_eq!(categories(&rows), vec!["news", "guides"]);
}

#[test]
fn service_categories_follow_refresh_order() {
    let rows = vec![
        post("old", "archive", true, t0() - Duration::days(3)),
        post("new", "news", false, t0()),
        post("mid", "news", true, t0() - Duration::days(1)),
    ];
    let svc = BlogService::new(MemoryStore::with_rows(vec![], rows));
    assert_eq!(svc.categories().unwrap(), vec!["news", "archive"]);
}

#[test]
fn publish_status_parses() {
    assert_eq!("ALL".parse::<PublishStatus>(), Ok(PublishStatus::All));
    assert_eq!(
        "published".parse::<PublishStatus>(),
        Ok(PublishStatus::Published)
    );
    assert_eq!("draft".parse::<PublishStatus>(), Ok(PublishStatus::Draft));
    assert!("archived".parse::<PublishStatus>().is_err());
}

mod blog;
mod code;

pub use blog::{
    BlogPost, BlogPostDraft, BlogPostPatch, Language, SlugGenerator, Translation,
    TranslationPatch, require_slug_and_title,
};
pub use code::{CodeRecord, CodeType, PromoCode, Region, UsageRecord};
pub(crate) use code::known_values;

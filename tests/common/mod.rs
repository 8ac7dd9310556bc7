#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use promo_admin::model::{
    BlogPost, BlogPostDraft, CodeType, Language, PromoCode, Region, Translation,
};
use promo_admin::store::{MemoryStore, SNAPSHOT_VERSION, Snapshot};

/// Creates an `assert_cmd` Command for the promo-admin binary.
#[macro_export]
macro_rules! promo_admin {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("promo-admin"))
    };
}

/// Default snapshot location, relative to the fixture directory.
pub const STORE_PATH: &str = ".promo-admin/store.json";

pub const BASIC_CONFIG: &str = r#"
version = "1"

[output]
format = "text"
"#;

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

pub fn code(value: &str, code_type: &str, region: &str, used: bool) -> PromoCode {
    let mut code = PromoCode::new(
        value,
        CodeType::from(code_type),
        Region::from(region),
        at(1, 9),
    );
    if used {
        code.is_used = true;
        code.redeem_date = Some(at(5, 12));
    }
    code
}

pub fn post(slug: &str, title: &str, category: &str, published: bool) -> BlogPost {
    let mut draft = BlogPostDraft {
        slug: slug.to_string(),
        category: category.to_string(),
        published,
        ..BlogPostDraft::default()
    };
    draft.translations.insert(
        Language::En,
        Translation {
            title: title.to_string(),
            ..Translation::default()
        },
    );
    draft.into_post(at(2, 10))
}

/// The three-code sample: two starter codes in EMEA (one used) and one
/// unused standard code in the Americas.
pub fn sample_codes() -> Vec<PromoCode> {
    vec![
        code("SPRING-1", "starter", "emea", false),
        code("SPRING-2", "starter", "emea", true),
        code("FALL-1", "standard", "americas", false),
    ]
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.path().join(STORE_PATH)
    }

    /// Command running inside the fixture, isolated from the user's config directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = promo_admin!();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env_remove("RUST_LOG");
        cmd
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a `.promo-admin.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".promo-admin.toml", content);
    }

    /// Writes a snapshot holding the given rows at the default store path.
    pub fn seed_store(&self, codes: Vec<PromoCode>, posts: Vec<BlogPost>) {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            rows: MemoryStore::with_rows(codes, posts),
        };
        let json = serde_json::to_string_pretty(&snapshot).expect("Failed to serialize snapshot");
        self.create_file(STORE_PATH, &json);
    }

    /// Reads the snapshot back from disk.
    pub fn load_store(&self) -> Snapshot {
        let content = fs::read_to_string(self.store_path()).expect("Failed to read snapshot");
        serde_json::from_str(&content).expect("Failed to parse snapshot")
    }
}

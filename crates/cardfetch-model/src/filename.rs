use regex::Regex;
use std::sync::OnceLock;

/// Separator between card name and collector number in Prismatic Evolutions titles.
pub const DEFAULT_SEPARATOR: &str = " · Prismatic Evolutions (PRE) #";

/// Extension appended to every image, whatever the server actually sends.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Characters that are invalid or reserved in common filesystem path syntax.
fn reserved_chars() -> &'static Regex {
    static RESERVED: OnceLock<Regex> = OnceLock::new();
    RESERVED.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid regex"))
}

/// How a card title becomes a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePolicy {
    /// Substring collapsed to a single `_` (set name and code marker).
    pub separator: String,
    /// Extension without the leading dot.
    pub extension: String,
}

impl Default for FilenamePolicy {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl FilenamePolicy {
    /// Derive a filesystem-safe filename from a card title.
    ///
    /// Pure and deterministic; the title is taken as-is, without Unicode
    /// normalization:
    /// 1. replace each separator occurrence with `_`
    /// 2. replace each of `< > : " / \ | ? *` with `_`
    /// 3. trim surrounding whitespace
    /// 4. append the extension
    pub fn derive(&self, title: &str) -> String {
        let collapsed = if self.separator.is_empty() {
            title.to_string()
        } else {
            title.replace(self.separator.as_str(), "_")
        };

        let safe = reserved_chars().replace_all(&collapsed, "_");
        format!("{}.{}", safe.trim(), self.extension)
    }
}

/// Derive a filename with the default policy.
pub fn derive_filename(title: &str) -> String {
    FilenamePolicy::default().derive(title)
}

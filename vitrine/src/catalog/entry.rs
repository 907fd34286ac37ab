//! Catalog entry descriptors.

use vitrine_core::{LaunchMode, ScreenKey};

/// One catalog entry: display metadata plus the discriminator key that joins
/// it to a registered screen factory.
///
/// Entries are immutable after construction. Required fields go through
/// [`Entry::new`]; optional metadata is attached with the `with_*` chain.
///
/// # Example
///
/// ```rust,ignore
/// let entry = Entry::new(Demo::BottomSheet, "BottomSheet", "Modal sheet variants")
///     .with_last_update("2025-03-14")
///     .with_sub_category("BottomSheet")
///     .with_launch_mode(LaunchMode::Standalone);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K: ScreenKey> {
    key: K,
    title: String,
    description: String,
    last_update: Option<String>,
    blog_url: Option<String>,
    sub_category: Option<String>,
    launch_mode: LaunchMode,
}

impl<K: ScreenKey> Entry<K> {
    /// Create an entry with the required fields and default launch mode.
    pub fn new(key: K, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            description: description.into(),
            last_update: None,
            blog_url: None,
            sub_category: None,
            launch_mode: LaunchMode::default(),
        }
    }

    /// Attach a last-update date label. Entries without one are "undated".
    pub fn with_last_update(mut self, date: impl Into<String>) -> Self {
        self.last_update = Some(date.into());
        self
    }

    /// Attach an external reference link.
    pub fn with_blog_url(mut self, url: impl Into<String>) -> Self {
        self.blog_url = Some(url.into());
        self
    }

    /// Place the entry in a named sub-category shared with other entries.
    pub fn with_sub_category(mut self, name: impl Into<String>) -> Self {
        self.sub_category = Some(name.into());
        self
    }

    /// Override the default [`LaunchMode::InPlace`].
    pub fn with_launch_mode(mut self, mode: LaunchMode) -> Self {
        self.launch_mode = mode;
        self
    }

    /// The discriminator key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Human-readable name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Date label, if the entry is dated.
    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_deref()
    }

    /// External reference link, if any.
    pub fn blog_url(&self) -> Option<&str> {
        self.blog_url.as_deref()
    }

    /// Named sub-category, if the entry shares a screen with siblings.
    pub fn sub_category(&self) -> Option<&str> {
        self.sub_category.as_deref()
    }

    /// How selecting this entry presents its screen.
    pub fn launch_mode(&self) -> LaunchMode {
        self.launch_mode
    }

    /// The grouping identity used by [`Catalog::by_category`].
    ///
    /// [`Catalog::by_category`]: crate::catalog::Catalog::by_category
    pub fn category(&self) -> Category<K> {
        match &self.sub_category {
            Some(name) => Category::Shared(name.clone()),
            None => Category::Solo(self.key.clone()),
        }
    }
}

/// Grouping identity of an entry.
///
/// Entries declaring a sub-category collapse into one [`Shared`] group per
/// name; the rest form [`Solo`] groups keyed by their own discriminator, so
/// duplicate titles cannot merge unrelated entries.
///
/// [`Shared`]: Category::Shared
/// [`Solo`]: Category::Solo
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category<K: ScreenKey> {
    /// A named sub-category shared by several entries.
    Shared(String),
    /// A singleton group keyed by the entry's own discriminator.
    Solo(K),
}

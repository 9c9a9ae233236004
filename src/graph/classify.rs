//! Project classification by applied plugins
//!
//! A [`Classifier`] is an ordered list of [`CategoryRule`]s. Rules are tested
//! in order and the first one matching any of the project's plugins decides
//! the category.

use std::collections::BTreeSet;

use super::types::Category;

/// Plugin ids that place a project in a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    category: Category,
    plugin_ids: Vec<String>,
}

impl CategoryRule {
    pub fn new<I, S>(category: Category, plugin_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            plugin_ids: plugin_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn matches(&self, plugins: &BTreeSet<String>) -> bool {
        self.plugin_ids.iter().any(|id| plugins.contains(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<CategoryRule>,
}

impl Classifier {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn classify(&self, plugins: &BTreeSet<String>) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.matches(plugins))
            .map_or(Category::None, CategoryRule::category)
    }
}

impl Default for Classifier {
    /// Kotlin multiplatform, Kotlin/JS, Android, then plain Java. Each
    /// category's own name is accepted as a tag too.
    fn default() -> Self {
        Self::new(vec![
            CategoryRule::new(
                Category::Multiplatform,
                [
                    "org.jetbrains.kotlin.multiplatform",
                    Category::Multiplatform.as_str(),
                ],
            ),
            CategoryRule::new(
                Category::ScriptTarget,
                ["org.jetbrains.kotlin.js", Category::ScriptTarget.as_str()],
            ),
            CategoryRule::new(
                Category::MobilePlatform,
                [
                    "com.android.library",
                    "com.android.application",
                    Category::MobilePlatform.as_str(),
                ],
            ),
            CategoryRule::new(
                Category::GenericManaged,
                ["java-library", "java", Category::GenericManaged.as_str()],
            ),
        ])
    }
}

use crate::pass::{Category, CategorySet};

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub strength: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub categories: CategorySet,
}

impl CliFlags {
    /// Categories requested on the command line; all four when none were named.
    pub fn categories(&self) -> CategorySet {
        if self.categories.is_empty() {
            CategorySet::all()
        } else {
            self.categories
        }
    }

    pub fn enable(&mut self, category: Category) {
        self.categories.insert(category);
    }
}

//! Portrait categories.

use std::fmt;

/// A fixed grouping of portraits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Portraits of men.
    Man,
    /// Portraits of women.
    Woman,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Category; 2] = [Category::Man, Category::Woman];

    /// The bundle directory holding this category by convention.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Man => "men",
            Category::Woman => "women",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

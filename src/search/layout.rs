//! Responsive layout selection.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Inline search bar
    Desktop,
    /// Summary button opening a dialog
    Mobile,
}

impl Layout {
    /// `Mobile` strictly below `breakpoint`, `Desktop` otherwise.
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert_eq!(Layout::for_width(767, 768), Layout::Mobile);
        assert_eq!(Layout::for_width(768, 768), Layout::Desktop);
        assert_eq!(Layout::for_width(1440, 768), Layout::Desktop);
    }
}

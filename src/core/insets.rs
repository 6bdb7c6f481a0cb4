use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Distances in pixels from each source edge that stay unscaled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CapInsets {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl CapInsets {
    pub const fn uniform(cap: usize) -> Self {
        Self::symmetric(cap, cap)
    }

    /// `horizontal` applies to left and right, `vertical` to top and bottom.
    pub const fn symmetric(horizontal: usize, vertical: usize) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// Half of each source dimension on every side, leaving a 1x1 stretchable
    /// center. Both dimensions must be odd.
    pub fn centered(width: usize, height: usize) -> Result<Self> {
        let insets = Self::symmetric(width / 2, height / 2);
        if width % 2 == 0 || height % 2 == 0 {
            return Err(Error::invalid_insets(
                insets,
                (width, height),
                "centered insets need odd source dimensions",
            ));
        }
        Ok(insets)
    }

    /// Summed left and right caps.
    pub const fn horizontal(&self) -> usize {
        self.left.saturating_add(self.right)
    }

    /// Summed top and bottom caps.
    pub const fn vertical(&self) -> usize {
        self.top.saturating_add(self.bottom)
    }

    /// Checks the caps fit inside a `width`x`height` source.
    pub fn validate(&self, width: usize, height: usize) -> Result<()> {
        if self.horizontal() > width {
            return Err(Error::invalid_insets(
                *self,
                (width, height),
                format!(
                    "left + right = {} exceeds source width {}",
                    self.horizontal(),
                    width
                ),
            ));
        }
        if self.vertical() > height {
            return Err(Error::invalid_insets(
                *self,
                (width, height),
                format!(
                    "top + bottom = {} exceeds source height {}",
                    self.vertical(),
                    height
                ),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for CapInsets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(left={}, right={}, top={}, bottom={})",
            self.left, self.right, self.top, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_may_fill_the_whole_source() {
        assert!(CapInsets::uniform(15).validate(30, 30).is_ok());
        assert!(CapInsets::symmetric(15, 0).validate(30, 1).is_ok());
    }

    #[test]
    fn oversized_caps_are_rejected() {
        let insets = CapInsets {
            left: 20,
            right: 11,
            top: 0,
            bottom: 0,
        };
        let err = insets.validate(30, 30).unwrap_err();
        assert!(matches!(err, Error::InvalidInsets { width: 30, .. }));
        assert!(err.to_string().contains("left + right = 31"));

        let err = CapInsets::symmetric(0, 16).validate(30, 30).unwrap_err();
        assert!(err.to_string().contains("top + bottom = 32"));
    }

    #[test]
    fn huge_insets_are_rejected_without_overflow() {
        let insets = CapInsets::symmetric(usize::MAX, 0);
        assert_eq!(insets.horizontal(), usize::MAX);
        assert!(matches!(
            insets.validate(30, 30),
            Err(Error::InvalidInsets { .. })
        ));
    }

    #[test]
    fn centered_leaves_one_pixel_middle() {
        let insets = CapInsets::centered(7, 5).unwrap();
        assert_eq!(insets, CapInsets::symmetric(3, 2));
        assert_eq!(7 - insets.horizontal(), 1);
        assert_eq!(5 - insets.vertical(), 1);
    }

    #[test]
    fn centered_rejects_even_dimensions() {
        assert!(matches!(
            CapInsets::centered(8, 5),
            Err(Error::InvalidInsets { .. })
        ));
    }
}

//! Per-band z-index allocation.
//!
//! Windows and widgets each own an allocator. Widgets paint beneath every window because the
//! band is compared before the numeric z-index (see [`PaintKey`]), not because of the numbers.

use serde::{Deserialize, Serialize};

/// Numeric offset applied to widget z-index values.
pub const WIDGET_BAND_BASE: u32 = 100;
/// Numeric offset applied to window z-index values.
pub const WINDOW_BAND_BASE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Independent stacking space. Variant order is paint order.
pub enum StackBand {
    /// Desktop widgets, painted first.
    Widgets,
    /// Application windows, painted above all widgets.
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Total paint ordering across bands: band first, then z-index within the band.
pub struct PaintKey {
    /// Stacking band.
    pub band: StackBand,
    /// Z-index inside the band.
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Monotonic z-index counter for one [`StackBand`].
pub struct ZOrderAllocator {
    band: StackBand,
    base: u32,
    issued: u32,
}

impl ZOrderAllocator {
    /// Allocator for the window band.
    pub fn windows() -> Self {
        Self {
            band: StackBand::Windows,
            base: WINDOW_BAND_BASE,
            issued: 0,
        }
    }

    /// Allocator for the widget band.
    pub fn widgets() -> Self {
        Self {
            band: StackBand::Widgets,
            base: WIDGET_BAND_BASE,
            issued: 0,
        }
    }

    /// Band this allocator serves.
    pub fn band(&self) -> StackBand {
        self.band
    }

    /// Issues the next z-index; strictly greater than every value issued before.
    pub fn next(&mut self) -> u32 {
        self.issued = self.issued.saturating_add(1);
        self.base.saturating_add(self.issued)
    }

    /// Most recently issued z-index, if any.
    pub fn latest(&self) -> Option<u32> {
        (self.issued > 0).then(|| self.base.saturating_add(self.issued))
    }

    /// Paint key for a z-index issued by this allocator.
    pub fn paint_key(&self, z_index: u32) -> PaintKey {
        PaintKey {
            band: self.band,
            z_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_strictly_increase() {
        let mut alloc = ZOrderAllocator::windows();
        assert_eq!(alloc.latest(), None);
        let issued: Vec<u32> = (0..5).map(|_| alloc.next()).collect();
        assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(alloc.latest(), issued.last().copied());
    }

    #[test]
    fn widget_keys_sort_below_window_keys_regardless_of_value() {
        let mut windows = ZOrderAllocator::windows();
        let mut widgets = ZOrderAllocator::widgets();
        let window_z = windows.next();
        let widget_z = widgets.next();
        let window_key = windows.paint_key(window_z);
        let widget_key = widgets.paint_key(widget_z);
        assert!(widget_key.z_index > window_key.z_index);
        assert!(widget_key < window_key);
    }
}

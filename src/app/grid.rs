use std::collections::HashMap;

use crate::app::state::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailSlot {
    pub path: ImageRef,
    pub selected: bool,
}

/// Widgets of the page on screen, addressable by path.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailGrid {
    slots: Vec<ThumbnailSlot>,
    by_path: HashMap<ImageRef, usize>,
    columns: usize,
}

impl ThumbnailGrid {
    pub fn build<'a>(
        items: &'a [ImageRef],
        columns: usize,
        is_selected: impl Fn(&'a ImageRef) -> bool,
    ) -> Self {
        let slots: Vec<ThumbnailSlot> = items
            .iter()
            .map(|path| ThumbnailSlot {
                path: path.clone(),
                selected: is_selected(path),
            })
            .collect();
        let by_path = slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (slot.path.clone(), index))
            .collect();

        Self {
            slots,
            by_path,
            columns: columns.max(1),
        }
    }

    #[cfg(test)]
    pub fn slots(&self) -> &[ThumbnailSlot] {
        &self.slots
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ThumbnailSlot]> {
        self.slots.chunks(self.columns.max(1))
    }

    #[cfg(test)]
    pub fn slot(&self, path: &ImageRef) -> Option<&ThumbnailSlot> {
        self.by_path.get(path).map(|&index| &self.slots[index])
    }

    /// Returns false when `path` is not on this page.
    pub fn set_selected(&mut self, path: &ImageRef, selected: bool) -> bool {
        match self.by_path.get(path) {
            Some(&index) => {
                self.slots[index].selected = selected;
                true
            }
            None => false,
        }
    }
}

/// Column count for a page: the integer square root of the page size.
pub fn grid_columns(page_size: usize) -> usize {
    let mut root = 1;
    while (root + 1) * (root + 1) <= page_size {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_items_lay_out_four_by_four() {
        assert_eq!(grid_columns(16), 4);
        let items: Vec<ImageRef> = (0..16)
            .map(|index| ImageRef::new(format!("/s/{index}.png")))
            .collect();
        let grid = ThumbnailGrid::build(&items, grid_columns(16), |_| false);
        assert_eq!(grid.rows().count(), 4);
        assert!(grid.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn grid_columns_uses_integer_square_root() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(1), 1);
        assert_eq!(grid_columns(8), 2);
        assert_eq!(grid_columns(9), 3);
        assert_eq!(grid_columns(24), 4);
    }

    #[test]
    fn set_selected_updates_only_matching_slot() {
        let items = vec![ImageRef::new("/s/a.png"), ImageRef::new("/s/b.png")];
        let mut grid = ThumbnailGrid::build(&items, 2, |_| false);

        assert!(grid.set_selected(&items[1], true));
        assert!(!grid.slots()[0].selected);
        assert!(grid.slots()[1].selected);
        assert!(!grid.set_selected(&ImageRef::new("/s/other.png"), true));
    }

    #[test]
    fn build_reflects_existing_selection() {
        let items = vec![ImageRef::new("/s/a.png"), ImageRef::new("/s/b.png")];
        let grid = ThumbnailGrid::build(&items, 2, |path| path.as_str().ends_with("b.png"));
        assert_eq!(grid.slot(&items[1]).map(|slot| slot.selected), Some(true));
        assert_eq!(grid.slot(&items[0]).map(|slot| slot.selected), Some(false));
    }
}

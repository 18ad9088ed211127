use std::time::Duration;

use serde::Serialize;

/// Heartbeat period for auto-advancing carousels.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

pub const MOBILE_BREAKPOINT: u32 = 640;
pub const TABLET_BREAKPOINT: u32 = 1024;

/// Desktop page sizes for the two carousels on the home page.
pub const PROPERTIES_PER_PAGE: usize = 3;
pub const AGENTS_PER_PAGE: usize = 4;

/// Page size for a viewport width: one card on phones, two on tablets,
/// `base` on anything wider.
pub fn items_per_page(viewport_width: u32, base: usize) -> usize {
    if viewport_width < MOBILE_BREAKPOINT {
        1
    } else if viewport_width < TABLET_BREAKPOINT {
        2
    } else {
        base.max(1)
    }
}

/// Windowed paginator over a fixed number of items.
///
/// `start` always lies in `0..=max_index()`. Manual navigation bumps
/// `reset_token`, which invalidates any heartbeat scheduled before it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Carousel {
    start: usize,
    items_per_page: usize,
    base_per_page: usize,
    item_count: usize,
    reset_token: u64,
}

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CarouselView {
    pub start: usize,
    pub end: usize,
    pub items_per_page: usize,
    pub max_index: usize,
    pub dots: usize,
    pub can_prev: bool,
    pub can_next: bool,
    /// Track translation, as a percentage of the viewport width.
    pub offset_percent: f64,
}

impl Carousel {
    pub fn new(item_count: usize, base_per_page: usize, viewport_width: u32) -> Self {
        let base_per_page = base_per_page.max(1);
        Self {
            start: 0,
            items_per_page: items_per_page(viewport_width, base_per_page),
            base_per_page,
            item_count,
            reset_token: 0,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn reset_token(&self) -> u64 {
        self.reset_token
    }

    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_page)
    }

    pub fn prev(&mut self) {
        self.start = self.start.saturating_sub(1);
        self.bump_token();
    }

    pub fn next(&mut self) {
        self.start = (self.start + 1).min(self.max_index());
        self.bump_token();
    }

    pub fn goto_page(&mut self, index: usize) {
        self.start = index.min(self.max_index());
        self.bump_token();
    }

    /// Heartbeat step: advance by one, wrapping to the first page after the
    /// last. Leaves `reset_token` alone.
    pub fn auto_advance(&mut self) {
        self.start = if self.start >= self.max_index() {
            0
        } else {
            self.start + 1
        };
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.items_per_page = items_per_page(viewport_width, self.base_per_page);
        self.clamp();
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.clamp();
    }

    /// Swaps the underlying sequence (a tab change) and returns to the
    /// first page.
    pub fn reset_items(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.start = 0;
    }

    /// Visible slice of `items`, clipped to its length.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = (self.start + self.items_per_page).min(items.len());
        &items[start..end]
    }

    pub fn view(&self) -> CarouselView {
        let max_index = self.max_index();
        CarouselView {
            start: self.start,
            end: (self.start + self.items_per_page).min(self.item_count),
            items_per_page: self.items_per_page,
            max_index,
            dots: max_index + 1,
            can_prev: self.start > 0,
            can_next: self.start < max_index,
            offset_percent: self.start as f64 * 100.0 / self.items_per_page as f64,
        }
    }

    fn clamp(&mut self) {
        self.start = self.start.min(self.max_index());
    }

    fn bump_token(&mut self) {
        self.reset_token = self.reset_token.wrapping_add(1);
    }
}

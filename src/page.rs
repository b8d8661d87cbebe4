// Fixed-size pagination over derived views

/// Deterministic slicing of an ordered sequence into fixed-size windows.
///
/// Pages are 1-indexed. The pager tracks only the backing item count, not
/// the items themselves; callers re-slice whatever filtered view they hold.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    current: usize,
    len: usize,
}

impl Pager {
    /// `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
            len: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.page_size).max(1)
    }

    /// Inform the pager that the backing view changed size. If the current
    /// page falls past the end, it resets to page 1.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.current > self.total_pages() {
            self.current = 1;
        }
    }

    /// Explicit navigation. Out-of-range requests are rejected and the
    /// current page is preserved.
    pub fn goto(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current = page;
            true
        } else {
            false
        }
    }

    /// Free-text "jump to page" entry. Valid in-range numerals navigate;
    /// anything else is ignored. Returns the text the page input field
    /// should now show, which is always the current page number.
    pub fn jump(&mut self, input: &str) -> String {
        if let Ok(page) = input.trim().parse::<usize>() {
            self.goto(page);
        }
        self.current.to_string()
    }

    /// The current window of `items`. The pager does not own the view, so a
    /// caller passing a shorter slice than the tracked length still gets an
    /// in-bounds window.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

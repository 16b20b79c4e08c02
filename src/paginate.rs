use crate::model::TripRecord;

/// Rows shown per raw-data page.
pub const PAGE_SIZE: usize = 5;

/// Walks a slice of trips one fixed-size page at a time, starting at offset 0.
#[derive(Debug)]
pub struct RawDataPager<'a> {
    rows: &'a [TripRecord],
    offset: usize,
    page_size: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(rows: &'a [TripRecord]) -> Self {
        Self::with_page_size(rows, PAGE_SIZE)
    }

    pub fn with_page_size(rows: &'a [TripRecord], page_size: usize) -> Self {
        Self {
            rows,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.rows.len().saturating_sub(self.offset)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl<'a> Iterator for RawDataPager<'a> {
    type Item = &'a [TripRecord];

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.rows.len());
        let page = &self.rows[self.offset..end];
        self.offset = end;
        Some(page)
    }
}

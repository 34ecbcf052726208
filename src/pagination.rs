//! Five-at-a-time walk through raw trip records.

pub const PAGE_SIZE: usize = 5;

/// The caller's answer to "show more?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Waiting for the next decision at `offset`.
    Idle,
    Finished,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step<'a, T> {
    /// Up to five records; empty once the end has been passed.
    Page(&'a [T]),
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    offset: usize,
    state: CursorState,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            offset: 0,
            state: CursorState::Idle,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Applies one decision. `Yes` yields the page at the current offset and
    /// advances; `No` finishes the cursor for good.
    pub fn step<'a, T>(&mut self, decision: Decision, records: &'a [T]) -> Step<'a, T> {
        match (self.state, decision) {
            (CursorState::Finished, _) => Step::Done,
            (CursorState::Idle, Decision::No) => {
                self.state = CursorState::Finished;
                Step::Done
            }
            (CursorState::Idle, Decision::Yes) => Step::Page(self.next_page(records)),
        }
    }

    /// Returns `records[offset..offset + 5]`, clipped to the end, and advances.
    pub fn next_page<'a, T>(&mut self, records: &'a [T]) -> &'a [T] {
        let start = self.offset.min(records.len());
        let end = self.offset.saturating_add(PAGE_SIZE).min(records.len());
        self.offset = self.offset.saturating_add(PAGE_SIZE);
        &records[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_cover_collection_in_order() {
        for n in [0usize, 1, 4, 5, 6, 10, 12, 23] {
            let records: Vec<usize> = (0..n).collect();
            let mut cursor = PageCursor::new();
            let mut seen = Vec::new();
            let mut non_empty = 0;

            for _ in 0..n.div_ceil(PAGE_SIZE) + 3 {
                let page = cursor.next_page(&records);
                if page.is_empty() {
                    continue;
                }
                non_empty += 1;
                seen.extend_from_slice(page);
            }

            assert_eq!(non_empty, n.div_ceil(PAGE_SIZE), "n = {n}");
            assert_eq!(seen, records);
        }
    }

    #[test]
    fn test_empty_pages_after_the_end() {
        let records = [1, 2, 3, 4, 5, 6, 7];
        let mut cursor = PageCursor::new();

        assert_eq!(cursor.next_page(&records), &[1, 2, 3, 4, 5]);
        assert_eq!(cursor.next_page(&records), &[6, 7]);
        assert!(cursor.next_page(&records).is_empty());
        assert!(cursor.next_page(&records).is_empty());
        assert_eq!(cursor.offset(), 20);
    }

    #[test]
    fn test_step_state_machine() {
        let records = ["a", "b", "c", "d", "e", "f"];
        let mut cursor = PageCursor::new();

        assert_eq!(
            cursor.step(Decision::Yes, &records),
            Step::Page(&records[..5])
        );
        assert_eq!(cursor.state(), CursorState::Idle);
        assert_eq!(cursor.step(Decision::Yes, &records), Step::Page(&records[5..]));
        assert_eq!(cursor.step(Decision::No, &records), Step::Done);
        assert_eq!(cursor.state(), CursorState::Finished);

        // stays finished
        assert_eq!(cursor.step(Decision::Yes, &records), Step::Done);
        assert_eq!(cursor.offset(), 10);
    }
}

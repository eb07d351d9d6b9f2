//! # Resource page state machine
//!
//! One [`PageState`] backs every admin screen. It owns the loaded collection,
//! the pagination cursor (for server-paginated resources), the search query and
//! the single open [`Overlay`].
//!
//! ```text
//! Loading ──ok──▶ Loaded ──add/edit──▶ Editing ──saved──▶ Loaded
//!    │              │  ├──view──▶ Viewing ──status change──▶ Loading
//!    └─err─▶ Failed │  └──delete──▶ ConfirmDelete ──confirm──▶ Loaded (optimistic)
//! ```
//!
//! Holding one `Overlay` value is what guarantees that at most one modal is
//! open at a time.

use std::fmt::Display;

use crate::draft::FormDraft;
use crate::notify::Notifications;
use crate::pagination::PageCursor;
use crate::search;

/// Records carry a stable, server-assigned identity.
pub trait Identified {
    fn id(&self) -> &str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Overlay<T> {
    Closed,
    /// Add form when `target` is `None`, edit form otherwise.
    Editing {
        draft: FormDraft,
        target: Option<T>,
    },
    Viewing(T),
    ConfirmDelete(T),
}

/// A row taken out by an optimistic delete, with the position to put it back.
#[derive(Clone, Debug, PartialEq)]
pub struct Removed<T> {
    pub index: usize,
    pub record: T,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState<T> {
    records: Vec<T>,
    phase: Phase,
    overlay: Overlay<T>,
    query: String,
    cursor: Option<PageCursor>,
    submitting: bool,
    /// Bumped every time a form opens, so a late save can tell whether the
    /// form it came from is still the one on screen.
    form: u64,
}

impl<T: Identified + Clone> PageState<T> {
    /// State for an unpaginated resource.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            phase: Phase::Loading,
            overlay: Overlay::Closed,
            query: String::new(),
            cursor: None,
            submitting: false,
            form: 0,
        }
    }

    /// State for a server-paginated resource.
    pub fn paginated(page_size: u32) -> Self {
        Self {
            cursor: Some(PageCursor::new(page_size)),
            ..Self::new()
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn overlay(&self) -> &Overlay<T> {
        &self.overlay
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    /// 1-based page to request next; always 1 for unpaginated resources.
    pub fn current_page(&self) -> u32 {
        self.cursor.map_or(1, |c| c.current_page)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mark a save as in flight for the open form and return its ticket.
    ///
    /// `None` while another save is still running or no form is open; the
    /// flag survives closing and reopening the form until that save settles.
    pub fn begin_save(&mut self) -> Option<u64> {
        if self.submitting || self.draft().is_none() {
            return None;
        }
        self.submitting = true;
        Some(self.form)
    }

    // ---- Loading ----

    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Replace the collection wholesale. `totals` is `(total_pages, total_items)`
    /// from the server's pagination block.
    pub fn finish_load(&mut self, records: Vec<T>, totals: Option<(u32, u64)>) {
        self.records = records;
        if let (Some(cursor), Some((pages, items))) = (self.cursor.as_mut(), totals) {
            cursor.apply(pages, items);
        }
        self.phase = Phase::Loaded;
    }

    /// A failed fetch clears the collection rather than keeping stale rows.
    pub fn fail_load(&mut self) {
        self.records.clear();
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.apply(1, 0);
        }
        self.phase = Phase::Failed;
    }

    /// Settle a list fetch: load on success, or clear and raise exactly one
    /// error notification on failure.
    pub fn settle_load<E: Display>(
        &mut self,
        result: Result<(Vec<T>, Option<(u32, u64)>), E>,
        notes: &mut Notifications,
    ) {
        match result {
            Ok((records, totals)) => self.finish_load(records, totals),
            Err(e) => {
                tracing::error!("list fetch failed: {e}");
                self.fail_load();
                notes.error(e.to_string());
            }
        }
    }

    // ---- Search and pages ----

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Loaded rows matching the search query. Never looks beyond the current page.
    pub fn visible(&self, search_text: impl Fn(&T) -> Vec<String>) -> Vec<&T> {
        search::filter(&self.records, &self.query, search_text)
    }

    /// Move to another page. Returns true when a re-fetch is needed.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.go_to(page),
            None => false,
        }
    }

    // ---- Overlay ----

    pub fn open_add(&mut self, draft: FormDraft) {
        self.form += 1;
        self.overlay = Overlay::Editing {
            draft,
            target: None,
        };
    }

    pub fn open_edit(&mut self, record: T, draft: FormDraft) {
        self.form += 1;
        self.overlay = Overlay::Editing {
            draft,
            target: Some(record),
        };
    }

    pub fn open_view(&mut self, record: T) {
        self.overlay = Overlay::Viewing(record);
    }

    pub fn request_delete(&mut self, record: T) {
        self.overlay = Overlay::ConfirmDelete(record);
    }

    pub fn close(&mut self) {
        self.overlay = Overlay::Closed;
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match &self.overlay {
            Overlay::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match &mut self.overlay {
            Overlay::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Record being edited; `None` while adding or when no form is open.
    pub fn editing_target(&self) -> Option<&T> {
        match &self.overlay {
            Overlay::Editing { target, .. } => target.as_ref(),
            _ => None,
        }
    }

    // ---- Mutations ----

    /// Put a saved record into the collection: replace the row with the same
    /// identity, or append when it is new.
    pub fn apply_saved(&mut self, record: T) {
        match self.records.iter().position(|r| r.id() == record.id()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Settle the create/update call started by [`begin_save`](Self::begin_save).
    ///
    /// The saved record always lands in the collection, but only the form that
    /// issued `ticket` is closed; anything opened since stays on screen. On
    /// failure the draft stays open for retry.
    pub fn settle_save<E: Display>(
        &mut self,
        ticket: u64,
        result: Result<T, E>,
        notes: &mut Notifications,
        success_message: &str,
    ) {
        self.submitting = false;
        match result {
            Ok(record) => {
                tracing::info!(id = record.id(), "{success_message}");
                self.apply_saved(record);
                if self.form == ticket && self.draft().is_some() {
                    self.close();
                }
                notes.success(success_message);
            }
            Err(e) => {
                tracing::error!("save failed: {e}");
                notes.error(e.to_string());
            }
        }
    }

    /// Remove the row with `id`, returning it with its position.
    pub fn remove(&mut self, id: &str) -> Option<Removed<T>> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        let record = self.records.remove(index);
        Some(Removed { index, record })
    }

    /// Undo [`remove`](Self::remove), putting the row back where it was.
    pub fn restore(&mut self, removed: Removed<T>) {
        let index = removed.index.min(self.records.len());
        self.records.insert(index, removed.record);
    }

    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.records.iter().filter(|r| pred(r)).count()
    }
}

impl<T: Identified + Clone> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}

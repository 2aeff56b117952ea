//! The document model: the authoritative in-memory representation of one
//! email template during an authoring session.
//!
//! A [`TemplateDocument`] holds the ordered block list plus transient
//! authoring state (selection, dirty flag, new/persisted origin). It is the
//! single writer path for `blocks`: every component of the builder mutates
//! the template exclusively through the operations below, and all of them
//! are synchronous, atomic, and total over their inputs. Operations on a
//! missing id are silent no-ops, never errors, so a stale update racing a
//! concurrent removal is simply dropped.

use common::model::block::{Block, BlockBody, BlockKind};

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct TemplateDocument {
    blocks: Vec<Block>,
    selected_block_id: Option<String>,
    is_dirty: bool,
    is_new: bool,
}

impl TemplateDocument {
    /// An empty, never-persisted document (new-template flow).
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            selected_block_id: None,
            is_dirty: false,
            is_new: true,
        }
    }

    /// Hydrates a document from a persisted JSON artifact (edit-existing
    /// flow). Selection is reset, the document starts clean and is not
    /// eligible for local crash-recovery snapshots.
    pub fn hydrate(json: &str) -> Result<Self, serde_json::Error> {
        let blocks: Vec<Block> = serde_json::from_str(json)?;
        Ok(Self {
            blocks,
            selected_block_id: None,
            is_dirty: false,
            is_new: false,
        })
    }

    /// Rebuilds a new-template document from a crash-recovery snapshot.
    /// The recovered draft is not flagged dirty against itself.
    pub fn recovered(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            selected_block_id: None,
            is_dirty: false,
            is_new: true,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn selected_block_id(&self) -> Option<&str> {
        self.selected_block_id.as_deref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        let id = self.selected_block_id.as_deref()?;
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Serializes the block list exactly as it is persisted: a bare JSON
    /// array, no wrapper envelope.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.blocks)
    }

    /// Ids are `<type>-<creation millis>`; the timestamp is bumped until the
    /// id is unique within this document, so two rapid adds of the same type
    /// cannot collide.
    fn fresh_id(&self, kind: BlockKind) -> String {
        let mut stamp = now_millis();
        loop {
            let id = format!("{}-{}", kind.as_str(), stamp);
            if self.blocks.iter().all(|b| b.id != id) {
                return id;
            }
            stamp += 1;
        }
    }

    /// Appends a new block with the type's default property bag, selects it,
    /// and marks the document dirty. Returns the new block's id.
    pub fn add_block(&mut self, kind: BlockKind) -> String {
        self.insert_block(kind, self.blocks.len())
    }

    /// Splices a new block in at `index` (clamped to the list length); used
    /// by the palette-to-canvas drop at a computed insertion index.
    pub fn insert_block(&mut self, kind: BlockKind, index: usize) -> String {
        let id = self.fresh_id(kind);
        let block = Block {
            id: id.clone(),
            body: kind.default_props(),
            rich_text: None,
        };
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
        self.selected_block_id = Some(id.clone());
        self.is_dirty = true;
        id
    }

    /// Replaces the property bag of the block matching `id`. No-op if the id
    /// is not found. Selection follows identity, so editors observing the
    /// selected block see the post-update state.
    pub fn update_block(&mut self, id: &str, body: BlockBody) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.body = body;
            self.is_dirty = true;
        }
    }

    /// Convenience specialization of [`Self::update_block`] writing only the
    /// block's rich-content field. Used by the rich-text widget output and
    /// the HTML code-view escape hatch.
    pub fn update_content(&mut self, id: &str, html: &str) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            if block.body.set_content(html) {
                self.is_dirty = true;
            }
        }
    }

    /// Stores the raw HTML fragment the external rich-text widget produced
    /// for this block's label content.
    pub fn update_rich_text(&mut self, id: &str, html: String) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.rich_text = Some(html);
            self.is_dirty = true;
        }
    }

    /// Splice semantics: the block at `from` is removed and reinserted at
    /// `to` in one pass, shifting the blocks in between. Not a swap.
    /// Out-of-bounds indices are a caller bug; guarded here as a no-op.
    pub fn move_block(&mut self, from: usize, to: usize) {
        debug_assert!(from < self.blocks.len(), "move_block: from out of bounds");
        debug_assert!(to < self.blocks.len(), "move_block: to out of bounds");
        if from == to || from >= self.blocks.len() || to >= self.blocks.len() {
            return;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.is_dirty = true;
    }

    /// Deletes the block matching `id`; clears selection if it was the
    /// selected block. Returns `true` if the document became empty, so the
    /// caller can drop any crash-recovery snapshot.
    pub fn remove_block(&mut self, id: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        if self.blocks.len() != before {
            if self.selected_block_id.as_deref() == Some(id) {
                self.selected_block_id = None;
            }
            self.is_dirty = true;
        }
        self.blocks.is_empty()
    }

    /// Selects the block matching `id`. A failed lookup leaves the current
    /// selection unchanged; it never forces deselection.
    pub fn select_block(&mut self, id: &str) {
        if self.blocks.iter().any(|b| b.id == id) {
            self.selected_block_id = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_block_id = None;
    }

    /// The only transition back to a clean document; follows a successful
    /// persistence round-trip. Touches neither blocks nor selection.
    pub fn mark_as_saved(&mut self) {
        self.is_dirty = false;
    }

    /// The document now has a server identity; local crash-recovery
    /// snapshots stop applying to it.
    pub fn mark_persisted(&mut self) {
        self.is_new = false;
    }
}

impl Default for TemplateDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::block::BlockKind;

    fn doc_with(kinds: &[BlockKind]) -> TemplateDocument {
        let mut doc = TemplateDocument::new();
        for kind in kinds {
            doc.add_block(*kind);
        }
        doc
    }

    #[test]
    fn add_block_appends_selects_and_dirties() {
        let mut doc = TemplateDocument::new();
        let first = doc.add_block(BlockKind::Header);
        let second = doc.add_block(BlockKind::Text);
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.blocks()[1].id, second);
        assert_eq!(doc.selected_block_id(), Some(second.as_str()));
        assert!(doc.is_dirty());
        assert_ne!(first, second);
    }

    #[test]
    fn added_block_carries_the_registry_defaults() {
        let mut doc = TemplateDocument::new();
        doc.add_block(BlockKind::Button);
        assert_eq!(doc.blocks()[0].body, BlockKind::Button.default_props());
    }

    #[test]
    fn ids_are_unique_even_for_rapid_same_type_adds() {
        let mut doc = TemplateDocument::new();
        for _ in 0..10 {
            doc.add_block(BlockKind::Spacer);
        }
        let mut ids: Vec<&str> = doc.blocks().iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn insert_block_splices_at_the_given_index() {
        let mut doc = doc_with(&[BlockKind::Header, BlockKind::Text]);
        let inserted = doc.insert_block(BlockKind::Button, 1);
        let order: Vec<BlockKind> = doc.blocks().iter().map(|b| b.kind()).collect();
        assert_eq!(order, [BlockKind::Header, BlockKind::Button, BlockKind::Text]);
        assert_eq!(doc.selected_block_id(), Some(inserted.as_str()));
    }

    #[test]
    fn move_block_uses_splice_semantics_not_swap() {
        let mut doc = doc_with(&[
            BlockKind::Header, // A
            BlockKind::Text,   // B
            BlockKind::Button, // C
            BlockKind::Image,  // D
        ]);
        let ids: Vec<String> = doc.blocks().iter().map(|b| b.id.clone()).collect();
        doc.move_block(0, 2);
        let after: Vec<&str> = doc.blocks().iter().map(|b| b.id.as_str()).collect();
        // [A,B,C,D] -> [B,C,A,D], never the swap result [C,B,A,D].
        assert_eq!(after, [&ids[1], &ids[2], &ids[0], &ids[3]]);
    }

    #[test]
    fn move_block_to_same_index_is_a_clean_noop() {
        let mut doc = doc_with(&[BlockKind::Header, BlockKind::Text]);
        doc.mark_as_saved();
        doc.move_block(1, 1);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn update_block_replaces_props_and_refreshes_selection_view() {
        let mut doc = TemplateDocument::new();
        let id = doc.add_block(BlockKind::Header);
        let mut body = BlockKind::Header.default_props();
        body.set_content("Hi");
        doc.update_block(&id, body.clone());
        assert_eq!(doc.selected_block().unwrap().body, body);
    }

    #[test]
    fn operations_on_a_missing_id_are_silent_noops() {
        let mut doc = doc_with(&[BlockKind::Header]);
        let snapshot: Vec<Block> = doc.blocks().to_vec();
        doc.mark_as_saved();

        doc.update_block("ghost-1", BlockKind::Text.default_props());
        doc.update_content("ghost-1", "<p>late</p>");
        doc.update_rich_text("ghost-1", "<b>late</b>".to_string());
        assert!(!doc.remove_block("ghost-1"));

        assert_eq!(doc.blocks(), snapshot.as_slice());
        assert!(!doc.is_dirty());
    }

    #[test]
    fn selecting_a_nonexistent_id_leaves_selection_unchanged() {
        let mut doc = TemplateDocument::new();
        let id = doc.add_block(BlockKind::Text);
        doc.select_block("ghost-1");
        assert_eq!(doc.selected_block_id(), Some(id.as_str()));
    }

    #[test]
    fn removing_the_selected_block_clears_selection() {
        let mut doc = doc_with(&[BlockKind::Header, BlockKind::Text]);
        let selected = doc.blocks()[1].id.clone();
        doc.select_block(&selected);
        doc.remove_block(&selected);
        assert_eq!(doc.selected_block_id(), None);
    }

    #[test]
    fn removing_an_unselected_block_keeps_selection() {
        let mut doc = doc_with(&[BlockKind::Header, BlockKind::Text]);
        let keep = doc.blocks()[0].id.clone();
        let drop = doc.blocks()[1].id.clone();
        doc.select_block(&keep);
        doc.remove_block(&drop);
        assert_eq!(doc.selected_block_id(), Some(keep.as_str()));
    }

    #[test]
    fn remove_block_reports_when_the_document_empties() {
        let mut doc = TemplateDocument::new();
        let a = doc.add_block(BlockKind::Header);
        let b = doc.add_block(BlockKind::Text);
        assert!(!doc.remove_block(&a));
        assert!(doc.remove_block(&b));
    }

    #[test]
    fn dirty_flag_is_monotonic_until_mark_as_saved() {
        let mut doc = TemplateDocument::new();
        let id = doc.add_block(BlockKind::Header);
        assert!(doc.is_dirty());
        doc.update_block(&id, BlockKind::Header.default_props());
        assert!(doc.is_dirty());
        doc.add_block(BlockKind::Text);
        doc.move_block(0, 1);
        assert!(doc.is_dirty());
        doc.mark_as_saved();
        assert!(!doc.is_dirty());
        doc.remove_block(&id);
        assert!(doc.is_dirty());
    }

    #[test]
    fn mark_as_saved_touches_nothing_but_the_dirty_flag() {
        let mut doc = doc_with(&[BlockKind::Header]);
        let id = doc.blocks()[0].id.clone();
        doc.select_block(&id);
        doc.mark_as_saved();
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.selected_block_id(), Some(id.as_str()));
    }

    #[test]
    fn hydrate_resets_selection_and_dirty_and_server_origin() {
        let mut source = doc_with(&[BlockKind::Header, BlockKind::Button]);
        let json = source.to_json().unwrap();
        let doc = TemplateDocument::hydrate(&json).unwrap();
        assert_eq!(doc.blocks(), source.blocks());
        assert_eq!(doc.selected_block_id(), None);
        assert!(!doc.is_dirty());
        assert!(!doc.is_new());
    }

    #[test]
    fn hydrate_rejects_malformed_json() {
        assert!(TemplateDocument::hydrate("not json").is_err());
        assert!(TemplateDocument::hydrate("{\"wrapper\":true}").is_err());
    }

    #[test]
    fn json_round_trip_is_deep_equal() {
        let mut doc = doc_with(&[BlockKind::Header, BlockKind::Text, BlockKind::Image]);
        let id = doc.blocks()[0].id.clone();
        doc.update_content(&id, "Hi");
        let json = doc.to_json().unwrap();
        let back = TemplateDocument::hydrate(&json).unwrap();
        assert_eq!(back.blocks(), doc.blocks());
    }

    #[test]
    fn recovered_draft_is_clean_and_still_new() {
        let mut source = doc_with(&[BlockKind::Header, BlockKind::Text]);
        source.mark_as_saved();
        let doc = TemplateDocument::recovered(source.blocks().to_vec());
        assert_eq!(doc.blocks().len(), 2);
        assert!(!doc.is_dirty());
        assert!(doc.is_new());
    }

    #[test]
    fn update_content_writes_only_the_content_field() {
        let mut doc = TemplateDocument::new();
        let id = doc.add_block(BlockKind::Text);
        doc.update_content(&id, "<p>Hi</p>");
        let block = doc.block(&id).unwrap();
        assert_eq!(block.body.content(), Some("<p>Hi</p>"));
        // The rest of the bag keeps its defaults.
        if let common::model::block::BlockBody::Text(p) = &block.body {
            assert_eq!(p.font_size, 16);
        } else {
            panic!("expected text body");
        }
    }
}

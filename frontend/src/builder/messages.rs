use common::model::block::{BlockBody, BlockKind};
use common::requests::SaveTemplateResponse;

use crate::document::TemplateDocument;

pub enum Msg {
    // Document model operations.
    AddBlock(BlockKind),
    UpdateBlock { id: String, body: BlockBody },
    RemoveBlock(String),
    SelectBlock(String),
    BackgroundClicked,

    // Drag and drop.
    DragStartExisting { id: String, index: usize },
    DragStartPalette(BlockKind),
    DragOverBlock {
        hover_index: usize,
        pointer_y: f64,
        rect_top: f64,
        rect_height: f64,
    },
    DragOverCanvas { pointer_y: f64 },
    DropOnCanvas,
    DragEnded,

    // Code-view escape hatch.
    OpenCodeView,
    CodeViewApply(String),
    CodeViewClosed,

    // Persistence boundary.
    SetName(String),
    Save,
    SaveSucceeded(SaveTemplateResponse),
    SaveConflicted,
    SaveFailed(String),
    TemplateLoaded(TemplateDocument),
    DraftRecovered(TemplateDocument),
    LoadFailed(String),
}

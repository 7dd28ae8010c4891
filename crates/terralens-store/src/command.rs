//! Store command stream
//!
//! User edit actions arrive from the host as discrete commands applied
//! sequentially, which keeps the mutation rules testable without any
//! rendering surface.

use crate::store::ShapeStore;
use crate::StoreError;
use geojson::Feature;
use terralens_domain::ShapeId;

/// A single user edit action against the shape store
#[derive(Debug, Clone)]
pub enum StoreCommand {
    /// Append a freshly drawn shape
    AddDrawn(Feature),

    /// Remove one drawn shape by id
    RemoveDrawn(ShapeId),

    /// Replace the imported set with shapes parsed from raw GeoJSON text
    SetImported(String),

    /// Remove one imported shape by id
    RemoveImported(ShapeId),
}

/// What a successfully applied command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A shape was added with this id
    Added(ShapeId),

    /// A shape with this id was removed
    Removed(ShapeId),

    /// The id did not match any shape; state unchanged
    NotFound(ShapeId),

    /// The imported set was replaced; these are the new ids
    ImportReplaced(Vec<ShapeId>),
}

impl ShapeStore {
    /// Apply one command to the store
    ///
    /// A failed `SetImported` returns the error without mutating anything;
    /// remove commands for unknown ids succeed with
    /// [`CommandOutcome::NotFound`].
    pub fn apply(&mut self, command: StoreCommand) -> Result<CommandOutcome, StoreError> {
        match command {
            StoreCommand::AddDrawn(feature) => Ok(CommandOutcome::Added(self.add_drawn(feature))),
            StoreCommand::RemoveDrawn(id) => Ok(if self.remove_drawn(id) {
                CommandOutcome::Removed(id)
            } else {
                CommandOutcome::NotFound(id)
            }),
            StoreCommand::SetImported(raw) => {
                Ok(CommandOutcome::ImportReplaced(self.set_imported(&raw)?))
            }
            StoreCommand::RemoveImported(id) => Ok(if self.remove_imported(id) {
                CommandOutcome::Removed(id)
            } else {
                CommandOutcome::NotFound(id)
            }),
        }
    }
}

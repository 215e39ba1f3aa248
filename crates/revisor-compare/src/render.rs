//! Presentation-agnostic diff rendering.
//!
//! The diff engine stays pure data; everything side-effecting goes through
//! the [`DiffPresentation`] seam, so engine and renderer are independently
//! testable.

use crate::diff::{DiffStatus, PairedAttribute};

/// Which pane of the comparison a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Left,
  Right,
}

impl Side {
  pub fn opposite(self) -> Self {
    match self {
      Self::Left => Self::Right,
      Self::Right => Self::Left,
    }
  }
}

/// Visual marking applied to a block's title or value element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
  Changed,
  Added,
  Removed,
}

/// Address of one block in the two-pane layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockAt {
  pub section: usize,
  pub index:   usize,
}

/// The rendering target for one comparison: two panes of aligned sections.
pub trait DiffPresentation {
  fn mark_title(&mut self, side: Side, at: BlockAt, mark: Mark);
  fn mark_value(&mut self, side: Side, at: BlockAt, mark: Mark);
  /// Insert an empty block so the two panes keep aligned block counts.
  fn insert_placeholder(&mut self, side: Side, at: BlockAt);
  /// Equalize the rendered heights of every aligned block pair in a section.
  fn equalize_heights(&mut self, section: usize);
}

/// Apply one section's classification to the presentation.
///
/// `removed` marks the left block and inserts a placeholder on the right;
/// `added` is its exact mirror. Height equalization runs exactly once per
/// section pair, after all blocks are placed and marked.
pub fn render_section(
  section: usize,
  paired: &[PairedAttribute],
  presentation: &mut dyn DiffPresentation,
) {
  for (index, pair) in paired.iter().enumerate() {
    let at = BlockAt { section, index };
    match pair.status {
      DiffStatus::Unchanged => {}
      DiffStatus::Changed => {
        for side in [Side::Left, Side::Right] {
          presentation.mark_title(side, at, Mark::Changed);
          presentation.mark_value(side, at, Mark::Changed);
        }
      }
      DiffStatus::Removed => one_sided(presentation, Side::Left, at, Mark::Removed),
      DiffStatus::Added => one_sided(presentation, Side::Right, at, Mark::Added),
    }
  }
  presentation.equalize_heights(section);
}

fn one_sided(
  presentation: &mut dyn DiffPresentation,
  side: Side,
  at: BlockAt,
  mark: Mark,
) {
  presentation.insert_placeholder(side.opposite(), at);
  presentation.mark_title(side, at, mark);
  presentation.mark_value(side, at, mark);
}

/// Render every section pair of a comparison view in order.
pub fn render_sections(
  sections: &[Vec<PairedAttribute>],
  presentation: &mut dyn DiffPresentation,
) {
  for (section, paired) in sections.iter().enumerate() {
    render_section(section, paired, presentation);
  }
}

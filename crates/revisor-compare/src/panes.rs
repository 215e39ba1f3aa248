//! In-memory pane model — the concrete [`DiffPresentation`] used by the CLI
//! and the pipeline tests.
//!
//! A pane is an ordered list of sections, each an ordered list of
//! title/value blocks. Blocks carry their marks and a line height; height
//! equalization pads the shorter block of every aligned pair.

use revisor_core::attribute::AttributeEntry;

use crate::{
  diff::PairedAttribute,
  render::{BlockAt, DiffPresentation, Mark, Side},
};

/// One rendered attribute block: a title element and a value element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
  pub title:       String,
  pub value:       String,
  pub title_mark:  Option<Mark>,
  pub value_mark:  Option<Mark>,
  pub placeholder: bool,
  /// Rendered height in lines; equalization may raise it.
  pub height:      usize,
}

impl Block {
  fn from_entry(entry: &AttributeEntry) -> Self {
    Self {
      title:       entry.def.title.clone(),
      value:       entry.attribute_value.clone(),
      title_mark:  None,
      value_mark:  None,
      placeholder: false,
      // One line for the title plus at least one for the value.
      height:      1 + entry.attribute_value.lines().count().max(1),
    }
  }

  fn empty() -> Self {
    Self {
      title:       String::new(),
      value:       String::new(),
      title_mark:  None,
      value_mark:  None,
      placeholder: true,
      height:      0,
    }
  }
}

/// One side of the comparison view.
#[derive(Debug, Clone, Default)]
pub struct Pane {
  pub sections: Vec<Vec<Block>>,
}

/// The two panes of a comparison, kept positionally aligned.
#[derive(Debug, Clone, Default)]
pub struct PanePair {
  pub left:  Pane,
  pub right: Pane,
}

impl PanePair {
  /// Build both panes from the paired classification: one block per pair on
  /// each side where that side's entry is present, in pair order.
  pub fn for_sections(sections: &[Vec<PairedAttribute>]) -> Self {
    let mut panes = Self::default();
    for paired in sections {
      let collect = |pick: fn(&PairedAttribute) -> Option<&AttributeEntry>| {
        paired
          .iter()
          .filter_map(pick)
          .map(Block::from_entry)
          .collect::<Vec<_>>()
      };
      panes.left.sections.push(collect(|p| p.left.as_ref()));
      panes.right.sections.push(collect(|p| p.right.as_ref()));
    }
    panes
  }

  /// The aligned blocks of one section, paired by position.
  pub fn section_pairs(&self, section: usize) -> Vec<(&Block, &Block)> {
    let left = self.left.sections.get(section);
    let right = self.right.sections.get(section);
    match (left, right) {
      (Some(l), Some(r)) => l.iter().zip(r.iter()).collect(),
      _ => Vec::new(),
    }
  }

  fn pane_mut(&mut self, side: Side) -> &mut Pane {
    match side {
      Side::Left => &mut self.left,
      Side::Right => &mut self.right,
    }
  }
}

impl DiffPresentation for PanePair {
  fn mark_title(&mut self, side: Side, at: BlockAt, mark: Mark) {
    if let Some(block) = self
      .pane_mut(side)
      .sections
      .get_mut(at.section)
      .and_then(|s| s.get_mut(at.index))
    {
      block.title_mark = Some(mark);
    }
  }

  fn mark_value(&mut self, side: Side, at: BlockAt, mark: Mark) {
    if let Some(block) = self
      .pane_mut(side)
      .sections
      .get_mut(at.section)
      .and_then(|s| s.get_mut(at.index))
    {
      block.value_mark = Some(mark);
    }
  }

  fn insert_placeholder(&mut self, side: Side, at: BlockAt) {
    if let Some(section) = self.pane_mut(side).sections.get_mut(at.section) {
      let index = at.index.min(section.len());
      section.insert(index, Block::empty());
    }
  }

  fn equalize_heights(&mut self, section: usize) {
    let (Some(left), Some(right)) = (
      self.left.sections.get_mut(section),
      self.right.sections.get_mut(section),
    ) else {
      return;
    };
    for (l, r) in left.iter_mut().zip(right.iter_mut()) {
      let height = l.height.max(r.height);
      l.height = height;
      r.height = height;
    }
  }
}

#[cfg(test)]
mod tests {
  use revisor_core::attribute::AttributeDef;

  use super::*;
  use crate::{diff, render};

  fn entry(id: u64, title: &str, value: &str) -> AttributeEntry {
    AttributeEntry {
      custom_attribute_id: id,
      def: AttributeDef {
        id,
        title: title.to_string(),
      },
      attribute_value: value.to_string(),
    }
  }

  #[test]
  fn removed_attribute_pads_right_pane() {
    let sections = vec![diff::pair(
      &[entry(1, "t", "v"), entry(2, "t2", "v2")],
      &[entry(2, "t2", "v2")],
    )];
    let mut panes = PanePair::for_sections(&sections);
    render::render_sections(&sections, &mut panes);

    // Both panes end up with two aligned blocks.
    assert_eq!(panes.left.sections[0].len(), 2);
    assert_eq!(panes.right.sections[0].len(), 2);
    assert!(panes.right.sections[0][0].placeholder);
    assert_eq!(panes.left.sections[0][0].title_mark, Some(Mark::Removed));
    // The surviving attribute stays aligned and unmarked.
    assert_eq!(panes.left.sections[0][1].title, "t2");
    assert_eq!(panes.right.sections[0][1].title, "t2");
    assert!(panes.right.sections[0][1].title_mark.is_none());
  }

  #[test]
  fn added_attribute_pads_left_pane() {
    let sections = vec![diff::pair(&[], &[entry(1, "t", "v")])];
    let mut panes = PanePair::for_sections(&sections);
    render::render_sections(&sections, &mut panes);

    assert_eq!(panes.left.sections[0].len(), 1);
    assert!(panes.left.sections[0][0].placeholder);
    assert_eq!(panes.right.sections[0][0].value_mark, Some(Mark::Added));
  }

  #[test]
  fn equalization_raises_paired_heights_to_the_max() {
    let sections = vec![diff::pair(
      &[entry(1, "t", "line one\nline two\nline three")],
      &[entry(1, "t", "short")],
    )];
    let mut panes = PanePair::for_sections(&sections);
    render::render_sections(&sections, &mut panes);

    let pairs = panes.section_pairs(0);
    assert_eq!(pairs.len(), 1);
    let (l, r) = pairs[0];
    assert_eq!(l.height, r.height);
    assert_eq!(l.height, 4); // title line + three value lines
  }

  #[test]
  fn placeholder_inherits_the_real_block_height() {
    let sections = vec![diff::pair(&[entry(1, "t", "v")], &[])];
    let mut panes = PanePair::for_sections(&sections);
    render::render_sections(&sections, &mut panes);

    let (l, r) = panes.section_pairs(0)[0];
    assert!(r.placeholder);
    assert_eq!(l.height, r.height);
  }
}

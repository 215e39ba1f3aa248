//! Two-column text rendering of a comparison.

use std::io::{self, Write};

use revisor_compare::{
  Comparison,
  panes::{Block, PanePair},
  render::Mark,
};
use serde::Deserialize;

/// Report settings, loaded from `revisor.toml` and `REVISOR_*` environment
/// variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
  /// Column width of each pane, in characters.
  pub pane_width:     usize,
  /// Whether unmarked attribute pairs are printed at all.
  pub show_unchanged: bool,
}

impl Default for ReportConfig {
  fn default() -> Self {
    Self {
      pane_width:     36,
      show_unchanged: true,
    }
  }
}

/// Print the comparison header: what is being compared, and by whom each
/// side was modified.
pub fn write_header(
  out: &mut impl Write,
  comparison: &Comparison,
) -> io::Result<()> {
  writeln!(
    out,
    "{} #{}: revision {} vs {}",
    comparison.left.instance.kind,
    comparison.left.instance.id,
    comparison.left.revision.id,
    comparison.right.revision.id,
  )?;
  for (label, person) in [
    ("left", &comparison.left_modified_by),
    ("right", &comparison.right_modified_by),
  ] {
    match person {
      Some(p) => writeln!(out, "  {label} modified by {} <{}>", p.name, p.email)?,
      None => writeln!(out, "  {label} modified by (unknown)")?,
    }
  }
  writeln!(out)
}

/// Print the aligned panes, one gutter-marked row group per block pair.
pub fn write_panes(
  out: &mut impl Write,
  panes: &PanePair,
  config: &ReportConfig,
) -> io::Result<()> {
  let width = config.pane_width;
  for section in 0..panes.left.sections.len() {
    for (left, right) in panes.section_pairs(section) {
      let marker = gutter(left, right);
      if marker == ' ' && !config.show_unchanged {
        continue;
      }
      writeln!(
        out,
        "{marker} {} | {}",
        cell(&left.title, width),
        cell(&right.title, width),
      )?;
      let value_rows = left
        .height
        .max(right.height)
        .saturating_sub(1)
        .max(1);
      for row in 0..value_rows {
        let l = left.value.lines().nth(row).unwrap_or("");
        let r = right.value.lines().nth(row).unwrap_or("");
        writeln!(out, "  {} | {}", cell(l, width), cell(r, width))?;
      }
    }
  }
  Ok(())
}

/// The gutter symbol for an aligned block pair.
fn gutter(left: &Block, right: &Block) -> char {
  let mark = left
    .title_mark
    .or(left.value_mark)
    .or(right.title_mark)
    .or(right.value_mark);
  match mark {
    Some(Mark::Changed) => '~',
    Some(Mark::Added) => '+',
    Some(Mark::Removed) => '-',
    None => ' ',
  }
}

/// Pad or truncate `text` to exactly `width` characters.
fn cell(text: &str, width: usize) -> String {
  let mut out: String = text.chars().take(width).collect();
  if text.chars().count() > width && width > 0 {
    out.pop();
    out.push('…');
  }
  while out.chars().count() < width {
    out.push(' ');
  }
  out
}

#[cfg(test)]
mod tests {
  use revisor_compare::{diff, render};
  use revisor_core::attribute::{AttributeDef, AttributeEntry};

  use super::*;

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
  fn cell_pads_and_truncates() {
    assert_eq!(cell("ab", 4), "ab  ");
    assert_eq!(cell("abcdef", 4), "abc…");
    assert_eq!(cell("abcd", 4), "abcd");
  }

  #[test]
  fn panes_report_carries_gutter_markers() {
    let sections = vec![diff::pair(
      &[entry(1, "Severity", "high"), entry(2, "Owner note", "x")],
      &[entry(1, "Severity", "low"), entry(3, "Cadence", "quarterly")],
    )];
    let mut panes = PanePair::for_sections(&sections);
    render::render_sections(&sections, &mut panes);

    let mut buf = Vec::new();
    write_panes(&mut buf, &panes, &ReportConfig::default()).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.lines().any(|l| l.starts_with('~')), "{text}");
    assert!(text.lines().any(|l| l.starts_with('-')), "{text}");
    assert!(text.lines().any(|l| l.starts_with('+')), "{text}");
  }

  #[test]
  fn unchanged_rows_can_be_suppressed() {
    let sections =
      vec![diff::pair(&[entry(1, "t", "v")], &[entry(1, "t", "v")])];
    let mut panes = PanePair::for_sections(&sections);
    render::render_sections(&sections, &mut panes);

    let config = ReportConfig {
      show_unchanged: false,
      ..ReportConfig::default()
    };
    let mut buf = Vec::new();
    write_panes(&mut buf, &panes, &config).unwrap();
    assert!(buf.is_empty());
  }
}

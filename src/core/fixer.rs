//! Application of fix descriptors to source text.

use crate::core::violation::Fix;

/// Result of applying a set of fixes to one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutput {
    pub output: String,
    pub applied: usize,
    /// Fixes dropped because they overlap an earlier fix or fall outside the source.
    pub skipped: usize,
}

impl FixOutput {
    pub fn is_changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply `fixes` to `source` in a single pass.
///
/// Fixes are applied in start-offset order. A fix overlapping a previously
/// applied one, or not on character boundaries, is skipped.
pub fn apply_fixes<'a>(source: &str, fixes: impl IntoIterator<Item = &'a Fix>) -> FixOutput {
    let mut fixes: Vec<&Fix> = fixes.into_iter().collect();
    fixes.sort_by_key(|fix| (fix.range.start, fix.range.end));

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut applied = 0;
    let mut skipped = 0;

    for fix in fixes {
        let range = &fix.range;
        let in_bounds = range.start <= range.end
            && range.end <= source.len()
            && source.is_char_boundary(range.start)
            && source.is_char_boundary(range.end);
        if !in_bounds || range.start < cursor {
            skipped += 1;
            continue;
        }

        output.push_str(&source[cursor..range.start]);
        output.push_str(&fix.text);
        cursor = range.end;
        applied += 1;
    }
    output.push_str(&source[cursor..]);

    FixOutput {
        output,
        applied,
        skipped,
    }
}

use tracing::debug;

use super::merge::merge_fragments;
use crate::config::SplitterConfig;

/// A piece of the input produced by one level of splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fragment<'t> {
    pub text: &'t str,
    /// Byte offset of `text` in the original input
    pub offset: usize,
}

/// Byte range of a finished chunk in the original input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Fragment<'_> {
    pub fn span(&self) -> Span {
        Span {
            start: self.offset,
            end: self.offset + self.text.len(),
        }
    }
}

/// Pick the first separator that occurs in `text`
///
/// Returns the separator and the finer separators left to recurse with.
/// The empty separator always matches and has nothing finer. When nothing
/// matches, the last separator is used with nothing finer.
pub(crate) fn select_separator<'s>(
    text: &str,
    separators: &'s [String],
) -> (&'s str, &'s [String]) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() {
            return (separator, &separators[separators.len()..]);
        }
        if text.contains(separator.as_str()) {
            return (separator, &separators[i + 1..]);
        }
    }

    let rest = &separators[separators.len()..];
    match separators.last() {
        Some(last) => (last, rest),
        None => ("", rest),
    }
}

/// Split `text` on `separator`, keeping each separator occurrence as its
/// own fragment so the fragments concatenate back into `text`
///
/// Empty pieces are dropped. The empty separator yields one fragment per
/// character.
pub(crate) fn split_on_separator<'t>(
    text: &'t str,
    offset: usize,
    separator: &str,
) -> Vec<Fragment<'t>> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| Fragment {
                text: &text[i..i + c.len_utf8()],
                offset: offset + i,
            })
            .collect();
    }

    let mut fragments = Vec::new();
    let mut last = 0;

    for (idx, matched) in text.match_indices(separator) {
        if idx > last {
            fragments.push(Fragment {
                text: &text[last..idx],
                offset: offset + last,
            });
        }
        fragments.push(Fragment {
            text: matched,
            offset: offset + idx,
        });
        last = idx + matched.len();
    }

    if last < text.len() {
        fragments.push(Fragment {
            text: &text[last..],
            offset: offset + last,
        });
    }

    fragments
}

/// Split `text` into chunk spans, descending into oversized fragments with
/// the finer separators
///
/// Fragments that fit are batched and merged; a fragment that does not fit
/// flushes the batch first so output order follows the input.
pub(crate) fn split_recursive(
    config: &SplitterConfig,
    text: &str,
    offset: usize,
    separators: &[String],
    spans: &mut Vec<Span>,
) {
    let (separator, finer) = select_separator(text, separators);
    debug!(
        separator = ?separator,
        finer = finer.len(),
        offset,
        bytes = text.len(),
        "splitting text"
    );

    let mut pending: Vec<(Fragment<'_>, usize)> = Vec::new();

    for fragment in split_on_separator(text, offset, separator) {
        let length = config.length(fragment.text);

        if length <= config.chunk_size() {
            pending.push((fragment, length));
            continue;
        }

        // Flush the batch before the oversized fragment
        if !pending.is_empty() {
            spans.extend(merge_fragments(config, &pending));
            pending.clear();
        }

        if finer.is_empty() {
            // Nothing left to split with; emitted whole
            spans.push(fragment.span());
        } else {
            split_recursive(config, fragment.text, fragment.offset, finer, spans);
        }
    }

    if !pending.is_empty() {
        spans.extend(merge_fragments(config, &pending));
    }
}

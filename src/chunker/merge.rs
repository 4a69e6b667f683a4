use std::collections::VecDeque;

use super::splitter::{Fragment, Span};
use crate::config::SplitterConfig;

/// Greedily pack measured fragments into chunk spans with overlap
///
/// When the next fragment does not fit, the window is closed as a chunk
/// and slid forward: fragments are dropped from the front until the
/// retained tail is within the overlap budget, then further until the next
/// fragment fits. Fragments are contiguous, so a window is always one
/// contiguous span of the input.
pub(crate) fn merge_fragments(
    config: &SplitterConfig,
    fragments: &[(Fragment<'_>, usize)],
) -> Vec<Span> {
    let chunk_size = config.chunk_size();
    let chunk_overlap = config.chunk_overlap();

    let mut spans = Vec::new();
    let mut window: VecDeque<(Fragment<'_>, usize)> = VecDeque::new();
    let mut total = 0;

    for &(fragment, length) in fragments {
        if !window.is_empty() && total + length > chunk_size {
            spans.extend(window_span(&window));

            while total > chunk_overlap {
                let Some((_, dropped)) = window.pop_front() else {
                    break;
                };
                total -= dropped;
            }

            // Retained overlap must not push the next chunk past chunk_size
            while total + length > chunk_size {
                let Some((_, dropped)) = window.pop_front() else {
                    break;
                };
                total -= dropped;
            }
        }

        window.push_back((fragment, length));
        total += length;
    }

    spans.extend(window_span(&window));
    spans
}

fn window_span(window: &VecDeque<(Fragment<'_>, usize)>) -> Option<Span> {
    let (first, _) = window.front()?;
    let (last, _) = window.back()?;
    let span = Span {
        start: first.offset,
        end: last.span().end,
    };

    (span.end > span.start).then_some(span)
}

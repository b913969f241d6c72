//! Section partitioning for learning tracks.

use std::num::NonZeroUsize;

/// Split `items` into `section_count` contiguous, near-equal sections.
///
/// The first `len % section_count` sections carry one extra item. Empty
/// sections (more sections than items) are dropped, so concatenating the
/// result always reproduces `items`.
pub fn partition<T>(items: &[T], section_count: NonZeroUsize) -> Vec<&[T]> {
    let count = section_count.get();
    let base = items.len() / count;
    let remainder = items.len() % count;

    let mut sections = Vec::with_capacity(count);
    let mut cursor = 0;
    for i in 0..count {
        let size = base + usize::from(i < remainder);
        if size == 0 {
            continue;
        }
        sections.push(&items[cursor..cursor + size]);
        cursor += size;
    }

    sections
}

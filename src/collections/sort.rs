use std::cmp::Ordering;

use crate::lang::{InvalidArgument, Order};

/// Stably sorts `entries` by the value `key` extracts from each, using `order`.
///
/// The sort runs over a permutation of indices first, so if the order fails on any pair,
/// `entries` is left untouched and the first error is returned.
pub(crate) fn sort_entries<E, T>(
    entries: &mut Vec<E>,
    key: impl Fn(&E) -> &T,
    order: &Order<'_, T>,
) -> Result<(), InvalidArgument> {
    tracing::trace!(len = entries.len(), ?order, "sorting entries");

    let mut failure = None;
    let mut permutation: Vec<usize> = (0..entries.len()).collect();

    permutation.sort_by(|&a, &b| {
        if failure.is_some() {
            return Ordering::Equal;
        }

        order.compare(key(&entries[a]), key(&entries[b])).unwrap_or_else(|error| {
            failure = Some(error);
            Ordering::Equal
        })
    });

    if let Some(error) = failure {
        tracing::debug!(%error, "sort aborted, entries left unchanged");
        return Err(error);
    }

    let mut slots: Vec<Option<E>> = entries.drain(..).map(Some).collect();
    entries.extend(permutation.into_iter().filter_map(|index| slots[index].take()));
    Ok(())
}

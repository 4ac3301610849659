use crate::list::{DetachedNodes, List, GHOST};

pub(super) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    if let Some(all) = list.detach_all_nodes() {
        let sorted = merge_sort_chain(list, all, &mut less);
        list.attach_nodes(GHOST, GHOST, sorted);
    }
}

fn merge_sort_chain<T, F>(list: &mut List<T>, chain: DetachedNodes, less: &mut F) -> DetachedNodes
where
    F: FnMut(&T, &T) -> bool,
{
    let (front, back) = match list.split_chain(chain) {
        Some(halves) => halves,
        None => return chain,
    };
    let front = merge_sort_chain(list, front, less);
    let back = merge_sort_chain(list, back, less);
    // Both halves are non-empty, so the merged chain is too.
    merge_chains(list, Some(front), Some(back), less).unwrap_or(chain)
}

/// Take the front node of whichever chain goes first, and advance that chain.
///
/// The node of `right` is taken only if it is strictly less than the node of
/// `left`, which keeps the merge stable.
fn take_front<T, F>(
    list: &List<T>,
    left: &mut Option<DetachedNodes>,
    right: &mut Option<DetachedNodes>,
    less: &mut F,
) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let (l, r) = match (*left, *right) {
        (Some(l), Some(r)) => (l, r),
        _ => return None,
    };
    if less(list.element(r.front), list.element(l.front)) {
        *right = list.chain_rest(r);
        Some(r.front)
    } else {
        *left = list.chain_rest(l);
        Some(l.front)
    }
}

/// Merge two sorted chains living in the arena of `list` by relinking
/// their nodes. Once a side runs out, the rest of the other one is
/// appended as a whole.
pub(super) fn merge_chains<T, F>(
    list: &mut List<T>,
    mut left: Option<DetachedNodes>,
    mut right: Option<DetachedNodes>,
    less: &mut F,
) -> Option<DetachedNodes>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = match take_front(list, &mut left, &mut right, less) {
        Some(node) => DetachedNodes::new(node, node),
        None => return left.or(right),
    };
    while let Some(node) = take_front(list, &mut left, &mut right, less) {
        list.connect(merged.back, node);
        merged.back = node;
    }
    if let Some(rest) = left.or(right) {
        list.connect(merged.back, rest.front);
        merged.back = rest.back;
    }
    Some(merged)
}

use crate::list::{DetachedNodes, List, GHOST};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod sort;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// Chain primitives. A chain is a run of nodes `front..=back` linked through
// `next` and walked until `back`, whether or not it is attached to the list.
impl<T> List<T> {
    /// Find the middle node of a chain with a slow/fast walk.
    ///
    /// For a chain of *n* nodes it returns the node at position *n* / 2,
    /// i.e. the second of the two middle nodes when *n* is even.
    pub(crate) fn middle_of(&self, chain: DetachedNodes) -> usize {
        let (mut slow, mut fast) = (chain.front, chain.front);
        while fast != chain.back {
            let fast_next = self.next_of(fast);
            slow = self.next_of(slow);
            if fast_next == chain.back {
                break;
            }
            fast = self.next_of(fast_next);
        }
        slow
    }

    /// Cut a chain right before its middle node, or return `None` if it
    /// has a single node.
    pub(crate) fn split_chain(&self, chain: DetachedNodes) -> Option<(DetachedNodes, DetachedNodes)> {
        let mid = self.middle_of(chain);
        if mid == chain.front {
            return None;
        }
        Some((
            DetachedNodes::new(chain.front, self.prev_of(mid)),
            DetachedNodes::new(mid, chain.back),
        ))
    }

    /// Reverse a chain in place by swapping the links of each node.
    pub(crate) fn reverse_chain(&mut self, chain: DetachedNodes) -> DetachedNodes {
        let mut node = chain.front;
        loop {
            let links = self.links_mut(node);
            std::mem::swap(&mut links.next, &mut links.prev);
            if node == chain.back {
                break;
            }
            // the old `next` after the swap
            node = links.prev;
        }
        DetachedNodes::new(chain.back, chain.front)
    }

    /// Drop the first node of a chain, returning the rest of it.
    pub(crate) fn chain_rest(&self, chain: DetachedNodes) -> Option<DetachedNodes> {
        if chain.front == chain.back {
            return None;
        }
        Some(DetachedNodes::new(self.next_of(chain.front), chain.back))
    }
}

impl<T> List<T> {
    /// Reverse the order of the elements in place.
    ///
    /// Only the links are rewritten; no element is moved.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if let Some(all) = self.detach_all_nodes() {
            let reversed = self.reverse_chain(all);
            self.attach_nodes(GHOST, GHOST, reversed);
        }
    }

    /// Reverse every consecutive group of `k` elements in place, left to
    /// right. A trailing group shorter than `k` keeps its order. Nothing
    /// happens for `k <= 1`.
    ///
    /// Each full group is cut out of the list, reversed, and spliced back
    /// between the same neighbours.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..=7);
    /// list.reverse_in_groups(3);
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1, 6, 5, 4, 7]);
    /// ```
    pub fn reverse_in_groups(&mut self, k: usize) {
        if k <= 1 || self.is_empty() {
            return;
        }
        // `cut` is the node right before the group being collected.
        let (mut cut, mut node, mut count) = (GHOST, self.front_node(), 0);
        while node != GHOST {
            let next = self.next_of(node);
            count += 1;
            if count == k {
                let group = self.detach_nodes(self.next_of(cut), node);
                let group = self.reverse_chain(group);
                self.attach_nodes(cut, next, group);
                cut = self.prev_of(next);
                count = 0;
            }
            node = next;
        }
    }

    /// Remove the middle element and return it, or `None` if the list is
    /// empty. For a list of length *n* the element at index *n* / 2 is
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// assert_eq!(list.remove_middle(), Some(3));
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 4]);
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let all = DetachedNodes::new(self.front_node(), self.back_node());
        let mid = self.middle_of(all);
        Some(self.detach_node(mid))
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack.
    ///
    /// # Current Implementation
    ///
    /// A top-down merge sort: the list is cut at its middle node, both halves
    /// are sorted recursively and then merged by relinking. There is no extra
    /// temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sort the list in ascending order. See [`List::sort_by`].
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self, |a, b| a.lt(b));
    }

    /// Merge `other` into `self`, assuming both are sorted by `compare`.
    ///
    /// The fronts of both lists are compared repeatedly and the one ordered
    /// first moves to the result; on a tie the element of `self` goes first.
    /// When one side runs out, the rest of the other side is appended as a
    /// whole. All elements end up in `self` and `other` is left empty.
    ///
    /// Returns the number of elements in the merged list.
    ///
    /// Each list has its own arena, so the elements of `other` first move
    /// into slots of `self` (*O*(*m*), one reservation up front); the merge
    /// itself only relinks nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_queue::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 4, 6]);
    /// let mut other = List::from_iter([2, 3, 7, 8]);
    /// assert_eq!(list.merge_by(&mut other, |a, b| a.cmp(b)), 7);
    /// assert!(other.is_empty());
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7, 8]);
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut List<T>, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let adopted = self.adopt(other);
        let own = self.detach_all_nodes();
        let mut less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
        if let Some(merged) = sort::merge_chains(self, own, adopted, &mut less) {
            self.attach_nodes(GHOST, GHOST, merged);
        }
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    fn to_vec(list: &List<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn reverse() {
        for len in 0..6 {
            let mut list = List::from_iter(0..len);
            list.reverse();
            assert_eq!(to_vec(&list), (0..len).rev().collect::<Vec<_>>());
            list.reverse();
            assert_eq!(to_vec(&list), (0..len).collect::<Vec<_>>());
            assert_eq!(list.len(), len as usize);
        }
    }

    #[test]
    fn reverse_in_groups() {
        fn case(len: i32, k: usize, expected: &[i32]) {
            let mut list = List::from_iter(1..=len);
            list.reverse_in_groups(k);
            assert_eq!(to_vec(&list), expected, "len = {}, k = {}", len, k);
            assert_eq!(list.len(), len as usize);
        }
        case(7, 3, &[3, 2, 1, 6, 5, 4, 7]);
        case(6, 3, &[3, 2, 1, 6, 5, 4]);
        case(5, 2, &[2, 1, 4, 3, 5]);
        case(4, 2, &[2, 1, 4, 3]);
        case(3, 5, &[1, 2, 3]);
        case(3, 3, &[3, 2, 1]);
        case(3, 1, &[1, 2, 3]);
        case(3, 0, &[1, 2, 3]);
        case(1, 2, &[1]);
        case(0, 2, &[]);
    }

    #[test]
    fn remove_middle() {
        let mut list = List::from_iter(Some(1));
        assert_eq!(list.remove_middle(), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.remove_middle(), None);

        for len in 1..8 {
            let mut list = List::from_iter(0..len);
            assert_eq!(list.remove_middle(), Some(len / 2));
            assert_eq!(list.len(), len as usize - 1);
        }
    }

    #[test]
    fn sort() {
        fn case(input: &[i32]) {
            let mut list = List::from_iter(input.iter().copied());
            list.sort();
            let mut expected = input.to_vec();
            expected.sort();
            assert_eq!(to_vec(&list), expected);

            list.sort_by(|a, b| b.cmp(a));
            expected.reverse();
            assert_eq!(to_vec(&list), expected);
        }
        case(&[]);
        case(&[1]);
        case(&[2, 1]);
        case(&[3, 1, 2]);
        case(&[5, 2, 13, 3, 8, 2, 5, 5, 0, -1, 7]);
        case(&(0..50).map(|i| (i * 37) % 17).collect::<Vec<_>>());
    }

    #[test]
    fn sort_is_stable() {
        let mut list = List::from_iter([(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')]);
        list.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            Vec::from_iter(list),
            vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]
        );
    }

    #[test]
    fn merge_by() {
        let mut list = List::from_iter([1, 3, 5]);
        let mut other = List::new();
        assert_eq!(list.merge_by(&mut other, |a, b| a.cmp(b)), 3);
        assert_eq!(to_vec(&list), vec![1, 3, 5]);

        let mut empty = List::new();
        assert_eq!(empty.merge_by(&mut list, |a, b| a.cmp(b)), 3);
        assert!(list.is_empty());
        assert_eq!(to_vec(&empty), vec![1, 3, 5]);

        let mut descending = List::from_iter([9, 4, 4, 1]);
        let mut other = List::from_iter([8, 4, 2]);
        assert_eq!(descending.merge_by(&mut other, |a, b| b.cmp(a)), 7);
        assert_eq!(to_vec(&descending), vec![9, 8, 4, 4, 4, 2, 1]);
    }

    #[test]
    fn merge_prefers_self_on_ties() {
        let mut list = List::from_iter([(1, 'l'), (2, 'l')]);
        let mut other = List::from_iter([(1, 'r'), (2, 'r')]);
        list.merge_by(&mut other, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            Vec::from_iter(list),
            vec![(1, 'l'), (1, 'r'), (2, 'l'), (2, 'r')]
        );
    }

    #[test]
    fn equality_and_clone() {
        let list = List::from_iter(0..4);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_ne!(list, List::from_iter(0..3));
    }

    #[test]
    fn hash_follows_order() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(list: &List<i32>) -> u64 {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        }
        let mut list = List::from_iter([1, 2, 3]);
        let same = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&list), hash_of(&same));
        list.reverse();
        assert_ne!(hash_of(&list), hash_of(&same));
    }
}

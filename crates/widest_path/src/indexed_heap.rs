const ABSENT: usize = usize::MAX;

/// Max-heap over the dense id space `0..n` with a reverse position index, so
/// any id can be re-keyed or removed in O(log n), not just the maximum.
///
/// Three parallel arrays: `heap` holds ids in heap order, `key` holds the
/// current key of each id, and `pos` maps an id back to its slot in `heap`
/// (`ABSENT` while the id is out). Invariants: `pos[heap[i]] == i` for every
/// occupied slot, and no slot keys above its parent.
#[derive(Clone, Debug)]
pub struct IndexedMaxHeap {
    heap: Vec<u32>,
    key: Vec<u64>,
    pos: Vec<usize>,
}

impl IndexedMaxHeap {
    /// Empty heap able to hold ids `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            heap: Vec::with_capacity(n),
            key: vec![0; n],
            pos: vec![ABSENT; n],
        }
    }

    /// Heap owning every id `0..keys.len()` at once, keyed by `keys`.
    /// Heapifies bottom-up in O(n); the id space cannot grow afterwards.
    pub fn from_keys(keys: &[u64]) -> Self {
        let len = keys.len();
        let mut heap = Self {
            heap: (0..len as u32).collect(),
            key: keys.to_vec(),
            pos: (0..len).collect(),
        };
        for slot in (0..len / 2).rev() {
            heap.sift_down(slot);
        }
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: usize) -> bool {
        self.pos[id] != ABSENT
    }

    /// Add an id that is not currently in the heap.
    pub fn insert(&mut self, id: usize, key: u64) {
        debug_assert!(!self.contains(id), "insert of an id already in the heap");
        self.heap.push(id as u32);
        self.key[id] = key;
        self.pos[id] = self.heap.len() - 1;
        self.sift_up(self.heap.len() - 1);
    }

    /// Raise the key of a present id. The new key must not be below the
    /// stored one; only an upward sift is performed.
    pub fn increase_key(&mut self, id: usize, key: u64) {
        debug_assert!(self.contains(id), "increase_key of an absent id");
        debug_assert!(key >= self.key[id], "increase_key would lower the key");
        self.key[id] = key;
        self.sift_up(self.pos[id]);
    }

    #[inline]
    pub fn peek(&self) -> Option<(usize, u64)> {
        let id = *self.heap.first()? as usize;
        Some((id, self.key[id]))
    }

    pub fn extract_max(&mut self) -> Option<(usize, u64)> {
        let (id, key) = self.peek()?;
        self.remove(id);
        Some((id, key))
    }

    /// Drop a present id from any slot: swap it with the last occupied slot,
    /// shrink, then sift the relocated id whichever way restores heap order.
    pub fn remove(&mut self, id: usize) {
        let slot = self.pos[id];
        debug_assert!(slot != ABSENT, "remove of an id not in the heap");
        let last = self.heap.len() - 1;
        self.heap.swap(slot, last);
        self.pos[self.heap[slot] as usize] = slot;
        self.heap.pop();
        self.pos[id] = ABSENT;
        if slot < self.heap.len() {
            self.sift_up(slot);
            self.sift_down(slot);
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.key[self.heap[slot] as usize] <= self.key[self.heap[parent] as usize] {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let mut largest = slot;
            if self.key[self.heap[left] as usize] > self.key[self.heap[largest] as usize] {
                largest = left;
            }
            let right = left + 1;
            if right < self.heap.len()
                && self.key[self.heap[right] as usize] > self.key[self.heap[largest] as usize]
            {
                largest = right;
            }
            if largest == slot {
                break;
            }
            self.swap_slots(slot, largest);
            slot = largest;
        }
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a] as usize] = a;
        self.pos[self.heap[b] as usize] = b;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::ABSENT;
    use super::IndexedMaxHeap;

    fn assert_invariants(heap: &IndexedMaxHeap) {
        for (slot, &id) in heap.heap.iter().enumerate() {
            assert_eq!(heap.pos[id as usize], slot, "position index out of sync");
            if slot > 0 {
                let parent = heap.heap[(slot - 1) / 2] as usize;
                assert!(
                    heap.key[parent] >= heap.key[id as usize],
                    "heap order violated at slot {slot}"
                );
            }
        }
        let present = heap.pos.iter().filter(|&&p| p != ABSENT).count();
        assert_eq!(present, heap.len());
    }

    #[test]
    fn insert_then_extract_descends() {
        let mut heap = IndexedMaxHeap::new(8);
        for (id, key) in [(3_usize, 30_u64), (0, 5), (7, 99), (2, 42)] {
            heap.insert(id, key);
            assert_invariants(&heap);
        }

        assert_eq!(heap.peek(), Some((7, 99)));
        assert_eq!(heap.extract_max(), Some((7, 99)));
        assert_eq!(heap.extract_max(), Some((2, 42)));
        assert_eq!(heap.extract_max(), Some((3, 30)));
        assert_eq!(heap.extract_max(), Some((0, 5)));
        assert_eq!(heap.extract_max(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn increase_key_promotes() {
        let mut heap = IndexedMaxHeap::new(4);
        heap.insert(0, 10);
        heap.insert(1, 20);
        heap.insert(2, 30);

        heap.increase_key(0, 40);
        assert_invariants(&heap);
        assert_eq!(heap.peek(), Some((0, 40)));
    }

    #[test]
    fn remove_inner_id_keeps_order() {
        let mut heap = IndexedMaxHeap::new(6);
        for (id, key) in [(0_usize, 60_u64), (1, 50), (2, 40), (3, 30), (4, 20)] {
            heap.insert(id, key);
        }

        heap.remove(1);
        assert_invariants(&heap);
        assert!(!heap.contains(1));
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.extract_max(), Some((0, 60)));
        assert_eq!(heap.extract_max(), Some((2, 40)));
    }

    #[test]
    fn from_keys_heapifies() {
        let keys = [7_u64, 1, 64, 9, 33, 64, 2];
        let mut heap = IndexedMaxHeap::from_keys(&keys);
        assert_invariants(&heap);
        assert_eq!(heap.len(), keys.len());

        let mut drained = Vec::new();
        while let Some((_, key)) = heap.extract_max() {
            drained.push(key);
        }
        let mut expected = keys.to_vec();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(drained, expected);
    }

    #[test]
    fn random_ops_match_mirror() {
        let mut rng = StdRng::seed_from_u64(0x1DE8_2026);
        let n = 64;
        let mut heap = IndexedMaxHeap::new(n);
        let mut mirror: HashMap<usize, u64> = HashMap::new();

        for _ in 0..4_000 {
            let id = rng.random_range(0..n);
            match rng.random_range(0..4_u32) {
                0 => {
                    if !heap.contains(id) {
                        let key = rng.random_range(1..=1_000_000_u64);
                        heap.insert(id, key);
                        mirror.insert(id, key);
                    }
                }
                1 => {
                    if let Some(&old) = mirror.get(&id) {
                        let key = old + rng.random_range(0..1_000_u64);
                        heap.increase_key(id, key);
                        mirror.insert(id, key);
                    }
                }
                2 => {
                    if heap.contains(id) {
                        heap.remove(id);
                        mirror.remove(&id);
                    }
                }
                _ => {
                    let popped = heap.extract_max();
                    let expected_key = mirror.values().max().copied();
                    assert_eq!(popped.map(|(_, key)| key), expected_key);
                    if let Some((id, _)) = popped {
                        mirror.remove(&id);
                    }
                }
            }

            assert_invariants(&heap);
            assert_eq!(heap.len(), mirror.len());
            let expected_key = mirror.values().max().copied();
            assert_eq!(heap.peek().map(|(_, key)| key), expected_key);
        }
    }
}

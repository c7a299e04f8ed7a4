// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash, for tile strings and small keys.

pub struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.write_u8(b);
        }
    }

    #[inline(always)]
    fn write_u8(&mut self, b: u8) {
        self.0 = (std::num::Wrapping(self.0) * std::num::Wrapping(3467)).0 ^ (!b as u64);
    }
}

impl Default for MyHasher {
    fn default() -> MyHasher {
        MyHasher(0)
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_deduplicates_tile_strings() {
        let mut seen = MyHashSet::<Box<[u8]>>::default();
        assert!(seen.insert(vec![3, 1, 20].into_boxed_slice()));
        assert!(seen.insert(vec![1, 3, 20].into_boxed_slice()));
        assert!(!seen.insert(vec![3, 1, 20].into_boxed_slice()));
        assert_eq!(seen.len(), 2);
    }
}

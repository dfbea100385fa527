// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash (FNV-1a).

pub struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (std::num::Wrapping(self.0 ^ b as u64) * std::num::Wrapping(0x100000001b3)).0;
        }
    }
}

impl Default for MyHasher {
    fn default() -> MyHasher {
        MyHasher(0xcbf29ce484222325)
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;
pub type MyHashSet<T> = std::collections::HashSet<T, MyHasherDefault>;

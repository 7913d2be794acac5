use std::collections::HashMap;
use std::hash::Hash;

/// A map that iterates in first-insertion order.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    map: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl <K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns the value for `key`, inserting `V::default()` at the end of
    /// the order when the key is new.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let position = match self.map.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.map.insert(key.clone(), position);
                self.entries.push((key, V::default()));
                position
            }
        };

        &mut self.entries[position].1
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use crate::map::policy::MapPolicy;
use crate::map::{Entry, Map};

pub struct MapIter<'a, P: MapPolicy> {
    entries: std::slice::Iter<'a, Entry<P::Key, P::Value>>,
}

impl<P: MapPolicy> Map<P> {
    ///埋め込みカーソルとは独立した参照イテレータ
    pub fn iter(&'_ self) -> MapIter<'_, P> {
        MapIter {
            entries: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &P::Key> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &P::Value> {
        self.iter().map(|(_, value)| value)
    }
}

impl<'a, P: MapPolicy> Iterator for MapIter<'a, P> {
    type Item = (&'a P::Key, &'a P::Value);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, P: MapPolicy> IntoIterator for &'a Map<P> {
    type Item = (&'a P::Key, &'a P::Value);
    type IntoIter = MapIter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, P: MapPolicy> ExactSizeIterator for MapIter<'a, P> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

use std::fmt::{self, Display};
use std::mem::{self, ManuallyDrop};
use std::ptr;

pub mod cursor;
pub mod iterator;
pub mod policy;

#[cfg(test)]
mod tests;

use crate::Error;
use cursor::Cursor;
use policy::{ClonePolicy, MapPolicy};

///空の状態から最初に確保するスロット数
pub const INITIAL_CAPACITY: usize = 10;

///満杯になったとき容量を何倍に伸ばすか
pub const EXPAND_FACTOR: usize = 2;

///キーと値の1組。キーはコンテナ内で一意
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

///比較器の昇順にエントリを保持する連想コンテナ。
///キーと値の複製・解放・比較はすべて[`MapPolicy`]を経由して行い、
/// 格納されるのは常にポリシーが作った所有コピーである。
///
/// 内部同期は持たない。複数スレッドから共有する場合は呼び出し側で同期すること。
pub struct Map<P: MapPolicy> {
    ///entries[0..size)は`P::compare`で狭義昇順
    entries: Vec<Entry<P::Key, P::Value>>,
    cursor: Cursor,
    policy: P,
}

///`Ord`と`Clone`をそのままポリシーとして使う標準的なMap
pub type OrdMap<K, V> = Map<ClonePolicy<K, V>>;

impl<K: Ord + Clone, V: Clone> Map<ClonePolicy<K, V>> {
    pub fn new() -> Self {
        Self::open(ClonePolicy::new())
    }
}

impl<P: MapPolicy> Map<P> {
    ///ポリシーを受け取って空のMapを開く
    pub fn open(policy: P) -> Self {
        Self::with_capacity(policy, INITIAL_CAPACITY)
    }

    ///初期容量を指定して空のMapを開く
    pub fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            cursor: Cursor::parked(),
            policy,
        }
    }

    ///全エントリをポリシー経由で解放し、ポリシーを返して閉じる
    pub fn close(mut self) -> P {
        self.clear();
        self.entries = Vec::new();
        let me = ManuallyDrop::new(self);
        //Dropを走らせずにpolicyの所有権だけを取り出す
        unsafe { ptr::read(&me.policy) }
    }

    ///内部にあるエントリの個数を返す
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///現在確保済みのスロット数。常に`size()`以上
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    ///キーに対応する値への参照を返す。コピーは作らない
    pub fn get(&self, key: &P::Key) -> Option<&P::Value> {
        self.locate(key).ok().map(|index| &self.entries[index].value)
    }

    ///比較器で等しいキーを持つエントリが存在するか
    pub fn contains(&self, key: &P::Key) -> bool {
        self.locate(key).is_ok()
    }

    ///キーと値の所有コピーを作って格納する。
    /// 既存キーなら古い値だけを解放して置き換え、キーには触れない。
    /// 新規キーならソート順を保つ位置に挿入し、以降のエントリを1つずつ後ろへずらす。
    ///
    /// コピーに失敗した場合、Mapは呼び出し前の状態のまま変わらない
    pub fn put(&mut self, key: &P::Key, value: &P::Value) -> Result<(), Error> {
        match self.locate(key) {
            Ok(index) => {
                let fresh = self.policy.clone_value(value)?;
                let old = mem::replace(&mut self.entries[index].value, fresh);
                self.policy.release_value(old);
            }
            Err(index) => {
                let key_copy = self.policy.clone_key(key)?;
                let value_copy = match self.policy.clone_value(value) {
                    Ok(value_copy) => value_copy,
                    Err(error) => {
                        //作りかけのキーコピーを漏らさない
                        self.policy.release_key(key_copy);
                        return Err(error);
                    }
                };
                self.grow_if_full();
                self.entries.insert(
                    index,
                    Entry {
                        key: key_copy,
                        value: value_copy,
                    },
                );
                self.cursor.park();
            }
        }
        Ok(())
    }

    ///キーに対応するエントリを取り除き、キーと値をポリシー経由で解放する。
    /// 後続のエントリは1つずつ前へ詰められ、生きているエントリ以外には触れない
    pub fn remove(&mut self, key: &P::Key) -> Result<(), Error> {
        let index = self.locate(key).map_err(|_| Error::EntryNotFound)?;
        let entry = self.entries.remove(index);
        self.policy.release_key(entry.key);
        self.policy.release_value(entry.value);
        self.cursor.park();
        Ok(())
    }

    ///全エントリをポリシー経由で解放する。容量は再利用のため保持する
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            self.policy.release_key(entry.key);
            self.policy.release_value(entry.value);
        }
        self.cursor.park();
    }

    ///ポリシーごと複製した独立なMapを返す。
    /// すべてのキーと値はポリシーで再コピーされ、元のMapとは所有を共有しない。
    /// 途中でコピーに失敗した場合、そこまでに複製したエントリはすべて解放してから失敗を返す
    pub fn deep_copy(&self) -> Result<Self, Error>
    where
        P: Clone,
    {
        let mut copied = Self::with_capacity(self.policy.clone(), self.entries.capacity());
        for entry in &self.entries {
            let key = copied.policy.clone_key(&entry.key)?;
            let value = match copied.policy.clone_value(&entry.value) {
                Ok(value) => value,
                Err(error) => {
                    copied.policy.release_key(key);
                    return Err(error);
                }
            };
            //元の並びが既にソート済みなので末尾に積むだけでよい
            copied.entries.push(Entry { key, value });
        }
        Ok(copied)
    }

    ///キーの位置を二分探索で求める。
    /// Ok(位置)なら既存、Err(挿入位置)なら未存在
    fn locate(&self, key: &P::Key) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| self.policy.compare(&entry.key, key))
    }

    ///満杯なら容量を伸ばす。容量0から呼ばれても必ず size < capacity になる
    fn grow_if_full(&mut self) {
        if self.entries.len() < self.entries.capacity() {
            return;
        }
        let target = (self.entries.capacity() * EXPAND_FACTOR).max(INITIAL_CAPACITY);
        self.entries.reserve_exact(target - self.entries.len());
    }
}

impl<P: MapPolicy> Drop for Map<P> {
    fn drop(&mut self) {
        //素のdropではなく、必ずポリシーの解放フックを通す
        self.clear();
    }
}

impl<P: MapPolicy + Default> Default for Map<P> {
    fn default() -> Self {
        Self::open(P::default())
    }
}

impl<P> Display for Map<P>
where
    P: MapPolicy,
    P::Key: Display,
    P::Value: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            write!(f, "{}:{},", key, value)?;
        }
        Ok(())
    }
}

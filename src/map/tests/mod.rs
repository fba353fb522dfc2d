use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use proptest::prelude::{Strategy, any};

use crate::{Error, MapPolicy, OrdMap};


///ポリシーを通ったコピーと解放の回数
#[derive(Debug, Default)]
pub struct LifecycleCounts {
    pub key_clones: Cell<usize>,
    pub key_releases: Cell<usize>,
    pub value_clones: Cell<usize>,
    pub value_releases: Cell<usize>,
}

impl LifecycleCounts {
    ///コピーと解放が釣り合っているか。
    /// Drop・close・clearの後にtrueでなければ、解放漏れか二重解放がある
    pub fn balanced(&self) -> bool {
        self.key_clones.get() == self.key_releases.get()
            && self.value_clones.get() == self.value_releases.get()
    }
}

///コピーと解放を数えるポリシー。所有権の受け渡しの検証用
#[derive(Debug, Clone, Default)]
pub struct CountingPolicy {
    pub counts: Rc<LifecycleCounts>,
}

impl MapPolicy for CountingPolicy {
    type Key = i64;
    type Value = String;

    fn clone_key(&self, key: &i64) -> Result<i64, Error> {
        self.counts.key_clones.set(self.counts.key_clones.get() + 1);
        Ok(*key)
    }

    fn clone_value(&self, value: &String) -> Result<String, Error> {
        self.counts.value_clones.set(self.counts.value_clones.get() + 1);
        Ok(value.clone())
    }

    fn release_key(&self, _key: i64) {
        self.counts.key_releases.set(self.counts.key_releases.get() + 1);
    }

    fn release_value(&self, _value: String) {
        self.counts.value_releases.set(self.counts.value_releases.get() + 1);
    }

    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}

///残り予算が尽きるとコピーに失敗するポリシー。失敗時の安全性の検証用
#[derive(Debug, Clone, Default)]
pub struct FailingPolicy {
    pub budget: Rc<Cell<usize>>,
    pub counts: Rc<LifecycleCounts>,
}

impl FailingPolicy {
    pub fn with_budget(budget: usize) -> Self {
        let policy = Self::default();
        policy.budget.set(budget);
        policy
    }

    fn spend(&self) -> bool {
        let remaining = self.budget.get();
        if remaining == 0 {
            return false;
        }
        self.budget.set(remaining - 1);
        true
    }
}

impl MapPolicy for FailingPolicy {
    type Key = u32;
    type Value = u32;

    fn clone_key(&self, key: &u32) -> Result<u32, Error> {
        if !self.spend() {
            return Err(Error::KeyCopyFailed);
        }
        self.counts.key_clones.set(self.counts.key_clones.get() + 1);
        Ok(*key)
    }

    fn clone_value(&self, value: &u32) -> Result<u32, Error> {
        if !self.spend() {
            return Err(Error::ValueCopyFailed);
        }
        self.counts.value_clones.set(self.counts.value_clones.get() + 1);
        Ok(*value)
    }

    fn release_key(&self, _key: u32) {
        self.counts.key_releases.set(self.counts.key_releases.get() + 1);
    }

    fn release_value(&self, _value: u32) {
        self.counts.value_releases.set(self.counts.value_releases.get() + 1);
    }

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        a.cmp(b)
    }
}

///`Ord`と逆向きの比較器。並びがポリシーに従うことの検証用
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversePolicy;

impl MapPolicy for ReversePolicy {
    type Key = u32;
    type Value = u32;

    fn clone_key(&self, key: &u32) -> Result<u32, Error> {
        Ok(*key)
    }

    fn clone_value(&self, value: &u32) -> Result<u32, Error> {
        Ok(*value)
    }

    fn compare(&self, a: &u32, b: &u32) -> Ordering {
        b.cmp(a)
    }
}

///テストのために、ランダムなキー値ペア列を生成する関数
pub fn arb_entries(max_len: usize) -> impl Strategy<Value = Vec<(u16, u16)>> {
    proptest::collection::vec((any::<u16>(), any::<u16>()), 0..=max_len)
}

///ペア列からOrdMapを組み立てる。重複キーは後勝ち
pub fn map_from(pairs: &[(u16, u16)]) -> OrdMap<u16, u16> {
    let mut map = OrdMap::new();
    for (key, value) in pairs {
        map.put(key, value).unwrap();
    }
    map
}

use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::Error;

///キーと値の所有権の受け渡しと、キーの全順序を定義するトレイト。
///
/// Mapはエントリを作る・置き換える・破棄するすべての局面でこのトレイトを呼ぶ。
/// 5つの能力（キーと値それぞれの複製・解放、そして比較）は型として常に揃っているため、
/// 一部だけ欠けた状態は構築できない。
///
/// `compare`は狭義の全順序であること。`contains`や`get`の等価判定もこの比較器に従う
pub trait MapPolicy {
    type Key;
    type Value;

    ///キーの所有コピーを作る。確保できない場合は[`Error::KeyCopyFailed`]
    fn clone_key(&self, key: &Self::Key) -> Result<Self::Key, Error>;

    ///値の所有コピーを作る。確保できない場合は[`Error::ValueCopyFailed`]
    fn clone_value(&self, value: &Self::Value) -> Result<Self::Value, Error>;

    ///キーの所有権を引き取って解放する。失敗してはならない
    fn release_key(&self, key: Self::Key) {
        drop(key);
    }

    ///値の所有権を引き取って解放する。失敗してはならない
    fn release_value(&self, value: Self::Value) {
        drop(value);
    }

    ///3値比較。負=小さい、0=等しい、正=大きい、の標準的な順序
    fn compare(&self, a: &Self::Key, b: &Self::Key) -> Ordering;
}

///`Clone`による複製と`Ord`による比較をそのまま使うポリシー。
/// 解放は通常のdropに任せる
#[derive(Debug)]
pub struct ClonePolicy<K, V>(PhantomData<(K, V)>);

impl<K, V> ClonePolicy<K, V> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K, V> Default for ClonePolicy<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for ClonePolicy<K, V> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<K: Ord + Clone, V: Clone> MapPolicy for ClonePolicy<K, V> {
    type Key = K;
    type Value = V;

    fn clone_key(&self, key: &K) -> Result<K, Error> {
        Ok(key.clone())
    }

    fn clone_value(&self, value: &V) -> Result<V, Error> {
        Ok(value.clone())
    }

    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

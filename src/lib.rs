/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 順序付き連想コンテナ本体と、その所有権ポリシー・イテレーション。
mod map;

pub use error::Error;

pub use map::{EXPAND_FACTOR, INITIAL_CAPACITY, Map, OrdMap};

pub use map::iterator::MapIter;
pub use map::policy::{ClonePolicy, MapPolicy};

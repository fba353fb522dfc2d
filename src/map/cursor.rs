use crate::Error;
use crate::map::Map;
use crate::map::policy::MapPolicy;

///Mapに埋め込まれた単一のイテレーション位置。
/// `first()`から次の形状変更（挿入・削除・クリア）までの間だけ意味を持つ
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    position: Option<usize>,
}

impl Cursor {
    pub(crate) fn parked() -> Self {
        Self { position: None }
    }

    ///位置を無効化する。以後の`next()`は`Ok(None)`を返す
    pub(crate) fn park(&mut self) {
        self.position = None;
    }
}

impl<P: MapPolicy> Map<P> {
    ///カーソルを最小キーへ戻し、そのキーの所有コピーを返す。
    /// 空のMapでは`Ok(None)`
    pub fn first(&mut self) -> Result<Option<P::Key>, Error> {
        if self.entries.is_empty() {
            self.cursor.park();
            return Ok(None);
        }
        let key = self.policy.clone_key(&self.entries[0].key)?;
        self.cursor.position = Some(0);
        Ok(Some(key))
    }

    ///カーソルをソート順で1つ進め、そのキーの所有コピーを返す。
    /// 最後のエントリを過ぎたら`Ok(None)`。`first()`の前に呼んでも`Ok(None)`
    pub fn next(&mut self) -> Result<Option<P::Key>, Error> {
        let Some(position) = self.cursor.position else {
            return Ok(None);
        };
        let advanced = position + 1;
        if advanced >= self.entries.len() {
            self.cursor.park();
            return Ok(None);
        }
        let key = self.policy.clone_key(&self.entries[advanced].key)?;
        self.cursor.position = Some(advanced);
        Ok(Some(key))
    }
}

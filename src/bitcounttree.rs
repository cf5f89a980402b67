use log::debug;

pub use crate::algebra::{leaf_counts, BitCountSum, BitCounts, BITS};
use crate::algebra::{Identity, Magma};
use crate::error::Error;

/// 各ビット位置について, 区間内でそのビットが立っている要素の個数を数えるセグメント木
///
/// 添字は1始まりで, 区間は両端を含む. 節点`n`の子は`2n`と`2n + 1`であり,
/// 根は1番である.
#[derive(Clone, Debug)]
pub struct BitCountTree(Box<[BitCounts]>, Box<[i64]>);

impl BitCountTree {
    /// 全ての要素が0で初期化された長さ`n`のBitCountTreeを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self::from_vec(vec![0; n])
    }

    /// 配列`values`からBitCountTreeを構築する. `values[0]`が1番目の要素になる.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn from_vec(values: Vec<i64>) -> Self {
        let n = values.len();
        let mut tree = Self(
            vec![BitCountSum.e(); 4 * n].into_boxed_slice(),
            values.into_boxed_slice(),
        );
        if n > 0 {
            tree.build(1, 1, n);
        }
        debug!("built bit count tree over {n} elements");
        tree
    }

    fn build(&mut self, node: usize, left: usize, right: usize) {
        if left == right {
            self.0[node] = leaf_counts(self.1[left - 1]);
            return;
        }
        let mid = (left + right) >> 1;
        self.build(node * 2, left, mid);
        self.build(node * 2 + 1, mid + 1, right);
        self.pull(node);
    }

    fn pull(&mut self, node: usize) {
        self.0[node] = BitCountSum.op(&self.0[node * 2], &self.0[node * 2 + 1]);
    }

    /// 列の長さを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.1.len()
    }

    /// 列が空かどうか調べる
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.1.is_empty()
    }

    /// `index`番目の値を返す. 範囲外なら`None`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        index.checked_sub(1).and_then(|i| self.1.get(i)).copied()
    }

    /// 列全体を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.1
    }

    /// `index`番目の値を`value`に設定する.
    ///
    /// `index`が`1..=self.len()`の外なら何もせず`false`を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn set(&mut self, index: usize, value: i64) -> bool {
        if index == 0 || index > self.len() {
            return false;
        }
        self.update(1, 1, self.len(), index, value);
        true
    }

    fn update(&mut self, node: usize, left: usize, right: usize, index: usize, value: i64) {
        if right < index || index < left {
            return;
        }
        if left == right {
            self.1[left - 1] = value;
            self.0[node] = leaf_counts(value);
            return;
        }
        let mid = (left + right) >> 1;
        self.update(node * 2, left, mid, index, value);
        self.update(node * 2 + 1, mid + 1, right, index, value);
        self.pull(node);
    }

    /// `left..=right`の範囲で`bit`番目のビットが立っている要素の個数を返す.
    ///
    /// 範囲のうち`1..=self.len()`からはみ出した部分は無視する.
    ///
    /// # Errors
    ///
    /// - `bit >= 64`なら`Error::BitOutOfRange`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn query(&self, left: usize, right: usize, bit: usize) -> Result<u32, Error> {
        if bit >= BITS {
            return Err(Error::BitOutOfRange(bit));
        }
        if self.is_empty() {
            return Ok(0);
        }
        Ok(self.count(1, 1, self.len(), left, right, bit))
    }

    fn count(
        &self,
        node: usize,
        left: usize,
        right: usize,
        query_left: usize,
        query_right: usize,
        bit: usize,
    ) -> u32 {
        if query_right < left || right < query_left {
            return 0;
        }
        if query_left <= left && right <= query_right {
            return self.0[node][bit];
        }
        let mid = (left + right) >> 1;
        self.count(node * 2, left, mid, query_left, query_right, bit)
            + self.count(node * 2 + 1, mid + 1, right, query_left, query_right, bit)
    }

    /// `left..=right`の範囲について, 全てのビット位置の個数をまとめて返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn counts(&self, left: usize, right: usize) -> BitCounts {
        if self.is_empty() {
            return BitCountSum.e();
        }
        self.fold(1, 1, self.len(), left, right)
    }

    fn fold(
        &self,
        node: usize,
        left: usize,
        right: usize,
        query_left: usize,
        query_right: usize,
    ) -> BitCounts {
        if query_right < left || right < query_left {
            return BitCountSum.e();
        }
        if query_left <= left && right <= query_right {
            return self.0[node];
        }
        let mid = (left + right) >> 1;
        BitCountSum.op(
            &self.fold(node * 2, left, mid, query_left, query_right),
            &self.fold(node * 2 + 1, mid + 1, right, query_left, query_right),
        )
    }
}

impl From<Vec<i64>> for BitCountTree {
    fn from(value: Vec<i64>) -> Self {
        Self::from_vec(value)
    }
}

impl AsRef<[i64]> for BitCountTree {
    fn as_ref(&self) -> &[i64] {
        self.values()
    }
}

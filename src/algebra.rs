/// マグマ. 二項演算で閉じている代数構造
pub trait Magma {
    /// マグマの元の型
    type T: Eq;
    /// 二項演算
    fn op(&self, lhs: &Self::T, rhs: &Self::T) -> Self::T;
}

/// マグマに単位元があることを表すトレイト
pub trait Identity: Magma<T: Clone> {
    /// 単位元を構築して返す
    fn e(&self) -> Self::T;
}

/// 1つの値が持つビットの数
pub const BITS: usize = 64;

/// ビット位置ごとに, そのビットが立っている要素の個数を数えたもの
pub type BitCounts = [u32; BITS];

/// `BitCounts`の要素ごとの和からなるモノイド
#[derive(Clone, Copy, Debug, Default)]
pub struct BitCountSum;

impl Magma for BitCountSum {
    type T = BitCounts;
    fn op(&self, lhs: &BitCounts, rhs: &BitCounts) -> BitCounts {
        std::array::from_fn(|bit| lhs[bit] + rhs[bit])
    }
}
impl Identity for BitCountSum {
    fn e(&self) -> BitCounts {
        [0; BITS]
    }
}

/// 値`value`1つだけからなる区間の`BitCounts`を返す.
///
/// 符号ビット(63番目)も他のビットと同様に数える.
#[must_use]
pub fn leaf_counts(value: i64) -> BitCounts {
    let bits = value as u64;
    std::array::from_fn(|bit| ((bits >> bit) & 1) as u32)
}

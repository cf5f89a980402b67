//! 各ビット位置について, 区間内でそのビットが立っている要素の個数を数えるセグメント木と,
//! それを使って標準入力のクエリを処理するバッチ処理.

pub mod algebra;
pub mod batch;
pub mod bitcounttree;
pub mod config;
pub mod error;
pub mod io;

pub use bitcounttree::{BitCountTree, BitCounts, BITS};
pub use config::Config;
pub use error::Error;

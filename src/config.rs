use log::warn;

/// 厳格モードを切り替える環境変数
pub const STRICT_VAR: &str = "BITSEG_STRICT";

/// 実行時の設定
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// 範囲外の添字への代入を無視せずエラーにする
    pub strict: bool,
}

impl Config {
    /// 環境変数から設定を読む
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `lookup`を環境変数の代わりに使って設定を読む
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let strict = match lookup(STRICT_VAR).as_deref() {
            None | Some("" | "0" | "false") => false,
            Some("1" | "true") => true,
            Some(other) => {
                warn!("ignoring unrecognised {STRICT_VAR} value {other:?}");
                false
            }
        };
        Self { strict }
    }
}

use std::str::FromStr;

use crate::error::Error;

#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

/// 空白区切りの入力からトークンを1つずつ読み出す
pub struct Scanner<'a>(&'a [u8]);

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self(buf)
    }

    /// 次のトークンを返す. 入力が尽きていれば`None`
    pub fn token(&mut self) -> Option<&'a [u8]> {
        let Some(idx) = self.0.iter().position(|&c| !is_whitespace(c)) else {
            self.0 = &[];
            return None;
        };
        let rest = &self.0[idx..];
        let end = rest
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(rest.len());
        let (token, rest) = rest.split_at(end);
        self.0 = rest;
        Some(token)
    }

    /// 次のトークンを`T`として読む. `what`はエラーメッセージに使う
    ///
    /// # Errors
    ///
    /// - 入力が尽きていれば`Error::UnexpectedEof`
    /// - `T`として解釈できなければ`Error::InvalidToken`
    pub fn value<T: FromStr>(&mut self, what: &'static str) -> Result<T, Error> {
        let token = self.token().ok_or(Error::UnexpectedEof(what))?;
        let invalid = || Error::InvalidToken {
            what,
            token: String::from_utf8_lossy(token).into_owned(),
        };
        std::str::from_utf8(token)
            .map_err(|_| invalid())?
            .parse()
            .map_err(|_| invalid())
    }

    /// 空白以外が残っていないか調べる
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.0.iter().all(|&c| is_whitespace(c))
    }
}

/// 1行分のクエリ
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    /// `1 index value`: `index`番目を`value`にする
    Set { index: i64, value: i64 },
    /// `2 left right bit`: `left..=right`で`bit`番目が立っている個数を出力する
    Count { left: i64, right: i64, bit: usize },
}

impl Query {
    /// `scanner`からクエリを1つ読む
    ///
    /// # Errors
    ///
    /// - 種類が`1`でも`2`でもなければ`Error::UnknownQuery`
    /// - 引数が足りない, または整数でなければ`Scanner::value`と同じ
    pub fn read(scanner: &mut Scanner<'_>) -> Result<Self, Error> {
        match scanner.token().ok_or(Error::UnexpectedEof("query type"))? {
            b"1" => Ok(Query::Set {
                index: scanner.value("index")?,
                value: scanner.value("value")?,
            }),
            b"2" => Ok(Query::Count {
                left: scanner.value("left")?,
                right: scanner.value("right")?,
                bit: scanner.value("bit")?,
            }),
            other => Err(Error::UnknownQuery(
                String::from_utf8_lossy(other).into_owned(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens() {
        let mut sc = Scanner::new(b"  3\n5 -3\r\n\t6  ");
        assert_eq!(sc.value::<usize>("n").unwrap(), 3);
        assert_eq!(sc.value::<i64>("x").unwrap(), 5);
        assert_eq!(sc.value::<i64>("x").unwrap(), -3);
        assert!(!sc.is_exhausted());
        assert_eq!(sc.token(), Some(&b"6"[..]));
        assert!(sc.is_exhausted());
        assert_eq!(sc.token(), None);
        assert!(matches!(sc.value::<i64>("x"), Err(Error::UnexpectedEof("x"))));
    }

    #[test]
    fn invalid_token() {
        let mut sc = Scanner::new(b"abc");
        match sc.value::<i64>("element") {
            Err(Error::InvalidToken { what, token }) => {
                assert_eq!(what, "element");
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn queries() {
        let mut sc = Scanner::new(b"1 2 8\n2 1 3 0\n3 1 1");
        assert_eq!(
            Query::read(&mut sc).unwrap(),
            Query::Set { index: 2, value: 8 }
        );
        assert_eq!(
            Query::read(&mut sc).unwrap(),
            Query::Count {
                left: 1,
                right: 3,
                bit: 0
            }
        );
        assert!(matches!(
            Query::read(&mut sc),
            Err(Error::UnknownQuery(kind)) if kind == "3"
        ));
    }

    #[test]
    fn truncated_query() {
        let mut sc = Scanner::new(b"2 1 3");
        assert!(matches!(
            Query::read(&mut sc),
            Err(Error::UnexpectedEof("bit"))
        ));
    }
}

use std::io::{Read, Write};

use log::{debug, trace, warn};

use crate::bitcounttree::BitCountTree;
use crate::config::Config;
use crate::error::Error;
use crate::io::{Query, Scanner};

/// 負の位置は0番(どの区間にも含まれない位置)として扱う
fn position(i: i64) -> usize {
    usize::try_from(i.max(0)).unwrap_or(usize::MAX)
}

/// `input`から配列とクエリ列を読み, 個数クエリの答えを1行ずつ`output`に書く.
///
/// 入力は`N`, `N`個の値, `Q`, `Q`個のクエリの順に並ぶ.
///
/// # Errors
///
/// - 入力が途中で尽きる, 整数でないトークンがある, クエリの種類が不明
/// - ビット位置が64以上
/// - `config.strict`のとき範囲外の添字への代入
/// - 読み書きに失敗したとき
pub fn run(config: &Config, mut input: impl Read, mut output: impl Write) -> Result<(), Error> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    let mut scanner = Scanner::new(&buf);

    let n: usize = scanner.value("element count")?;
    let values = (0..n)
        .map(|_| scanner.value("element"))
        .collect::<Result<Vec<i64>, _>>()?;
    let mut tree = BitCountTree::from_vec(values);

    let q: usize = scanner.value("query count")?;
    let mut answered = 0usize;
    for _ in 0..q {
        let query = Query::read(&mut scanner)?;
        trace!("{query:?}");
        match query {
            Query::Set { index, value } => {
                if !tree.set(position(index), value) {
                    if config.strict {
                        return Err(Error::IndexOutOfRange {
                            index,
                            len: tree.len(),
                        });
                    }
                    warn!("ignoring set at index {index} outside 1..={}", tree.len());
                }
            }
            Query::Count { left, right, bit } => {
                let answer = tree.query(position(left), position(right), bit)?;
                writeln!(output, "{answer}")?;
                answered += 1;
            }
        }
    }
    if !scanner.is_exhausted() {
        warn!("ignoring trailing input after {q} queries");
    }
    output.flush()?;
    debug!("processed {q} queries, {answered} answers over {n} elements");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(config: &Config, input: &str) -> Result<String, Error> {
        let mut out = Vec::new();
        run(config, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn sample() {
        let input = "3\n5 3 6\n5\n2 1 3 0\n2 1 3 1\n2 1 3 2\n1 2 8\n2 1 3 0\n";
        assert_eq!(run_str(&Config::default(), input).unwrap(), "2\n2\n2\n1\n");
    }

    #[test]
    fn out_of_range_set() {
        let input = "2\n1 1\n4\n1 3 0\n1 -1 0\n1 0 0\n2 1 2 0\n";
        assert_eq!(run_str(&Config::default(), input).unwrap(), "2\n");

        let strict = Config { strict: true };
        assert!(matches!(
            run_str(&strict, input),
            Err(Error::IndexOutOfRange { index: 3, len: 2 })
        ));
    }

    #[test]
    fn negative_range() {
        let input = "3\n1 1 1\n3\n2 -5 2 0\n2 -5 -1 0\n2 2 100 0\n";
        assert_eq!(run_str(&Config::default(), input).unwrap(), "2\n0\n2\n");
    }

    #[test]
    fn errors() {
        let config = Config::default();
        assert!(matches!(
            run_str(&config, "1\n1\n1\n2 1 1 64\n"),
            Err(Error::BitOutOfRange(64))
        ));
        assert!(matches!(
            run_str(&config, "3\n1 2\n"),
            Err(Error::UnexpectedEof("element"))
        ));
        assert!(matches!(
            run_str(&config, "1\n1\n2\n2 1 1 0\n"),
            Err(Error::UnexpectedEof("query type"))
        ));
        assert!(matches!(
            run_str(&config, "1\nx\n"),
            Err(Error::InvalidToken { what: "element", .. })
        ));
    }

    #[test]
    fn empty_array() {
        let input = "0\n\n2\n1 1 5\n2 1 1 0\n";
        assert_eq!(run_str(&Config::default(), input).unwrap(), "0\n");
    }
}

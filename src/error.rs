use std::borrow::Cow;
use std::convert::From;
use std::error;
use std::fmt;
use std::io;

/// 単語抽出処理で発生するエラー
#[derive(Debug)]
pub enum ExtractError {
    /// どの推測エンコーディングでもデコードできなかったバイト列
    Decode(Vec<u8>),
    /// 形態素解析器の入力エンコーディングで表現できない文字を含むテキスト
    Encode { encoding: &'static str },
    /// `Encoding::for_label` が認識しないエンコーディング名
    UnknownEncoding(String),
    /// 空のバッファに対して単語を取り出そうとした
    EmptyBuffer,
    /// 形態素解析器が報告したエラー
    Tagger(String),
    Io(io::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ExtractError::Decode(ref bytes) => write!(f, "Can't decode {:?}.", bytes),
            ExtractError::Encode { encoding } => {
                write!(f, "text is not representable in {}", encoding)
            }
            ExtractError::UnknownEncoding(ref label) => write!(f, "Unknown encoding; {}", label),
            ExtractError::EmptyBuffer => write!(f, "no pending word to take"),
            ExtractError::Tagger(ref err) => write!(f, "tagger error: {}", err),
            ExtractError::Io(ref err) => write!(f, "IO error: {}", err),
        }
    }
}

impl error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ExtractError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<String> for ExtractError {
    fn from(e: String) -> Self {
        ExtractError::Tagger(e)
    }
}

impl<'a> From<&'a str> for ExtractError {
    fn from(e: &str) -> Self {
        ExtractError::Tagger(e.to_string())
    }
}

impl From<Cow<'static, str>> for ExtractError {
    fn from(e: Cow<'static, str>) -> Self {
        ExtractError::Tagger(e.into_owned())
    }
}

impl From<io::Error> for ExtractError {
    fn from(e: io::Error) -> Self {
        ExtractError::Io(e)
    }
}

use std::borrow::Cow;

use encoding_rs::{Encoding, EUC_JP_INIT, SHIFT_JIS_INIT, UTF_8, UTF_8_INIT};
use log::trace;

use crate::error::{ExtractError, ExtractResult};

/// デコードで試す文字コードのリスト
///
/// 先頭から順に試し、最初に成功したものを採用する
pub static GUESS_ENCODINGS: [&Encoding; 3] = [&UTF_8_INIT, &SHIFT_JIS_INIT, &EUC_JP_INIT];

/// バイト列を文字列に変換する
///
/// `GUESS_ENCODINGS` の順にデコードを試し、どれでも不正なバイト列となる場合はエラー
pub fn guess_decode(bytes: &[u8]) -> ExtractResult<Cow<'_, str>> {
    guess_decode_with(UTF_8, bytes)
}

/// `primary` を最初に試し、失敗した場合は `GUESS_ENCODINGS` の順にデコードを試す
/// # Arguments
/// * `primary` - 形態素解析器の入出力エンコーディング
/// * `bytes`   - デコードするバイト列
pub fn guess_decode_with<'a>(
    primary: &'static Encoding,
    bytes: &'a [u8],
) -> ExtractResult<Cow<'a, str>> {
    let fallbacks = GUESS_ENCODINGS.iter().copied().filter(|e| *e != primary);
    for encoding in Some(primary).into_iter().chain(fallbacks) {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            if encoding != primary {
                trace!("decoded as {}: {:?}", encoding.name(), text);
            }
            return Ok(text);
        }
    }
    Err(ExtractError::Decode(bytes.to_vec()))
}

/// テキストを指定したエンコーディングのバイト列に変換する
/// # Arguments
/// * `text`     - 変換するテキスト
/// * `encoding` - 変換先のエンコーディング
pub fn encode<'a>(text: &'a str, encoding: &'static Encoding) -> ExtractResult<Cow<'a, [u8]>> {
    let (bytes, used, unmappable) = encoding.encode(text);
    if unmappable {
        return Err(ExtractError::Encode {
            encoding: used.name(),
        });
    }
    Ok(bytes)
}

/// ラベルからエンコーディングを解決する
pub fn encoding_for_label(label: &str) -> ExtractResult<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| ExtractError::UnknownEncoding(label.to_string()))
}

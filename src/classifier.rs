//! 品詞情報から形態素の状態変数を判定する

use encoding_rs::{Encoding, UTF_8};

use crate::error::ExtractResult;
use crate::util::guess_decode_with;

/// 文頭・文末を表す品詞
pub const BOS_EOS: &str = "BOS/EOS";
pub const PREFIX: &str = "接頭詞";
pub const PARTICLE: &str = "助詞";
pub const NOUN: &str = "名詞";
pub const SUFFIX: &str = "接尾";
pub const NUMBER: &str = "数";
pub const DEPENDENT: &str = "非自立";

/// 形態素の状態変数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// 無視する
    Ignore,
    /// 後続の形態素と連結する
    Continuity,
    /// 単語を終端する
    Stop,
}

impl Default for Classification {
    fn default() -> Self {
        Classification::Ignore
    }
}

/// `,` で区切られた品詞情報のリスト
#[derive(Debug, Clone)]
pub struct Features<'a> {
    attrs: Vec<&'a str>,
}

impl<'a> Features<'a> {
    pub fn new(feature: &'a str) -> Features<'a> {
        Features {
            attrs: feature.split(',').collect(),
        }
    }

    /// `i` 番目の品詞情報。存在しない場合は空文字列
    pub fn get(&self, i: usize) -> &'a str {
        self.attrs.get(i).copied().unwrap_or("")
    }

    /// 品詞
    pub fn pos(&self) -> &'a str {
        self.get(0)
    }

    /// 品詞細分類1
    pub fn pos_detail(&self) -> &'a str {
        self.get(1)
    }

}

type Rule = fn(&Features) -> bool;

// 連続系は無視・ストップより先に判定する
const CONTINUITY_RULES: &[Rule] = &[is_prefix, is_number];
const IGNORE_RULES: &[Rule] = &[is_end, is_particle, is_dependent];
const STOP_RULES: &[Rule] = &[is_postfix, is_noun];

/// 終端のとき真
pub fn is_end(features: &Features) -> bool {
    features.pos() == BOS_EOS
}

/// 接頭詞のとき真
pub fn is_prefix(features: &Features) -> bool {
    features.pos() == PREFIX
}

/// 名詞の接尾のとき真
pub fn is_postfix(features: &Features) -> bool {
    is_noun(features) && features.pos_detail() == SUFFIX
}

/// 助詞のとき真
pub fn is_particle(features: &Features) -> bool {
    features.pos() == PARTICLE
}

/// 名詞のとき真
pub fn is_noun(features: &Features) -> bool {
    features.pos() == NOUN
}

/// 数のとき真
pub fn is_number(features: &Features) -> bool {
    features.pos_detail() == NUMBER
}

/// 非自立語のとき真
pub fn is_dependent(features: &Features) -> bool {
    features.pos_detail() == DEPENDENT
}

/// 品詞情報から状態変数を取得する。どの規則にも当てはまらなければ `Ignore`
pub fn classify(feature: &str) -> Classification {
    classify_or(feature, Classification::default())
}

/// 品詞情報から状態変数を取得する
/// # Arguments
/// * `feature` - 形態素の素性
/// * `default` - どの規則にも当てはまらない場合の状態変数
pub fn classify_or(feature: &str, default: Classification) -> Classification {
    let features = Features::new(feature);
    let any = |rules: &[Rule]| rules.iter().any(|rule| rule(&features));

    if any(CONTINUITY_RULES) {
        Classification::Continuity
    } else if any(IGNORE_RULES) {
        Classification::Ignore
    } else if any(STOP_RULES) {
        Classification::Stop
    } else {
        default
    }
}

/// デコード前の素性から状態変数を取得する
pub fn classify_bytes(feature: &[u8], default: Classification) -> ExtractResult<Classification> {
    classify_encoded(feature, UTF_8, default)
}

/// `encoding` を優先してデコードした素性から状態変数を取得する
pub fn classify_encoded(
    feature: &[u8],
    encoding: &'static Encoding,
    default: Classification,
) -> ExtractResult<Classification> {
    let feature = guess_decode_with(encoding, feature)?;
    Ok(classify_or(&feature, default))
}

use std::fmt;

use encoding_rs::{Encoding, UTF_8};
use log::trace;

use crate::classifier::{classify_encoded, Classification};
use crate::error::{ExtractError, ExtractResult};

/// 抽出された単語
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// 連結された表層形
    pub text: String,

    /// テキスト内での単語の出現開始位置(文字数)
    pub offset: usize,
}

impl From<Word> for (String, usize) {
    fn from(word: Word) -> Self {
        (word.text, word.offset)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "word: {}, location:{}", self.text, self.offset)
    }
}

/// `WordAccumulator::offer` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// 単語が完成したので `take` で取り出す
    Emit,
    /// 単語はまだ完成していない
    Continue,
}

/// 形態素を積んで単語を組み立てる
#[derive(Debug)]
pub struct WordAccumulator {
    fragments: Vec<String>,
    /// 先頭の形態素の位置。`fragments` が空の間は `None`
    anchor: Option<usize>,
    /// 素性のデコードで最初に試すエンコーディング
    encoding: &'static Encoding,
}

impl Default for WordAccumulator {
    fn default() -> Self {
        WordAccumulator::with_encoding(UTF_8)
    }
}

impl WordAccumulator {
    pub fn new() -> WordAccumulator {
        WordAccumulator::default()
    }

    /// 形態素解析器の出力エンコーディングを指定して作成する
    pub fn with_encoding(encoding: &'static Encoding) -> WordAccumulator {
        WordAccumulator {
            fragments: Vec::new(),
            anchor: None,
            encoding,
        }
    }

    /// 形態素を渡す
    /// # Arguments
    /// * `surface` - 形態素の表層形
    /// * `offset`  - テキスト内での形態素の位置
    /// * `feature` - デコード前の素性
    pub fn offer(&mut self, surface: &str, offset: usize, feature: &[u8]) -> ExtractResult<Offer> {
        let class = classify_encoded(feature, self.encoding, Classification::Ignore)?;
        trace!("{:?} at {}: {:?}", surface, offset, class);
        Ok(self.offer_classified(surface, offset, class))
    }

    /// 判定済みの状態変数とともに形態素を渡す
    pub fn offer_classified(
        &mut self,
        surface: &str,
        offset: usize,
        class: Classification,
    ) -> Offer {
        match class {
            Classification::Ignore => Offer::Continue,
            Classification::Continuity => {
                self.push(surface, offset);
                Offer::Continue
            }
            Classification::Stop => {
                self.push(surface, offset);
                Offer::Emit
            }
        }
    }

    fn push(&mut self, surface: &str, offset: usize) {
        if self.anchor.is_none() {
            self.anchor = Some(offset);
        }
        self.fragments.push(surface.to_owned());
    }

    /// 積んでいる形態素を連結して取り出し、状態をクリアする
    pub fn take(&mut self) -> ExtractResult<Word> {
        let offset = self.anchor.ok_or(ExtractError::EmptyBuffer)?;
        let text = self.fragments.concat();
        self.clear();
        Ok(Word { text, offset })
    }

    /// 保持している情報をクリアする
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.anchor = None;
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// 組み立て途中の単語があるとき真
    pub fn is_pending(&self) -> bool {
        !self.is_empty()
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }
}

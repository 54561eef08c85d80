use encoding_rs::{Encoding, UTF_8};
use log::debug;

use crate::accumulator::{Offer, Word, WordAccumulator};
use crate::error::ExtractResult;
use crate::tagger::Tagger;
use crate::util::{self, guess_decode_with};

/// 日本語の単語抽出を行う
pub struct Extractor<T: Tagger> {
    tagger: T,
    encoding: &'static Encoding,
}

impl<T: Tagger> Extractor<T> {
    /// UTF-8 を入力とする形態素解析器から単語抽出器を作成する
    pub fn new(tagger: T) -> Extractor<T> {
        Extractor::with_encoding(tagger, UTF_8)
    }

    /// 形態素解析器の入力エンコーディングを指定して単語抽出器を作成する
    /// # Arguments
    /// * `tagger`   - 形態素解析器
    /// * `encoding` - 形態素解析器に渡すテキストのエンコーディング
    pub fn with_encoding(tagger: T, encoding: &'static Encoding) -> Extractor<T> {
        Extractor { tagger, encoding }
    }

    /// エンコーディング名(`"euc-jp"` 等)を指定して単語抽出器を作成する
    pub fn with_encoding_label(tagger: T, label: &str) -> ExtractResult<Extractor<T>> {
        Ok(Extractor::with_encoding(tagger, util::encoding_for_label(label)?))
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    pub fn tagger_mut(&mut self) -> &mut T {
        &mut self.tagger
    }

    pub fn into_inner(self) -> T {
        self.tagger
    }

    /// 指定したテキストから単語とその位置情報を抽出する
    /// # Arguments
    /// * `text` - 解析対象テキスト
    pub fn parse(&mut self, text: &str) -> ExtractResult<Words<'_, T>> {
        let input = util::encode(text, self.encoding)?;
        self.parse_bytes(&input)
    }

    /// エンコード済みのテキストから単語とその位置情報を抽出する
    pub fn parse_bytes(&mut self, input: &[u8]) -> ExtractResult<Words<'_, T>> {
        debug!("input.len: {}, encoding: {}", input.len(), self.encoding.name());
        self.tagger.parse_to_node(input)?;
        Ok(Words {
            tagger: &mut self.tagger,
            acc: WordAccumulator::with_encoding(self.encoding),
            encoding: self.encoding,
            cur: 0,
            finished: false,
        })
    }
}

/// `Extractor::parse` が返す単語のイテレータ
///
/// 末尾まで読んでも完成しなかった単語は返さない
pub struct Words<'a, T: Tagger + ?Sized> {
    tagger: &'a mut T,
    acc: WordAccumulator,
    encoding: &'static Encoding,
    /// 文書の先頭からの位置(文字数)
    cur: usize,
    finished: bool,
}

impl<'a, T: Tagger + ?Sized> Words<'a, T> {
    /// 組み立て途中の単語があるとき真
    pub fn pending(&self) -> bool {
        self.acc.is_pending()
    }

    /// 次の形態素の位置
    pub fn position(&self) -> usize {
        self.cur
    }

    fn next_word(&mut self) -> ExtractResult<Option<Word>> {
        while let Some(node) = self.tagger.next_node() {
            let surface = guess_decode_with(self.encoding, node.surface)?;
            // 半角スペースの分だけ進める
            self.cur += node.padding();
            let offer = self.acc.offer(&surface, self.cur, node.feature)?;
            self.cur += surface.chars().count();

            if offer == Offer::Emit {
                let word = self.acc.take()?;
                debug!("{}", word);
                return Ok(Some(word));
            }
        }
        Ok(None)
    }
}

impl<'a, T: Tagger + ?Sized> Iterator for Words<'a, T> {
    type Item = ExtractResult<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_word();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result.transpose()
    }
}

impl<'a, T: Tagger + ?Sized> std::iter::FusedIterator for Words<'a, T> {}

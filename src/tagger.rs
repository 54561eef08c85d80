use crate::error::ExtractResult;
use crate::morpheme::Node;

/// 形態素解析器
///
/// 一度に解析できる文書は一つで、`parse_to_node` を呼ぶとそれまでの結果は破棄される。
/// 形態素列の先頭・末尾に `BOS/EOS` ノードを含めてもよい。
pub trait Tagger {
    /// 形態素解析を行う
    /// # Arguments
    /// * `input` - 解析器の入力エンコーディングでエンコードされたテキスト
    fn parse_to_node(&mut self, input: &[u8]) -> ExtractResult<()>;

    /// 直前に解析した文書の次の形態素を返す。末尾に達すると `None`
    fn next_node(&mut self) -> Option<Node<'_>>;
}

impl<'a, T: Tagger + ?Sized> Tagger for &'a mut T {
    fn parse_to_node(&mut self, input: &[u8]) -> ExtractResult<()> {
        (**self).parse_to_node(input)
    }

    fn next_node(&mut self) -> Option<Node<'_>> {
        (**self).next_node()
    }
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn parse_to_node(&mut self, input: &[u8]) -> ExtractResult<()> {
        (**self).parse_to_node(input)
    }

    fn next_node(&mut self) -> Option<Node<'_>> {
        (**self).next_node()
    }
}

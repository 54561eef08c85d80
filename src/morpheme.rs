/// 形態素解析器が出力する形態素
#[derive(Debug, Clone, Copy)]
pub struct Node<'tagger> {
    /// 形態素の表層形
    pub surface: &'tagger [u8],

    /// 形態素の素性
    pub feature: &'tagger [u8],

    /// 表層形のバイト長
    pub length: usize,

    /// 直前の空白を含めた表層形のバイト長
    pub rlength: usize,
}

impl<'tagger> Node<'tagger> {
    pub fn to_owned(&self) -> NodeBuf {
        NodeBuf {
            surface: self.surface.to_owned(),
            feature: self.feature.to_owned(),
            length: self.length,
            rlength: self.rlength,
        }
    }

    /// 表層形の直前で読み飛ばされた空白のバイト数
    pub fn padding(&self) -> usize {
        self.rlength.saturating_sub(self.length)
    }
}

/// 形態素
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBuf {
    /// 形態素の表層形
    pub surface: Vec<u8>,

    /// 形態素の素性
    pub feature: Vec<u8>,

    /// 表層形のバイト長
    pub length: usize,

    /// 直前の空白を含めた表層形のバイト長
    pub rlength: usize,
}

impl NodeBuf {
    pub fn as_node(&self) -> Node {
        Node {
            surface: &self.surface,
            feature: &self.feature,
            length: self.length,
            rlength: self.rlength,
        }
    }
}

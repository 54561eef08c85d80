use crate::classifier::BOS_EOS;
use crate::error::{ExtractError, ExtractResult};
use crate::morpheme::{Node, NodeBuf};
use crate::tagger::Tagger;

const BOS_EOS_FEATURE: &str = "BOS/EOS,*,*,*,*,*,*,*,*";

/// 用意した形態素列をそのまま返す形態素解析器
pub(crate) struct ScriptedTagger {
    script: Vec<NodeBuf>,
    nodes: Vec<NodeBuf>,
    pos: usize,
    /// `parse_to_node` に渡された入力
    pub(crate) inputs: Vec<Vec<u8>>,
    fail_with: Option<String>,
}

impl ScriptedTagger {
    /// `(表層形, 素性)` の列から作成する。前後に BOS/EOS ノードを付ける
    pub(crate) fn new(morphemes: &[(&str, &str)]) -> ScriptedTagger {
        let padded = morphemes
            .iter()
            .map(|&(surface, feature)| (surface, feature, 0))
            .collect::<Vec<_>>();
        ScriptedTagger::with_padding(&padded)
    }

    /// `(表層形, 素性, 直前の空白数)` の列から作成する
    pub(crate) fn with_padding(morphemes: &[(&str, &str, usize)]) -> ScriptedTagger {
        let mut script = vec![sentinel()];
        for &(surface, feature, padding) in morphemes {
            script.push(NodeBuf {
                surface: surface.as_bytes().to_vec(),
                feature: feature.as_bytes().to_vec(),
                length: surface.len(),
                rlength: surface.len() + padding,
            });
        }
        script.push(sentinel());
        ScriptedTagger::from_nodes(script)
    }

    pub(crate) fn from_nodes(script: Vec<NodeBuf>) -> ScriptedTagger {
        ScriptedTagger {
            script,
            nodes: Vec::new(),
            pos: 0,
            inputs: Vec::new(),
            fail_with: None,
        }
    }

    pub(crate) fn failing(message: &str) -> ScriptedTagger {
        let mut tagger = ScriptedTagger::from_nodes(Vec::new());
        tagger.fail_with = Some(message.to_string());
        tagger
    }
}

fn sentinel() -> NodeBuf {
    debug_assert!(BOS_EOS_FEATURE.starts_with(BOS_EOS));
    NodeBuf {
        surface: Vec::new(),
        feature: BOS_EOS_FEATURE.as_bytes().to_vec(),
        length: 0,
        rlength: 0,
    }
}

impl Tagger for ScriptedTagger {
    fn parse_to_node(&mut self, input: &[u8]) -> ExtractResult<()> {
        if let Some(ref message) = self.fail_with {
            return Err(ExtractError::Tagger(message.clone()));
        }
        self.inputs.push(input.to_vec());
        self.nodes = self.script.clone();
        self.pos = 0;
        Ok(())
    }

    fn next_node(&mut self) -> Option<Node<'_>> {
        let node = self.nodes.get(self.pos)?;
        self.pos += 1;
        Some(node.as_node())
    }
}

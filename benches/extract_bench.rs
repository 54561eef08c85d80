#![cfg_attr(feature = "unstable", feature(test))]

#[cfg(all(feature = "unstable", test))]
mod bench {
    extern crate test;

    use extractword::{ExtractResult, Extractor, Node, NodeBuf, Tagger};
    use test::Bencher;

    const MORPHEMES: &[(&str, &str)] = &[
        ("2", "名詞,数,*,*,*,*,*"),
        ("番目", "名詞,接尾,助数詞,*,*,*,番目,バンメ,バンメ"),
        ("に", "助詞,格助詞,一般,*,*,*,に,ニ,ニ"),
        ("重要", "名詞,形容動詞語幹,*,*,*,*,重要,ジュウヨウ,ジュウヨウ"),
        ("な", "助動詞,*,*,*,特殊・ダ,体言接続,だ,ナ,ナ"),
        ("物", "名詞,非自立,一般,*,*,*,物,モノ,モノ"),
        ("を", "助詞,格助詞,一般,*,*,*,を,ヲ,ヲ"),
        ("選ん", "動詞,自立,*,*,五段・バ行,連用タ接続,選ぶ,エラン,エラン"),
        ("で", "助詞,接続助詞,*,*,*,*,で,デ,デ"),
        ("ください", "動詞,非自立,*,*,五段・ラ行特殊,命令ｉ,くださる,クダサイ,クダサイ"),
        ("。", "記号,句点,*,*,*,*,。,。,。"),
    ];

    /// 同じ文を繰り返す形態素列を返す
    struct RepeatTagger {
        nodes: Vec<NodeBuf>,
        pos: usize,
    }

    impl RepeatTagger {
        fn new(times: usize) -> RepeatTagger {
            let mut nodes = Vec::with_capacity(MORPHEMES.len() * times);
            for _ in 0..times {
                for &(surface, feature) in MORPHEMES {
                    nodes.push(NodeBuf {
                        surface: surface.as_bytes().to_vec(),
                        feature: feature.as_bytes().to_vec(),
                        length: surface.len(),
                        rlength: surface.len(),
                    });
                }
            }
            RepeatTagger { nodes, pos: 0 }
        }
    }

    impl Tagger for RepeatTagger {
        fn parse_to_node(&mut self, _input: &[u8]) -> ExtractResult<()> {
            self.pos = 0;
            Ok(())
        }

        fn next_node(&mut self) -> Option<Node<'_>> {
            let node = self.nodes.get(self.pos)?;
            self.pos += 1;
            Some(node.as_node())
        }
    }

    #[bench]
    fn bench_parse(b: &mut Bencher) {
        let text = "2番目に重要な物を選んでください。".repeat(1000);
        let mut extractor = Extractor::new(RepeatTagger::new(1000));
        b.iter(|| {
            let count = extractor.parse(&text).unwrap().count();
            test::black_box(count);
        });
    }
}

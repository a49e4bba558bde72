//! The static quotation table and id resolution.
//!
//! The table is compiled into the binary and never mutated: every lookup is
//! a plain slice index, so concurrent requests share it without locking.

use rand::Rng;

/// A single quotation record.
///
/// Ids are dense from 0 and unique within [`QUOTES`]. `text` and `author`
/// are always non-empty; `author_description` is omitted for entries where
/// the author needs no introduction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Position in the table; equal to the slice index.
    pub id: u32,
    /// The quotation body.
    pub text: &'static str,
    /// Attributed author.
    pub author: &'static str,
    /// One-line author introduction, when present.
    pub author_description: Option<&'static str>,
}

macro_rules! quote {
    ($id:expr, $text:expr, $author:expr) => {
        Quote {
            id: $id,
            text: $text,
            author: $author,
            author_description: None,
        }
    };
    ($id:expr, $text:expr, $author:expr, $desc:expr) => {
        Quote {
            id: $id,
            text: $text,
            author: $author,
            author_description: Some($desc),
        }
    };
}

/// The quote table shared by both rendering endpoints.
pub const QUOTES: &[Quote] = &[
    quote!(0, "汝自身を知れ", "ソクラテス", "古代ギリシャの哲学者"),
    quote!(
        1,
        "無知を自覚することが、知恵への第一歩である",
        "ソクラテス",
        "古代ギリシャの哲学者"
    ),
    quote!(
        2,
        "学びて思わざれば則ち罔し、思いて学ばざれば則ち殆し",
        "孔子",
        "中国春秋時代の思想家"
    ),
    quote!(
        3,
        "人間は考える葦である",
        "パスカル",
        "フランスの哲学者・数学者"
    ),
    quote!(4, "我思う、ゆえに我あり", "デカルト", "フランスの哲学者"),
    quote!(
        5,
        "習慣は第二の天性である",
        "アリストテレス",
        "古代ギリシャの哲学者"
    ),
    quote!(
        6,
        "私たちは繰り返し行うことの結果である。それゆえ卓越とは行為ではなく習慣である",
        "アリストテレス",
        "古代ギリシャの哲学者"
    ),
    quote!(
        7,
        "幸福とは、自分の魂にふさわしい活動のうちにある",
        "アリストテレス",
        "古代ギリシャの哲学者"
    ),
    quote!(
        8,
        "語りえぬものについては、沈黙しなければならない",
        "ウィトゲンシュタイン",
        "オーストリアの哲学者"
    ),
    quote!(
        9,
        "人生に意味を与えるのは、あなた自身である",
        "サルトル",
        "フランスの実存主義哲学者"
    ),
    quote!(10, "実存は本質に先立つ", "サルトル", "フランスの実存主義哲学者"),
    quote!(
        11,
        "万物は流転する",
        "ヘラクレイトス",
        "古代ギリシャの哲学者"
    ),
    quote!(
        12,
        "同じ川に二度入ることはできない",
        "ヘラクレイトス",
        "古代ギリシャの哲学者"
    ),
    quote!(
        13,
        "あなたを傷つけるのは出来事そのものではなく、出来事についてのあなたの判断である",
        "エピクテトス",
        "ストア派の哲学者"
    ),
    quote!(
        14,
        "自分の力の及ぶものと及ばないものを区別せよ",
        "エピクテトス",
        "ストア派の哲学者"
    ),
    quote!(
        15,
        "今日できることに全力を尽くせ。明日のことは明日自身が思い悩む",
        "セネカ",
        "ローマの哲学者"
    ),
    quote!(
        16,
        "人生は短いのではない。我々がそれを短くしているのだ",
        "セネカ",
        "ローマの哲学者"
    ),
    quote!(
        17,
        "朝起きたら、生きていること、考えること、楽しむこと、愛することの特権を思え",
        "マルクス・アウレリウス",
        "ローマ皇帝・ストア派の哲学者"
    ),
    quote!(
        18,
        "神は死んだ。だから我々は自らの価値を創造しなければならない",
        "ニーチェ",
        "ドイツの哲学者"
    ),
    quote!(
        19,
        "なぜ生きるかを知る者は、ほとんどどんな状況にも耐えられる",
        "ニーチェ",
        "ドイツの哲学者"
    ),
    quote!(
        20,
        "人格とは、その人が繰り返し選んできたものの総和である",
        "デューイ",
        "アメリカのプラグマティズム哲学者"
    ),
    quote!(
        21,
        "書くことは、考えることである",
        "ショーペンハウアー",
        "ドイツの哲学者"
    ),
    quote!(
        22,
        "読書とは他人にものを考えてもらうことである。一日を多読に費やす者は、考える力を失う",
        "ショーペンハウアー",
        "ドイツの哲学者"
    ),
    quote!(
        23,
        "汝の意志の格率が、常に同時に普遍的立法の原理となるように行為せよ",
        "カント",
        "ドイツの哲学者"
    ),
    quote!(24, "内容のない思考は空虚であり、概念のない直観は盲目である", "カント", "ドイツの哲学者"),
    quote!(
        25,
        "千里の道も一歩から",
        "老子",
        "中国古代の思想家"
    ),
    quote!(26, "足るを知る者は富む", "老子", "中国古代の思想家"),
    quote!(
        27,
        "過ちて改めざる、これを過ちという",
        "孔子",
        "中国春秋時代の思想家"
    ),
    quote!(
        28,
        "井の中の蛙大海を知らず、されど空の青さを知る",
        "荘子",
        "中国戦国時代の思想家"
    ),
    quote!(
        29,
        "希望とは目覚めている者が見る夢である",
        "アリストテレス",
        "古代ギリシャの哲学者"
    ),
];

/// Deterministic quote lookup with safe fallback.
///
/// A zero-sized handle over the static [`QUOTES`] table; exists so callers
/// depend on the resolution contract rather than on the slice directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteStore;

impl QuoteStore {
    /// Number of quotes in the table.
    pub fn len(&self) -> usize {
        QUOTES.len()
    }

    /// The table is never empty.
    pub fn is_empty(&self) -> bool {
        QUOTES.is_empty()
    }

    /// Look up a quote by exact id.
    pub fn get(&self, id: u32) -> Option<&'static Quote> {
        QUOTES.get(id as usize)
    }

    /// Resolve a raw `id` query parameter to a quote.
    ///
    /// Any invalid input — absent, unparseable, negative, or out of range —
    /// falls back to a uniformly random quote. A shared link carrying a
    /// stale id must still render a card rather than fail, so the two
    /// invalid cases are treated identically. In-range ids always return
    /// the quote with that exact id.
    pub fn resolve(&self, raw: Option<&str>) -> &'static Quote {
        let id = raw
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&id| (id as usize) < QUOTES.len())
            .unwrap_or_else(|| self.random_id());
        &QUOTES[id as usize]
    }

    fn random_id(&self) -> u32 {
        rand::thread_rng().gen_range(0..QUOTES.len()) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_are_dense_from_zero() {
        for (index, quote) in QUOTES.iter().enumerate() {
            assert_eq!(quote.id as usize, index);
        }
    }

    #[test]
    fn table_entries_are_populated() {
        for quote in QUOTES {
            assert!(!quote.text.is_empty(), "quote {} has empty text", quote.id);
            assert!(
                !quote.author.is_empty(),
                "quote {} has empty author",
                quote.id
            );
            if let Some(desc) = quote.author_description {
                assert!(!desc.is_empty(), "quote {} has empty description", quote.id);
            }
        }
    }

    #[test]
    fn table_entries_carry_author_descriptions() {
        assert!(QUOTES.iter().any(|q| q.author_description.is_some()));
    }

    #[test]
    fn resolve_every_valid_id_round_trips() {
        let store = QuoteStore;
        for id in 0..store.len() as u32 {
            let quote = store.resolve(Some(&id.to_string()));
            assert_eq!(quote.id, id);
        }
    }

    #[test]
    fn resolve_none_returns_table_entry() {
        let store = QuoteStore;
        let quote = store.resolve(None);
        assert!((quote.id as usize) < store.len());
    }

    #[test]
    fn resolve_non_numeric_falls_back() {
        let store = QuoteStore;
        for raw in ["abc", "", "  ", "12abc", "1.5", "🙂"] {
            let quote = store.resolve(Some(raw));
            assert!((quote.id as usize) < store.len(), "raw = {raw:?}");
        }
    }

    #[test]
    fn resolve_out_of_range_falls_back() {
        let store = QuoteStore;
        let oob = store.len() as u32;
        for raw in [oob.to_string(), (oob + 100).to_string(), "-1".to_string()] {
            let quote = store.resolve(Some(&raw));
            assert!((quote.id as usize) < store.len(), "raw = {raw:?}");
        }
    }

    #[test]
    fn resolve_trims_whitespace() {
        let store = QuoteStore;
        assert_eq!(store.resolve(Some(" 3 ")).id, 3);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let store = QuoteStore;
        assert!(store.get(store.len() as u32).is_none());
        assert!(store.get(u32::MAX).is_none());
    }
}

//! Prompt construction for the AI endpoints.
//!
//! All prompts are Japanese, matching the app's audience. Each builder
//! returns a `(system, user)` pair ready for a chat completion.

use serde::{Deserialize, Serialize};

/// What the assistant endpoint should do with the note content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantAction {
    Improve,
    Summarize,
    Expand,
    Translate,
    SuggestTitle,
}

impl AssistantAction {
    /// Stable identifier used in usage-log records and response bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improve => "improve",
            Self::Summarize => "summarize",
            Self::Expand => "expand",
            Self::Translate => "translate",
            Self::SuggestTitle => "suggest_title",
        }
    }
}

/// Human-readable name of a translation target language.
fn language_name(code: &str) -> &str {
    match code {
        "en" => "英語",
        "ja" => "日本語",
        other => other,
    }
}

/// Build the prompt pair for an assistant action over `content`.
pub fn assistant_prompts(
    action: AssistantAction,
    content: &str,
    target_language: &str,
) -> (String, String) {
    match action {
        AssistantAction::Improve => (
            "あなたは優秀な文章校正アシスタントです。ユーザーの文章をより明確で、読みやすく、\
             魅力的に改善してください。文法やスペルミスを修正し、より適切な表現を提案してください。"
                .to_string(),
            format!("以下の文章を改善してください:\n\n{content}"),
        ),
        AssistantAction::Summarize => (
            "あなたは要約の専門家です。ユーザーの長い文章を簡潔に要約し、重要なポイントを抽出してください。"
                .to_string(),
            format!("以下の文章を簡潔に要約してください:\n\n{content}"),
        ),
        AssistantAction::Expand => (
            "あなたは創造的なライティングアシスタントです。ユーザーの短い文章やアイデアを詳細に展開し、\
             より充実した内容にしてください。"
                .to_string(),
            format!("以下の文章を詳しく展開してください:\n\n{content}"),
        ),
        AssistantAction::Translate => {
            let language = language_name(target_language);
            (
                format!("あなたは優秀な翻訳者です。ユーザーの文章を{language}に正確に翻訳してください。"),
                format!("以下の文章を{language}に翻訳してください:\n\n{content}"),
            )
        }
        AssistantAction::SuggestTitle => (
            "あなたはクリエイティブなタイトル作成の専門家です。ユーザーの文章内容から、\
             魅力的で適切なタイトルを3つ提案してください。"
                .to_string(),
            format!("以下の文章に最適なタイトルを3つ提案してください:\n\n{content}"),
        ),
    }
}

/// Build the ranking prompt for ai-search.
///
/// The user prompt is the JSON-encoded note list; the model answers with
/// `{"rankedIds": [...], "explanation": "..."}`.
pub fn search_ranking_prompts(query: &str, notes_json: String) -> (String, String) {
    let system = format!(
        "あなたは検索エキスパートです。ユーザーの検索クエリに最も関連性の高いメモを見つけてください。\n\n\
         検索クエリ: {query}\n\n\
         以下のメモリストから、最も関連性の高いメモのIDを順番に並べてください。\n\
         関連性が低いものは除外してください。\n\n\
         JSON形式で回答してください:\n\
         {{\n  \"rankedIds\": [\"note_id1\", \"note_id2\", ...],\n  \"explanation\": \"ランク付けの理由\"\n}}"
    );
    (system, notes_json)
}

/// Build the tag/category suggestion prompt for ai-suggest-tags.
pub fn suggest_tags_prompts(
    existing_categories: &[String],
    title: &str,
    content: &str,
) -> (String, String) {
    let category_list = if existing_categories.is_empty() {
        "なし".to_string()
    } else {
        existing_categories.join(", ")
    };

    let system = format!(
        "あなたはメモやノートの整理の専門家です。ユーザーのメモ内容を分析し、\
         適切なタグとカテゴリを提案してください。\n\n\
         既存のカテゴリ: {category_list}\n\n\
         以下のJSON形式で回答してください:\n\
         {{\n  \"suggestedTags\": [\"タグ1\", \"タグ2\", \"タグ3\"],\n  \
         \"suggestedCategory\": \"カテゴリ名\",\n  \"reason\": \"提案理由\"\n}}\n\n\
         注意:\n\
         - タグは3〜5個程度提案してください\n\
         - 既存のカテゴリがある場合は、可能な限りそれを使用してください\n\
         - 新しいカテゴリを提案する場合は、簡潔でわかりやすい名前にしてください\n\
         - 日本語で回答してください"
    );
    let user = format!("タイトル: {title}\n\n内容:\n{content}");
    (system, user)
}

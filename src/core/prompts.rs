//! Prompt builders for titles, articles and image prompts

use super::splitter::IMAGE_MARKER;
use crate::sdk::CompletionRequest;

/// Writing brief shared by every article of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleParams {
    pub audience: String,
    pub style: String,
    pub length: String,
    pub keywords: Vec<String>,
    pub extra_requirements: String,
}

impl Default for ArticleParams {
    fn default() -> Self {
        Self {
            audience: "通用读者".to_string(),
            style: "科普性".to_string(),
            length: "中篇（600-900字）".to_string(),
            keywords: Vec::new(),
            extra_requirements: String::new(),
        }
    }
}

impl ArticleParams {
    /// Parse a comma separated keyword list, accepting ASCII and full-width commas
    pub fn parse_keywords(raw: &str) -> Vec<String> {
        raw.split([',', '，'])
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Always appended to the user's extra requirements; asks for bold headings on
/// their own lines and for the image marker.
pub fn default_extra_requirement() -> String {
    format!(
        "文章应内容自然流畅，避免AI写作的痕迹。请使用加粗标记强调核心概念，小标题或强调句用双星号加粗并单独成行。\
         **重要提示：在某个自然段落结束后，如果需要一个视觉元素来增强说明，请另起一行插入标记 {marker}，并确保 {marker} 是该行的唯一内容。**",
        marker = IMAGE_MARKER
    )
}

/// User requirements followed by the default requirement, which appears once
/// even if the user already pasted it in
pub fn merge_extra_requirements(user: &str) -> String {
    let default = default_extra_requirement();
    let user = user.trim();
    if user.contains(default.as_str()) {
        return user.to_string();
    }
    format!("{}\n\n{}", user, default).trim().to_string()
}

const TITLE_SYSTEM_PROMPT: &str = "你是一个创意标题生成器，擅长为给定主题写出新颖、吸引人、带有真人写作口吻的文章标题。";

/// Request for `count` titles on `main_topic`, one per line
pub fn title_request(model: &str, main_topic: &str, count: usize) -> CompletionRequest {
    let user = format!(
        "请根据主课题“{topic}”生成 {count} 个各不相同的文章标题，每个标题都能直接作为一篇文章的主题。\n\
         要求：\n\
         1. 避免生硬、机械或总结式的表达，可以带疑问、反思、情感或小小的悬念。\n\
         2. 用口语化、生活化的词汇。\n\
         3. 标题之间切入点要有明显差异。\n\
         4. 每个标题独占一行，不要序号，不要任何额外文字。",
        topic = main_topic,
        count = count
    );

    CompletionRequest::new(model)
        .system(TITLE_SYSTEM_PROMPT)
        .user(user)
        .temperature(1.0)
        .top_p(0.9)
}

/// One title per non-blank line, at most `count`
pub fn parse_titles(raw: &str, count: usize) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(count)
        .map(str::to_string)
        .collect()
}

/// Request for one article on `title`. `seed` varies the output between runs.
pub fn article_request(
    model: &str,
    title: &str,
    params: &ArticleParams,
    seed: u64,
) -> CompletionRequest {
    let system = format!(
        "你是一位专栏作家，文笔风趣、有点话痨，习惯从生活小事切入宏大的话题。\n\
         写作戒律：\n\
         1. 以第一人称写作，观点是主观的，不要使用客观中立的全知视角。\n\
         2. 多用短句和口语，允许不完美的表达。\n\
         3. 不要使用“总-分-总”之类的标准结构，思路可以发散。\n\
         4. 用具体场景和感受表达情绪，不要直接说“高兴”或“悲伤”。\n\
         5. 不要说教，不要定义、总结和升华。\n\
         6. 在文章开头、中间和结尾附近各插入一次 {marker} 标记，每个标记独立成行，放在自然段落之后。\n\
         目标读者：{audience}。整体风格：{style}。篇幅：{length}。",
        marker = IMAGE_MARKER,
        audience = params.audience,
        style = params.style,
        length = params.length,
    );

    let user = format!(
        "今天来聊聊“{title}”这个话题。\n\
         就当是在写自己的博客，可以围绕这些词多聊几句：{keywords}。\n\
         另外这些要求也请参考：\n{extra}\n\
         想到哪写到哪，开始吧：",
        title = title,
        keywords = params.keywords.join("、"),
        extra = merge_extra_requirements(&params.extra_requirements),
    );

    CompletionRequest::new(model)
        .system(system)
        .user(user)
        .temperature(0.9)
        .top_p(0.9)
        .seed(seed)
}

const IMAGE_PROMPT_SYSTEM_PROMPT: &str = "你是一个图像提示词生成器。根据用户提供的中文段落提炼关键视觉元素和意境，生成一个简洁、富有想象力、适合图像AI的英文提示词。只输出提示词本身。";

/// Request turning an article passage into an English image prompt
pub fn image_prompt_request(model: &str, passage: &str) -> CompletionRequest {
    let user = format!(
        "请根据以下中文段落生成一个用于图像AI的英文提示词，只给出提示词：\n\n\"{}\"\n\n英文提示词：",
        passage
    );

    CompletionRequest::new(model)
        .system(IMAGE_PROMPT_SYSTEM_PROMPT)
        .user(user)
        .temperature(0.9)
        .top_p(0.9)
}

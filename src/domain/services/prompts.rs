//! Prompt templates sent to the chat and image providers.

use crate::domain::AnswerSet;

/// Number of distinct recommendations the model is asked for.
pub const TARGET_RECOMMENDATIONS: usize = 3;

pub const DEFAULT_SYSTEM_PROMPT: &str = r#"你是一位资深的宠物行为专家和匹配顾问。请根据用户的问卷回答，推荐 **3个** 最适合他们的宠物（具体到品种）。

**重要规则：**
1. **语言要求**：除 `englishName` 字段外，所有返回内容（描述、理由、指南等）必须严格使用**简体中文**。
2. **JSON 格式**：请务必严格按照以下 JSON 格式输出结果，不要包含任何额外的 Markdown 标记或解释文字。
3. **多样性**：这3个推荐应该是不同的品种，最好能覆盖用户可能感兴趣的不同方向（例如：一个最完美的匹配，一个更有趣的选择，一个更容易打理的选择）。

{
  "recommendations": [
    {
      "name": "宠物具体品种名称(必须中文, 如 '金鱼')",
      "englishName": "宠物英文学名(用于生成图片, 如 'Goldfish', 'Golden Retriever')",
      "species": "物种 (如 '猫', '狗', '鱼', '鸟')",
      "description": "一段吸引人的描述(中文)",
      "matchReason": "详细的匹配理由(中文)",
      "careLevel": "护理难度 (低/中/高)",
      "exerciseNeeds": "运动需求描述(中文)",
      "estimatedCost": "预估月开销描述(中文)",
      "alternatives": [
        { "name": "类似品种1(中文)", "reason": "推荐理由" }
      ],
      "careGuide": {
        "diet": "饮食建议与禁忌(中文)",
        "grooming": "毛发护理与清洁建议(中文)",
        "exercise": "具体的运动与娱乐方式(中文)",
        "health": "常见遗传病与健康注意事项(中文)",
        "training": "新手训练技巧(中文)",
        "dailySchedule": "建议的每日作息安排(中文)"
      }
    }
  ]
}"#;

/// User message for a recommendation request: the answer profile wrapped in
/// fixed instructions demanding JSON-only output.
pub fn recommendation_prompt(answers: &AnswerSet) -> String {
    format!(
        "用户资料:\n{profile}\n\n\
         请根据上述资料，分析用户的居住环境、时间、预算、宠物大小偏好和性格偏好。\n\n\
         特别注意：\n\
         - 如果用户有过敏情况，必须推荐低敏宠物。\n\
         - 如果用户无法忍受噪音，不要推荐爱叫的品种。\n\
         - 如果用户不想打理毛发，推荐短毛品种。\n\
         - 注意用户的体型偏好（小型/中型/大型），推荐符合该体型的动物。\n\
         如果是新手且时间少，不要推荐高难度宠物。\n\n\
         请只输出 JSON，不要输出任何其他文字。JSON 包含一个 \"recommendations\" 数组，提供 **{count}个不同的** 推荐方案。\n\
         **重要提示：除 englishName 外，所有输出内容必须完全使用简体中文。**",
        profile = answers.profile(),
        count = TARGET_RECOMMENDATIONS,
    )
}

/// System instruction binding the chat assistant to one recommended pet.
pub fn chat_system_instruction(pet_name: &str, pet_description: &str) -> String {
    format!(
        "你是一个友好的 AI 宠物助手。用户刚刚被推荐了\"{pet_name}\" ({pet_description})。\n\
         请回答用户关于这个宠物的问题。\n\
         - 语气亲切、专业。\n\
         - 尽量使用中文。\n\
         - 回答要简洁实用。"
    )
}

/// Photographic prompt for the primary image generator.
pub fn studio_photo_prompt(subject: &str) -> String {
    format!(
        "A high-quality, adorable, professional studio photography style photo of a {subject}. \
         The animal is isolated or in a natural setting. Soft lighting. Focus on the {subject}."
    )
}

/// Prompt embedded in the public fallback image URL.
pub fn fallback_photo_prompt(subject: &str) -> String {
    format!("high quality photo of a cute {subject} pet, studio lighting, 4k, realistic")
}

use serde::Serialize;

use super::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Builds the answer for `option_id`, or `None` if the option is unknown.
    pub fn answer(&self, option_id: &str) -> Option<Answer> {
        self.option(option_id)
            .map(|o| Answer::new(self.id, o.id, o.label))
    }
}

const fn opt(id: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { id, label }
}

/// The fixed questionnaire, asked in order.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: "living_space",
        text: "您的居住环境是怎样的？",
        options: &[
            opt("small_apt", "小型公寓/单间"),
            opt("large_apt", "大型公寓/大平层"),
            opt("house_yard", "带院子的别墅/住宅"),
            opt("farm", "广阔的乡村/农场环境"),
        ],
    },
    Question {
        id: "size_preference",
        text: "您偏好哪种体型的宠物？",
        options: &[
            opt("small", "小型 (如仓鼠、猫、小型犬)"),
            opt("medium", "中型 (如柯基、柴犬)"),
            opt("large", "大型 (如金毛、阿拉斯加)"),
            opt("no_pref", "体型不重要，看眼缘"),
        ],
    },
    Question {
        id: "activity_level",
        text: "您平时的活动量如何？",
        options: &[
            opt("low", "宅家一族，喜欢安静"),
            opt("moderate", "偶尔散步，适度运动"),
            opt("high", "非常活跃，经常跑步或户外探险"),
        ],
    },
    Question {
        id: "time_commitment",
        text: "您每天能为宠物投入多少陪伴时间？",
        options: &[
            opt("little", "很少 (少于 1 小时)"),
            opt("medium", "适中 (1-3 小时)"),
            opt("lot", "很多 (3 小时以上或全天在家)"),
        ],
    },
    Question {
        id: "allergies",
        text: "您或家人是否对宠物毛发过敏？",
        options: &[
            opt("yes", "是的，严重过敏 (需要低敏宠物)"),
            opt("mild", "轻微过敏，可以接受"),
            opt("no", "完全不过敏"),
        ],
    },
    Question {
        id: "noise_tolerance",
        text: "您对噪音的容忍度如何？",
        options: &[
            opt("quiet", "喜欢绝对安静，不能接受吵闹"),
            opt("some", "偶尔叫几声没关系"),
            opt("loud", "热闹一点挺好的"),
        ],
    },
    Question {
        id: "grooming",
        text: "您愿意花多少精力打理宠物的毛发？",
        options: &[
            opt("low", "越省事越好 (短毛/无毛)"),
            opt("medium", "每周梳理一次"),
            opt("high", "不介意每天梳理或定期去美容院"),
        ],
    },
    Question {
        id: "experience",
        text: "您有养宠物的经验吗？",
        options: &[
            opt("none", "我是新手"),
            opt("some", "有过一些经验"),
            opt("expert", "我是资深铲屎官"),
        ],
    },
    Question {
        id: "household",
        text: "您的家庭成员情况？",
        options: &[
            opt("single", "独居"),
            opt("couple", "情侣/夫妻"),
            opt("kids", "有小孩"),
            opt("other_pets", "已有其他宠物"),
        ],
    },
    Question {
        id: "budget",
        text: "您每月的养宠预算大概是多少？",
        options: &[
            opt("low", "经济型 (500元以下)"),
            opt("medium", "舒适型 (500-2000元)"),
            opt("high", "富养型 (2000元以上)"),
        ],
    },
    Question {
        id: "preference",
        text: "您更倾向于哪种类型的互动？",
        options: &[
            opt("cuddly", "粘人，喜欢抱抱"),
            opt("independent", "独立，互不打扰"),
            opt("playful", "活泼好动，一起玩耍"),
            opt("smart", "聪明，喜欢互动训练"),
        ],
    },
];

pub fn find_question(question_id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == question_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_unique_question_ids() {
        let mut ids: Vec<_> = QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn answer_uses_catalog_label() {
        let answer = find_question("budget").unwrap().answer("high").unwrap();
        assert_eq!(answer.option_label(), "富养型 (2000元以上)");
    }

    #[test]
    fn unknown_option_yields_none() {
        assert!(find_question("budget").unwrap().answer("unlimited").is_none());
        assert!(find_question("favorite_color").is_none());
    }
}

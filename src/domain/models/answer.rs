use serde::{Deserialize, Serialize};

/// A single questionnaire answer. Wire names match the persisted camelCase shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    question_id: String,
    option_id: String,
    option_label: String,
}

impl Answer {
    pub fn new(
        question_id: impl Into<String>,
        option_id: impl Into<String>,
        option_label: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
            option_label: option_label.into(),
        }
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn option_id(&self) -> &str {
        &self.option_id
    }

    pub fn option_label(&self) -> &str {
        &self.option_label
    }

    /// `- {questionId}: {optionLabel}`, the line used in the user profile prompt.
    pub fn profile_line(&self) -> String {
        format!("- {}: {}", self.question_id, self.option_label)
    }
}

/// Ordered answers, at most one per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer after dropping any earlier answer to the same
    /// question. The new answer moves to the end of the list.
    pub fn record(&mut self, answer: Answer) {
        self.answers
            .retain(|a| a.question_id != answer.question_id);
        self.answers.push(answer);
    }

    /// Replaces the answer for `answer.question_id` in place, keeping its
    /// position; appends when the question was not answered yet.
    pub fn replace(&mut self, answer: Answer) {
        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.question_id == question_id)
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.answers
    }

    /// Newline-joined profile lines in answer order.
    pub fn profile(&self) -> String {
        self.answers
            .iter()
            .map(Answer::profile_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        let mut set = AnswerSet::new();
        for answer in answers {
            set.record(answer);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_keeps_length_and_new_label() {
        let mut set = AnswerSet::from(vec![
            Answer::new("living_space", "small_apt", "小型公寓/单间"),
            Answer::new("budget", "low", "经济型 (500元以下)"),
        ]);

        set.replace(Answer::new("living_space", "farm", "广阔的乡村/农场环境"));

        assert_eq!(set.len(), 2);
        assert_eq!(
            set.get("living_space").unwrap().option_label(),
            "广阔的乡村/农场环境"
        );
        assert_eq!(set.as_slice()[0].question_id(), "living_space");
    }

    #[test]
    fn record_drops_duplicate_question() {
        let mut set = AnswerSet::new();
        set.record(Answer::new("budget", "low", "low"));
        set.record(Answer::new("grooming", "low", "low"));
        set.record(Answer::new("budget", "high", "high"));

        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice()[1].option_id(), "high");
    }

    #[test]
    fn profile_renders_one_line_per_answer() {
        let set = AnswerSet::from(vec![
            Answer::new("allergies", "no", "完全不过敏"),
            Answer::new("experience", "none", "我是新手"),
        ]);

        assert_eq!(set.profile(), "- allergies: 完全不过敏\n- experience: 我是新手");
    }

    #[test]
    fn answer_serializes_camel_case() {
        let json = serde_json::to_value(Answer::new("q", "o", "l")).unwrap();
        assert_eq!(json["questionId"], "q");
        assert_eq!(json["optionLabel"], "l");
    }
}

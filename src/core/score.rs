//! Score business logic. Scores have no uniqueness key, so repeats are accepted.

use super::validation::{append_checked, parse_number, require_fields};
use crate::{
    entities::{ScoreModel, score},
    errors::Result,
    store::RecordStore,
};

/// Raw form input for a new score.
#[derive(Debug, Clone, Default)]
pub struct NewScore {
    pub student_id: String,
    pub subject: String,
    pub teacher_id: String,
    pub score: String,
}

impl NewScore {
    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("student_id", self.student_id.as_str()),
            ("subject", self.subject.as_str()),
            ("teacher_id", self.teacher_id.as_str()),
            ("score", self.score.as_str()),
        ]
    }
}

/// Validates and stores a score. `score` must parse as a finite number.
pub fn create_score<S: RecordStore>(store: &S, input: &NewScore) -> Result<ScoreModel> {
    require_fields(&input.fields())?;
    let value = parse_number("score", &input.score)?;

    let model = ScoreModel {
        student_id: input.student_id.trim().to_string(),
        subject: input.subject.trim().to_string(),
        teacher_id: input.teacher_id.trim().to_string(),
        score: value,
    };

    append_checked(store, score::COLLECTION, &model, None)?;
    Ok(model)
}

pub fn list_scores<S: RecordStore>(store: &S) -> Result<Vec<ScoreModel>> {
    store.load(score::COLLECTION)
}

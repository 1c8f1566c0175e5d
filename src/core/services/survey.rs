use itertools::Itertools;

use crate::core::models::survey::{OptionItem, QuestionWithOptions};
use crate::core::ports::repository::{OptionCommon, QuestionCommon, Store};
use crate::error::Error;

pub async fn questions_with_options<S>(store: &mut S, survey_id: i32) -> Result<Vec<QuestionWithOptions>, Error>
where
    S: Store,
{
    let questions = QuestionCommon::query_by_survey(store, survey_id).await?;
    if questions.is_empty() {
        return Ok(Vec::new());
    }
    let mut options = OptionCommon::query_by_questions(store, questions.iter().map(|q| q.id).collect())
        .await?
        .into_iter()
        .map(|o| {
            (
                o.question_id,
                OptionItem {
                    id: o.id,
                    option_text: o.option_text,
                },
            )
        })
        .into_group_map();
    Ok(questions
        .into_iter()
        .map(|q| QuestionWithOptions {
            options: options.remove(&q.id).unwrap_or_default(),
            id: q.id,
            question_text: q.question_text,
            type_: q.type_,
        })
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::survey::{Opt, Question};
    use crate::core::ports::memory::MemDb;

    fn question(id: i32, text: &str, type_: &str) -> Question {
        Question {
            id,
            question_text: text.into(),
            type_: type_.into(),
        }
    }

    fn opt(id: i32, question_id: i32, text: &str) -> Opt {
        Opt {
            id,
            question_id,
            option_text: text.into(),
        }
    }

    #[tokio::test]
    async fn test_options_are_grouped_under_questions() {
        let db = MemDb::default();
        {
            let mut tables = db.tables();
            tables.questions = vec![(1, question(10, "Favourite colour?", "single")), (1, question(11, "Comments", "text")), (2, question(20, "Other survey", "single"))];
            tables.options = vec![opt(100, 10, "Red"), opt(101, 10, "Blue"), opt(200, 20, "Yes")];
        }
        let questions = questions_with_options(&mut db.tx(), 1).await.unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, 10);
        assert_eq!(
            questions[0].options,
            vec![
                OptionItem {
                    id: 100,
                    option_text: "Red".into()
                },
                OptionItem {
                    id: 101,
                    option_text: "Blue".into()
                },
            ]
        );
        assert_eq!(questions[1].id, 11);
        assert!(questions[1].options.is_empty());
    }

    #[tokio::test]
    async fn test_empty_survey_skips_option_query() {
        let db = MemDb::default();
        let questions = questions_with_options(&mut db.tx(), 7).await.unwrap();
        assert!(questions.is_empty());
        assert_eq!(db.tables().option_queries, 0);
    }

    #[test]
    fn test_question_json_uses_type_key() {
        let q = QuestionWithOptions {
            id: 1,
            question_text: "Q".into(),
            type_: "multiple".into(),
            options: vec![],
        };
        let body = serde_json::to_value(&q).unwrap();
        assert_eq!(body, serde_json::json!({"id": 1, "question_text": "Q", "type": "multiple", "options": []}));
    }
}

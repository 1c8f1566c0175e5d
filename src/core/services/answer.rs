use log::error;
use uuid::Uuid;

use crate::core::models::answer::{RawAnswer, SubmissionContext};
use crate::core::models::column::OptionColumn;
use crate::core::ports::journal::{Event, Journal};
use crate::core::ports::repository::{AnswerCommon, SchemaCommon, Store, TxStore};
use crate::error::Error;

/// Returns the configured option column, or looks one up in the live schema
/// of `responses`.
pub async fn resolve_option_column<S>(store: &mut S, configured: Option<&str>) -> Result<OptionColumn, Error>
where
    S: Store,
{
    if let Some(name) = configured {
        return OptionColumn::new(name);
    }
    let columns = SchemaCommon::columns(store, "responses").await?;
    Ok(OptionColumn::resolve(&columns))
}

async fn save_all<S, J>(store: &mut S, journal: &J, batch: &Uuid, column: &OptionColumn, context: &SubmissionContext, answers: &[RawAnswer]) -> Result<usize, Error>
where
    S: TxStore,
    J: Journal,
{
    let mut rows = 0;
    for raw in answers {
        let question_id = match raw.question_id() {
            Some(qid) => qid,
            None => {
                journal.record(batch, Event::Skipped { raw });
                continue;
            }
        };
        journal.record(batch, Event::Received { question_id, raw });
        let shape = match raw.classify(question_id) {
            Ok(shape) => shape,
            Err(e) => {
                journal.record(batch, Event::Rejected { question_id, raw });
                return Err(e);
            }
        };
        journal.record(
            batch,
            Event::Classified {
                question_id,
                shape: &shape,
                column,
            },
        );
        for row in shape.into_inserts(context, question_id) {
            AnswerCommon::insert(store, column, row.clone()).await?;
            journal.record(batch, Event::Saved { row: &row });
            rows += 1;
        }
    }
    Ok(rows)
}

/// Persists a whole batch in the given transaction: every answer is written
/// and committed, or the transaction is rolled back and nothing remains.
/// Answers without a usable `question_id` are skipped; any other malformed answer
/// aborts the batch.
pub async fn submit<S, J>(mut store: S, journal: &J, column: &OptionColumn, context: SubmissionContext, answers: Vec<RawAnswer>) -> Result<(), Error>
where
    S: TxStore,
    J: Journal,
{
    let batch = Uuid::new_v4();
    journal.record(
        &batch,
        Event::Started {
            context: &context,
            answers: answers.len(),
        },
    );
    match save_all(&mut store, journal, &batch, column, &context, &answers).await {
        Ok(rows) => {
            if let Err(e) = store.commit().await {
                journal.record(&batch, Event::RolledBack { error: &e });
                return Err(e);
            }
            journal.record(&batch, Event::Committed { rows });
            Ok(())
        }
        Err(e) => {
            if let Err(rollback_err) = store.rollback().await {
                error!("failed to roll back submission {}: {}", batch, rollback_err);
            }
            journal.record(&batch, Event::RolledBack { error: &e });
            Err(e)
        }
    }
}

use crate::error::{QuestionsError, Result};
use readtrace_table::{schema, EventTable};
use serde::Serialize;

/// One scored comprehension-question answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    #[serde(rename = "SubjectId")]
    pub subject_id: String,

    #[serde(rename = "ItemId")]
    pub item_id: String,

    #[serde(rename = "Experiment")]
    pub experiment: String,

    #[serde(rename = "Condition")]
    pub condition: String,

    #[serde(rename = "QuestionNumber")]
    pub question_number: usize,

    #[serde(rename = "Question")]
    pub question: String,

    #[serde(rename = "UserAnswer")]
    pub user_answer: String,

    #[serde(rename = "CorrectAnswer")]
    pub correct_answer: String,

    #[serde(rename = "IsCorrect")]
    pub is_correct: bool,

    /// Trial score as `correct/answered`
    #[serde(rename = "Score")]
    pub score: String,
}

/// Extract and score every answered question of one raw log.
///
/// Identifiers are forward-filled (quiz rows never carry their own), then
/// each row with a populated first question column yields one record per
/// non-null question. Correctness is exact string equality of the given and
/// expected answers.
pub fn extract_answers(table: &EventTable) -> Result<Vec<AnswerRecord>> {
    let question_cols: Vec<usize> = (1..)
        .map(schema::question)
        .map_while(|name| table.column(&name))
        .collect();
    if question_cols.is_empty() {
        return Err(QuestionsError::NoQuestionColumns(
            "no question_* columns in header".to_string(),
        ));
    }
    log::debug!("Found {} questions per trial", question_cols.len());

    let mut table = table.clone();
    for name in [schema::ITEM_ID, schema::EXPERIMENT, schema::CONDITION] {
        forward_fill(&mut table, name);
    }

    let subject_col = table.column(schema::SUBJECT_ID);
    let prolific_col = table.column(schema::PROLIFIC_PID);
    let item_col = table.column(schema::ITEM_ID);
    let experiment_col = table.column(schema::EXPERIMENT);
    let condition_col = table.column(schema::CONDITION);

    let id_cell = |row: usize, col: Option<usize>| -> Option<String> {
        col.map(|col| table.get(row, col).unwrap_or_default().to_string())
    };

    let mut records = Vec::new();
    for row in 0..table.len() {
        if table.get(row, question_cols[0]).is_none() {
            continue;
        }

        let subject_id = id_cell(row, subject_col)
            .or_else(|| id_cell(row, prolific_col))
            .unwrap_or_else(|| "Unknown".to_string());
        let item_id = id_cell(row, item_col).unwrap_or_else(|| "Unknown".to_string());
        let experiment = id_cell(row, experiment_col).unwrap_or_else(|| "Unknown".to_string());
        let condition = id_cell(row, condition_col).unwrap_or_else(|| "Unknown".to_string());

        let trial_start = records.len();
        let mut correct = 0usize;
        for (question_number, &question_col) in question_cols.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            let Some(question) = table.get(row, question_col) else {
                continue;
            };
            let user_answer = table
                .column(&schema::answer(question_number))
                .and_then(|col| table.get(row, col))
                .unwrap_or("No answer");
            let correct_answer = table
                .column(&schema::correct_answer(question_number))
                .and_then(|col| table.get(row, col))
                .unwrap_or("Unknown");
            let is_correct = user_answer == correct_answer;
            if is_correct {
                correct += 1;
            }
            records.push(AnswerRecord {
                subject_id: subject_id.clone(),
                item_id: item_id.clone(),
                experiment: experiment.clone(),
                condition: condition.clone(),
                question_number,
                question: question.to_string(),
                user_answer: user_answer.to_string(),
                correct_answer: correct_answer.to_string(),
                is_correct,
                score: String::new(),
            });
        }

        let answered = records.len() - trial_start;
        if answered > 0 {
            let score = format!("{correct}/{answered}");
            for record in &mut records[trial_start..] {
                record.score = score.clone();
            }
        }
    }

    log::debug!("Extracted {} answer records", records.len());
    Ok(records)
}

fn forward_fill(table: &mut EventTable, name: &str) {
    let col = match table.column(name) {
        Some(col) => col,
        None => return,
    };
    let mut carried: Option<String> = None;
    for row in 0..table.len() {
        match table.get(row, col) {
            Some(value) => carried = Some(value.to_string()),
            None => {
                if let Some(value) = &carried {
                    table.set(row, col, value.clone());
                }
            }
        }
    }
}

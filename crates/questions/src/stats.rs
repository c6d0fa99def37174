use crate::extract::AnswerRecord;
use serde::Serialize;

/// Per-item accuracy over all scored answers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStat {
    #[serde(rename = "ItemId")]
    pub item_id: String,

    #[serde(rename = "CorrectAnswers")]
    pub correct_answers: usize,

    #[serde(rename = "TotalQuestions")]
    pub total_questions: usize,

    /// Percentage, rounded to two decimals
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
}

/// Aggregate answer records into per-item accuracy, sorted by accuracy
/// descending (ties keep first-seen item order)
pub fn item_statistics(records: &[AnswerRecord]) -> Vec<ItemStat> {
    let mut stats: Vec<ItemStat> = Vec::new();
    for record in records {
        let stat = match stats.iter_mut().find(|s| s.item_id == record.item_id) {
            Some(stat) => stat,
            None => {
                stats.push(ItemStat {
                    item_id: record.item_id.clone(),
                    correct_answers: 0,
                    total_questions: 0,
                    accuracy: 0.0,
                });
                stats.last_mut().unwrap()
            }
        };
        stat.total_questions += 1;
        if record.is_correct {
            stat.correct_answers += 1;
        }
    }

    for stat in &mut stats {
        stat.accuracy = round2(stat.correct_answers as f64 / stat.total_questions as f64 * 100.0);
    }
    stats.sort_by(|a, b| b.accuracy.partial_cmp(&a.accuracy).unwrap_or(std::cmp::Ordering::Equal));
    stats
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(item: &str, correct: bool) -> AnswerRecord {
        AnswerRecord {
            subject_id: "alice".to_string(),
            item_id: item.to_string(),
            experiment: "1".to_string(),
            condition: "1".to_string(),
            question_number: 1,
            question: "Q?".to_string(),
            user_answer: "A".to_string(),
            correct_answer: if correct { "A" } else { "B" }.to_string(),
            is_correct: correct,
            score: "0/0".to_string(),
        }
    }

    #[test]
    fn aggregates_and_sorts_by_accuracy() {
        let records = vec![
            record("3", true),
            record("3", false),
            record("3", false),
            record("4", true),
        ];
        let stats = item_statistics(&records);
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].item_id, "4");
        assert_eq!(stats[0].accuracy, 100.0);

        assert_eq!(stats[1].item_id, "3");
        assert_eq!(stats[1].correct_answers, 1);
        assert_eq!(stats[1].total_questions, 3);
        assert_eq!(stats[1].accuracy, 33.33);
    }

    #[test]
    fn empty_records_produce_no_stats() {
        assert!(item_statistics(&[]).is_empty());
    }
}

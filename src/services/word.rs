use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row, Transaction};
use thiserror::Error;

use crate::db::Database;

/// 單字，含所屬學習日與範例句。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub eng_word: String,
    pub tw_word: String,
    pub day: u32,
    pub sentences: Vec<Sentence>,
}

/// 範例句，依 sentence_order 排序。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub eng_sentences: String,
    pub tw_sentences: String,
}

/// Create-word request payload. Fields default so that a missing field is
/// reported by validation with a named message instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateWordInput {
    pub eng_word: String,
    pub tw_word: String,
    pub day: i64,
    pub sentences: Vec<SentenceInput>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SentenceInput {
    pub eng_sentences: String,
    pub tw_sentences: String,
}

#[derive(Debug, Error)]
pub enum WordError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

/// Checks the input shape before any store access. Messages name the
/// offending field; sentence indices are 1-based.
pub fn validate(input: &CreateWordInput) -> Result<(), WordError> {
    if input.eng_word.trim().is_empty() {
        return Err(WordError::Validation("英文單字為必要欄位".to_string()));
    }

    if input.tw_word.trim().is_empty() {
        return Err(WordError::Validation("中文單字為必要欄位".to_string()));
    }

    if input.day < 1 {
        return Err(WordError::Validation(
            "學習日期必須為大於0的數字".to_string(),
        ));
    }

    if input.sentences.is_empty() {
        return Err(WordError::Validation("必須提供至少一個例句".to_string()));
    }

    for (index, sentence) in input.sentences.iter().enumerate() {
        if sentence.eng_sentences.trim().is_empty() {
            return Err(WordError::Validation(format!(
                "第 {} 個例句的英文句子為必要欄位",
                index + 1
            )));
        }
        if sentence.tw_sentences.trim().is_empty() {
            return Err(WordError::Validation(format!(
                "第 {} 個例句的中文句子為必要欄位",
                index + 1
            )));
        }
    }

    Ok(())
}

pub struct WordService {
    db: Arc<Database>,
}

impl WordService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Validates, then inserts the word and its sentences in one
    /// transaction. The duplicate check runs inside the same transaction
    /// so check and insert cannot race; any failure rolls everything back.
    pub async fn create_word(&self, input: CreateWordInput) -> Result<Word, WordError> {
        validate(&input)?;

        let word = Word {
            eng_word: input.eng_word.trim().to_string(),
            tw_word: input.tw_word.trim().to_string(),
            day: input.day as u32,
            sentences: input
                .sentences
                .iter()
                .map(|s| Sentence {
                    eng_sentences: s.eng_sentences.trim().to_string(),
                    tw_sentences: s.tw_sentences.trim().to_string(),
                })
                .collect(),
        };

        let mut tx = self.db.pool().begin().await?;
        match insert_word_tx(&mut tx, &word).await {
            Ok(()) => {
                tx.commit().await?;
                Ok(word)
            }
            Err(err) => {
                let _ = tx.rollback().await;
                Err(err)
            }
        }
    }

    pub async fn word_exists(&self, eng_word: &str) -> Result<bool, WordError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM words WHERE LOWER(eng_word) = LOWER(?) AND is_active = 1",
        )
        .bind(eng_word.trim())
        .fetch_one(self.db.pool())
        .await?;

        Ok(count > 0)
    }

    pub async fn get_words_by_day(&self, day: u32) -> Result<Vec<Word>, WordError> {
        let rows = sqlx::query(
            r#"
            SELECT w.eng_word, w.tw_word, w.day_number, s.eng_sentence, s.tw_sentence
            FROM words w
            LEFT JOIN sentences s ON s.word_id = w.id AND s.is_active = 1
            WHERE w.is_active = 1 AND w.day_number = ?
            ORDER BY w.eng_word, s.sentence_order
            "#,
        )
        .bind(day)
        .fetch_all(self.db.pool())
        .await?;

        collect_rows(&rows)
    }

    pub async fn get_all_words(&self) -> Result<Vec<Word>, WordError> {
        let rows = sqlx::query(
            r#"
            SELECT w.eng_word, w.tw_word, w.day_number, s.eng_sentence, s.tw_sentence
            FROM words w
            LEFT JOIN sentences s ON s.word_id = w.id AND s.is_active = 1
            WHERE w.is_active = 1
            ORDER BY w.day_number, w.eng_word, s.sentence_order
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        collect_rows(&rows)
    }
}

async fn insert_word_tx(tx: &mut Transaction<'_, MySql>, word: &Word) -> Result<(), WordError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM words WHERE LOWER(eng_word) = LOWER(?) AND is_active = 1",
    )
    .bind(&word.eng_word)
    .fetch_one(&mut **tx)
    .await?;

    if count > 0 {
        return Err(WordError::Conflict("單字已存在".to_string()));
    }

    let result = sqlx::query("INSERT INTO words (eng_word, tw_word, day_number) VALUES (?, ?, ?)")
        .bind(&word.eng_word)
        .bind(&word.tw_word)
        .bind(word.day)
        .execute(&mut **tx)
        .await?;

    let word_id = result.last_insert_id();

    for (index, sentence) in word.sentences.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO sentences (word_id, eng_sentence, tw_sentence, sentence_order)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(word_id)
        .bind(&sentence.eng_sentences)
        .bind(&sentence.tw_sentences)
        .bind((index + 1) as u32)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

/// One flat row of the word/sentence join. Sentence fields are NULL for a
/// word whose join produced no active sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub eng_word: String,
    pub tw_word: String,
    pub day: u32,
    pub eng_sentence: Option<String>,
    pub tw_sentence: Option<String>,
}

fn collect_rows(rows: &[MySqlRow]) -> Result<Vec<Word>, WordError> {
    let mut flat = Vec::with_capacity(rows.len());
    for row in rows {
        flat.push(WordRow {
            eng_word: row.try_get("eng_word")?,
            tw_word: row.try_get("tw_word")?,
            day: row.try_get("day_number")?,
            eng_sentence: row.try_get("eng_sentence")?,
            tw_sentence: row.try_get("tw_sentence")?,
        });
    }
    Ok(aggregate_rows(flat))
}

/// Folds ordered join rows back into nested words: one `Word` per distinct
/// English spelling in first-seen order, sentences appended in row order
/// whenever both sentence fields are present.
pub fn aggregate_rows(rows: Vec<WordRow>) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slot = match index.get(&row.eng_word) {
            Some(&i) => i,
            None => {
                words.push(Word {
                    eng_word: row.eng_word.clone(),
                    tw_word: row.tw_word.clone(),
                    day: row.day,
                    sentences: Vec::new(),
                });
                index.insert(row.eng_word.clone(), words.len() - 1);
                words.len() - 1
            }
        };

        if let (Some(eng), Some(tw)) = (row.eng_sentence, row.tw_sentence) {
            words[slot].sentences.push(Sentence {
                eng_sentences: eng,
                tw_sentences: tw,
            });
        }
    }

    words
}

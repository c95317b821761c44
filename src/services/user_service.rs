use crate::database::MongoDB;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};

const COLLECTION: &str = "userdatas";

/// Returns every document of the userdatas collection. Records are
/// schema-free and passed through verbatim.
pub async fn find_all(db: &MongoDB) -> Result<Vec<Document>, String> {
    let collection = db.collection::<Document>(COLLECTION);

    let cursor = collection
        .find(doc! {})
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    cursor
        .try_collect()
        .await
        .map_err(|e| format!("Database error: {}", e))
}

/// Case-insensitive substring match on the "name" field. The pattern is
/// escaped so metacharacters in the input match literally.
pub async fn find_by_name(db: &MongoDB, name: &str) -> Result<Vec<Document>, String> {
    let collection = db.collection::<Document>(COLLECTION);

    let filter = doc! {
        "name": { "$regex": escape_regex(name), "$options": "i" }
    };

    let cursor = collection
        .find(filter)
        .await
        .map_err(|e| format!("Database error: {}", e))?;

    cursor
        .try_collect()
        .await
        .map_err(|e| format!("Database error: {}", e))
}

fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '.' | '^' | '$' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\' | '/') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_regex_passthrough() {
        assert_eq!(escape_regex("alice"), "alice");
        assert_eq!(escape_regex("ALICE"), "ALICE");
    }

    #[test]
    fn test_escape_regex_metacharacters() {
        assert_eq!(escape_regex(".*"), "\\.\\*");
        assert_eq!(escape_regex("a+b(c)"), "a\\+b\\(c\\)");
        assert_eq!(escape_regex("[^x]|y"), "\\[\\^x\\]\\|y");
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_find_all_returns_every_document() {
        dotenv::dotenv().ok();
        let config = crate::config::Config::from_env();
        let db = MongoDB::connect(&config).await.unwrap();

        let expected = db
            .collection::<Document>(COLLECTION)
            .count_documents(doc! {})
            .await
            .unwrap();

        let users = find_all(&db).await.unwrap();
        assert_eq!(users.len() as u64, expected);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_find_by_name_case_insensitive() {
        dotenv::dotenv().ok();
        let config = crate::config::Config::from_env();
        let db = MongoDB::connect(&config).await.unwrap();

        let lower = find_by_name(&db, "alice").await.unwrap();
        let upper = find_by_name(&db, "ALICE").await.unwrap();
        assert_eq!(lower, upper);
    }
}

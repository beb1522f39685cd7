//! Storage Module Tests
//!
//! Validates the in-memory question bank and the MongoDB filter construction.
//!
//! ## Test Scopes
//! - **MemoryQuestionStore**: matching, ordering, paging and JSON seeding.
//! - **open_store**: backend selection from the connection string.
//! - **Mongo filter**: the regex document sent to the server.
//!
//! *Note: queries against a live MongoDB server are not exercised here.*

#[cfg(test)]
mod tests {
    use crate::questions::types::{Question, QuestionOption, QuestionType};
    use crate::search::query::TitleFilter;
    use crate::storage::memory::MemoryQuestionStore;
    use crate::storage::mongo::title_filter;
    use crate::storage::open_store;
    use crate::storage::store::QuestionStore;

    const SAMPLE_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/questions.sample.json");

    fn question(id: &str, title: &str) -> Question {
        Question {
            id: id.to_string(),
            kind: QuestionType::Mcq,
            title: title.to_string(),
            blocks: vec![],
            options: vec![
                QuestionOption {
                    text: "right".to_string(),
                    is_correct_answer: true,
                },
                QuestionOption {
                    text: "wrong".to_string(),
                    is_correct_answer: false,
                },
            ],
            solution: None,
        }
    }

    fn filter(query: &str) -> TitleFilter {
        TitleFilter::new(query).expect("valid query")
    }

    fn bank() -> MemoryQuestionStore {
        MemoryQuestionStore::from_questions(vec![
            question("q-03", "Basic Algebra"),
            question("q-01", "Advanced algebra proofs"),
            question("q-02", "Geometry of circles"),
            question("q-04", "ALGEBRAIC structures"),
        ])
    }

    // ============================================================
    // MEMORY STORE - matching
    // ============================================================

    #[tokio::test]
    async fn test_memory_find_is_case_insensitive() {
        let store = bank();

        let found = store.find_by_title(&filter("AlGeBrA"), 0, 10).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|q| q.id.as_str()).collect();

        assert_eq!(ids, vec!["q-01", "q-03", "q-04"]);
    }

    #[tokio::test]
    async fn test_memory_results_are_ordered_by_id() {
        let store = bank();

        let found = store.find_by_title(&filter(""), 0, 10).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|q| q.id.as_str()).collect();

        assert_eq!(ids, vec!["q-01", "q-02", "q-03", "q-04"]);
    }

    #[tokio::test]
    async fn test_memory_offset_and_limit() {
        let store = bank();

        let found = store.find_by_title(&filter("algebra"), 1, 1).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "q-03");

        let past_end = store.find_by_title(&filter("algebra"), 3, 10).await.unwrap();
        assert!(past_end.is_empty());

        let huge_offset = store
            .find_by_title(&filter("algebra"), u64::MAX, 10)
            .await
            .unwrap();
        assert!(huge_offset.is_empty());
    }

    #[tokio::test]
    async fn test_memory_count_ignores_paging() {
        let store = bank();

        assert_eq!(store.count_by_title(&filter("algebra")).await.unwrap(), 3);
        assert_eq!(store.count_by_title(&filter("")).await.unwrap(), 4);
        assert_eq!(store.count_by_title(&filter("zzz")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_memory_query_is_literal() {
        let store = MemoryQuestionStore::from_questions(vec![
            question("a", "What is a+b?"),
            question("b", "What is aab?"),
        ]);

        let found = store.find_by_title(&filter("a+b"), 0, 10).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");
    }

    #[test]
    fn test_memory_insert_replaces_same_id() {
        let store = MemoryQuestionStore::new();
        assert!(store.is_empty());

        store.insert(question("q-1", "first"));
        store.insert(question("q-1", "second"));

        assert_eq!(store.len(), 1);
    }

    // ============================================================
    // MEMORY STORE - seeding
    // ============================================================

    #[tokio::test]
    async fn test_memory_loads_sample_file() {
        let store = MemoryQuestionStore::load_json_file(std::path::Path::new(SAMPLE_FILE))
            .expect("sample file should load");

        assert_eq!(store.len(), 5);
        assert_eq!(store.count_by_title(&filter("algebra")).await.unwrap(), 2);
    }

    #[test]
    fn test_memory_load_missing_file_fails() {
        let result =
            MemoryQuestionStore::load_json_file(std::path::Path::new("/nonexistent/questions.json"));
        assert!(result.is_err());
    }

    // ============================================================
    // OPEN STORE
    // ============================================================

    #[tokio::test]
    async fn test_open_store_file_scheme() {
        let uri = format!("file://{}", SAMPLE_FILE);
        let store = open_store(&uri, "test", "questions").await.unwrap();

        assert_eq!(store.count_by_title(&filter("")).await.unwrap(), 5);
        store.close().await;
    }

    #[tokio::test]
    async fn test_open_store_rejects_unknown_scheme() {
        let result = open_store("postgres://localhost/db", "test", "questions").await;
        assert!(result.is_err());
    }

    // ============================================================
    // MONGO FILTER
    // ============================================================

    #[test]
    fn test_mongo_filter_for_empty_query_matches_all() {
        let doc = title_filter(&filter(""));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_mongo_filter_is_escaped_case_insensitive_regex() {
        let doc = title_filter(&filter("a+b (x)"));
        let title = doc.get_document("title").expect("title clause");

        assert_eq!(title.get_str("$regex").unwrap(), r"a\+b \(x\)");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }
}

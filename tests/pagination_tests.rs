use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use dip_mcp_server::core::error::AppError;
use dip_mcp_server::features::dip::distribution::build_distribution;
use dip_mcp_server::features::dip::dto::PersonPage;
use dip_mcp_server::features::dip::pagination::{MAX_PAGES, PersonSource, fetch_all_persons};

struct MockPersonSource {
    pages: Vec<PersonPage>,
    calls: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockPersonSource {
    fn new(pages: Vec<PersonPage>) -> Self {
        Self {
            pages,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PersonSource for MockPersonSource {
    async fn fetch_person_page(
        &self,
        _wahlperiode: u32,
        cursor: Option<String>,
    ) -> Result<PersonPage, AppError> {
        let mut guard = self.calls.lock().await;
        guard.push(cursor);
        let index = guard.len() - 1;

        self.pages
            .get(index)
            .cloned()
            .ok_or_else(|| AppError::upstream("no more pages".to_string()))
    }
}

fn page(ids: &[u64], cursor: Option<&str>) -> PersonPage {
    PersonPage {
        num_found: 5,
        cursor: cursor.map(|value| value.to_string()),
        documents: ids
            .iter()
            .map(|id| json!({"id": id.to_string(), "fraktion": ["SPD"]}))
            .collect(),
    }
}

#[tokio::test]
async fn concatenates_pages_in_order_without_duplicates() {
    let source = MockPersonSource::new(vec![
        page(&[1, 2], Some("a")),
        page(&[3, 4], Some("b")),
        // Last page repeats the previous cursor, per the DIP API contract.
        page(&[5], Some("b")),
    ]);

    let members = fetch_all_persons(&source, 20).await.expect("fetch succeeds");

    let ids: Vec<&str> = members
        .iter()
        .map(|member| member["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    let calls = source.calls.lock().await.clone();
    assert_eq!(
        calls,
        vec![None, Some("a".to_string()), Some("b".to_string())]
    );
}

#[tokio::test]
async fn stops_when_cursor_is_absent() {
    let source = MockPersonSource::new(vec![page(&[1, 2, 3], None)]);

    let members = fetch_all_persons(&source, 21).await.expect("fetch succeeds");

    assert_eq!(members.len(), 3);
    assert_eq!(source.calls.lock().await.len(), 1);
}

#[tokio::test]
async fn stops_at_page_cap() {
    let pages: Vec<PersonPage> = (0..MAX_PAGES + 10)
        .map(|index| {
            let cursor = format!("cursor-{index}");
            page(&[index as u64], Some(cursor.as_str()))
        })
        .collect();
    let source = MockPersonSource::new(pages);

    let members = fetch_all_persons(&source, 20).await.expect("fetch succeeds");

    assert_eq!(members.len(), MAX_PAGES);
    assert_eq!(source.calls.lock().await.len(), MAX_PAGES);
}

#[tokio::test]
async fn page_failure_aborts_whole_fetch() {
    // Second page is missing from the mock, so the driver hits an error.
    let source = MockPersonSource::new(vec![page(&[1], Some("a"))]);

    let error = fetch_all_persons(&source, 20)
        .await
        .expect_err("fetch should fail");

    match error {
        AppError::Upstream { message, .. } => assert!(message.contains("no more pages")),
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetched_members_aggregate_to_full_distribution() {
    let source = MockPersonSource::new(vec![
        PersonPage {
            num_found: 3,
            cursor: Some("a".to_string()),
            documents: vec![
                json!({"fraktion": ["SPD"]}),
                json!({"fraktion": ["CDU/CSU"]}),
            ],
        },
        PersonPage {
            num_found: 3,
            cursor: Some("a".to_string()),
            documents: vec![json!({"fraktion": ["SPD"]})],
        },
    ]);

    let members = fetch_all_persons(&source, 20).await.expect("fetch succeeds");
    let distribution = build_distribution(&members, 20);

    assert_eq!(distribution.total_members, 3);
    let sum: u64 = distribution.parties.iter().map(|party| party.count).sum();
    assert_eq!(sum, distribution.total_members);
    assert_eq!(distribution.parties[0].fraktion, "SPD");
    assert_eq!(distribution.parties[0].count, 2);
}

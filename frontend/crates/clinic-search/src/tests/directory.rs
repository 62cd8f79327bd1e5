use crate::{DirectorySearch, RemoteSearch};

use clinic_client::{ClientResult, DirectoryApi};
use clinic_core::{Candidate, Credential, DirectoryKind};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

#[derive(Default)]
struct RecordingDirectory {
    seen: Mutex<Vec<(DirectoryKind, String, Option<String>)>>,
}

#[async_trait]
impl DirectoryApi for RecordingDirectory {
    async fn search(
        &self,
        kind: DirectoryKind,
        query: &str,
        credential: Option<&Credential>,
    ) -> ClientResult<Vec<Candidate>> {
        self.seen.lock().unwrap().push((
            kind,
            query.to_string(),
            credential.map(|c| c.expose().to_string()),
        ));
        Ok(vec![Candidate::new("d1", "Dr. Grey").with_subtitle("Surgery")])
    }
}

#[tokio::test]
async fn given_directory_search_when_searched_then_kind_and_credential_forwarded() {
    // Given
    let api = Arc::new(RecordingDirectory::default());
    let credential = Credential::new("tok-1").unwrap();
    let search = DirectorySearch::new(api.clone(), DirectoryKind::StaffDoctor, Some(credential));

    // When
    let results = search.search("gre").await.unwrap();

    // Then
    assert_eq!(results.len(), 1);
    assert_eq!(search.kind(), DirectoryKind::StaffDoctor);
    assert_eq!(
        api.seen.lock().unwrap().clone(),
        vec![(
            DirectoryKind::StaffDoctor,
            "gre".to_string(),
            Some("tok-1".to_string())
        )]
    );
}

#[tokio::test]
async fn given_no_credential_when_searched_then_anonymous_request() {
    let api = Arc::new(RecordingDirectory::default());
    let search = DirectorySearch::new(api.clone(), DirectoryKind::User, None);

    search.search("pat").await.unwrap();

    assert_eq!(api.seen.lock().unwrap()[0].2, None);
}

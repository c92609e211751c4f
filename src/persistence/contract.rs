//! Behaviour every [`InquiryRepository`] backend must share.
//!
//! Each check only looks at rows it created itself, so the suite also runs
//! against a shared database that already holds data.

use chrono::Utc;
use tokio_test::{assert_err, assert_ok};

use super::InquiryRepository;
use crate::domain::inquiry::fixtures;
use crate::domain::{InquiryFilter, InquiryId, InquiryStatus, Page, TravelInquiry};
use crate::error::LeadsError;

/// Runs every contract check against `repo`.
pub(crate) async fn run_all(repo: &dyn InquiryRepository) {
    conditional_update_conflicts_without_writing(repo).await;
    status_update_on_unknown_id_is_not_found(repo).await;
    second_delete_is_not_found(repo).await;
    archived_counts_only_in_total(repo).await;
    search_wildcards_match_literally(repo).await;
}

async fn stored(repo: &dyn InquiryRepository, destinations: &str) -> TravelInquiry {
    let tag = InquiryId::generate();
    let inquiry = TravelInquiry::from_submission(
        fixtures::details("Contract", "Check", &format!("{tag}@example.com"), destinations),
        Utc::now(),
    );
    assert_ok!(repo.insert(&inquiry).await);
    inquiry
}

async fn conditional_update_conflicts_without_writing(repo: &dyn InquiryRepository) {
    let inquiry = stored(repo, "Italy").await;

    let err = assert_err!(
        repo.update_status(&inquiry.id, InquiryStatus::Contacted, Some(InquiryStatus::Booked))
            .await
    );
    assert!(matches!(
        err,
        LeadsError::StatusConflict {
            expected: InquiryStatus::Booked,
            actual: InquiryStatus::New,
        }
    ));
    assert_eq!(assert_ok!(repo.find_by_id(&inquiry.id).await).status, InquiryStatus::New);

    assert_ok!(
        repo.update_status(&inquiry.id, InquiryStatus::Contacted, Some(InquiryStatus::New))
            .await
    );
    assert_eq!(
        assert_ok!(repo.find_by_id(&inquiry.id).await).status,
        InquiryStatus::Contacted
    );

    assert_ok!(repo.delete(&inquiry.id).await);
}

async fn status_update_on_unknown_id_is_not_found(repo: &dyn InquiryRepository) {
    let missing = InquiryId::generate();
    for expected in [None, Some(InquiryStatus::New)] {
        let err = assert_err!(
            repo.update_status(&missing, InquiryStatus::Booked, expected)
                .await
        );
        assert!(matches!(err, LeadsError::InquiryNotFound(ref id) if id == missing.as_str()));
    }
}

async fn second_delete_is_not_found(repo: &dyn InquiryRepository) {
    let inquiry = stored(repo, "Japan").await;

    assert_ok!(repo.delete(&inquiry.id).await);
    assert!(matches!(
        repo.delete(&inquiry.id).await,
        Err(LeadsError::InquiryNotFound(_))
    ));
    assert!(matches!(
        repo.find_by_id(&inquiry.id).await,
        Err(LeadsError::InquiryNotFound(_))
    ));
}

async fn archived_counts_only_in_total(repo: &dyn InquiryRepository) {
    let before = assert_ok!(repo.stats().await);
    let inquiry = stored(repo, "Peru").await;
    assert_ok!(
        repo.update_status(&inquiry.id, InquiryStatus::Archived, None)
            .await
    );
    let after = assert_ok!(repo.stats().await);

    assert_eq!(after.total, before.total + 1);
    assert_eq!(after.new, before.new);
    assert_eq!(after.contacted, before.contacted);
    assert_eq!(after.in_progress, before.in_progress);
    assert_eq!(after.booked, before.booked);

    assert_ok!(repo.delete(&inquiry.id).await);
}

async fn search_wildcards_match_literally(repo: &dyn InquiryRepository) {
    let literal = stored(repo, "50%_off Lisbon").await;
    let lookalike = stored(repo, "500 off Lisbon").await;

    let filter = InquiryFilter::new(None, Some("50%_off"));
    let found = assert_ok!(repo.list(&filter, Page::default()).await);
    assert!(found.iter().any(|i| i.id == literal.id));
    assert!(!found.iter().any(|i| i.id == lookalike.id));

    let filter = InquiryFilter::new(None, Some("0_o"));
    let found = assert_ok!(repo.list(&filter, Page::default()).await);
    assert!(!found.iter().any(|i| i.id == literal.id || i.id == lookalike.id));

    assert_ok!(repo.delete(&literal.id).await);
    assert_ok!(repo.delete(&lookalike.id).await);
}

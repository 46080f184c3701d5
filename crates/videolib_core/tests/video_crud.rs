use videolib_core::db::open_db_in_memory;
use videolib_core::{
    RepoError, SqliteVideoRepository, VideoChanges, VideoRecord, VideoRepository, VideoStatus,
    NOT_ISSUED_CARD_ID,
};

#[test]
fn insert_then_list_preserves_fields_verbatim() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);

    let record = VideoRecord::issued("  Spaced Name ", "V-01", "Dir Ünïcode", "C1");
    repo.insert(&record).unwrap();

    let rows = repo.list_all().unwrap();
    assert_eq!(rows, vec![record.clone()]);
    assert_eq!(repo.get("V-01").unwrap(), Some(record));
}

#[test]
fn duplicate_insert_keeps_first_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);

    let first = VideoRecord::available("Alpha", "V1", "DirA");
    repo.insert(&first).unwrap();

    let second = VideoRecord::issued("Beta", "V1", "DirB", "C1");
    let err = repo.insert(&second).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateKey(id) if id == "V1"));

    assert_eq!(repo.list_all().unwrap(), vec![first]);
}

#[test]
fn list_follows_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);

    for id in ["Z9", "A1", "M5"] {
        repo.insert(&VideoRecord::available("Film", id, "Dir")).unwrap();
    }

    let ids: Vec<String> = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|record| record.video_id)
        .collect();
    assert_eq!(ids, ["Z9", "A1", "M5"]);
}

#[test]
fn invalid_record_is_rejected_before_insert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);

    let invalid = VideoRecord::issued("Beta", "V2", "DirB", NOT_ISSUED_CARD_ID);
    let err = repo.insert(&invalid).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn update_replaces_mutable_fields_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);
    repo.insert(&VideoRecord::available("Alpha", "V1", "DirA"))
        .unwrap();

    let changes = VideoChanges {
        video_name: "Alpha Redux".to_string(),
        director_name: "DirZ".to_string(),
        status: VideoStatus::Issued,
        issuer_card_id: "C4".to_string(),
    };
    repo.update("V1", &changes).unwrap();

    assert_eq!(
        repo.get("V1").unwrap(),
        Some(VideoRecord::issued("Alpha Redux", "V1", "DirZ", "C4"))
    );
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);

    let changes = VideoChanges::from_record(&VideoRecord::available("Ghost", "V404", "Nobody"));
    let err = repo.update("V404", &changes).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "V404"));
}

#[test]
fn set_availability_touches_only_status_and_card() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);
    repo.insert(&VideoRecord::available("Gamma", "V2", "DirC"))
        .unwrap();

    repo.set_availability("V2", VideoStatus::Issued, "C9").unwrap();
    assert_eq!(
        repo.get("V2").unwrap(),
        Some(VideoRecord::issued("Gamma", "V2", "DirC", "C9"))
    );

    repo.set_availability("V2", VideoStatus::Available, NOT_ISSUED_CARD_ID)
        .unwrap();
    assert_eq!(
        repo.get("V2").unwrap(),
        Some(VideoRecord::available("Gamma", "V2", "DirC"))
    );
}

#[test]
fn set_availability_rejects_empty_issuer() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);
    repo.insert(&VideoRecord::available("Gamma", "V2", "DirC"))
        .unwrap();

    let err = repo
        .set_availability("V2", VideoStatus::Issued, "")
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.get("V2").unwrap().unwrap().status, VideoStatus::Available);
}

#[test]
fn delete_one_is_noop_for_missing_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);
    repo.insert(&VideoRecord::available("Alpha", "V1", "DirA"))
        .unwrap();

    assert!(!repo.delete_one("V9").unwrap());
    assert!(repo.delete_one("V1").unwrap());
    assert!(!repo.delete_one("V1").unwrap());
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn delete_all_empties_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteVideoRepository::new(&conn);
    for index in 0..5 {
        repo.insert(&VideoRecord::available("Film", format!("V{index}"), "Dir"))
            .unwrap();
    }

    assert_eq!(repo.delete_all().unwrap(), 5);
    assert!(repo.list_all().unwrap().is_empty());
    assert_eq!(repo.delete_all().unwrap(), 0);
}

#[test]
fn unknown_persisted_status_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO Library VALUES ('Alpha', 'V1', 'DirA', 'Lost', 'N/A');",
        [],
    )
    .unwrap();

    let err = SqliteVideoRepository::new(&conn).list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("Lost")));
}

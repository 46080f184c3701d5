use videolib_core::{VideoRecord, VideoStatus, VideoValidationError, NOT_ISSUED_CARD_ID};

#[test]
fn available_constructor_uses_sentinel() {
    let record = VideoRecord::available("Alpha", "V1", "DirA");

    assert_eq!(record.status, VideoStatus::Available);
    assert_eq!(record.issuer_card_id, NOT_ISSUED_CARD_ID);
    assert!(!record.is_issued());
    record.validate().unwrap();
}

#[test]
fn blank_video_id_is_rejected() {
    let record = VideoRecord::available("Alpha", "  ", "DirA");
    assert_eq!(
        record.validate().unwrap_err(),
        VideoValidationError::MissingVideoId
    );
}

#[test]
fn issued_record_requires_real_card_id() {
    for card_id in ["", "   ", "N/A"] {
        let record = VideoRecord::issued("Beta", "V2", "DirB", card_id);
        assert!(matches!(
            record.validate(),
            Err(VideoValidationError::MissingIssuerCardId { video_id }) if video_id == "V2"
        ));
    }

    VideoRecord::issued("Beta", "V2", "DirB", "C1")
        .validate()
        .unwrap();
}

#[test]
fn available_record_must_not_carry_card_id() {
    let mut record = VideoRecord::available("Gamma", "V3", "DirC");
    record.issuer_card_id = "C7".to_string();

    assert!(matches!(
        record.validate(),
        Err(VideoValidationError::UnexpectedIssuerCardId { card_id, .. }) if card_id == "C7"
    ));
}

#[test]
fn serialization_keeps_display_spelling_for_status() {
    let record = VideoRecord::issued("Gamma", "V2", "DirC", "C9");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["status"], "Issued");
    assert_eq!(json["issuer_card_id"], "C9");

    let back: VideoRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, record);
}

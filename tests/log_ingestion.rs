use songplay_etl::ingestion::{log_records_from_str, read_log_file};
use songplay_etl::processing::{is_next_song, songplay_row, time_row, user_row};

const LOG_FILE: &str = "tests/fixtures/log_data/2018/11/2018-11-05-events.json";

#[test]
fn reads_every_line_of_a_log_file() {
    let records = read_log_file(LOG_FILE).unwrap();
    assert_eq!(records.len(), 6);
}

#[test]
fn filters_to_next_song_events_only() {
    let records = read_log_file(LOG_FILE).unwrap();
    let events: Vec<_> = records.into_iter().filter(is_next_song).collect();

    assert_eq!(events.len(), 4);
    assert!(events.iter().all(|e| e.page == "NextSong"));
}

#[test]
fn derives_the_time_row_by_utc_conversion() {
    let row = time_row(1_541_440_009_796).unwrap();

    assert_eq!(row.hour, 17);
    assert_eq!(row.day, 5);
    assert_eq!(row.week, 45);
    assert_eq!(row.month, 11);
    assert_eq!(row.year, 2018);
    assert_eq!(row.weekday, 0);
}

#[test]
fn user_rows_copy_identity_fields_and_parse_the_id() {
    let records = read_log_file(LOG_FILE).unwrap();
    let user = user_row(&records[0]).unwrap();

    assert_eq!(user.user_id, 44);
    assert_eq!(user.first_name.as_deref(), Some("Sylvie"));
    assert_eq!(user.last_name.as_deref(), Some("Crane"));
    assert_eq!(user.gender.as_deref(), Some("F"));
    assert_eq!(user.level.as_deref(), Some("paid"));
}

#[test]
fn numeric_user_ids_are_accepted() {
    let records =
        read_log_file("tests/fixtures/log_data/2018/11/2018-11-06-events.json").unwrap();

    assert_eq!(records[0].user_id, "61");
    assert_eq!(user_row(&records[0]).unwrap().user_id, 61);
}

#[test]
fn empty_user_id_parses_but_fails_the_transform() {
    let records = read_log_file(LOG_FILE).unwrap();
    let logged_out = &records[5];
    assert_eq!(logged_out.user_id, "");

    let err = user_row(logged_out).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid value"));
    assert!(msg.contains("userId"));
}

#[test]
fn songplay_rows_carry_lookup_results_and_event_fields() {
    let records = read_log_file(LOG_FILE).unwrap();

    let resolved = songplay_row(
        &records[0],
        Some("SOGHT5A12AB0187C33".to_string()),
        Some("ARGHT5A1187B9A7BBA".to_string()),
    )
    .unwrap();
    assert_eq!(resolved.user_id, 44);
    assert_eq!(resolved.session_id, 583);
    assert_eq!(resolved.song_id.as_deref(), Some("SOGHT5A12AB0187C33"));
    assert_eq!(resolved.level.as_deref(), Some("paid"));
    assert_eq!(
        resolved.location.as_deref(),
        Some("Portland-Vancouver-Hillsboro, OR-WA")
    );

    let unresolved = songplay_row(&records[1], None, None).unwrap();
    assert_eq!(unresolved.song_id, None);
    assert_eq!(unresolved.artist_id, None);
}

#[test]
fn blank_lines_are_skipped() {
    let input = concat!(
        r#"{"page":"NextSong","ts":1541440009796,"userId":"44","sessionId":583}"#,
        "\n\n",
        r#"{"page":"Home","ts":1541441290796,"userId":"44","sessionId":583}"#,
        "\n",
    );
    let records = log_records_from_str(input).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn malformed_line_reports_its_line_number() {
    let input = concat!(
        r#"{"page":"Home","ts":1541441290796,"userId":"44","sessionId":583}"#,
        "\n",
        "{not json}\n",
        r#"{"page":"Home","ts":1541441290796,"userId":"44","sessionId":583}"#,
    );
    let err = log_records_from_str(input).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("malformed record"));
    assert!(msg.contains("line 2"));
}

#[test]
fn missing_timestamp_is_a_malformed_record() {
    let err =
        log_records_from_str(r#"{"page":"NextSong","userId":"44","sessionId":583}"#).unwrap_err();
    assert!(err.to_string().contains("ts"));
}

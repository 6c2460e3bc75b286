use chrono::{NaiveDate, NaiveTime};
use dorkar_api::models::{BookingStatus, BookingView, BookingViewRow, client_status};

#[test]
fn every_stored_status_has_a_client_label() {
    let labels: Vec<(&str, &str)> = BookingStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.client_label()))
        .collect();

    assert_eq!(
        labels,
        vec![
            ("pending", "requested"),
            ("confirmed", "accepted"),
            ("cancelled", "rejected"),
            ("completed", "completed"),
            ("paid", "paid"),
        ]
    );
}

#[test]
fn parse_accepts_only_stored_vocabulary() {
    assert_eq!("confirmed".parse::<BookingStatus>(), Ok(BookingStatus::Confirmed));
    assert!("accepted".parse::<BookingStatus>().is_err());
    assert!("Confirmed".parse::<BookingStatus>().is_err());
}

#[test]
fn unknown_status_passes_through() {
    assert_eq!(client_status("pending"), "requested");
    assert_eq!(client_status("on_hold"), "on_hold");
}

fn row() -> BookingViewRow {
    BookingViewRow {
        id: 7,
        user_id: 3,
        provider_id: 2,
        service_id: 99,
        booking_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        booking_time: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        status: "cancelled".into(),
        username: "karim".into(),
        phone_no: "01811000000".into(),
        service_name: None,
        service_price: None,
        service_duration: None,
        provider_name: None,
        provider_phone: None,
        provider_service: None,
    }
}

#[test]
fn missing_joined_columns_use_view_defaults() {
    let view = BookingView::from(row());

    assert_eq!(view.status, "rejected");
    assert_eq!(view.service_name, "");
    assert_eq!(view.provider_name, "");
    assert_eq!(view.provider_phone, "");
    assert_eq!(view.provider_service, "");
    assert_eq!(view.service_price, "0");
    assert_eq!(view.service_duration, "0");
}

#[test]
fn view_serializes_dates_and_joined_values() {
    let mut row = row();
    row.status = "confirmed".into();
    row.service_name = Some("Fan installation".into());
    row.service_price = Some("450.00".into());
    row.service_duration = Some("60".into());

    let json = serde_json::to_value(BookingView::from(row)).unwrap();
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["booking_date"], "2025-03-14");
    assert_eq!(json["booking_time"], "09:15:00");
    assert_eq!(json["service_name"], "Fan installation");
    assert_eq!(json["service_price"], "450.00");
    assert_eq!(json["service_duration"], "60");
}

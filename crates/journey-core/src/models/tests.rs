#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use uuid::Uuid;

    use crate::{
        messages::Messages,
        models::{ConfirmationOutcome, Participant, Trip},
    };

    const ALL_OUTCOMES: [ConfirmationOutcome; 5] = [
        ConfirmationOutcome::Success,
        ConfirmationOutcome::InvalidIdentifier,
        ConfirmationOutcome::NotFound,
        ConfirmationOutcome::AlreadyConfirmed,
        ConfirmationOutcome::PersistenceFailure,
    ];

    fn create_test_trip() -> Trip {
        Trip {
            id: Uuid::nil(),
            destination: "Florianópolis".to_string(),
            owner_name: "Ana".to_string(),
            owner_email: "ana@example.com".to_string(),
            starts_at: Timestamp::from_second(1714606200).unwrap(), // 2024-05-01 23:30:00 UTC
        }
    }

    #[test]
    fn test_only_persistence_failure_is_retryable() {
        for outcome in ALL_OUTCOMES {
            assert_eq!(
                outcome.is_retryable(),
                outcome == ConfirmationOutcome::PersistenceFailure,
                "{outcome}"
            );
        }
    }

    #[test]
    fn test_outcome_display_names() {
        assert_eq!(ConfirmationOutcome::Success.to_string(), "success");
        assert_eq!(
            ConfirmationOutcome::AlreadyConfirmed.to_string(),
            "already_confirmed"
        );
        assert_eq!(
            serde_json::to_string(&ConfirmationOutcome::InvalidIdentifier).unwrap(),
            "\"invalid_identifier\""
        );
    }

    #[test]
    fn test_default_messages_for_outcomes() {
        let messages = Messages::default();

        assert_eq!(messages.for_outcome(ConfirmationOutcome::Success), None);
        assert_eq!(
            messages.for_outcome(ConfirmationOutcome::InvalidIdentifier),
            Some("invalid identifier")
        );
        assert_eq!(
            messages.for_outcome(ConfirmationOutcome::NotFound),
            Some("participant not found")
        );
        assert_eq!(
            messages.for_outcome(ConfirmationOutcome::AlreadyConfirmed),
            Some("participant already confirmed")
        );
        assert_eq!(
            messages.for_outcome(ConfirmationOutcome::PersistenceFailure),
            Some("something went wrong, try again")
        );
    }

    #[test]
    fn test_messages_partial_override() {
        let messages = Messages::from_toml_str(
            r#"participant_already_confirmed = "participante já confirmado""#,
        )
        .expect("Failed to parse messages");

        assert_eq!(
            messages.for_outcome(ConfirmationOutcome::AlreadyConfirmed),
            Some("participante já confirmado")
        );
        assert_eq!(
            messages.for_outcome(ConfirmationOutcome::NotFound),
            Some("participant not found")
        );
    }

    #[test]
    fn test_messages_reject_wrong_types() {
        assert!(Messages::from_toml_str("try_again = 3").is_err());
    }

    #[test]
    fn test_trip_start_date_is_utc_calendar_date() {
        let trip = create_test_trip();
        assert_eq!(trip.start_date().to_string(), "2024-05-01");
    }

    #[test]
    fn test_trip_serializes_camel_case() {
        let value = serde_json::to_value(create_test_trip()).unwrap();

        assert_eq!(value["destination"], "Florianópolis");
        assert_eq!(value["ownerName"], "Ana");
        assert_eq!(value["ownerEmail"], "ana@example.com");
        assert_eq!(value["startsAt"], "2024-05-01T23:30:00Z");
    }

    #[test]
    fn test_participant_serializes_camel_case() {
        let participant = Participant {
            id: Uuid::nil(),
            trip_id: Uuid::nil(),
            email: "guest@example.com".to_string(),
            is_confirmed: true,
        };
        let value = serde_json::to_value(&participant).unwrap();

        assert_eq!(value["tripId"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(value["isConfirmed"], true);
    }
}

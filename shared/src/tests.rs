#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use crate::models::{CreatePollRequest, VoteRequest};
    use crate::poll_logic::{cast_vote, create_poll, VoteError};
    use crate::validation::{parse_create_poll, parse_vote_request, ValidationError};

    fn request(title: &str, options: &[&str]) -> CreatePollRequest {
        CreatePollRequest {
            title: title.into(),
            options: options.iter().map(|opt| opt.to_string()).collect(),
        }
    }

    fn poll(title: &str, options: &[&str]) -> crate::models::Poll {
        create_poll(&request(title, options)).unwrap()
    }

    fn by_index(index: usize) -> VoteRequest {
        VoteRequest { option_id: None, option_index: Some(index) }
    }

    fn by_id(id: &str) -> VoteRequest {
        VoteRequest { option_id: Some(id.into()), option_index: None }
    }

    #[test]
    fn test_create_poll_basic() {
        let poll = poll("Color?", &["Red", "Blue"]);

        assert_eq!(poll.title, "Color?");
        assert_eq!(poll.options.len(), 2);
        assert!(poll.options.iter().all(|opt| opt.votes == 0));
        assert_ne!(poll.id, Uuid::nil());
        assert_eq!(poll.total_votes(), 0);
    }

    #[test]
    fn test_create_poll_trims_title_and_options() {
        let poll = poll("  Color?  ", &["  Red ", " Blue"]);

        assert_eq!(poll.title, "Color?");
        assert_eq!(poll.options[0].name, "Red");
        assert_eq!(poll.options[1].name, "Blue");
    }

    #[test]
    fn test_create_poll_assigns_distinct_option_ids() {
        let poll = poll("Color?", &["Red", "Red", "Red"]);

        assert_ne!(poll.options[0].id, poll.options[1].id);
        assert_ne!(poll.options[1].id, poll.options[2].id);
        // duplicate names are allowed within a poll
        assert_eq!(poll.options[0].name, poll.options[1].name);
    }

    #[test]
    fn test_create_poll_rejects_blank_title() {
        assert!(matches!(
            create_poll(&request("", &["A", "B"])),
            Err(ValidationError::TitleRequired)
        ));
        assert!(matches!(
            create_poll(&request("   ", &["A", "B"])),
            Err(ValidationError::TitleRequired)
        ));
    }

    #[test]
    fn test_create_poll_rejects_too_few_options() {
        assert!(matches!(
            create_poll(&request("Color?", &[])),
            Err(ValidationError::TooFewOptions)
        ));
        assert!(matches!(
            create_poll(&request("Color?", &["Solo"])),
            Err(ValidationError::TooFewOptions)
        ));
    }

    #[test]
    fn test_parse_create_poll_shapes() {
        let parsed = parse_create_poll(&json!({
            "title": "Lunch?",
            "options": ["Pizza", 42, " Tacos "]
        }))
        .unwrap();
        assert_eq!(parsed.options, vec!["Pizza", "42", "Tacos"]);

        assert!(matches!(
            parse_create_poll(&json!({ "title": "X", "options": "nope" })),
            Err(ValidationError::OptionsNotASequence)
        ));
        assert!(matches!(
            parse_create_poll(&json!({ "title": "X" })),
            Err(ValidationError::OptionsNotASequence)
        ));
    }

    #[test]
    fn test_vote_by_index_increments_one_counter() {
        let mut polls = vec![poll("Color?", &["Red", "Blue", "Green"])];
        let id = polls[0].id.to_string();

        let updated = cast_vote(&mut polls, &id, &by_index(1)).unwrap();
        assert_eq!(updated.options[1].votes, 1);

        assert_eq!(polls[0].options[0].votes, 0);
        assert_eq!(polls[0].options[1].votes, 1);
        assert_eq!(polls[0].options[2].votes, 0);
    }

    #[test]
    fn test_vote_by_id_matches_vote_by_index() {
        let mut polls = vec![poll("Color?", &["Red", "Blue"])];
        let id = polls[0].id.to_string();
        let blue = polls[0].options[1].id.to_string();

        cast_vote(&mut polls, &id, &by_id(&blue)).unwrap();
        cast_vote(&mut polls, &id, &by_index(1)).unwrap();

        assert_eq!(polls[0].options[1].votes, 2);
        assert_eq!(polls[0].options[0].votes, 0);
    }

    #[test]
    fn test_option_id_takes_precedence_over_index() {
        let mut polls = vec![poll("Color?", &["Red", "Blue"])];
        let id = polls[0].id.to_string();
        let red = polls[0].options[0].id.to_string();

        let both = VoteRequest { option_id: Some(red), option_index: Some(1) };
        cast_vote(&mut polls, &id, &both).unwrap();

        assert_eq!(polls[0].options[0].votes, 1);
        assert_eq!(polls[0].options[1].votes, 0);
    }

    #[test]
    fn test_vote_unknown_poll() {
        let mut polls = vec![poll("Color?", &["Red", "Blue"])];

        let missing = Uuid::new_v4().to_string();
        assert!(matches!(
            cast_vote(&mut polls, &missing, &by_index(0)),
            Err(VoteError::PollNotFound)
        ));
        assert!(matches!(
            cast_vote(&mut polls, "not-a-uuid", &by_index(0)),
            Err(VoteError::PollNotFound)
        ));
        assert_eq!(polls[0].total_votes(), 0);
    }

    #[test]
    fn test_vote_unresolved_selector_changes_nothing() {
        let mut polls = vec![poll("Color?", &["Red", "Blue"])];
        let id = polls[0].id.to_string();

        assert!(matches!(
            cast_vote(&mut polls, &id, &by_index(2)),
            Err(VoteError::IndexOutOfBounds(2))
        ));
        assert!(matches!(
            cast_vote(&mut polls, &id, &by_id(&Uuid::new_v4().to_string())),
            Err(VoteError::UnknownOption(_))
        ));
        assert!(matches!(
            cast_vote(&mut polls, &id, &VoteRequest::default()),
            Err(VoteError::MissingSelector)
        ));
        assert_eq!(polls[0].total_votes(), 0);
    }

    #[test]
    fn test_parse_vote_request_tolerates_bad_shapes() {
        let parsed = parse_vote_request(&json!({ "optionId": "abc", "optionIndex": 1 }));
        assert_eq!(parsed.option_id.as_deref(), Some("abc"));
        assert_eq!(parsed.option_index, Some(1));

        // wrong types and empty ids count as absent
        assert_eq!(parse_vote_request(&json!({ "optionIndex": -1 })), VoteRequest::default());
        assert_eq!(parse_vote_request(&json!({ "optionIndex": 1.5 })), VoteRequest::default());
        assert_eq!(parse_vote_request(&json!({ "optionId": "" })), VoteRequest::default());
        assert_eq!(parse_vote_request(&json!({})), VoteRequest::default());
    }

    #[test]
    fn test_poll_serialization_round_trip() {
        let original = poll("Color?", &["Red", "Blue"]);
        let raw = serde_json::to_string(&original).unwrap();

        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"votes\":0"));

        let restored: crate::models::Poll = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, original);
    }
}

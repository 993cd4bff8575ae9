use postcraft_app::{parse_line, InputCommand};
use postcraft_core::{Msg, Tone};
use pretty_assertions::assert_eq;

#[test]
fn plain_text_sets_topic_and_submits() {
    assert_eq!(
        parse_line("Remote work tips\n"),
        InputCommand::Dispatch(vec![
            Msg::TopicChanged("Remote work tips".to_string()),
            Msg::TopicSubmitted,
        ])
    );
}

#[test]
fn empty_line_resubmits_current_topic() {
    assert_eq!(
        parse_line("   \r\n"),
        InputCommand::Dispatch(vec![Msg::TopicSubmitted])
    );
}

#[test]
fn tone_command_parses_tone() {
    assert_eq!(
        parse_line("/tone casual"),
        InputCommand::Dispatch(vec![Msg::ToneSelected(Tone::Casual)])
    );
    assert!(matches!(parse_line("/tone angry"), InputCommand::Unknown(_)));
}

#[test]
fn topic_command_does_not_submit() {
    assert_eq!(
        parse_line("/topic   Hiring update  "),
        InputCommand::Dispatch(vec![Msg::TopicChanged("Hiring update".to_string())])
    );
}

#[test]
fn action_commands_map_to_messages() {
    assert_eq!(
        parse_line("/generate"),
        InputCommand::Dispatch(vec![Msg::GenerateClicked])
    );
    assert_eq!(parse_line("/COPY"), InputCommand::Dispatch(vec![Msg::CopyClicked]));
    assert_eq!(parse_line("/clear"), InputCommand::Dispatch(vec![Msg::ClearClicked]));
    assert_eq!(
        parse_line("/dismiss"),
        InputCommand::Dispatch(vec![Msg::NotificationDismissed])
    );
    assert_eq!(parse_line("/help"), InputCommand::Help);
    assert_eq!(parse_line("/quit"), InputCommand::Quit);
}

#[test]
fn unknown_command_is_reported() {
    match parse_line("/publish") {
        InputCommand::Unknown(reason) => assert!(reason.contains("/publish")),
        other => panic!("unexpected {other:?}"),
    }
}

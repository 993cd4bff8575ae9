use postcraft_core::{Msg, Tone};

pub const HELP: &str = "\
Type a topic and press Enter to generate a post.
  <empty line>              generate again with the current topic
  /topic <text>             set the topic without generating
  /tone professional|casual choose the tone
  /generate                 generate with the current topic
  /copy                     copy the post to the clipboard
  /clear                    reset the form
  /dismiss                  hide the current notification
  /help                     show this help
  /quit                     exit";

/// One line of terminal input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> InputCommand {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return InputCommand::Dispatch(vec![Msg::TopicSubmitted]);
    }

    let Some(command) = line.trim_start().strip_prefix('/') else {
        // Plain text is the topic; Enter submits it.
        return InputCommand::Dispatch(vec![
            Msg::TopicChanged(line.to_string()),
            Msg::TopicSubmitted,
        ]);
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "topic" => InputCommand::Dispatch(vec![Msg::TopicChanged(rest.to_string())]),
        "tone" => match rest.parse::<Tone>() {
            Ok(tone) => InputCommand::Dispatch(vec![Msg::ToneSelected(tone)]),
            Err(err) => InputCommand::Unknown(err.to_string()),
        },
        "generate" | "g" => InputCommand::Dispatch(vec![Msg::GenerateClicked]),
        "copy" | "c" => InputCommand::Dispatch(vec![Msg::CopyClicked]),
        "clear" => InputCommand::Dispatch(vec![Msg::ClearClicked]),
        "dismiss" => InputCommand::Dispatch(vec![Msg::NotificationDismissed]),
        "help" | "?" => InputCommand::Help,
        "quit" | "exit" | "q" => InputCommand::Quit,
        other => InputCommand::Unknown(format!("unknown command '/{other}' (try /help)")),
    }
}

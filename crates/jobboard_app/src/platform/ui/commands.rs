use jobboard_core::{BoardViewModel, FilterField, Language, Msg};

/// What one input line asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Options,
    Help,
    Quit,
    Invalid(String),
}

/// Parses a command line against the view it was typed into; tag and row
/// numbers refer to that view.
pub fn parse_command(line: &str, view: &BoardViewModel) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (verb, rest) = match trimmed.split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };
    let arg = rest.trim();

    match verb {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "options" => Command::Options,
        "quit" | "exit" | "q" => Command::Quit,
        // Search text is taken verbatim, including surrounding spaces.
        "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "guild" => required(arg, "guild name", |v| Msg::GuildToggled(v.to_string())),
        "skill" => required(arg, "skill name", |v| Msg::MainSkillToggled(v.to_string())),
        "level" => required(arg, "level", |v| Msg::LevelToggled(resolve_level(v, view))),
        "clear" => match arg {
            "all" => Command::Dispatch(Msg::ClearAllClicked),
            field => match FilterField::parse(field) {
                Some(field) => Command::Dispatch(Msg::FieldCleared(field)),
                None => Command::Invalid(format!(
                    "unknown field '{field}'; use search, guilds, skills, levels or all"
                )),
            },
        },
        "remove" => match index(arg, view.tags.len()) {
            Some(i) => Command::Dispatch(Msg::TagRemoved(view.tags[i].clone())),
            None => Command::Invalid(format!("no tag #{arg}")),
        },
        "select" => {
            if arg.is_empty() {
                return Command::Invalid("select needs a row number or job id".to_string());
            }
            let job_id = match index(arg, view.jobs.len()) {
                Some(i) => view.jobs[i].id.clone(),
                None => arg.to_string(),
            };
            Command::Dispatch(Msg::JobSelected { job_id })
        }
        "deselect" => Command::Dispatch(Msg::SelectionCleared),
        "lang" => match Language::from_code(arg) {
            Some(language) => Command::Dispatch(Msg::LanguageChanged(language)),
            None => Command::Invalid(format!("unknown language '{arg}'; use en, es or pt")),
        },
        other => Command::Invalid(format!("unknown command '{other}'; type help")),
    }
}

fn required(arg: &str, what: &str, msg: impl FnOnce(&str) -> Msg) -> Command {
    if arg.is_empty() {
        Command::Invalid(format!("missing {what}"))
    } else {
        Command::Dispatch(msg(arg))
    }
}

/// One-based position into a list of `len` items.
fn index(arg: &str, len: usize) -> Option<usize> {
    let n: usize = arg.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

/// Lets `level 1` stand for `1-Senior` when that label is on offer.
fn resolve_level(arg: &str, view: &BoardViewModel) -> String {
    let prefix = format!("{arg}-");
    view.level_options
        .iter()
        .find(|option| option.value == arg)
        .or_else(|| {
            view.level_options
                .iter()
                .find(|option| option.value.starts_with(&prefix))
        })
        .map_or_else(|| arg.to_string(), |option| option.value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{FilterTag, JobRowView, OptionView, TagKind};

    fn view() -> BoardViewModel {
        BoardViewModel {
            jobs: vec![JobRowView {
                id: "ENG1".to_string(),
                title: "Engineer".to_string(),
                level_label: "1-Senior".to_string(),
                selected: false,
            }],
            tags: vec![FilterTag {
                kind: TagKind::Guild,
                value: "Eng".to_string(),
                label: None,
            }],
            level_options: vec![OptionView {
                value: "1-Senior".to_string(),
                selected: false,
            }],
            ..BoardViewModel::default()
        }
    }

    #[test]
    fn search_keeps_text_verbatim() {
        assert_eq!(
            parse_command("search  data eng ", &view()),
            Command::Dispatch(Msg::SearchChanged(" data eng ".to_string()))
        );
        assert_eq!(
            parse_command("search", &view()),
            Command::Dispatch(Msg::SearchChanged(String::new()))
        );
    }

    #[test]
    fn toggles_take_multi_word_values() {
        assert_eq!(
            parse_command("guild Data Science", &view()),
            Command::Dispatch(Msg::GuildToggled("Data Science".to_string()))
        );
        assert_eq!(
            parse_command("skill", &view()),
            Command::Invalid("missing skill name".to_string())
        );
    }

    #[test]
    fn level_code_resolves_to_label() {
        assert_eq!(
            parse_command("level 1", &view()),
            Command::Dispatch(Msg::LevelToggled("1-Senior".to_string()))
        );
        assert_eq!(
            parse_command("level 9-Odd", &view()),
            Command::Dispatch(Msg::LevelToggled("9-Odd".to_string()))
        );
    }

    #[test]
    fn numbers_refer_to_rendered_rows_and_tags() {
        assert_eq!(
            parse_command("remove 1", &view()),
            Command::Dispatch(Msg::TagRemoved(view().tags[0].clone()))
        );
        assert!(matches!(parse_command("remove 2", &view()), Command::Invalid(_)));
        assert_eq!(
            parse_command("select 1", &view()),
            Command::Dispatch(Msg::JobSelected {
                job_id: "ENG1".to_string()
            })
        );
        assert_eq!(
            parse_command("select DSN2", &view()),
            Command::Dispatch(Msg::JobSelected {
                job_id: "DSN2".to_string()
            })
        );
    }

    #[test]
    fn clear_and_misc() {
        assert_eq!(
            parse_command("clear all", &view()),
            Command::Dispatch(Msg::ClearAllClicked)
        );
        assert_eq!(
            parse_command("clear skills", &view()),
            Command::Dispatch(Msg::FieldCleared(FilterField::MainSkills))
        );
        assert!(matches!(parse_command("clear nope", &view()), Command::Invalid(_)));
        assert_eq!(
            parse_command("lang es", &view()),
            Command::Dispatch(Msg::LanguageChanged(Language::Spanish))
        );
        assert_eq!(parse_command("", &view()), Command::Show);
        assert_eq!(parse_command("quit", &view()), Command::Quit);
        assert!(matches!(parse_command("dance", &view()), Command::Invalid(_)));
    }
}

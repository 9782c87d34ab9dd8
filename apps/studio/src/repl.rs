//! Line-command grammar for the terminal front end.
//!
//! Parsing is deliberately forgiving about whitespace and strict about
//! nothing else; a bad line produces a printable error, never a crash.
//! Indices are the zero-based positions shown by the edit view.

use thiserror::Error;

use crate::document::{EducationField, ExperienceField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Upload { path: String },
    Discard,
    Confirm,
    Status,
    Preview,
    Edit,
    Header { field: String, value: String },
    Profile { value: String },
    ExperienceAdd,
    ExperienceSet {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    ExperienceRemove { index: usize },
    EducationAdd,
    EducationSet {
        index: usize,
        field: EducationField,
        value: String,
    },
    EducationRemove { index: usize },
    SkillDraft { text: String },
    SkillAdd { text: Option<String> },
    SkillRemove { index: usize },
    Export,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid index")]
    BadIndex(String),

    #[error("unknown {section} field '{name}'")]
    UnknownField {
        section: &'static str,
        name: String,
    },
}

pub const HELP_TEXT: &str = "\
commands:
  upload <path>                 stage a CV file (pdf, docx, xlsx, xls)
  discard                       remove the staged file
  confirm                       process the staged file with AI
  status                        show where the session is
  preview                       show the formatted CV
  edit                          show the editable fields and indices
  header <field> <value>        set a header field (name, title, email,
                                phone, location, linkedin)
  profile <value>               replace the profile text
  exp add                       append an empty experience entry
  exp set <i> <field> <value>   set a field of experience entry i
  exp rm <i>                    remove experience entry i
  edu add | edu set | edu rm    same for education (degree, school, year)
  skill draft <text>            type into the add-a-skill field
  skill add [text]              commit the skill field (or add text directly)
  skill rm <i>                  remove skill i
  export                        dump the document as JSON
  back                          return to the home screen (full reset)
  help                          this text
  quit                          leave";

/// Splits off the first whitespace-delimited word; the rest keeps its
/// internal spacing.
fn split_first(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_index(token: &str) -> Result<usize, ParseError> {
    token
        .parse::<usize>()
        .map_err(|_| ParseError::BadIndex(token.to_string()))
}

/// Parses one input line. An empty line is no command at all.
pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (head, rest) = split_first(line);
    let command = match head {
        "upload" => {
            if rest.is_empty() {
                return Err(ParseError::Usage("upload <path>"));
            }
            Command::Upload {
                path: rest.to_string(),
            }
        }
        "discard" => Command::Discard,
        "confirm" => Command::Confirm,
        "status" => Command::Status,
        "preview" => Command::Preview,
        "edit" => Command::Edit,
        "header" => {
            let (field, value) = split_first(rest);
            if field.is_empty() {
                return Err(ParseError::Usage("header <field> <value>"));
            }
            Command::Header {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "profile" => Command::Profile {
            value: rest.to_string(),
        },
        "exp" => parse_section(rest, "experience")?,
        "edu" => parse_section(rest, "education")?,
        "skill" => {
            let (sub, tail) = split_first(rest);
            match sub {
                "draft" => Command::SkillDraft {
                    text: tail.to_string(),
                },
                "add" => Command::SkillAdd {
                    text: (!tail.is_empty()).then(|| tail.to_string()),
                },
                "rm" => Command::SkillRemove {
                    index: parse_index(tail)?,
                },
                _ => return Err(ParseError::Usage("skill draft <text> | add [text] | rm <i>")),
            }
        }
        "export" => Command::Export,
        "back" => Command::Back,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_section(rest: &str, section: &'static str) -> Result<Command, ParseError> {
    let experience = section == "experience";
    let (sub, tail) = split_first(rest);
    match sub {
        "add" => Ok(if experience {
            Command::ExperienceAdd
        } else {
            Command::EducationAdd
        }),
        "rm" => {
            let index = parse_index(tail)?;
            Ok(if experience {
                Command::ExperienceRemove { index }
            } else {
                Command::EducationRemove { index }
            })
        }
        "set" => {
            let (index_token, tail) = split_first(tail);
            let (field_name, value) = split_first(tail);
            if index_token.is_empty() || field_name.is_empty() {
                return Err(ParseError::Usage("set <i> <field> <value>"));
            }
            let index = parse_index(index_token)?;
            if experience {
                let field = ExperienceField::parse(field_name).ok_or(ParseError::UnknownField {
                    section,
                    name: field_name.to_string(),
                })?;
                Ok(Command::ExperienceSet {
                    index,
                    field,
                    value: value.to_string(),
                })
            } else {
                let field = EducationField::parse(field_name).ok_or(ParseError::UnknownField {
                    section,
                    name: field_name.to_string(),
                })?;
                Ok(Command::EducationSet {
                    index,
                    field,
                    value: value.to_string(),
                })
            }
        }
        _ => Err(ParseError::Usage("add | set <i> <field> <value> | rm <i>")),
    }
}

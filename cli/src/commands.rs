//! Command-line command parsing

use thiserror::Error;

use terrawatch_core::domain::entities::{PostKind, PostTarget};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for {0}")]
    MissingArgument(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Everything the CLI can be asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the feed, optionally scoped to one execution sheet.
    Feed { execution_sheet_id: Option<String> },

    /// Show a post's comment threads.
    Comments { post_id: String },

    /// Toggle a like on a post.
    Like { target: PostTarget },

    /// Toggle a like on a comment.
    LikeComment { comment_id: String },

    /// Add a top-level comment to a post.
    Comment { post_id: String, content: String },

    /// Reply to a top-level comment.
    Reply {
        post_id: String,
        parent_comment_id: String,
        content: String,
    },

    /// Create a text post on an execution sheet's feed.
    Post {
        execution_sheet_id: String,
        content: String,
    },

    /// Report operation progress as an activity post.
    Activity {
        execution_sheet_id: String,
        operation_code: String,
        added_progress: f64,
        description: String,
    },

    Help,
}

/// Parse the command line, program name already stripped.
pub fn parse_command(args: &[String]) -> Result<Command, ParseError> {
    let Some(command) = args.first() else {
        return Ok(Command::Help);
    };

    match command.to_lowercase().as_str() {
        "feed" => Ok(Command::Feed {
            execution_sheet_id: args.get(1).cloned(),
        }),

        "comments" => Ok(Command::Comments {
            post_id: required(args, 1, "comments")?,
        }),

        "like" => {
            let kind_arg = required(args, 1, "like")?;
            let kind: PostKind = kind_arg.parse().map_err(|_| {
                ParseError::InvalidArgument(format!(
                    "'{kind_arg}' is not a post kind (photo, video, text, activity)"
                ))
            })?;
            let post_id = required(args, 2, "like")?;
            Ok(Command::Like {
                target: PostTarget::from_post_id(kind, &post_id),
            })
        }

        "like-comment" => Ok(Command::LikeComment {
            comment_id: required(args, 1, "like-comment")?,
        }),

        "comment" => Ok(Command::Comment {
            post_id: required(args, 1, "comment")?,
            content: rest(args, 2, "comment")?,
        }),

        "reply" => Ok(Command::Reply {
            post_id: required(args, 1, "reply")?,
            parent_comment_id: required(args, 2, "reply")?,
            content: rest(args, 3, "reply")?,
        }),

        "post" => Ok(Command::Post {
            execution_sheet_id: required(args, 1, "post")?,
            content: rest(args, 2, "post")?,
        }),

        "activity" => {
            let progress_arg = required(args, 3, "activity")?;
            let added_progress: f64 = progress_arg.parse().map_err(|_| {
                ParseError::InvalidArgument(format!("'{progress_arg}' is not a number"))
            })?;
            Ok(Command::Activity {
                execution_sheet_id: required(args, 1, "activity")?,
                operation_code: required(args, 2, "activity")?,
                added_progress,
                description: rest(args, 4, "activity").unwrap_or_default(),
            })
        }

        "help" | "--help" | "-h" => Ok(Command::Help),

        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn required(args: &[String], index: usize, command: &str) -> Result<String, ParseError> {
    args.get(index)
        .cloned()
        .ok_or_else(|| ParseError::MissingArgument(command.to_string()))
}

/// Join everything from `index` on into free text.
fn rest(args: &[String], index: usize, command: &str) -> Result<String, ParseError> {
    if args.len() <= index {
        return Err(ParseError::MissingArgument(command.to_string()));
    }
    Ok(args[index..].join(" "))
}

pub fn help_text() -> String {
    let mut buf = String::new();
    buf.push_str("terrawatch - TerraWatch social feed client\n\n");
    buf.push_str("Commands:\n");
    buf.push_str("  feed [sheet-id]                       Show the feed\n");
    buf.push_str("  comments <post-id>                    Show a post's comments\n");
    buf.push_str("  like <kind> <post-id>                 Toggle a like (kind: photo|video|text|activity)\n");
    buf.push_str("  like-comment <comment-id>             Toggle a like on a comment\n");
    buf.push_str("  comment <post-id> <text...>           Comment on a post\n");
    buf.push_str("  reply <post-id> <comment-id> <text...>  Reply to a comment\n");
    buf.push_str("  post <sheet-id> <text...>             Create a text post\n");
    buf.push_str("  activity <sheet-id> <op-code> <progress%> [text...]  Report operation progress\n");
    buf.push_str("  help                                  Show this help\n");
    buf
}

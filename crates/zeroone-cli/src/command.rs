use anyhow::{Context, bail};

use zeroone_types::api::ReportTarget;

pub const USAGE: &str = "\
usage: zeroone [--yes] <command>

  feed                         posts from people you follow
  posts [<user-id>]            all posts, or one user's posts
  post <id>                    a single post
  new-post <text...>           publish a text post
  edit-post <id> <text...>     replace a post's text
  like <post-id>               like or unlike a post
  delete <post-id>             delete one of your posts
  comments <post-id>           comments under a post
  comment <post-id> <text...>  add a comment
  edit-comment <id> <text...>  replace a comment's text
  delete-comment <post-id> <comment-id>
  user <id>                    show a profile
  search <query>               find users
  follow <user-id>             follow or unfollow a user
  notifications [--unread]     list notifications
  read <notification-id>       mark a notification read
  read-all                     mark every notification read
  report <post|user|comment> <id> <reason...>

admin:
  hide <post-id>               hide a post
  admin-delete <post-id>       delete any post
  users                        list accounts
  ban <user-id>                ban or unban an account
  delete-user <user-id>        delete an account
  reports                      reports waiting for review
  resolve <report-id>          mark a report reviewed

--yes answers every confirmation prompt; it must come before the command.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Feed,
    Posts(Option<i64>),
    Post(i64),
    NewPost(String),
    EditPost(i64, String),
    Like(i64),
    Delete(i64),
    Comments(i64),
    Comment(i64, String),
    EditComment(i64, String),
    DeleteComment { post_id: i64, comment_id: i64 },
    User(i64),
    Search(String),
    Follow(i64),
    Notifications { unread_only: bool },
    Read(i64),
    ReadAll,
    Report {
        target: ReportTarget,
        id: i64,
        reason: String,
    },
    Hide(i64),
    AdminDelete(i64),
    Users,
    Ban(i64),
    DeleteUser(i64),
    Reports,
    Resolve(i64),
}

/// Global flags plus the command. Flags are only read before the command
/// name, so free text such as a report reason is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub assume_yes: bool,
    pub command: Command,
}

impl Invocation {
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut assume_yes = false;
        let mut rest = args;
        while let Some((first, tail)) = rest.split_first() {
            match first.as_str() {
                "--yes" | "-y" => assume_yes = true,
                flag if flag.starts_with('-') => bail!("unknown option: {}", flag),
                _ => break,
            }
            rest = tail;
        }
        Ok(Self {
            assume_yes,
            command: Command::parse(rest)?,
        })
    }
}

impl Command {
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some((name, rest)) = args.split_first() else {
            bail!("missing command");
        };
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

        let command = match (name.as_str(), rest.as_slice()) {
            ("feed", []) => Self::Feed,
            ("posts", []) => Self::Posts(None),
            ("posts", [id]) => Self::Posts(Some(id_arg(id)?)),
            ("post", [id]) => Self::Post(id_arg(id)?),
            ("new-post", words) if !words.is_empty() => Self::NewPost(words.join(" ")),
            ("edit-post", [id, words @ ..]) if !words.is_empty() => {
                Self::EditPost(id_arg(id)?, words.join(" "))
            }
            ("like", [id]) => Self::Like(id_arg(id)?),
            ("delete", [id]) => Self::Delete(id_arg(id)?),
            ("comments", [id]) => Self::Comments(id_arg(id)?),
            ("comment", [id, words @ ..]) if !words.is_empty() => {
                Self::Comment(id_arg(id)?, words.join(" "))
            }
            ("edit-comment", [id, words @ ..]) if !words.is_empty() => {
                Self::EditComment(id_arg(id)?, words.join(" "))
            }
            ("delete-comment", [post_id, comment_id]) => Self::DeleteComment {
                post_id: id_arg(post_id)?,
                comment_id: id_arg(comment_id)?,
            },
            ("user", [id]) => Self::User(id_arg(id)?),
            ("search", words) if !words.is_empty() => Self::Search(words.join(" ")),
            ("follow", [id]) => Self::Follow(id_arg(id)?),
            ("notifications", []) => Self::Notifications { unread_only: false },
            ("notifications", ["--unread"]) => Self::Notifications { unread_only: true },
            ("read", [id]) => Self::Read(id_arg(id)?),
            ("read-all", []) => Self::ReadAll,
            ("report", [target, id, reason @ ..]) if !reason.is_empty() => {
                let target = match target.to_ascii_lowercase().as_str() {
                    "post" => ReportTarget::Post,
                    "user" => ReportTarget::User,
                    "comment" => ReportTarget::Comment,
                    other => bail!("cannot report a '{}'", other),
                };
                Self::Report {
                    target,
                    id: id_arg(id)?,
                    reason: reason.join(" "),
                }
            }
            ("hide", [id]) => Self::Hide(id_arg(id)?),
            ("admin-delete", [id]) => Self::AdminDelete(id_arg(id)?),
            ("users", []) => Self::Users,
            ("ban", [id]) => Self::Ban(id_arg(id)?),
            ("delete-user", [id]) => Self::DeleteUser(id_arg(id)?),
            ("reports", []) => Self::Reports,
            ("resolve", [id]) => Self::Resolve(id_arg(id)?),
            (other, _) => bail!("unknown command or wrong arguments: {}", other),
        };
        Ok(command)
    }

    pub fn needs_sign_in(&self) -> bool {
        !matches!(self, Self::Posts(_) | Self::Post(_) | Self::User(_) | Self::Search(_))
    }
}

fn id_arg(raw: &str) -> anyhow::Result<i64> {
    raw.parse().with_context(|| format!("'{}' is not an id", raw))
}
